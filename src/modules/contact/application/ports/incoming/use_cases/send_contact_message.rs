use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::shared::validation::ValidationErrors;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SendContactMessageError {
    #[error("Please fix the form: {0}")]
    Validation(ValidationErrors),

    #[error("Could not send the message: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait SendContactMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, SendContactMessageError>;
}
