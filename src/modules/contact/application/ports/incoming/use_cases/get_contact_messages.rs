use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GetContactMessageError {
    #[error("Message {0} not found")]
    NotFound(i64),

    #[error("Could not load messages: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait GetContactMessagesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessageError>;
}

#[async_trait]
pub trait GetContactMessageUseCase: Send + Sync {
    async fn execute(&self, message_id: i64) -> Result<ContactMessage, GetContactMessageError>;
}
