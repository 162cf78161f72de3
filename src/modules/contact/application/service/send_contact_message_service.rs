use async_trait::async_trait;

use crate::modules::contact::application::domain::policies::contact_rules::validate_message;
use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactApi;

pub struct SendContactMessageService<A>
where
    A: ContactApi,
{
    contact_api: A,
}

impl<A> SendContactMessageService<A>
where
    A: ContactApi,
{
    pub fn new(contact_api: A) -> Self {
        Self { contact_api }
    }
}

#[async_trait]
impl<A> SendContactMessageUseCase for SendContactMessageService<A>
where
    A: ContactApi + Send + Sync,
{
    async fn execute(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, SendContactMessageError> {
        let message = message.trimmed();
        validate_message(&message).map_err(SendContactMessageError::Validation)?;

        let saved = self
            .contact_api
            .create(message)
            .await
            .map_err(|e| SendContactMessageError::ApiError(e.to_string()))?;

        tracing::info!(message_id = ?saved.id, "Contact message sent");
        Ok(saved)
    }
}
