use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    DeleteContactMessageError, DeleteContactMessageUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactApi;
use crate::shared::http::ApiError;

pub struct DeleteContactMessageService<A>
where
    A: ContactApi,
{
    contact_api: A,
}

impl<A> DeleteContactMessageService<A>
where
    A: ContactApi,
{
    pub fn new(contact_api: A) -> Self {
        Self { contact_api }
    }
}

#[async_trait]
impl<A> DeleteContactMessageUseCase for DeleteContactMessageService<A>
where
    A: ContactApi + Send + Sync,
{
    async fn execute(&self, message_id: i64) -> Result<String, DeleteContactMessageError> {
        let confirmation = self
            .contact_api
            .delete(message_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => DeleteContactMessageError::NotFound(message_id),
                other => DeleteContactMessageError::ApiError(other.to_string()),
            })?;

        tracing::info!(message_id, "Contact message deleted");
        Ok(confirmation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::fixtures::sample_message;
    use crate::tests::support::mock_ports::MockContactApi;

    #[tokio::test]
    async fn test_delete_returns_confirmation_text() {
        let api = MockContactApi::with_messages(vec![sample_message(3)]);
        let service = DeleteContactMessageService::new(api.clone());

        let text = service.execute(3).await.unwrap();

        assert_eq!(text, "Message 3 deleted");
        assert!(api.messages().is_empty());
    }
}
