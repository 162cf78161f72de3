use async_trait::async_trait;

use crate::modules::contact::application::domain::ContactMessage;
use crate::modules::contact::application::ports::incoming::use_cases::{
    GetContactMessageError, GetContactMessageUseCase, GetContactMessagesUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactApi;
use crate::shared::http::ApiError;

pub struct GetContactMessagesService<A>
where
    A: ContactApi,
{
    contact_api: A,
}

impl<A> GetContactMessagesService<A>
where
    A: ContactApi,
{
    pub fn new(contact_api: A) -> Self {
        Self { contact_api }
    }
}

#[async_trait]
impl<A> GetContactMessagesUseCase for GetContactMessagesService<A>
where
    A: ContactApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactMessage>, GetContactMessageError> {
        self.contact_api
            .list()
            .await
            .map_err(|e| GetContactMessageError::ApiError(e.to_string()))
    }
}

pub struct GetContactMessageService<A>
where
    A: ContactApi,
{
    contact_api: A,
}

impl<A> GetContactMessageService<A>
where
    A: ContactApi,
{
    pub fn new(contact_api: A) -> Self {
        Self { contact_api }
    }
}

#[async_trait]
impl<A> GetContactMessageUseCase for GetContactMessageService<A>
where
    A: ContactApi + Send + Sync,
{
    async fn execute(&self, message_id: i64) -> Result<ContactMessage, GetContactMessageError> {
        self.contact_api
            .get_by_id(message_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => GetContactMessageError::NotFound(message_id),
                other => GetContactMessageError::ApiError(other.to_string()),
            })
    }
}
