use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::modules::contact::application::ports::outgoing::ContactApi;
use crate::shared::http::{ApiClient, ApiError};

const CONTACT: &str = "contact";

#[derive(Clone)]
pub struct ContactApiHttp {
    client: ApiClient,
}

impl ContactApiHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactApi for ContactApiHttp {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, ApiError> {
        self.client.post_json(&[CONTACT], &message).await
    }

    async fn list(&self) -> Result<Vec<ContactMessage>, ApiError> {
        let messages: Option<Vec<ContactMessage>> = self.client.get_json(&[CONTACT]).await?;
        Ok(messages.unwrap_or_default())
    }

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, ApiError> {
        self.client.get_json(&[CONTACT, &id.to_string()]).await
    }

    async fn delete(&self, id: i64) -> Result<String, ApiError> {
        self.client.delete_text(&[CONTACT, &id.to_string()]).await
    }
}
