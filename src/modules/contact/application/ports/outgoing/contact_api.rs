use async_trait::async_trait;

use crate::modules::contact::application::domain::{ContactMessage, NewContactMessage};
use crate::shared::http::ApiError;

#[async_trait]
pub trait ContactApi: Send + Sync {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, ApiError>;

    async fn list(&self) -> Result<Vec<ContactMessage>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<ContactMessage, ApiError>;

    /// The backend answers with a plain-text confirmation.
    async fn delete(&self, id: i64) -> Result<String, ApiError>;
}
