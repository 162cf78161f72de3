use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DeleteContactMessageError {
    #[error("Message {0} not found")]
    NotFound(i64),

    #[error("Could not delete the message: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait DeleteContactMessageUseCase: Send + Sync {
    /// Returns the backend's confirmation text.
    async fn execute(&self, message_id: i64) -> Result<String, DeleteContactMessageError>;
}
