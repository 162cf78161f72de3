use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DeleteProfileError {
    #[error("Profile {0} not found")]
    NotFound(i64),

    #[error("Could not delete the profile: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait DeleteProfileUseCase: Send + Sync {
    async fn execute(&self, profile_id: i64) -> Result<(), DeleteProfileError>;
}
