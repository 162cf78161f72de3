use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DeleteProjectError {
    #[error("Project {0} not found")]
    NotFound(i64),

    #[error("Could not delete the project: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i64) -> Result<(), DeleteProjectError>;
}
