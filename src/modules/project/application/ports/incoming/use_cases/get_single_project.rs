use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GetSingleProjectError {
    #[error("Project {0} not found")]
    NotFound(i64),

    #[error("Could not load project: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i64) -> Result<Project, GetSingleProjectError>;
}
