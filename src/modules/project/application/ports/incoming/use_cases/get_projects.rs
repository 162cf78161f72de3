use async_trait::async_trait;

use crate::modules::project::application::domain::Project;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GetProjectsError {
    #[error("Could not load projects: {0}")]
    LoadFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError>;
}
