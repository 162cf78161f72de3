use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectSubmission};
use crate::shared::media::UploadRejection;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SaveProjectError {
    #[error("Please fix the form: {0}")]
    Validation(ValidationErrors),

    #[error("Upload rejected: {0}")]
    UploadRejected(UploadRejection),

    #[error("Project {0} not found")]
    NotFound(i64),

    #[error("Could not save the project: {0}")]
    ApiError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(&self, submission: ProjectSubmission) -> Result<Project, SaveProjectError>;
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i64,
        submission: ProjectSubmission,
    ) -> Result<Project, SaveProjectError>;
}
