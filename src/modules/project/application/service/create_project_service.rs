use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectSubmission};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, SaveProjectError,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;

use super::prepare_submission;

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<A>
where
    A: ProjectApi,
{
    project_api: A,
}

impl<A> CreateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(project_api: A) -> Self {
        Self { project_api }
    }
}

#[async_trait]
impl<A> CreateProjectUseCase for CreateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, submission: ProjectSubmission) -> Result<Project, SaveProjectError> {
        let (mut payload, files) = prepare_submission(submission)?;
        // A new project has nothing stored to keep.
        payload.existing_images.clear();

        tracing::info!(
            title = %payload.title,
            images = files.len(),
            "Creating project"
        );

        self.project_api
            .create(payload, files)
            .await
            .map_err(|e| SaveProjectError::ApiError(e.to_string()))
    }
}
