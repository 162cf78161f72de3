use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectSubmission};
use crate::modules::project::application::ports::incoming::use_cases::{
    SaveProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::http::ApiError;

use super::prepare_submission;

pub struct UpdateProjectService<A>
where
    A: ProjectApi,
{
    project_api: A,
}

impl<A> UpdateProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(project_api: A) -> Self {
        Self { project_api }
    }
}

#[async_trait]
impl<A> UpdateProjectUseCase for UpdateProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i64,
        submission: ProjectSubmission,
    ) -> Result<Project, SaveProjectError> {
        let (payload, files) = prepare_submission(submission)?;

        tracing::info!(
            project_id,
            kept_images = payload.existing_images.len(),
            new_images = files.len(),
            "Updating project"
        );

        self.project_api
            .update(project_id, payload, files)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => SaveProjectError::NotFound(project_id),
                other => SaveProjectError::ApiError(other.to_string()),
            })
    }
}
