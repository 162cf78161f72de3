use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;

pub struct GetProjectsService<A>
where
    A: ProjectApi,
{
    project_api: A,
}

impl<A> GetProjectsService<A>
where
    A: ProjectApi,
{
    pub fn new(project_api: A) -> Self {
        Self { project_api }
    }
}

#[async_trait]
impl<A> GetProjectsUseCase for GetProjectsService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Project>, GetProjectsError> {
        let projects = self.project_api.list().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to load projects");
            GetProjectsError::LoadFailed(e.to_string())
        })?;

        tracing::debug!(count = projects.len(), "Projects loaded");
        Ok(projects)
    }
}
