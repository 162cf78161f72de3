use async_trait::async_trait;

use crate::modules::project::application::domain::Project;
use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::http::ApiError;

pub struct GetSingleProjectService<A>
where
    A: ProjectApi,
{
    project_api: A,
}

impl<A> GetSingleProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(project_api: A) -> Self {
        Self { project_api }
    }
}

#[async_trait]
impl<A> GetSingleProjectUseCase for GetSingleProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<Project, GetSingleProjectError> {
        self.project_api
            .get_by_id(project_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => GetSingleProjectError::NotFound(project_id),
                other => GetSingleProjectError::ApiError(other.to_string()),
            })
    }
}
