use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::ProjectApi;
use crate::shared::http::ApiError;

pub struct DeleteProjectService<A>
where
    A: ProjectApi,
{
    project_api: A,
}

impl<A> DeleteProjectService<A>
where
    A: ProjectApi,
{
    pub fn new(project_api: A) -> Self {
        Self { project_api }
    }
}

#[async_trait]
impl<A> DeleteProjectUseCase for DeleteProjectService<A>
where
    A: ProjectApi + Send + Sync,
{
    async fn execute(&self, project_id: i64) -> Result<(), DeleteProjectError> {
        self.project_api
            .delete(project_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => DeleteProjectError::NotFound(project_id),
                other => DeleteProjectError::ApiError(other.to_string()),
            })?;

        tracing::info!(project_id, "Project deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::project::application::domain::Project;
    use crate::modules::project::application::ports::outgoing::ProjectPayload;
    use crate::shared::media::FileUpload;
    use mockall::{mock, predicate::*};

    mock! {
        pub ProjectApiMock {}
        #[async_trait]
        impl ProjectApi for ProjectApiMock {
            async fn list(&self) -> Result<Vec<Project>, ApiError>;
            async fn get_by_id(&self, id: i64) -> Result<Project, ApiError>;
            async fn create(
                &self,
                data: ProjectPayload,
                images: Vec<FileUpload>,
            ) -> Result<Project, ApiError>;
            async fn update(
                &self,
                id: i64,
                data: ProjectPayload,
                new_images: Vec<FileUpload>,
            ) -> Result<Project, ApiError>;
            async fn delete(&self, id: i64) -> Result<(), ApiError>;
        }
    }

    #[tokio::test]
    async fn test_execute_deletes_by_id() {
        let mut api = MockProjectApiMock::new();
        api.expect_delete()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(()));

        let service = DeleteProjectService::new(api);
        assert!(service.execute(3).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_maps_not_found() {
        let mut api = MockProjectApiMock::new();
        api.expect_delete()
            .returning(|_| Err(ApiError::NotFound("/api/projects/9".into())));

        let service = DeleteProjectService::new(api);
        assert_eq!(
            service.execute(9).await.unwrap_err(),
            DeleteProjectError::NotFound(9)
        );
    }

    #[tokio::test]
    async fn test_execute_maps_transport_error() {
        let mut api = MockProjectApiMock::new();
        api.expect_delete()
            .returning(|_| Err(ApiError::Transport("request timed out".into())));

        let service = DeleteProjectService::new(api);
        assert!(matches!(
            service.execute(9).await.unwrap_err(),
            DeleteProjectError::ApiError(msg) if msg.contains("timed out")
        ));
    }
}
