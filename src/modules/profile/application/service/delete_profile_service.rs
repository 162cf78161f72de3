use async_trait::async_trait;

use crate::modules::profile::application::ports::incoming::use_cases::{
    DeleteProfileError, DeleteProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileApi;
use crate::shared::http::ApiError;

pub struct DeleteProfileService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> DeleteProfileService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> DeleteProfileUseCase for DeleteProfileService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(&self, profile_id: i64) -> Result<(), DeleteProfileError> {
        self.profile_api
            .delete(profile_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => DeleteProfileError::NotFound(profile_id),
                other => DeleteProfileError::ApiError(other.to_string()),
            })?;

        tracing::info!(profile_id, "Profile deleted");
        Ok(())
    }
}
