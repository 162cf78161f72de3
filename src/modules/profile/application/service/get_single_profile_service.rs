use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileApi;
use crate::shared::http::ApiError;

pub struct GetSingleProfileService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> GetSingleProfileService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> GetProfileUseCase for GetSingleProfileService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(&self, profile_id: i64) -> Result<Profile, GetProfileError> {
        self.profile_api
            .get_by_id(profile_id)
            .await
            .map_err(|e| match e {
                ApiError::NotFound(_) => GetProfileError::NotFound(profile_id),
                other => GetProfileError::ApiError(other.to_string()),
            })
    }
}
