use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfilesUseCase, LoadCurrentProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileApi;

pub struct GetProfilesService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> GetProfilesService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> GetProfilesUseCase for GetProfilesService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Profile>, GetProfileError> {
        self.profile_api
            .list()
            .await
            .map_err(|e| GetProfileError::ApiError(e.to_string()))
    }
}

pub struct LoadCurrentProfileService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> LoadCurrentProfileService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> LoadCurrentProfileUseCase for LoadCurrentProfileService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError> {
        let profiles = self
            .profile_api
            .list()
            .await
            .map_err(|e| GetProfileError::ApiError(e.to_string()))?;

        if profiles.len() > 1 {
            tracing::debug!(count = profiles.len(), "Several profiles stored, using the first");
        }
        Ok(profiles.into_iter().next())
    }
}
