use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GetProfileError {
    #[error("Profile {0} not found")]
    NotFound(i64),

    #[error("Could not load the profile: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait GetProfilesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Profile>, GetProfileError>;
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, profile_id: i64) -> Result<Profile, GetProfileError>;
}

/// The profile shown on the site: the first one the backend lists.
#[async_trait]
pub trait LoadCurrentProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<Profile>, GetProfileError>;
}
