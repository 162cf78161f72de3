use async_trait::async_trait;

use crate::modules::profile::application::domain::{Profile, ProfileSubmission};
use crate::shared::media::UploadRejection;
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SaveProfileError {
    #[error("Please fix the form: {0}")]
    Validation(ValidationErrors),

    #[error("Upload rejected: {0}")]
    UploadRejected(UploadRejection),

    #[error("Profile {0} not found")]
    NotFound(i64),

    #[error("Could not save the profile: {0}")]
    ApiError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case traits
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProfileUseCase: Send + Sync {
    async fn execute(&self, submission: ProfileSubmission) -> Result<Profile, SaveProfileError>;
}

/// Updates `current`. Without a new photo the stored photo reference is kept.
#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        current: &Profile,
        submission: ProfileSubmission,
    ) -> Result<Profile, SaveProfileError>;
}
