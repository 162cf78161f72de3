use async_trait::async_trait;

use crate::modules::profile::application::domain::policies::profile_rules::{
    check_photo, validate_submission,
};
use crate::modules::profile::application::domain::{Profile, ProfileSubmission};
use crate::modules::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, SaveProfileError, UpdateProfileUseCase,
};
use crate::modules::profile::application::ports::outgoing::{ProfileApi, ProfileFields};
use crate::shared::http::ApiError;
use crate::shared::validation::ValidationErrors;

fn fields_of(submission: &ProfileSubmission) -> ProfileFields {
    ProfileFields {
        full_name: submission.full_name.trim().to_string(),
        title: submission.title.trim().to_string(),
        bio: submission.bio.trim().to_string(),
    }
}

fn check(submission: &ProfileSubmission, photo_required: bool) -> Result<(), SaveProfileError> {
    validate_submission(submission, photo_required).map_err(SaveProfileError::Validation)?;
    check_photo(submission).map_err(SaveProfileError::UploadRejected)
}

// ============================================================================
// Create
// ============================================================================

pub struct CreateProfileService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> CreateProfileService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> CreateProfileUseCase for CreateProfileService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(&self, submission: ProfileSubmission) -> Result<Profile, SaveProfileError> {
        check(&submission, true)?;

        let fields = fields_of(&submission);
        let photo = submission.photo.ok_or_else(|| {
            let mut errors = ValidationErrors::new();
            errors.push("photo", "Profile photo is required");
            SaveProfileError::Validation(errors)
        })?;

        tracing::info!(full_name = %fields.full_name, "Creating profile");
        self.profile_api
            .create(fields, photo)
            .await
            .map_err(|e| SaveProfileError::ApiError(e.to_string()))
    }
}

// ============================================================================
// Update
// ============================================================================

pub struct UpdateProfileService<A>
where
    A: ProfileApi,
{
    profile_api: A,
}

impl<A> UpdateProfileService<A>
where
    A: ProfileApi,
{
    pub fn new(profile_api: A) -> Self {
        Self { profile_api }
    }
}

#[async_trait]
impl<A> UpdateProfileUseCase for UpdateProfileService<A>
where
    A: ProfileApi + Send + Sync,
{
    async fn execute(
        &self,
        current: &Profile,
        submission: ProfileSubmission,
    ) -> Result<Profile, SaveProfileError> {
        check(&submission, false)?;

        let Some(profile_id) = current.id else {
            return Err(SaveProfileError::ApiError(
                "profile has not been saved yet".to_string(),
            ));
        };

        let fields = fields_of(&submission);
        let result = match submission.photo {
            Some(photo) => {
                tracing::info!(profile_id, "Updating profile with a new photo");
                self.profile_api
                    .update_with_photo(profile_id, fields, photo)
                    .await
            }
            None => {
                tracing::info!(profile_id, "Updating profile fields");
                let profile = Profile {
                    id: Some(profile_id),
                    full_name: fields.full_name,
                    title: fields.title,
                    bio: fields.bio,
                    photo_url: current.photo_url.clone(),
                };
                self.profile_api.update(profile_id, profile).await
            }
        };

        result.map_err(|e| match e {
            ApiError::NotFound(_) => SaveProfileError::NotFound(profile_id),
            other => SaveProfileError::ApiError(other.to_string()),
        })
    }
}
