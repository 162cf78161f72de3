use crate::modules::profile::application::domain::ProfileSubmission;
use crate::shared::media::{UploadPolicy, UploadRejection};
use crate::shared::validation::ValidationErrors;

pub const FULL_NAME_MIN_CHARS: usize = 2;
pub const TITLE_MIN_CHARS: usize = 2;
pub const BIO_MIN_CHARS: usize = 10;

/// Field rules of the profile form. A new profile also needs a photo.
pub fn validate_submission(
    submission: &ProfileSubmission,
    photo_required: bool,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check_text(
        "full_name",
        "Full name",
        &submission.full_name,
        FULL_NAME_MIN_CHARS,
    );
    errors.check_text("title", "Title", &submission.title, TITLE_MIN_CHARS);
    errors.check_text("bio", "Bio", &submission.bio, BIO_MIN_CHARS);
    if photo_required && submission.photo.is_none() {
        errors.push("photo", "Profile photo is required");
    }
    errors.into_result()
}

pub fn check_photo(submission: &ProfileSubmission) -> Result<(), UploadRejection> {
    match &submission.photo {
        Some(photo) => UploadPolicy::profile_photo().validate(photo),
        None => Ok(()),
    }
}
