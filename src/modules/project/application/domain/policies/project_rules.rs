use crate::modules::project::application::domain::ProjectSubmission;
use crate::shared::media::{UploadPolicy, UploadRejection};
use crate::shared::validation::ValidationErrors;

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 10;

/// Field rules of the project form, plus the "at least one image" rule.
pub fn validate_submission(submission: &ProjectSubmission) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    errors.check_text("title", "Title", &submission.title, TITLE_MIN_CHARS);
    errors.check_text(
        "description",
        "Description",
        &submission.description,
        DESCRIPTION_MIN_CHARS,
    );
    if submission.technologies.is_empty() {
        errors.push("technologies", "At least one technology is required");
    }
    if submission.image_count() == 0 {
        errors.push("images", "Add at least one image to the project");
    }
    errors.into_result()
}

/// Checks every new attachment against the project image policy.
pub fn check_new_images(submission: &ProjectSubmission) -> Result<(), UploadRejection> {
    let policy = UploadPolicy::project_image();
    submission
        .new_images
        .iter()
        .try_for_each(|file| policy.validate(file))
}
