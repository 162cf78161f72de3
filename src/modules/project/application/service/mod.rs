pub mod create_project_service;
pub mod delete_project_service;
pub mod get_projects_service;
pub mod get_single_project_service;
pub mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use delete_project_service::DeleteProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_single_project_service::GetSingleProjectService;
pub use update_project_service::UpdateProjectService;

use crate::modules::project::application::domain::policies::project_rules::{
    check_new_images, validate_submission,
};
use crate::modules::project::application::domain::ProjectSubmission;
use crate::modules::project::application::ports::incoming::use_cases::SaveProjectError;
use crate::modules::project::application::ports::outgoing::ProjectPayload;
use crate::shared::media::FileUpload;

/// Runs the form rules and upload guard, then splits the submission into
/// the request's text part and file parts. Nothing here touches the network.
fn prepare_submission(
    submission: ProjectSubmission,
) -> Result<(ProjectPayload, Vec<FileUpload>), SaveProjectError> {
    validate_submission(&submission).map_err(SaveProjectError::Validation)?;
    check_new_images(&submission).map_err(SaveProjectError::UploadRejected)?;

    let payload = ProjectPayload {
        title: submission.title.trim().to_string(),
        description: submission.description.trim().to_string(),
        technologies: submission.technologies,
        existing_images: submission.kept_images,
    };
    Ok((payload, submission.new_images))
}
