mod delete_project;
mod get_projects;
mod get_single_project;
mod save_project;

pub use delete_project::{DeleteProjectError, DeleteProjectUseCase};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use save_project::{CreateProjectUseCase, SaveProjectError, UpdateProjectUseCase};
