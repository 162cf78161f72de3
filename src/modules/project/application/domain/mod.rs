pub mod entities;
pub mod policies;

pub use entities::{Project, ProjectImage, ProjectSubmission, Technologies};
