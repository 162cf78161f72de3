// src/modules/project/application/ports/outgoing/project_api.rs

use async_trait::async_trait;

use crate::modules::project::application::domain::{Project, ProjectImage, Technologies};
use crate::shared::http::ApiError;
use crate::shared::media::FileUpload;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Text part of a create/update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPayload {
    pub title: String,
    pub description: String,
    pub technologies: Technologies,
    /// Stored images to keep. Only sent on update; the backend reconciles
    /// them with the newly uploaded files.
    pub existing_images: Vec<ProjectImage>,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectApi: Send + Sync {
    /// All projects, normalized (missing strings become empty, missing
    /// image lists become empty).
    async fn list(&self) -> Result<Vec<Project>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<Project, ApiError>;

    async fn create(
        &self,
        data: ProjectPayload,
        images: Vec<FileUpload>,
    ) -> Result<Project, ApiError>;

    async fn update(
        &self,
        id: i64,
        data: ProjectPayload,
        new_images: Vec<FileUpload>,
    ) -> Result<Project, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
