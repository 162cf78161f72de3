// src/modules/profile/application/ports/outgoing/profile_api.rs

use async_trait::async_trait;

use crate::modules::profile::application::domain::Profile;
use crate::shared::http::ApiError;
use crate::shared::media::FileUpload;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Text fields sent with a photo upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFields {
    pub full_name: String,
    pub title: String,
    pub bio: String,
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Profile>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<Profile, ApiError>;

    /// Multipart POST with the photo as `photo`.
    async fn create(&self, fields: ProfileFields, photo: FileUpload) -> Result<Profile, ApiError>;

    /// Multipart PUT replacing the photo.
    async fn update_with_photo(
        &self,
        id: i64,
        fields: ProfileFields,
        photo: FileUpload,
    ) -> Result<Profile, ApiError>;

    /// JSON PUT. The stored `photo_url` travels with the body so the backend
    /// keeps it.
    async fn update(&self, id: i64, profile: Profile) -> Result<Profile, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
