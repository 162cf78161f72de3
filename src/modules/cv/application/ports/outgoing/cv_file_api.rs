use async_trait::async_trait;

use crate::modules::cv::domain::entities::CvFile;
use crate::shared::http::ApiError;
use crate::shared::media::FileUpload;

/// Backend CV store. There is one "current" CV; uploading replaces it.
#[async_trait]
pub trait CvFileApi: Send + Sync {
    async fn current(&self) -> Result<CvFile, ApiError>;

    async fn list(&self) -> Result<Vec<CvFile>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<CvFile, ApiError>;

    async fn upload(&self, file: FileUpload) -> Result<CvFile, ApiError>;

    async fn download_current(&self) -> Result<Vec<u8>, ApiError>;

    async fn download_by_filename(&self, filename: &str) -> Result<Vec<u8>, ApiError>;

    async fn delete_current(&self) -> Result<(), ApiError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ApiError>;

    async fn exists(&self) -> Result<bool, ApiError>;
}
