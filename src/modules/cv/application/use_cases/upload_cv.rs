use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::domain::entities::CvFile;
use crate::shared::media::{FileUpload, UploadPolicy, UploadRejection};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadCvError {
    #[error("Upload rejected: {0}")]
    Rejected(#[from] UploadRejection),

    #[error("Could not upload the CV: {0}")]
    ApiError(String),
}

/// Uploads a new CV, which becomes the current one.
pub struct UploadCvUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
    policy: UploadPolicy,
}

impl<A> UploadCvUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self {
            cv_api,
            policy: UploadPolicy::cv_file(),
        }
    }
}

#[async_trait::async_trait]
pub trait IUploadCvUseCase: Send + Sync {
    async fn execute(&self, file: FileUpload) -> Result<CvFile, UploadCvError>;
}

#[async_trait::async_trait]
impl<A> IUploadCvUseCase for UploadCvUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self, file: FileUpload) -> Result<CvFile, UploadCvError> {
        self.policy.validate(&file)?;

        tracing::info!(file = %file.file_name, size = file.size(), "Uploading CV");
        let cv = self
            .cv_api
            .upload(file)
            .await
            .map_err(|e| UploadCvError::ApiError(e.to_string()))?;

        tracing::info!(cv_id = ?cv.id, filename = %cv.filename, "CV uploaded");
        Ok(cv)
    }
}
