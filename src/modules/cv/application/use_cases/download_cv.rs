use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::domain::entities::CvTarget;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DownloadCvError {
    #[error("No CV available")]
    NotFound,

    #[error("Could not download the CV: {0}")]
    ApiError(String),
}

impl From<ApiError> for DownloadCvError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound(_) => DownloadCvError::NotFound,
            other => DownloadCvError::ApiError(other.to_string()),
        }
    }
}

pub struct DownloadCvUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> DownloadCvUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait IDownloadCvUseCase: Send + Sync {
    async fn execute(&self, target: CvTarget) -> Result<Vec<u8>, DownloadCvError>;
}

#[async_trait::async_trait]
impl<A> IDownloadCvUseCase for DownloadCvUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self, target: CvTarget) -> Result<Vec<u8>, DownloadCvError> {
        let bytes = match target {
            CvTarget::Current => self.cv_api.download_current().await?,
            CvTarget::Filename(filename) => self.cv_api.download_by_filename(&filename).await?,
            CvTarget::Id(id) => {
                // Stored files are only addressable by name.
                let cv = self.cv_api.get_by_id(id).await?;
                self.cv_api.download_by_filename(&cv.filename).await?
            }
        };

        tracing::debug!(bytes = bytes.len(), "CV downloaded");
        Ok(bytes)
    }
}
