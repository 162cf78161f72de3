use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::domain::entities::CvFile;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchCvError {
    #[error("CV {0} not found")]
    NotFound(i64),

    #[error("Could not load CV files: {0}")]
    ApiError(String),
}

/// Every stored CV, newest handling left to the backend.
pub struct FetchCvsUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> FetchCvsUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait IFetchCvsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CvFile>, FetchCvError>;
}

#[async_trait::async_trait]
impl<A> IFetchCvsUseCase for FetchCvsUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<CvFile>, FetchCvError> {
        self.cv_api
            .list()
            .await
            .map_err(|e| FetchCvError::ApiError(e.to_string()))
    }
}

pub struct FetchCvByIdUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> FetchCvByIdUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait IFetchCvByIdUseCase: Send + Sync {
    async fn execute(&self, cv_id: i64) -> Result<CvFile, FetchCvError>;
}

#[async_trait::async_trait]
impl<A> IFetchCvByIdUseCase for FetchCvByIdUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self, cv_id: i64) -> Result<CvFile, FetchCvError> {
        self.cv_api.get_by_id(cv_id).await.map_err(|e| match e {
            ApiError::NotFound(_) => FetchCvError::NotFound(cv_id),
            other => FetchCvError::ApiError(other.to_string()),
        })
    }
}
