use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::cv::application::use_cases::fetch_cvs::FetchCvError;
use crate::modules::cv::domain::entities::CvFile;
use crate::shared::http::ApiError;

/// The CV shown on the site. `None` when nothing was uploaded yet.
pub struct GetCurrentCvUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> GetCurrentCvUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait IGetCurrentCvUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<CvFile>, FetchCvError>;
}

#[async_trait::async_trait]
impl<A> IGetCurrentCvUseCase for GetCurrentCvUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self) -> Result<Option<CvFile>, FetchCvError> {
        match self.cv_api.current().await {
            Ok(cv) => Ok(Some(cv)),
            Err(ApiError::NotFound(_)) => {
                tracing::debug!("No current CV");
                Ok(None)
            }
            Err(e) => Err(FetchCvError::ApiError(e.to_string())),
        }
    }
}

pub struct CvExistsUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> CvExistsUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait ICvExistsUseCase: Send + Sync {
    async fn execute(&self) -> Result<bool, FetchCvError>;
}

#[async_trait::async_trait]
impl<A> ICvExistsUseCase for CvExistsUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self) -> Result<bool, FetchCvError> {
        self.cv_api
            .exists()
            .await
            .map_err(|e| FetchCvError::ApiError(e.to_string()))
    }
}
