use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteCvError {
    #[error("CV not found")]
    NotFound,

    #[error("Could not delete the CV: {0}")]
    ApiError(String),
}

pub struct DeleteCvUseCase<A>
where
    A: CvFileApi,
{
    cv_api: A,
}

impl<A> DeleteCvUseCase<A>
where
    A: CvFileApi,
{
    pub fn new(cv_api: A) -> Self {
        Self { cv_api }
    }
}

#[async_trait::async_trait]
pub trait IDeleteCvUseCase: Send + Sync {
    /// Deletes the given CV, or the current one when `cv_id` is `None`.
    async fn execute(&self, cv_id: Option<i64>) -> Result<(), DeleteCvError>;
}

#[async_trait::async_trait]
impl<A> IDeleteCvUseCase for DeleteCvUseCase<A>
where
    A: CvFileApi + Send + Sync,
{
    async fn execute(&self, cv_id: Option<i64>) -> Result<(), DeleteCvError> {
        let result = match cv_id {
            Some(id) => self.cv_api.delete_by_id(id).await,
            None => self.cv_api.delete_current().await,
        };

        result.map_err(|e| match e {
            ApiError::NotFound(_) => DeleteCvError::NotFound,
            other => DeleteCvError::ApiError(other.to_string()),
        })?;

        tracing::info!(cv_id = ?cv_id, "CV deleted");
        Ok(())
    }
}
