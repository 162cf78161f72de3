use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::AuthSession;
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::modules::auth::application::session::SessionStore;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("No refresh token available, please log in")]
    NoRefreshToken,

    #[error("Session expired, please log in again")]
    SessionExpired,

    #[error("Could not refresh the session: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    async fn execute(&self) -> Result<AuthSession, RefreshTokenError>;
}

pub struct RefreshTokenUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    auth_api: A,
    session: SessionStore,
}

impl<A> RefreshTokenUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    pub fn new(auth_api: A, session: SessionStore) -> Self {
        Self { auth_api, session }
    }
}

#[async_trait]
impl<A> IRefreshTokenUseCase for RefreshTokenUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    async fn execute(&self) -> Result<AuthSession, RefreshTokenError> {
        let refresh_token = self
            .session
            .tokens()
            .refresh_token()
            .ok_or(RefreshTokenError::NoRefreshToken)?;

        let refreshed = match self.auth_api.refresh(&refresh_token).await {
            Ok(session) => session,
            Err(ApiError::Unauthorized) => {
                // The refresh token itself was refused; nothing left to reuse.
                self.session.clear();
                return Err(RefreshTokenError::SessionExpired);
            }
            Err(e) => return Err(RefreshTokenError::ApiError(e.to_string())),
        };

        self.session.store(&refreshed);
        tracing::debug!("Session refreshed");
        Ok(refreshed)
    }
}
