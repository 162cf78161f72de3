use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AuthSession, LoginRequest};
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::modules::auth::application::session::SessionStore;
use crate::shared::http::ApiError;

// ====================== Login Error =============================
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Login failed: {0}")]
    ApiError(String),
}

// ============================ Login User Use Case =============================
#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError>;
}

pub struct LoginUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    auth_api: A,
    session: SessionStore,
}

impl<A> LoginUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    pub fn new(auth_api: A, session: SessionStore) -> Self {
        Self { auth_api, session }
    }
}

#[async_trait]
impl<A> ILoginUserUseCase for LoginUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<AuthSession, LoginError> {
        let session = self.auth_api.login(&request).await.map_err(|e| match e {
            ApiError::Unauthorized => LoginError::InvalidCredentials,
            other => LoginError::ApiError(other.to_string()),
        })?;

        self.session.store(&session);
        tracing::info!(email = %request.email(), "Logged in");
        Ok(session)
    }
}
