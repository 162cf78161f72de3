use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::UserAccount;
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::modules::auth::application::session::SessionStore;
use crate::shared::http::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchCurrentUserError {
    #[error("Not logged in")]
    NotAuthenticated,

    #[error("Could not load the account: {0}")]
    ApiError(String),
}

#[async_trait]
pub trait IFetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self) -> Result<UserAccount, FetchCurrentUserError>;
}

pub struct FetchCurrentUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    auth_api: A,
    session: SessionStore,
}

impl<A> FetchCurrentUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    pub fn new(auth_api: A, session: SessionStore) -> Self {
        Self { auth_api, session }
    }
}

#[async_trait]
impl<A> IFetchCurrentUserUseCase for FetchCurrentUserUseCase<A>
where
    A: AuthApi + Send + Sync,
{
    async fn execute(&self) -> Result<UserAccount, FetchCurrentUserError> {
        if self.session.tokens().access_token().is_none() {
            return Err(FetchCurrentUserError::NotAuthenticated);
        }

        let user = self.auth_api.me().await.map_err(|e| match e {
            ApiError::Unauthorized => FetchCurrentUserError::NotAuthenticated,
            other => FetchCurrentUserError::ApiError(other.to_string()),
        })?;

        self.session.set_user(Some(user.clone()));
        Ok(user)
    }
}
