use async_trait::async_trait;

use crate::modules::auth::application::domain::entities::{AuthSession, LoginRequest, UserAccount};
use crate::shared::http::ApiError;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError>;

    /// Sends the refresh token as the bearer token.
    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, ApiError>;

    /// The account behind the stored access token.
    async fn me(&self) -> Result<UserAccount, ApiError>;
}
