use async_trait::async_trait;
use serde_json::json;

use crate::modules::auth::application::domain::entities::{AuthSession, LoginRequest, UserAccount};
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::shared::http::{ApiClient, ApiError};

const AUTH: &str = "auth";

#[derive(Clone)]
pub struct AuthApiHttp {
    client: ApiClient,
}

impl AuthApiHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for AuthApiHttp {
    async fn login(&self, request: &LoginRequest) -> Result<AuthSession, ApiError> {
        self.client.post_json(&[AUTH, "login"], request).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, ApiError> {
        self.client
            .post_json_with_bearer(&[AUTH, "refresh"], &json!({}), refresh_token)
            .await
    }

    async fn me(&self) -> Result<UserAccount, ApiError> {
        self.client.get_json(&[AUTH, "me"]).await
    }
}
