// src/shared/http/api_client.rs
use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::config::ApiConfig;
use crate::shared::http::{ApiError, MultipartPayload, TokenStore, Tokens};

/// Tracing target for backend calls.
pub const TRACING_TARGET: &str = "portfolio_admin::http";

/// Longest error body kept in `ApiError::Status`.
const MAX_ERROR_BODY_CHARS: usize = 512;

struct ApiClientInner {
    http: Client,
    base_url: Url,
    tokens: TokenStore,
}

/// Thin wrapper over `reqwest::Client` bound to the portfolio API root.
///
/// Every outgoing adapter goes through it, so status mapping and bearer
/// token handling live in one place.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

#[cfg(not(tarpaulin_include))]
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let tokens = match &config.access_token {
            Some(access_token) => TokenStore::with_tokens(Tokens {
                access_token: access_token.clone(),
                refresh_token: config.refresh_token.clone(),
            }),
            None => TokenStore::new(),
        };
        Self::with_token_store(config, tokens)
    }

    pub fn with_token_store(config: &ApiConfig, tokens: TokenStore) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ApiError::InvalidRequest(format!("{}: {e}", config.base_url)))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("portfolio-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::debug!(
            target: TRACING_TARGET,
            base_url = %base_url,
            timeout_ms = config.timeout.as_millis() as u64,
            "API client created"
        );

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                base_url,
                tokens,
            }),
        })
    }

    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str().trim_end_matches('/')
    }

    pub fn root_url(&self) -> Url {
        self.inner.base_url.clone()
    }

    pub fn tokens(&self) -> &TokenStore {
        &self.inner.tokens
    }

    /// Appends path segments to the API root. Each segment is
    /// percent-encoded on its own, so filenames may contain `/` or spaces.
    pub fn url(&self, segments: &[&str]) -> Result<Url, ApiError> {
        endpoint_url(&self.inner.base_url, segments)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let response = self.send(Method::GET, segments, |req| req).await?;
        Self::decode_json(response).await
    }

    pub async fn get_bytes(&self, segments: &[&str]) -> Result<Vec<u8>, ApiError> {
        let response = self.send(Method::GET, segments, |req| req).await?;
        let bytes = response.bytes().await?;
        Ok(bytes.to_vec())
    }

    pub async fn post_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::POST, segments, |req| req.json(body)).await?;
        Self::decode_json(response).await
    }

    pub async fn put_json<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send(Method::PUT, segments, |req| req.json(body)).await?;
        Self::decode_json(response).await
    }

    /// POST with an explicit bearer token instead of the stored access token.
    pub async fn post_json_with_bearer<B, T>(
        &self,
        segments: &[&str],
        body: &B,
        bearer: &str,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        let request = self
            .inner
            .http
            .request(Method::POST, url.clone())
            .bearer_auth(bearer)
            .json(body);
        let response = Self::execute(request, &Method::POST, &url).await?;
        Self::decode_json(response).await
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        payload: MultipartPayload,
    ) -> Result<T, ApiError> {
        let form = payload.into_form()?;
        let response = self
            .send(Method::POST, segments, move |req| req.multipart(form))
            .await?;
        Self::decode_json(response).await
    }

    pub async fn put_multipart<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        payload: MultipartPayload,
    ) -> Result<T, ApiError> {
        let form = payload.into_form()?;
        let response = self
            .send(Method::PUT, segments, move |req| req.multipart(form))
            .await?;
        Self::decode_json(response).await
    }

    /// DELETE, ignoring whatever body comes back.
    pub async fn delete(&self, segments: &[&str]) -> Result<(), ApiError> {
        self.send(Method::DELETE, segments, |req| req).await?;
        Ok(())
    }

    /// DELETE whose success body is plain text rather than JSON.
    pub async fn delete_text(&self, segments: &[&str]) -> Result<String, ApiError> {
        let response = self.send(Method::DELETE, segments, |req| req).await?;
        Ok(response.text().await?)
    }

    async fn send<F>(&self, method: Method, segments: &[&str], build: F) -> Result<Response, ApiError>
    where
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(segments)?;
        let mut request = self.inner.http.request(method.clone(), url.clone());
        if let Some(token) = self.inner.tokens.access_token() {
            request = request.bearer_auth(token);
        }
        Self::execute(build(request), &method, &url).await
    }

    async fn execute(request: RequestBuilder, method: &Method, url: &Url) -> Result<Response, ApiError> {
        tracing::debug!(target: TRACING_TARGET, %method, url = %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            let err = ApiError::from(e);
            tracing::warn!(target: TRACING_TARGET, %method, url = %url, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(target: TRACING_TARGET, %method, url = %url, status = status.as_u16(), "Request completed");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            target: TRACING_TARGET,
            %method,
            url = %url,
            status = status.as_u16(),
            "Backend returned an error status"
        );

        Err(match status.as_u16() {
            404 => ApiError::NotFound(url.path().to_string()),
            401 | 403 => ApiError::Unauthorized,
            code => ApiError::Status {
                status: code,
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            },
        })
    }

    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(ApiError::from)
    }
}

pub fn endpoint_url(base: &Url, segments: &[&str]) -> Result<Url, ApiError> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| ApiError::InvalidRequest(format!("{base} cannot be a base url")))?;
        path.pop_if_empty();
        for segment in segments {
            path.push(segment);
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(&ApiConfig::new("http://localhost:9000/api").unwrap()).unwrap()
    }

    #[test]
    fn test_url_appends_and_encodes_segments() {
        let client = client();
        let url = client.url(&["projects", "images", "my shot.png"]).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/api/projects/images/my%20shot.png"
        );
    }

    #[test]
    fn test_url_with_trailing_slash_base() {
        let base = Url::parse("http://localhost:9000/api/").unwrap();
        let url = endpoint_url(&base, &["cvfiles", "current"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/cvfiles/current");
    }

    #[test]
    fn test_initial_tokens_come_from_config() {
        let mut config = ApiConfig::new("http://localhost:9000/api").unwrap();
        config.access_token = Some("abc".to_string());
        let client = ApiClient::new(&config).unwrap();
        assert_eq!(client.tokens().access_token().as_deref(), Some("abc"));
    }

    #[test]
    fn test_base_url_has_no_trailing_slash() {
        assert_eq!(client().base_url(), "http://localhost:9000/api");
    }
}
