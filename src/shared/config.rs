// src/shared/config.rs
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:9000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value: {value}")]
    InvalidValue { key: String, value: String },

    #[error("API url must start with http:// or https://, got {0}")]
    InvalidBaseUrl(String),
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Root of the REST API, without trailing slash (e.g. `http://localhost:9000/api`).
    pub base_url: String,
    pub timeout: Duration,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            access_token: None,
            refresh_token: None,
        }
    }
}

impl ApiConfig {
    /// Handy for tests or custom wiring (no env reads).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Load configuration from environment variables.
    ///
    /// - `PORTFOLIO_API_URL` (default `http://localhost:9000/api`)
    /// - `PORTFOLIO_API_TIMEOUT_SECS` (default 30)
    /// - `PORTFOLIO_ACCESS_TOKEN` / `PORTFOLIO_REFRESH_TOKEN` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var("PORTFOLIO_API_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = Self::parse_secs("PORTFOLIO_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            timeout: Duration::from_secs(timeout_secs),
            access_token: non_empty_var("PORTFOLIO_ACCESS_TOKEN"),
            refresh_token: non_empty_var("PORTFOLIO_REFRESH_TOKEN"),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(base_url.into())?;
        Ok(self)
    }

    fn parse_secs(key: &str, default: u64) -> Result<u64, ConfigError> {
        match env::var(key) {
            Err(_) => Ok(default),
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(0) | Err(_) => Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: raw,
                }),
                Ok(secs) => Ok(secs),
            },
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn normalize_base_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw));
    }
    Ok(trimmed.to_string())
}
