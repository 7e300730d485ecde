//! Client configuration

use crate::{ClientError, Result};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Public Apillon API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.apillon.io";

/// Wait between negotiating an upload session and the first transfer
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_secs(2);

/// Client configuration
#[derive(Clone)]
pub struct Config {
    /// API base URL
    pub endpoint: String,
    /// API key, sent as `Authorization: Basic <key>`
    pub api_key: String,
    /// Timeout for GET and DELETE requests
    pub timeout: Duration,
    /// Timeout for POST requests
    pub post_timeout: Duration,
    /// Timeout for a single signed-URL upload
    pub upload_timeout: Duration,
    /// Delay before the first transfer of a batch, so freshly signed URLs
    /// are accepted by the storage backend
    pub settle_delay: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(30),
            post_timeout: Duration::from_secs(60),
            upload_timeout: Duration::from_secs(300),
            settle_delay: DEFAULT_SETTLE_DELAY,
            user_agent: format!("apillon-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("post_timeout", &self.post_timeout)
            .field("upload_timeout", &self.upload_timeout)
            .field("settle_delay", &self.settle_delay)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Create a new config for the public endpoint with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    /// Read `APILLON_API_KEY` and the optional `APILLON_API_URL`
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("APILLON_API_KEY")
            .map_err(|_| ClientError::Config("APILLON_API_KEY is not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(endpoint) = std::env::var("APILLON_API_URL") {
            config.endpoint = endpoint;
        }
        Ok(config)
    }

    /// Set the API base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the GET/DELETE timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the POST timeout
    pub fn with_post_timeout(mut self, timeout: Duration) -> Self {
        self.post_timeout = timeout;
        self
    }

    /// Set the signed-URL upload timeout
    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout = timeout;
        self
    }

    /// Set the post-negotiation settle delay; `Duration::ZERO` disables it
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Check the endpoint and API key
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| {
                ClientError::Config(format!("invalid endpoint {}: {}", self.endpoint, e))
            })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "unsupported endpoint scheme: {}",
                url.scheme()
            )));
        }
        if self.api_key.is_empty() {
            return Err(ClientError::Config("API key is empty".to_string()));
        }
        Ok(())
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint.trim_end_matches('/'), path)
    }
}
