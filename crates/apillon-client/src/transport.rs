//! HTTP transport

use crate::{ClientError, Config, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{header, Client, RequestBuilder};
use serde_json::Value;
use tracing::debug;

/// Raw outcome of a signed-URL upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedPutResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: String,
}

impl SignedPutResponse {
    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire access to the Apillon API.
///
/// API calls (`get`, `post`, `delete`) take paths relative to the configured
/// endpoint, are authenticated and fail on non-2xx statuses. `put_signed`
/// targets an absolute pre-signed URL, carries no credentials and hands the
/// status back to the caller.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a path with query parameters
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String>;

    /// POST a path with an optional JSON body
    async fn post(&self, path: &str, body: Option<&Value>) -> Result<String>;

    /// PUT raw content to a signed URL
    async fn put_signed(&self, url: &str, body: Bytes) -> Result<SignedPutResponse>;

    /// DELETE a path
    async fn delete(&self, path: &str) -> Result<String>;
}

/// reqwest-backed transport
#[derive(Clone)]
pub struct HttpTransport {
    config: Config,
    http: Client,
}

impl HttpTransport {
    /// Create a new transport with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let user_agent = header::HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ClientError::Config(format!("invalid user agent: {}", e)))?;
        let mut headers = header::HeaderMap::new();
        headers.insert(header::USER_AGENT, user_agent);

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ClientError::Http)?;

        Ok(Self { config, http })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn auth_header(&self) -> String {
        format!("Basic {}", self.config.api_key)
    }

    async fn send(&self, method: &str, url: &str, req: RequestBuilder) -> Result<String> {
        debug!("Sending {} request to {}", method, url);
        let response = req
            .header(header::AUTHORIZATION, self.auth_header())
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            debug!(status = status.as_u16(), "{} {} failed", method, url);
            return Err(ClientError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(text)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let url = self.config.url(path);
        let mut req = self.http.get(&url).timeout(self.config.timeout);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send("GET", &url, req).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Result<String> {
        let url = self.config.url(path);
        let mut req = self.http.post(&url).timeout(self.config.post_timeout);
        if let Some(body) = body {
            req = req.json(body);
        }
        self.send("POST", &url, req).await
    }

    async fn put_signed(&self, url: &str, body: Bytes) -> Result<SignedPutResponse> {
        // Signed URLs are credentials; only the host goes to the log.
        let host = url::Url::parse(url)
            .map_err(|e| ClientError::InvalidInput(format!("invalid signed URL: {}", e)))?
            .host_str()
            .unwrap_or_default()
            .to_string();
        debug!(%host, size = body.len(), "Uploading to signed URL");

        let response = self
            .http
            .put(url)
            .timeout(self.config.upload_timeout)
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(SignedPutResponse { status, body })
    }

    async fn delete(&self, path: &str) -> Result<String> {
        let url = self.config.url(path);
        let req = self.http.delete(&url).timeout(self.config.timeout);
        self.send("DELETE", &url, req).await
    }
}
