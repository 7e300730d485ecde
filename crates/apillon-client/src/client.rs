//! Main client implementation

use crate::{
    transport::{HttpTransport, Transport},
    ClientError, Computing, Config, Contracts, Hosting, Nfts, Result, Social, Storage,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Apillon API client.
///
/// Cheap to clone; clones share one connection pool. Resource groups are
/// reached through accessors such as [`ApillonClient::storage`].
#[derive(Clone)]
pub struct ApillonClient {
    config: Config,
    transport: Arc<dyn Transport>,
}

impl ApillonClient {
    /// Create a new client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(config.clone())?;
        Ok(Self {
            config,
            transport: Arc::new(transport),
        })
    }

    /// Create from `APILLON_API_KEY` / `APILLON_API_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(Config::from_env()?)
    }

    /// Create with a custom transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the transport
    pub fn transport(&self) -> &dyn Transport {
        self.transport.as_ref()
    }

    /// Buckets, files and file uploads
    pub fn storage(&self) -> Storage<'_> {
        Storage::new(self)
    }

    /// Websites and deployments
    pub fn hosting(&self) -> Hosting<'_> {
        Hosting::new(self)
    }

    /// NFT collections
    pub fn nfts(&self) -> Nfts<'_> {
        Nfts::new(self)
    }

    /// Computing contracts
    pub fn computing(&self) -> Computing<'_> {
        Computing::new(self)
    }

    /// Social channels and hubs
    pub fn social(&self) -> Social<'_> {
        Social::new(self)
    }

    /// Smart contracts
    pub fn contracts(&self) -> Contracts<'_> {
        Contracts::new(self)
    }

    // ==================== Helper Methods ====================

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let body = self.transport.get(path, query).await?;
        decode(&body)
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&Value>,
    ) -> Result<T> {
        let body = self.transport.post(path, body).await?;
        decode(&body)
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body = self.transport.delete(path).await?;
        decode(&body)
    }
}

/// Parse a response body, keeping the raw text on failure
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ClientError::Decode {
        source,
        body: body.to_string(),
    })
}

/// Reject an empty identifier
pub(crate) fn require(value: &str, name: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ClientError::InvalidInput(format!("{} is required", name)));
    }
    Ok(())
}

/// Serialize a request body, which must be a non-empty JSON object
pub(crate) fn request_body(body: &impl Serialize) -> Result<Value> {
    let value = serde_json::to_value(body)
        .map_err(|e| ClientError::InvalidInput(format!("request body is not valid JSON: {}", e)))?;
    match &value {
        Value::Object(map) if !map.is_empty() => Ok(value),
        _ => Err(ClientError::InvalidInput(
            "request body is required".to_string(),
        )),
    }
}

/// Escape an identifier for use as one path segment
pub(crate) fn segment(value: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(value)
}
