//! CLI settings

use apillon_client::{Config, DEFAULT_ENDPOINT};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Settings layered from defaults, an optional TOML file, `APILLON_*`
/// environment variables and command line flags, in increasing priority.
#[derive(Clone, Deserialize)]
pub struct Settings {
    /// API key
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    pub endpoint: String,
    /// GET/DELETE timeout (seconds)
    pub timeout_secs: u64,
    /// POST timeout (seconds)
    pub post_timeout_secs: u64,
    /// Signed-URL upload timeout (seconds)
    pub upload_timeout_secs: u64,
    /// Delay between negotiating a session and the first transfer (milliseconds)
    pub settle_delay_ms: u64,
}

/// Values given on the command line
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

impl Settings {
    /// Load settings; a missing file is not an error
    pub fn load(path: &Path, overrides: &Overrides) -> Result<Self, config::ConfigError> {
        let defaults = Config::default();

        config::Config::builder()
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("timeout_secs", defaults.timeout.as_secs() as i64)?
            .set_default("post_timeout_secs", defaults.post_timeout.as_secs() as i64)?
            .set_default("upload_timeout_secs", defaults.upload_timeout.as_secs() as i64)?
            .set_default("settle_delay_ms", defaults.settle_delay.as_millis() as i64)?
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix("APILLON"))
            .set_override_option("api_key", overrides.api_key.clone())?
            .set_override_option("endpoint", overrides.endpoint.clone())?
            .build()?
            .try_deserialize()
    }

    /// Build the SDK configuration
    pub fn client_config(&self) -> Config {
        Config::new(self.api_key.clone())
            .with_endpoint(self.endpoint.clone())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_post_timeout(Duration::from_secs(self.post_timeout_secs))
            .with_upload_timeout(Duration::from_secs(self.upload_timeout_secs))
            .with_settle_delay(Duration::from_millis(self.settle_delay_ms))
    }
}
