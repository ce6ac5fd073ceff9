//! Configuration management for the address parser

use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment prefix for overrides, e.g. `ADDR_PARSE__REMOTE__BASE_URL`
pub const ENV_PREFIX: &str = "ADDR_PARSE";

/// What to do with a phone number whose digits are partly replaced by `*`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaskedPhonePolicy {
    /// Keep the masked text in `phone` so the form can show it and ask for a fix
    #[default]
    PassThrough,
    /// Leave `phone` empty; the masked text is only reported as a hint
    Discard,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressConfig {
    #[serde(default)]
    pub parser: ParserConfig,

    /// Remote parse endpoint; absent means local parsing only
    #[serde(default)]
    pub remote: Option<RemoteParserConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(default)]
    pub masked_phone_policy: MaskedPhonePolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteParserConfig {
    #[serde(alias = "url")] // Accept both 'base_url' and 'url'
    pub base_url: String,

    #[serde(alias = "timeout", default = "default_remote_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_remote_enabled")]
    pub enabled: bool,
}

// Default functions
fn default_remote_timeout_secs() -> u64 {
    10
}

fn default_remote_enabled() -> bool {
    true
}

impl RemoteParserConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_remote_timeout_secs(),
            enabled: default_remote_enabled(),
        }
    }
}

impl AddressConfig {
    /// Load configuration from a JSON file, with environment overrides on top
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AddressError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Json))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| AddressError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| AddressError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AddressError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Remote endpoint settings, only when present and enabled
    pub fn active_remote(&self) -> Option<&RemoteParserConfig> {
        self.remote.as_ref().filter(|remote| remote.enabled)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let Some(remote) = self.active_remote() else {
            return Ok(());
        };

        if remote.base_url.trim().is_empty() {
            return Err(AddressError::Config(
                "Remote parser base_url is required when remote parsing is enabled".to_string(),
            ));
        }

        if !remote.base_url.starts_with("http://") && !remote.base_url.starts_with("https://") {
            return Err(AddressError::Config(format!(
                "Remote parser base_url must be an http(s) URL, got '{}'",
                remote.base_url
            )));
        }

        if remote.timeout_secs == 0 {
            return Err(AddressError::Config(
                "Remote parser timeout_secs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
