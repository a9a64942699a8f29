//! Configuration types for the wordbook system
//!
//! This module defines all configuration structures used throughout the crate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default base URL of the Maimemo open API
pub const DEFAULT_API_BASE: &str = "https://open.maimemo.com/open/api/v1";

/// Default attribution tag sent to the vocabulary endpoint
pub const DEFAULT_SOURCE: &str = "wordbook";

/// Default HTTP timeout handed to the transport adapter (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors raised by the config gate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The open API token is empty or absent
    #[error("open API token is not set; fill it in before collecting words")]
    MissingToken,

    /// The target notebook id is empty or absent
    #[error("target cloud notebook id is not set; fill it in before collecting words")]
    MissingNotebook,

    /// An ambient setting is out of range or malformed
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Credentials for the remote notebook service
///
/// Immutable for the duration of one operation. Only presence is validated;
/// format and expiry are left to the remote service.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Open API token, with or without the `Bearer ` prefix
    pub auth_token: String,

    /// Id of the cloud notebook (notepad) words are appended to
    pub notebook_id: String,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("auth_token", &"<REDACTED>")
            .field("notebook_id", &self.notebook_id)
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a token and a notebook id
    pub fn new(auth_token: impl Into<String>, notebook_id: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            notebook_id: notebook_id.into(),
        }
    }

    /// Validate presence of both credentials
    ///
    /// Evaluated before any network access. The token is checked first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth_token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if self.notebook_id.is_empty() {
            return Err(ConfigError::MissingNotebook);
        }
        Ok(())
    }
}

/// Which remote API shape to collect through
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    /// Free-text notepad document, fetch/merge/submit round trip
    #[default]
    Notepad,

    /// Structured vocabulary endpoint, one word per call
    Vocabulary,
}

/// Configuration for one collect operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectConfig {
    /// Remote service credentials
    pub credentials: Credentials,

    /// Base URL of the remote open API
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Remote API shape to use
    #[serde(default)]
    pub api: ApiKind,

    /// Attribution tag sent with vocabulary-endpoint calls
    #[serde(default = "default_source")]
    pub source: String,

    /// HTTP timeout for the transport adapter, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CollectConfig {
    /// Create a configuration with defaults for everything but credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            api_base: default_api_base(),
            api: ApiKind::default(),
            source: default_source(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.credentials.validate()?;

        if self.api_base.is_empty() {
            return Err(ConfigError::Invalid("API base URL cannot be empty".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid("timeout must be > 0 seconds".into()));
        }

        Ok(())
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
