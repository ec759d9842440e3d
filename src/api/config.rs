//! Evidence client configuration.

use crate::config::{Config, DEFAULT_API_BASE, DEFAULT_API_ORIGIN};

/// Client configuration for the evidence backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute root every endpoint path is joined onto.
    pub api_root: String,
    /// Optional request timeout in milliseconds. Unset means the HTTP
    /// client's own behavior.
    pub timeout_ms: Option<u64>,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root. Trailing slashes are removed.
    #[must_use]
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into().trim_end_matches('/').to_string();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_root: crate::config::api_root(DEFAULT_API_ORIGIN, DEFAULT_API_BASE),
            timeout_ms: None,
        }
    }
}

impl From<&Config> for ClientConfig {
    fn from(config: &Config) -> Self {
        Self {
            api_root: config.api_root(),
            timeout_ms: config.request_timeout_ms,
        }
    }
}
