//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with `.env` support)
//! - API base URL resolution
//! - Configuration validation
//!
//! # Example
//!
//! ```
//! use evidence_research::config::{resolve_api_base, DEFAULT_API_BASE};
//!
//! assert_eq!(resolve_api_base(None), DEFAULT_API_BASE);
//! assert_eq!(resolve_api_base(Some("  ")), "/api");
//! assert_eq!(resolve_api_base(Some("https://evidence.test/api//")), "https://evidence.test/api");
//! ```

mod validation;

pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use crate::error::ConfigError;

/// Base used when no override is configured (same-origin `/api`).
pub const DEFAULT_API_BASE: &str = "/api";

/// Origin a relative base is resolved against.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:7071";

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Shape of log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    Text,
    /// One JSON object per record.
    Json,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. Unset or blank means [`LogFormat::Text`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for anything other than `text`
    /// or `json` (case-insensitive).
    pub fn parse(raw: Option<&str>) -> Result<Self, ConfigError> {
        let value = raw.map(str::trim).unwrap_or_default();
        if value.is_empty() || value.eq_ignore_ascii_case("text") {
            Ok(Self::Text)
        } else if value.eq_ignore_ascii_case("json") {
            Ok(Self::Json)
        } else {
            Err(ConfigError::InvalidValue {
                var: "LOG_FORMAT".into(),
                reason: format!("expected 'text' or 'json', got '{value}'"),
            })
        }
    }
}

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Resolved API base (absolute URL or path), trailing slashes removed.
    pub api_base: String,
    /// Origin used when `api_base` is a relative path.
    pub api_origin: String,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Log line format.
    pub log_format: LogFormat,
    /// Optional request timeout in milliseconds.
    pub request_timeout_ms: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `EVIDENCE_API_BASE_URL`: API base override (default: `/api`)
    /// - `EVIDENCE_API_ORIGIN`: Origin for a relative base (default: `http://localhost:7071`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `LOG_FORMAT`: `text` or `json` (default: `text`)
    /// - `REQUEST_TIMEOUT_MS`: Request timeout (default: none)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `REQUEST_TIMEOUT_MS` is not a positive
    /// integer, `LOG_FORMAT` is unknown, or any value fails validation
    /// (see [`validate_config`]).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let base_override = std::env::var("EVIDENCE_API_BASE_URL").ok();
        let api_base = resolve_api_base(base_override.as_deref());

        let api_origin = std::env::var("EVIDENCE_API_ORIGIN")
            .ok()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_API_ORIGIN.into());

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
        let log_format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref())?;

        let request_timeout_ms = parse_env_opt_u64("REQUEST_TIMEOUT_MS")?;

        let config = Self {
            api_base,
            api_origin,
            log_level,
            log_format,
            request_timeout_ms,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Absolute root every endpoint path is joined onto.
    #[must_use]
    pub fn api_root(&self) -> String {
        api_root(&self.api_origin, &self.api_base)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.into(),
            api_origin: DEFAULT_API_ORIGIN.into(),
            log_level: DEFAULT_LOG_LEVEL.into(),
            log_format: LogFormat::Text,
            request_timeout_ms: None,
        }
    }
}

/// Resolve the API base from an optional override.
///
/// A blank or missing override falls back to [`DEFAULT_API_BASE`]. Trailing
/// slashes are removed in a single pass.
#[must_use]
pub fn resolve_api_base(raw: Option<&str>) -> String {
    let effective = raw
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .unwrap_or(DEFAULT_API_BASE);
    effective.trim_end_matches('/').to_string()
}

/// Join a relative base onto an origin. Absolute bases are returned as-is.
#[must_use]
pub fn api_root(origin: &str, base: &str) -> String {
    if is_absolute_http(base) {
        return base.to_string();
    }
    let origin = origin.trim_end_matches('/');
    if base.is_empty() || base.starts_with('/') {
        format!("{origin}{base}")
    } else {
        format!("{origin}/{base}")
    }
}

/// True for `http://` and `https://` URLs.
#[must_use]
pub fn is_absolute_http(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Parse an optional environment variable as u64.
fn parse_env_opt_u64(name: &str) -> Result<Option<u64>, ConfigError> {
    std::env::var(name).map_or(Ok(None), |val| {
        val.trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var: name.into(),
                reason: "must be a positive integer".into(),
            })
    })
}
