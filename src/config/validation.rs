//! Configuration validation.
//!
//! Ensures the origin and base are usable URLs and that an optional
//! timeout is within acceptable bounds.

use super::{is_absolute_http, Config};
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `EVIDENCE_API_ORIGIN` is not an `http(s)://` URL with a host
/// - `EVIDENCE_API_BASE_URL` is absolute but has no host
/// - `REQUEST_TIMEOUT_MS` is set outside 1000..=300000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if !is_absolute_http(&config.api_origin) || host_of(&config.api_origin).is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "EVIDENCE_API_ORIGIN".into(),
            reason: "must be an http:// or https:// URL".into(),
        });
    }

    if is_absolute_http(&config.api_base) && host_of(&config.api_base).is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "EVIDENCE_API_BASE_URL".into(),
            reason: "absolute base must include a host".into(),
        });
    }

    if let Some(timeout) = config.request_timeout_ms {
        if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout) {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT_MS".into(),
                reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
            });
        }
    }

    Ok(())
}

/// Host portion of an absolute http(s) URL (empty when missing).
fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or("", |(_, rest)| rest);
    rest.split(['/', '?', '#']).next().unwrap_or_default()
}
