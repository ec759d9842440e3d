//! Error types for the evidence research client.
//!
//! This module defines:
//! - [`AppError`]: Top-level errors returned by the binary
//! - [`ApiError`]: The single failure kind raised by the transport layer
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use serde::Deserialize;
use thiserror::Error;

pub use crate::cli::CommandParseError;

/// Top-level application error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Evidence API error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command line could not be parsed.
    #[error("Command error: {0}")]
    Command(#[from] CommandParseError),

    /// Input supplied to a command was unreadable.
    #[error("Invalid input: {message}")]
    Input {
        /// Description of what was wrong with the input.
        message: String,
    },

    /// A result could not be rendered.
    #[error("Output error: {message}")]
    Output {
        /// Description of the rendering failure.
        message: String,
    },
}

/// Where a round trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// The request could not be built or encoded; nothing was sent.
    Request,
    /// The request was sent but no response arrived.
    Network,
    /// The backend answered with a non-success status.
    Response,
    /// A success response whose body did not decode.
    Decode,
}

/// Failure of a single round trip to the evidence backend.
///
/// Request and network failures carry no status. Backend failures carry the HTTP status
/// and the raw (possibly empty) response body so callers can branch on the
/// status category without re-parsing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// HTTP status, absent when the request never completed.
    pub status: Option<u16>,
    /// Raw response body.
    pub body: String,
    /// Failure stage.
    pub kind: ApiErrorKind,
}

/// Shape of an error body the backend may return.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ApiError {
    /// A request that could not be built or encoded locally.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: String::new(),
            kind: ApiErrorKind::Request,
        }
    }

    /// A request that never produced a response.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: String::new(),
            kind: ApiErrorKind::Network,
        }
    }

    /// A non-success response. The message is extracted from the body.
    #[must_use]
    pub fn from_response(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self {
            message: extract_error_message(status, &body),
            status: Some(status),
            body,
            kind: ApiErrorKind::Response,
        }
    }

    /// A success response whose body did not decode.
    #[must_use]
    pub fn decode(status: u16, error: &serde_json::Error, body: impl Into<String>) -> Self {
        Self {
            message: format!("Failed to parse response: {error}"),
            status: Some(status),
            body: body.into(),
            kind: ApiErrorKind::Decode,
        }
    }

    /// True when the request was sent but never completed.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self.kind, ApiErrorKind::Network)
    }

    /// True for a 4xx status.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self.status, Some(400..=499))
    }

    /// True for a 5xx status.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self.status, Some(500..=599))
    }
}

/// Pull a readable message out of an error body.
///
/// A non-empty `error` field wins over `message`. Anything else degrades to
/// a generic status-coded message; this never fails.
#[must_use]
pub fn extract_error_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .filter(|e| !e.trim().is_empty())
        .or_else(|| parsed.message.filter(|m| !m.trim().is_empty()))
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;
    use test_case::test_case;

    assert_impl_all!(AppError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ApiError: Send, Sync, std::error::Error, Clone);
    assert_impl_all!(ConfigError: Send, Sync, std::error::Error, Clone);

    #[test]
    fn test_error_field_wins_over_message() {
        let err = ApiError::from_response(400, r#"{"error":"bad thesis","message":"ignored"}"#);
        assert_eq!(err.message, "bad thesis");
        assert_eq!(err.status, Some(400));
        assert_eq!(err.body, r#"{"error":"bad thesis","message":"ignored"}"#);
    }

    #[test]
    fn test_message_field_used_when_error_absent() {
        let err = ApiError::from_response(503, r#"{"message":"upstream down"}"#);
        assert_eq!(err.message, "upstream down");
    }

    #[test_case("" ; "empty body")]
    #[test_case("<html>oops</html>" ; "invalid json")]
    #[test_case("[1, 2]" ; "json array")]
    #[test_case("\"boom\"" ; "json string")]
    #[test_case("{}" ; "object without fields")]
    #[test_case(r#"{"error": 42}"# ; "non string error")]
    #[test_case(r#"{"error": "  ", "message": ""}"# ; "blank fields")]
    fn test_unusable_body_falls_back_to_status(body: &str) {
        let err = ApiError::from_response(502, body);
        assert_eq!(err.message, "Request failed with status 502");
        assert_eq!(err.status, Some(502));
        assert_eq!(err.body, body);
    }

    #[test]
    fn test_network_error_has_no_status() {
        let err = ApiError::network("connection refused");
        assert!(err.is_network());
        assert!(!err.is_client_error());
        assert!(!err.is_server_error());
        assert!(err.body.is_empty());
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_request_error_is_not_network() {
        let err = ApiError::request("Failed to serialize request: key must be a string");
        assert_eq!(err.kind, ApiErrorKind::Request);
        assert!(!err.is_network());
        assert!(err.status.is_none());
        assert!(err.body.is_empty());
    }

    #[test]
    fn test_constructors_record_kind() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(ApiError::network("x").kind, ApiErrorKind::Network);
        assert_eq!(ApiError::from_response(500, "").kind, ApiErrorKind::Response);
        assert_eq!(ApiError::decode(200, &json_err, "{").kind, ApiErrorKind::Decode);
    }

    #[test_case(404, true, false ; "not found")]
    #[test_case(422, true, false ; "unprocessable")]
    #[test_case(500, false, true ; "internal")]
    #[test_case(599, false, true ; "upper server bound")]
    #[test_case(302, false, false ; "redirect")]
    fn test_status_categories(status: u16, client: bool, server: bool) {
        let err = ApiError::from_response(status, "");
        assert_eq!(err.is_client_error(), client);
        assert_eq!(err.is_server_error(), server);
        assert!(!err.is_network());
    }

    #[test]
    fn test_decode_error_keeps_body() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ApiError::decode(200, &json_err, "{");
        assert!(err.message.starts_with("Failed to parse response:"));
        assert_eq!(err.status, Some(200));
        assert_eq!(err.body, "{");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Api(ApiError::network("timed out"));
        assert_eq!(err.to_string(), "API error: timed out");

        let err = AppError::Config(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".to_string(),
            reason: "must be a positive integer".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for REQUEST_TIMEOUT_MS: must be a positive integer"
        );

        let err = AppError::Input {
            message: "missing file".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid input: missing file");

        let err = AppError::Output {
            message: "bad float".to_string(),
        };
        assert_eq!(err.to_string(), "Output error: bad float");
    }

    #[test]
    fn test_app_error_from_conversions() {
        let app_err: AppError = ApiError::network("x").into();
        assert!(matches!(app_err, AppError::Api(_)));

        let app_err: AppError = ConfigError::MissingRequired {
            var: "TEST".to_string(),
        }
        .into();
        assert!(matches!(app_err, AppError::Config(_)));

        let app_err: AppError = CommandParseError::MissingCommand.into();
        assert!(matches!(app_err, AppError::Command(_)));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingRequired {
            var: "EVIDENCE_API_ORIGIN".to_string(),
        };
        assert_eq!(err.to_string(), "Missing required: EVIDENCE_API_ORIGIN");
    }
}
