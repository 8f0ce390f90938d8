//! Cloudlink client error types

use thiserror::Error;

/// Cloudlink client errors
///
/// `Transport` carries the underlying `reqwest::Error` unwrapped, so callers
/// can tell "the service ran and said no" (`ApiError`) apart from "the
/// service was unreachable".
#[derive(Error, Debug)]
pub enum CloudlinkError {
    /// Configuration was rejected at client construction
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The service answered the request with `status: false`
    #[error("API error: {0}")]
    ApiError(String),

    /// Connection-level failure before a response was obtained
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not a valid JSON envelope
    #[error("Malformed response from server: {0}")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config file error: {0}")]
    ConfigFile(#[from] cloudlink_config::ConfigError),
}

pub type Result<T> = std::result::Result<T, CloudlinkError>;
