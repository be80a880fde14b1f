//! Client error types

use thiserror::Error;

/// Message shown when a failed response carries no usable `detail`
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

/// Client error types
///
/// The HTTP variants display as the bare server message so the UI can show
/// them verbatim.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not match the expected schema
    #[error("Unexpected response: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Server answered 401
    #[error("{0}")]
    AuthenticationFailed(String),

    /// Server answered 403, e.g. out of credits
    #[error("{0}")]
    Forbidden(String),

    /// Server answered with any other non-success status
    #[error("{message}")]
    ServerError { status: u16, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of the failed response; `None` for network, decoding and
    /// configuration failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the session token was rejected and the user must log in again
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}
