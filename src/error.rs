//! Error types for trakt API operations.

use thiserror::Error;

use crate::config::ApiVersion;

/// Errors that can occur during trakt API operations.
#[derive(Debug, Error)]
pub enum TraktError {
    /// Configuration is missing or incomplete.
    #[error("trakt configuration required: {0}")]
    ConfigMissing(String),

    /// The login round-trip failed or did not yield a usable token.
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The service rejected the request with 401 Unauthorized or 403 Forbidden.
    ///
    /// The token is missing, invalid or revoked; log in again.
    #[error("a valid access token must be provided (HTTP {status})")]
    AuthenticationRequired { status: u16 },

    /// No resource group has this name.
    #[error("unknown resource group '{0}'")]
    UnknownResource(String),

    /// The resource group does not exist in this API generation.
    #[error("resource '{resource}' is not available in API {version}")]
    UnsupportedResource {
        resource: &'static str,
        version: ApiVersion,
    },

    /// API request failed.
    #[error("trakt API error: {message}")]
    ApiError {
        message: String,
        status_code: Option<u16>,
    },

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A credential contains characters that cannot be sent in a header.
    #[error("Invalid value for header '{0}'")]
    InvalidHeader(&'static str),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),

    /// Rate limited.
    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

impl TraktError {
    /// Whether the caller should log in again before retrying.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, TraktError::AuthenticationRequired { .. })
    }
}

/// Result type alias for trakt operations.
pub type Result<T> = core::result::Result<T, TraktError>;
