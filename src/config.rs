//! API generation constants and session configuration.

use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{Result, TraktError};

/// trakt v1 host. The scheme is chosen by [`ApiVersion::base_url`].
const V1_HOST: &str = "api.trakt.tv";

/// trakt v2 API URL.
pub const V2_API_URL: &str = "https://api-v2launch.trakt.tv";

/// trakt website, used for building links to items.
pub const SITE_URL: &str = "https://trakt.tv";

pub(crate) const USER_AGENT: &str = concat!("trakt-rs/", env!("CARGO_PKG_VERSION"));

/// The API generation a session talks to.
///
/// The two generations differ in where the API key goes (path vs. header)
/// and in how the user is authenticated (Basic auth vs. login token).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// Legacy API: key in the URL path, SHA1 password digest as Basic auth.
    V1,
    /// Current API: key and user token as headers.
    V2,
}

impl ApiVersion {
    /// Base URL for this generation.
    ///
    /// `use_ssl` only matters for v1; v2 is always served over HTTPS.
    pub fn base_url(self, use_ssl: bool) -> String {
        match self {
            ApiVersion::V1 if use_ssl => format!("https://{V1_HOST}"),
            ApiVersion::V1 => format!("http://{V1_HOST}"),
            ApiVersion::V2 => V2_API_URL.to_string(),
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiVersion::V1 => f.write_str("v1"),
            ApiVersion::V2 => f.write_str("v2"),
        }
    }
}

/// Connect and read timeouts applied when the transport is built.
///
/// `None` leaves the corresponding `reqwest` default in place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timeouts {
    pub connect: Option<Duration>,
    pub read: Option<Duration>,
}

impl Timeouts {
    /// Timeouts from millisecond values.
    pub fn from_millis(connect_ms: u64, read_ms: u64) -> Self {
        Self {
            connect: Some(Duration::from_millis(connect_ms)),
            read: Some(Duration::from_millis(read_ms)),
        }
    }
}

/// Settings read from the process environment.
///
/// - `TRAKT_API_KEY` (required)
/// - `TRAKT_API_URL` (optional) overrides the generation's base URL
/// - `TRAKT_DEBUG` (optional) enables request logging when `1` or `true`
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub debug: bool,
}

impl EnvConfig {
    /// Read the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TraktError::ConfigMissing`] if `TRAKT_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("TRAKT_API_KEY").map_err(|_| {
            TraktError::ConfigMissing("TRAKT_API_KEY environment variable not set".to_string())
        })?;
        let base_url = env::var("TRAKT_API_URL").ok().filter(|u| !u.is_empty());
        let debug = env::var("TRAKT_DEBUG")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            base_url,
            debug,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(ApiVersion::V1.base_url(false), "http://api.trakt.tv");
        assert_eq!(ApiVersion::V1.base_url(true), "https://api.trakt.tv");
        assert_eq!(ApiVersion::V2.base_url(false), V2_API_URL);
        assert_eq!(ApiVersion::V2.base_url(true), V2_API_URL);
    }

    #[test]
    fn test_timeouts_from_millis() {
        let t = Timeouts::from_millis(1500, 30_000);
        assert_eq!(t.connect, Some(Duration::from_millis(1500)));
        assert_eq!(t.read, Some(Duration::from_secs(30)));
        assert_eq!(Timeouts::default().connect, None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
    }
}
