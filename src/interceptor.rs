//! Per-request credential decoration.
//!
//! Every outgoing request passes through a [`RequestInterceptor`] before it
//! is handed to `reqwest`. The interceptor is built from a read-only
//! [`Fingerprint`], so a transport can only ever sign with the credentials
//! it was built for.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::config::ApiVersion;
use crate::credentials::Fingerprint;
use crate::error::{Result, TraktError};

pub const HEADER_USER_TOKEN: &str = "trakt-user-token";
pub const HEADER_USER_LOGIN: &str = "trakt-user-login";
pub const HEADER_TRAKT_API_KEY: &str = "trakt-api-key";
pub const HEADER_TRAKT_API_VERSION: &str = "trakt-api-version";
pub const TRAKT_API_VERSION_2: &str = "2";
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// v1 path parameter that receives the API key.
pub const PARAM_API_KEY: &str = "apikey";

/// A request under construction: a path relative to the base URL plus the
/// headers to send with it.
#[derive(Debug, Clone, Default)]
pub struct OutgoingRequest {
    pub path: String,
    pub headers: HeaderMap,
}

impl OutgoingRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }

    /// Set a header, replacing any previous value.
    pub fn add_header(&mut self, name: &'static str, value: &str) -> Result<()> {
        let value = HeaderValue::from_str(value).map_err(|_| TraktError::InvalidHeader(name))?;
        self.headers.insert(HeaderName::from_static(name), value);
        Ok(())
    }

    /// Replace every `{name}` segment in the path with the URL-encoded value.
    pub fn add_path_param(&mut self, name: &str, value: &str) {
        let placeholder = format!("{{{name}}}");
        let encoded = urlencoding::encode(value);
        self.path = self.path.replace(&placeholder, &encoded);
    }

    /// Header value as a string, for inspection.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Decorates outgoing requests with credentials and fixed headers.
pub trait RequestInterceptor: Send + Sync + std::fmt::Debug {
    fn intercept(&self, request: &mut OutgoingRequest) -> Result<()>;
}

/// Build the interceptor for an API generation from a credential snapshot.
pub fn for_version(version: ApiVersion, fingerprint: Fingerprint) -> Box<dyn RequestInterceptor> {
    match version {
        ApiVersion::V1 => Box::new(V1Interceptor { fingerprint }),
        ApiVersion::V2 => Box::new(V2Interceptor { fingerprint }),
    }
}

/// v1: API key as the `{apikey}` path segment, Basic auth when credentials
/// are set.
#[derive(Debug)]
pub struct V1Interceptor {
    fingerprint: Fingerprint,
}

impl RequestInterceptor for V1Interceptor {
    fn intercept(&self, request: &mut OutgoingRequest) -> Result<()> {
        let key = self.fingerprint.api_key.as_deref().unwrap_or_default();
        request.add_path_param(PARAM_API_KEY, key);

        if let Some(basic) = &self.fingerprint.basic {
            let value = HeaderValue::from_str(&basic.header_value())
                .map_err(|_| TraktError::InvalidHeader("authorization"))?;
            request.headers.insert(AUTHORIZATION, value);
        }
        Ok(())
    }
}

/// v2: user token and login, content type, API key and version headers.
#[derive(Debug)]
pub struct V2Interceptor {
    fingerprint: Fingerprint,
}

impl RequestInterceptor for V2Interceptor {
    fn intercept(&self, request: &mut OutgoingRequest) -> Result<()> {
        if let Some(token) = self.fingerprint.token() {
            request.add_header(HEADER_USER_TOKEN, token)?;
        }
        if let Some(username) = self.fingerprint.username() {
            request.add_header(HEADER_USER_LOGIN, username)?;
        }
        request
            .headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE_JSON));
        if let Some(key) = self.fingerprint.api_key.as_deref() {
            request.add_header(HEADER_TRAKT_API_KEY, key)?;
        }
        request.add_header(HEADER_TRAKT_API_VERSION, TRAKT_API_VERSION_2)?;
        Ok(())
    }
}
