//! Configured HTTP+JSON transport.
//!
//! A [`Transport`] is built by the session from a snapshot of its settings
//! and never changes afterwards, except for the debug flag. Every request
//! passes through the request interceptor and every failed response through
//! the error translator.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{ApiVersion, Timeouts, USER_AGENT};
use crate::credentials::Fingerprint;
use crate::error::{Result, TraktError};
use crate::interceptor::{self, OutgoingRequest, RequestInterceptor};

/// Factory for the `reqwest` builder the transport starts from.
///
/// Install one with [`Trakt::set_http_builder`](crate::Trakt::set_http_builder)
/// to supply proxies, custom TLS roots and the like.
pub type HttpBuilderHook = Arc<dyn Fn() -> ClientBuilder + Send + Sync>;

/// Everything a transport is built from.
pub(crate) struct TransportSettings<'a> {
    pub version: ApiVersion,
    pub base_url: &'a str,
    pub fingerprint: Fingerprint,
    pub timeouts: Timeouts,
    pub debug: bool,
    pub builder: Option<&'a HttpBuilderHook>,
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl ApiResponse {
    /// Deserialize the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// A response header parsed as a number.
    pub fn header_u64(&self, name: &str) -> Option<u64> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse().ok())
    }
}

/// The built HTTP client, bound to one set of credentials.
pub struct Transport {
    http: Client,
    base_url: Url,
    version: ApiVersion,
    interceptor: Box<dyn RequestInterceptor>,
    fingerprint: Fingerprint,
    debug: AtomicBool,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("version", &self.version)
            .field("debug", &self.is_debug())
            .finish_non_exhaustive()
    }
}

impl Transport {
    pub(crate) fn build(settings: TransportSettings<'_>) -> Result<Self> {
        // Ensure base URL ends with / so relative paths join beneath it
        let base_url_str = if settings.base_url.ends_with('/') {
            settings.base_url.to_string()
        } else {
            format!("{}/", settings.base_url)
        };
        let base_url = Url::parse(&base_url_str)?;

        let mut builder = match settings.builder {
            Some(hook) => hook(),
            None => Client::builder(),
        };
        builder = builder
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true);
        if let Some(connect) = settings.timeouts.connect {
            builder = builder.connect_timeout(connect);
        }
        if let Some(read) = settings.timeouts.read {
            builder = builder.read_timeout(read);
        }
        let http = builder.build().map_err(TraktError::HttpError)?;

        tracing::debug!(
            version = %settings.version,
            base_url = %base_url,
            authenticated = settings.fingerprint.has_token() || settings.fingerprint.basic.is_some(),
            "built transport"
        );

        Ok(Self {
            http,
            base_url,
            version: settings.version,
            interceptor: interceptor::for_version(settings.version, settings.fingerprint.clone()),
            fingerprint: settings.fingerprint,
            debug: AtomicBool::new(settings.debug),
        })
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// API generation this transport speaks.
    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// Credentials this transport signs requests with.
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Switch full request/response logging on or off.
    pub fn set_debug(&self, enabled: bool) {
        self.debug.store(enabled, Ordering::Relaxed);
    }

    pub fn is_debug(&self) -> bool {
        self.debug.load(Ordering::Relaxed)
    }

    /// Apply the interceptor to `path` and return the final URL and headers.
    pub fn prepare(&self, path: &str) -> Result<(Url, HeaderMap)> {
        let mut request = OutgoingRequest::new(path.trim_start_matches('/'));
        self.interceptor.intercept(&mut request)?;
        let url = self.base_url.join(&request.path)?;
        Ok((url, request.headers))
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self), fields(version = %self.version))]
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send::<(), ()>(Method::GET, path, None, None).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query), fields(version = %self.version))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse> {
        self.send::<Q, ()>(Method::GET, path, Some(query), None).await
    }

    /// Make a POST request with JSON body.
    #[tracing::instrument(skip(self, body), fields(version = %self.version))]
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ApiResponse> {
        self.send::<(), B>(Method::POST, path, None, Some(body)).await
    }

    /// Make a DELETE request.
    #[tracing::instrument(skip(self), fields(version = %self.version))]
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.send::<(), ()>(Method::DELETE, path, None, None).await
    }

    async fn send<Q: Serialize + ?Sized, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<ApiResponse> {
        let (url, headers) = self.prepare(path)?;
        let debug = self.is_debug();

        let mut request = self.http.request(method, url.clone()).headers(headers);
        if let Some(query) = query {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let request = request.build().map_err(TraktError::HttpError)?;

        if debug {
            log_request(&request);
        }

        let started = Instant::now();
        let response = self
            .http
            .execute(request)
            .await
            .map_err(TraktError::HttpError)?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await.map_err(TraktError::HttpError)?;

        if debug {
            tracing::info!(
                target: "trakt::http",
                "<--- {} {} ({}ms)\n{}",
                status.as_u16(),
                url,
                started.elapsed().as_millis(),
                redact_body(&body)
            );
        }

        let response = ApiResponse {
            status,
            headers,
            body,
        };
        check_response(response)
    }
}

fn log_request(request: &reqwest::Request) {
    let mut lines = vec![format!("---> {} {}", request.method(), request.url())];
    for (name, value) in request.headers() {
        lines.push(format!("{}: {}", name, redact(name.as_str(), value.to_str().unwrap_or("<binary>"))));
    }
    if let Some(body) = request.body().and_then(|b| b.as_bytes()) {
        lines.push(redact_body(&String::from_utf8_lossy(body)));
    }
    tracing::info!(target: "trakt::http", "{}", lines.join("\n"));
}

fn redact<'a>(name: &str, value: &'a str) -> &'a str {
    match name {
        "authorization" | interceptor::HEADER_USER_TOKEN | interceptor::HEADER_TRAKT_API_KEY => {
            "<redacted>"
        }
        _ => value,
    }
}

/// JSON body fields that carry secrets: the login password and issued tokens.
const SECRET_FIELDS: [&str; 3] = ["password", "token", "access_token"];

/// A body for logging, with secret fields masked at any depth.
///
/// Bodies that are not JSON are logged as they are.
fn redact_body(body: &str) -> String {
    let Ok(mut json) = serde_json::from_str::<serde_json::Value>(body) else {
        return body.to_string();
    };
    mask_secrets(&mut json);
    json.to_string()
}

fn mask_secrets(value: &mut serde_json::Value) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if SECRET_FIELDS.contains(&key.as_str()) {
                    *field = serde_json::Value::String("<redacted>".to_string());
                } else {
                    mask_secrets(field);
                }
            }
        }
        serde_json::Value::Array(items) => items.iter_mut().for_each(mask_secrets),
        _ => {}
    }
}

/// Check response status and convert errors.
fn check_response(response: ApiResponse) -> Result<ApiResponse> {
    if response.status.is_success() {
        return Ok(response);
    }
    Err(translate_error(&response))
}

/// Map a failed response to the error callers act on.
///
/// 401 and 403 mean the user token is missing or no longer valid and are
/// kept apart from every other failure.
pub fn translate_error(response: &ApiResponse) -> TraktError {
    let status = response.status;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return TraktError::AuthenticationRequired {
            status: status.as_u16(),
        };
    }

    // Handle rate limiting
    if status == StatusCode::TOO_MANY_REQUESTS {
        return TraktError::RateLimited {
            retry_after_secs: response.header_u64("retry-after"),
        };
    }

    TraktError::ApiError {
        message: extract_error_message(&response.body, status),
        status_code: Some(status.as_u16()),
    }
}

/// Extract error message from a failed response.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    if body.trim().is_empty() {
        return format!("HTTP {status}");
    }

    // Try to parse as JSON and extract message field
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
            return msg.to_string();
        }
        if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
            return err.to_string();
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::HEADER_TRAKT_API_KEY;

    fn settings(base_url: &str) -> TransportSettings<'_> {
        TransportSettings {
            version: ApiVersion::V2,
            base_url,
            fingerprint: Fingerprint {
                api_key: Some("test-key".into()),
                ..Default::default()
            },
            timeouts: Timeouts::default(),
            debug: false,
            builder: None,
        }
    }

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status: StatusCode::from_u16(status).unwrap(),
            headers: HeaderMap::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_transport_debug_hides_credentials() {
        let transport = Transport::build(settings("https://api-v2launch.trakt.tv")).unwrap();
        let debug = format!("{:?}", transport);
        assert!(debug.contains("Transport"));
        assert!(debug.contains("base_url"));
        assert!(!debug.contains("test-key"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let a = Transport::build(settings("https://api-v2launch.trakt.tv")).unwrap();
        let b = Transport::build(settings("https://api-v2launch.trakt.tv/")).unwrap();
        assert_eq!(a.base_url().as_str(), b.base_url().as_str());
    }

    #[test]
    fn test_prepare_joins_path_and_applies_headers() {
        let transport = Transport::build(settings("http://localhost:1234/api")).unwrap();
        let (url, headers) = transport.prepare("/movies/popular").unwrap();
        assert_eq!(url.as_str(), "http://localhost:1234/api/movies/popular");
        assert_eq!(headers.get(HEADER_TRAKT_API_KEY).unwrap(), "test-key");
    }

    #[test]
    fn test_debug_flag_is_mutable_in_place() {
        let transport = Transport::build(settings("https://api-v2launch.trakt.tv")).unwrap();
        assert!(!transport.is_debug());
        transport.set_debug(true);
        assert!(transport.is_debug());
        transport.set_debug(false);
        assert!(!transport.is_debug());
    }

    #[test]
    fn test_translate_unauthorized_and_forbidden() {
        for status in [401, 403] {
            let err = translate_error(&response(status, ""));
            assert!(err.is_auth_required(), "{status} should require auth");
        }
    }

    #[test]
    fn test_translate_rate_limit() {
        let mut r = response(429, "");
        r.headers.insert("retry-after", "30".parse().unwrap());
        assert!(matches!(
            translate_error(&r),
            TraktError::RateLimited {
                retry_after_secs: Some(30)
            }
        ));
    }

    #[test]
    fn test_translate_generic_error_extracts_message() {
        let err = translate_error(&response(404, r#"{"error":"not found"}"#));
        match err {
            TraktError::ApiError {
                message,
                status_code,
            } => {
                assert_eq!(message, "not found");
                assert_eq!(status_code, Some(404));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = translate_error(&response(500, ""));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn test_redact_hides_secrets() {
        assert_eq!(redact("authorization", "Basic abc"), "<redacted>");
        assert_eq!(redact(HEADER_TRAKT_API_KEY, "abc"), "<redacted>");
        assert_eq!(redact("content-type", "application/json"), "application/json");
    }

    #[test]
    fn test_redact_body_masks_login_secrets() {
        let request = redact_body(r#"{"login":"sean","password":"hunter2"}"#);
        assert!(!request.contains("hunter2"));
        assert!(request.contains("sean"));

        let response = redact_body(r#"{"token":"abc123"}"#);
        assert!(!response.contains("abc123"));
        assert!(response.contains("<redacted>"));

        let nested = redact_body(r#"[{"user":{"token":"abc123"}}]"#);
        assert!(!nested.contains("abc123"));

        assert_eq!(redact_body("not json"), "not json");
        assert_eq!(redact_body(""), "");
    }
}
