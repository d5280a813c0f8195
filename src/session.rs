//! The session manager.
//!
//! [`Trakt`] holds the API key, user credentials and transport settings and
//! turns them into a configured [`Transport`]. The transport is built lazily
//! on the first resource access and cached together with the credentials it
//! was built from. Every setter that changes what goes into a request drops
//! the cached transport, and the cache is additionally checked against the
//! current credentials before reuse.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{ApiVersion, EnvConfig, Timeouts};
use crate::credentials::{BasicCredentials, Fingerprint};
use crate::error::{Result, TraktError};
use crate::models::Login;
use crate::resources::{Auth, Resource, ResourceHandle, ResourceName};
use crate::transport::{HttpBuilderHook, Transport, TransportSettings};

/// A trakt API session.
///
/// Create one per application and reuse it. Configure it with the chained
/// setters, then obtain typed resources with [`Trakt::resource`].
///
/// # Example
///
/// ```no_run
/// use chrono::NaiveDate;
/// use trakt::{Calendars, Trakt};
///
/// # async fn example() -> trakt::Result<()> {
/// let mut trakt = Trakt::v2();
/// trakt.set_api_key("your-api-key").set_debug(true);
/// trakt.set_login("sean", "password").await?;
///
/// let calendars = trakt.resource::<Calendars>()?;
/// let week = calendars
///     .shows(NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(), 7)
///     .await?;
/// println!("{} days with episodes", week.len());
/// # Ok(())
/// # }
/// ```
pub struct Trakt {
    version: ApiVersion,
    api_key: Option<String>,
    basic: Option<BasicCredentials>,
    username: Option<String>,
    token: Option<String>,
    debug: bool,
    timeouts: Timeouts,
    use_ssl: bool,
    base_url: Option<String>,
    http_builder: Option<HttpBuilderHook>,
    transport: Option<Arc<Transport>>,
}

impl fmt::Debug for Trakt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trakt")
            .field("version", &self.version)
            .field("base_url", &self.base_url())
            .field("username", &self.username)
            .field("token_set", &self.is_token_set())
            .field("debug", &self.debug)
            .field("built", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

impl Trakt {
    /// A session for `version` with nothing configured.
    pub fn new(version: ApiVersion) -> Self {
        Self {
            version,
            api_key: None,
            basic: None,
            username: None,
            token: None,
            debug: false,
            timeouts: Timeouts::default(),
            use_ssl: false,
            base_url: None,
            http_builder: None,
            transport: None,
        }
    }

    /// A session against the legacy v1 API.
    pub fn v1() -> Self {
        Self::new(ApiVersion::V1)
    }

    /// A session against the v2 API.
    pub fn v2() -> Self {
        Self::new(ApiVersion::V2)
    }

    /// Create a session from environment variables.
    ///
    /// See [`EnvConfig`] for the variables read.
    ///
    /// # Errors
    ///
    /// Returns an error if `TRAKT_API_KEY` is not set.
    pub fn from_env(version: ApiVersion) -> Result<Self> {
        let config = EnvConfig::from_env()?;
        let mut trakt = Self::new(version);
        trakt.set_api_key(config.api_key).set_debug(config.debug);
        if let Some(url) = config.base_url {
            trakt.set_base_url(url);
        }
        Ok(trakt)
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// The base URL the next transport will be built with.
    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| self.version.base_url(self.use_ssl))
    }

    /// Set the trakt API key for this application.
    pub fn set_api_key(&mut self, api_key: impl Into<String>) -> &mut Self {
        self.api_key = Some(api_key.into());
        self.invalidate("api key changed");
        self
    }

    /// Set Basic authentication credentials (v1).
    ///
    /// `password_digest` is the SHA1 hex digest of the user's password.
    pub fn set_credentials(
        &mut self,
        username: impl Into<String>,
        password_digest: impl Into<String>,
    ) -> &mut Self {
        self.basic = Some(BasicCredentials::new(username, password_digest));
        self.invalidate("credentials changed");
        self
    }

    /// Log in and store the returned user token (v2).
    ///
    /// Any previous token is discarded before the login request is sent, so
    /// the login itself goes out unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`TraktError::AuthenticationFailed`] if the request fails or
    /// the response carries no token. The session is then left without a
    /// token, its previous username and no cached transport.
    #[tracing::instrument(skip(self, password), fields(version = %self.version))]
    pub async fn set_login(&mut self, username: &str, password: &str) -> Result<&mut Self> {
        if self.version != ApiVersion::V2 {
            return Err(TraktError::AuthenticationFailed(
                "token login requires the v2 API".to_string(),
            ));
        }

        let previous_username = self.username.replace(username.to_string());
        self.token = None;
        self.invalidate("login started");

        let outcome = match self.resource::<Auth>() {
            Ok(auth) => auth.login(&Login::new(username, password)).await,
            Err(e) => Err(e),
        };

        // The login transport was built without a token; never reuse it.
        self.invalidate("login finished");

        let failure = match outcome {
            Ok(user_token) => match user_token.usable() {
                Some(token) => {
                    self.token = Some(token.to_string());
                    tracing::debug!("login succeeded");
                    return Ok(self);
                }
                None => "Could not login: no token in response".to_string(),
            },
            Err(e) => format!("Could not login: {e}"),
        };

        self.username = previous_username;
        tracing::warn!(reason = %failure, "login failed");
        Err(TraktError::AuthenticationFailed(failure))
    }

    /// Install a token obtained elsewhere, without a login round-trip (v2).
    pub fn set_token(&mut self, username: impl Into<String>, token: impl Into<String>) -> &mut Self {
        self.username = Some(username.into());
        self.token = Some(token.into());
        self.invalidate("token changed");
        self
    }

    /// Forget the username and token. Subsequent calls are unauthenticated.
    pub fn clear_login(&mut self) -> &mut Self {
        self.username = None;
        self.token = None;
        self.invalidate("login cleared");
        self
    }

    /// Whether a non-empty user token is held.
    pub fn is_token_set(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Log every request and response at `INFO` under the `trakt::http`
    /// target.
    ///
    /// Applied to the cached transport immediately; no rebuild happens.
    pub fn set_debug(&mut self, enabled: bool) -> &mut Self {
        self.debug = enabled;
        if let Some(transport) = &self.transport {
            transport.set_debug(enabled);
        }
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Set connect and read timeouts in milliseconds.
    pub fn set_timeouts(&mut self, connect_ms: u64, read_ms: u64) -> &mut Self {
        self.timeouts = Timeouts::from_millis(connect_ms, read_ms);
        self.invalidate("timeouts changed");
        self
    }

    /// Set the connect timeout only.
    pub fn set_connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeouts.connect = Some(timeout);
        self.invalidate("timeouts changed");
        self
    }

    /// Set the read timeout only.
    pub fn set_read_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.timeouts.read = Some(timeout);
        self.invalidate("timeouts changed");
        self
    }

    pub fn timeouts(&self) -> Timeouts {
        self.timeouts
    }

    /// Use the HTTPS endpoint for v1. Has no effect on v2.
    pub fn set_use_ssl(&mut self, use_ssl: bool) -> &mut Self {
        self.use_ssl = use_ssl;
        self.invalidate("endpoint changed");
        self
    }

    /// Send requests to `url` instead of the generation's public endpoint.
    pub fn set_base_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.base_url = Some(url.into());
        self.invalidate("endpoint changed");
        self
    }

    /// Start every transport from the `reqwest` builder `hook` returns, e.g.
    /// to set a proxy or an executor-specific connector.
    pub fn set_http_builder<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn() -> ClientBuilder + Send + Sync + 'static,
    {
        self.http_builder = Some(Arc::new(hook));
        self.invalidate("http builder changed");
        self
    }

    /// A typed resource binding.
    ///
    /// Builds the transport if none is cached or the cached one was built
    /// with other credentials. Performs no network I/O.
    ///
    /// The returned binding keeps the transport it was created with. After
    /// any setter that changes credentials or endpoint (`set_api_key`,
    /// `set_login`, `set_token`, `set_timeouts` and so on), fetch resources
    /// again; a binding held across the change still signs with the old
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`TraktError::UnsupportedResource`] if `R` belongs to the
    /// other API generation, or an error if the transport cannot be built.
    pub fn resource<R: Resource>(&mut self) -> Result<R> {
        self.handle(R::NAME).map(R::from_handle)
    }

    /// An untyped handle for any resource group.
    pub fn handle(&mut self, name: ResourceName) -> Result<ResourceHandle> {
        if !name.supports(self.version) {
            return Err(TraktError::UnsupportedResource {
                resource: name.as_str(),
                version: self.version,
            });
        }
        let transport = self.transport()?;
        Ok(ResourceHandle::new(name, transport))
    }

    /// The current transport, built on demand.
    pub fn transport(&mut self) -> Result<Arc<Transport>> {
        let fingerprint = self.fingerprint();

        if let Some(transport) = &self.transport {
            if transport.fingerprint() == &fingerprint {
                return Ok(Arc::clone(transport));
            }
            tracing::debug!("cached transport has stale credentials, rebuilding");
        }

        let base_url = self.base_url();
        let transport = Arc::new(Transport::build(TransportSettings {
            version: self.version,
            base_url: &base_url,
            fingerprint,
            timeouts: self.timeouts,
            debug: self.debug,
            builder: self.http_builder.as_ref(),
        })?);
        self.transport = Some(Arc::clone(&transport));
        Ok(transport)
    }

    /// The cached transport, if one is built.
    pub fn cached_transport(&self) -> Option<&Arc<Transport>> {
        self.transport.as_ref()
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint {
            api_key: self.api_key.clone(),
            basic: self.basic.clone(),
            username: self.username.clone(),
            token: self.token.clone(),
        }
    }

    fn invalidate(&mut self, reason: &'static str) {
        if self.transport.take().is_some() {
            tracing::debug!(reason, "dropped cached transport");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interceptor::{HEADER_TRAKT_API_KEY, HEADER_USER_TOKEN};
    use crate::resources::{Calendars, Genres};

    fn session() -> Trakt {
        let mut trakt = Trakt::v2();
        trakt.set_base_url("http://localhost:9");
        trakt
    }

    #[test]
    fn test_transport_is_reused_without_changes() {
        let mut trakt = session();
        trakt.set_api_key("abc");

        let first = trakt.handle(ResourceName::Calendars).unwrap();
        let second = trakt.handle(ResourceName::Calendars).unwrap();
        assert!(Arc::ptr_eq(first.transport(), second.transport()));

        let genres = trakt.resource::<Genres>();
        assert!(genres.is_ok());
    }

    #[test]
    fn test_api_key_change_rebuilds() {
        let mut trakt = session();
        trakt.set_api_key("abc");
        let before = trakt.transport().unwrap();

        trakt.set_api_key("def");
        assert!(trakt.cached_transport().is_none());

        let after = trakt.transport().unwrap();
        assert!(!Arc::ptr_eq(&before, &after));

        let (_, headers) = after.prepare("genres/movies").unwrap();
        assert_eq!(headers.get(HEADER_TRAKT_API_KEY).unwrap(), "def");
    }

    #[test]
    fn test_token_change_rebuilds_with_new_token() {
        let mut trakt = session();
        trakt.set_api_key("abc").set_token("sean", "tok1");
        let first = trakt.transport().unwrap();

        trakt.set_token("sean", "tok2");
        let second = trakt.transport().unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        let (_, headers) = second.prepare("sync/last_activities").unwrap();
        assert_eq!(headers.get(HEADER_USER_TOKEN).unwrap(), "tok2");
    }

    #[test]
    fn test_held_resource_keeps_its_transport() {
        let mut trakt = session();
        trakt.set_api_key("abc").set_token("sean", "tok1");
        let held = trakt.handle(ResourceName::Sync).unwrap();

        trakt.set_token("sean", "tok2");
        let fresh = trakt.handle(ResourceName::Sync).unwrap();

        let (_, old_headers) = held.transport().prepare("sync/last_activities").unwrap();
        let (_, new_headers) = fresh.transport().prepare("sync/last_activities").unwrap();
        assert_eq!(old_headers.get(HEADER_USER_TOKEN).unwrap(), "tok1");
        assert_eq!(new_headers.get(HEADER_USER_TOKEN).unwrap(), "tok2");
    }

    #[test]
    fn test_debug_toggles_in_place() {
        let mut trakt = session();
        trakt.set_api_key("abc").set_token("sean", "tok1");
        let built = trakt.transport().unwrap();

        trakt.set_debug(true);
        assert!(built.is_debug());
        trakt.set_debug(false);
        assert!(!built.is_debug());

        let again = trakt.transport().unwrap();
        assert!(Arc::ptr_eq(&built, &again));
        assert!(trakt.is_token_set());
    }

    #[test]
    fn test_timeouts_invalidate() {
        let mut trakt = session();
        trakt.transport().unwrap();
        trakt.set_timeouts(1000, 5000);
        assert!(trakt.cached_transport().is_none());
        assert_eq!(trakt.timeouts(), Timeouts::from_millis(1000, 5000));
    }

    #[test]
    fn test_clear_login() {
        let mut trakt = session();
        trakt.set_token("sean", "tok1");
        trakt.clear_login();
        assert!(!trakt.is_token_set());

        let transport = trakt.transport().unwrap();
        let (_, headers) = transport.prepare("calendars/shows").unwrap();
        assert!(headers.get(HEADER_USER_TOKEN).is_none());
    }

    #[test]
    fn test_wrong_generation_resource() {
        let mut trakt = Trakt::v1();
        let err = trakt.resource::<Calendars>().unwrap_err();
        assert!(matches!(
            err,
            TraktError::UnsupportedResource {
                resource: "calendars",
                version: ApiVersion::V1
            }
        ));
        // nothing was built for a rejected resource
        assert!(trakt.cached_transport().is_none());
    }

    #[test]
    fn test_v1_base_url_follows_ssl_flag() {
        let mut trakt = Trakt::v1();
        assert_eq!(trakt.base_url(), "http://api.trakt.tv");
        trakt.set_use_ssl(true);
        assert_eq!(trakt.base_url(), "https://api.trakt.tv");
    }

    #[tokio::test]
    async fn test_login_on_v1_fails_without_io() {
        let mut trakt = Trakt::v1();
        let err = trakt.set_login("sean", "pw").await.unwrap_err();
        assert!(matches!(err, TraktError::AuthenticationFailed(_)));
        assert!(trakt.cached_transport().is_none());
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let mut trakt = session();
        trakt.set_api_key("secret-key").set_token("sean", "secret-token");
        let debug = format!("{:?}", trakt);
        assert!(debug.contains("Trakt"));
        assert!(!debug.contains("secret-key"));
        assert!(!debug.contains("secret-token"));
    }
}
