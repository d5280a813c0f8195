//! trakt.tv API client library.
//!
//! A Rust library for the trakt.tv media-tracking service, covering the
//! legacy v1 API and the v2 API. A [`Trakt`] session holds the API key and
//! user credentials and lazily builds the HTTP transport; typed resource
//! bindings are obtained from it with [`Trakt::resource`].
//!
//! # Quick Start
//!
//! ```no_run
//! use trakt::{Extended, SyncResource, Trakt};
//!
//! #[tokio::main]
//! async fn main() -> trakt::Result<()> {
//!     let mut trakt = Trakt::v2();
//!     trakt.set_api_key("your-api-key");
//!     trakt.set_login("sean", "password").await?;
//!
//!     let sync = trakt.resource::<SyncResource>()?;
//!     let movies = sync.collection_movies(Extended::Min).await?;
//!     println!("{} movies collected", movies.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Credentials and the transport
//!
//! The transport is built on first use and reused until a setter changes
//! something that goes into a request: API key, credentials, token,
//! timeouts or endpoint. The next resource access then builds a fresh one,
//! so a request is never signed with stale credentials. [`Trakt::set_debug`]
//! is the exception and is applied to the built transport in place.
//!
//! A 401 or 403 from the service surfaces as
//! [`TraktError::AuthenticationRequired`]; log in again and retry.
//!
//! # Configuration
//!
//! [`Trakt::from_env`] reads:
//!
//! - `TRAKT_API_KEY` (required) - Your trakt API key
//! - `TRAKT_API_URL` (optional) - Base URL override
//! - `TRAKT_DEBUG` (optional) - Log requests and responses when `1` or `true`

mod config;
mod credentials;
mod error;
mod interceptor;
mod models;
mod pagination;
mod resources;
mod session;
mod transport;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use config::{ApiVersion, EnvConfig, Timeouts, SITE_URL, V2_API_URL};
pub use credentials::{basic_auth_header, BasicCredentials, Fingerprint};
pub use error::{Result, TraktError};
pub use interceptor::{
    OutgoingRequest, RequestInterceptor, HEADER_TRAKT_API_KEY, HEADER_TRAKT_API_VERSION,
    HEADER_USER_LOGIN, HEADER_USER_TOKEN,
};
pub use pagination::{Page, PaginationParams};
pub use session::Trakt;
pub use transport::{translate_error, ApiResponse, HttpBuilderHook, Transport};

// Re-export resources
pub use resources::v1;
pub use resources::{
    Auth, Calendars, Genres, Movies, Recommendations, Resource, ResourceHandle, ResourceName,
    Shows, SyncResource,
};

// Re-export models
pub use models::{
    // Auth
    Login,
    UserToken,
    // Ids
    EpisodeIds,
    MovieIds,
    SeasonIds,
    ShowIds,
    // Enums
    Extended,
    Rating,
    RatingsFilter,
    // Media
    Airs,
    BaseEpisode,
    BaseMovie,
    BaseSeason,
    BaseShow,
    Episode,
    Genre,
    Movie,
    RatedEpisode,
    RatedMovie,
    RatedSeason,
    RatedShow,
    Season,
    Show,
    TrendingMovie,
    WatchlistedEpisode,
    // Calendars
    Calendar,
    CalendarEntry,
    // Sync
    LastActivities,
    LastActivity,
    LastActivityMore,
    SyncEpisode,
    SyncErrors,
    SyncItems,
    SyncMovie,
    SyncResponse,
    SyncSeason,
    SyncShow,
    SyncStats,
};
