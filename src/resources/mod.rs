//! Resource groups and the handles used to call them.
//!
//! Every remote endpoint belongs to a named group (`movies`, `sync`,
//! `calendars`, ...). A [`ResourceHandle`] binds a group to the session's
//! current [`Transport`]; typed bindings such as [`Movies`] wrap a handle and
//! implement [`Resource`] so that
//! [`Trakt::resource`](crate::Trakt::resource) can create them generically.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiVersion;
use crate::error::{Result, TraktError};
use crate::models::Extended;
use crate::pagination::PaginationParams;
use crate::transport::{ApiResponse, Transport};

mod auth;
mod calendars;
mod genres;
mod movies;
mod recommendations;
mod shows;
mod sync;
pub mod v1;

pub use auth::Auth;
pub use calendars::Calendars;
pub use genres::Genres;
pub use movies::Movies;
pub use recommendations::Recommendations;
pub use shows::Shows;
pub use sync::SyncResource;

/// The resource groups of both API generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceName {
    // v2
    Auth,
    Calendars,
    Checkin,
    Comments,
    Genres,
    Movies,
    People,
    Seasons,
    Episodes,
    Shows,
    Sync,
    Users,
    // both
    Recommendations,
    Search,
    // v1
    Account,
    Activity,
    Calendar,
    Comment,
    Genre,
    List,
    Movie,
    Network,
    Rate,
    Show,
    User,
}

impl ResourceName {
    pub const ALL: [ResourceName; 25] = [
        ResourceName::Auth,
        ResourceName::Calendars,
        ResourceName::Checkin,
        ResourceName::Comments,
        ResourceName::Genres,
        ResourceName::Movies,
        ResourceName::People,
        ResourceName::Seasons,
        ResourceName::Episodes,
        ResourceName::Shows,
        ResourceName::Sync,
        ResourceName::Users,
        ResourceName::Recommendations,
        ResourceName::Search,
        ResourceName::Account,
        ResourceName::Activity,
        ResourceName::Calendar,
        ResourceName::Comment,
        ResourceName::Genre,
        ResourceName::List,
        ResourceName::Movie,
        ResourceName::Network,
        ResourceName::Rate,
        ResourceName::Show,
        ResourceName::User,
    ];

    /// Path segment of the group, which is also its name.
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceName::Auth => "auth",
            ResourceName::Calendars => "calendars",
            ResourceName::Checkin => "checkin",
            ResourceName::Comments => "comments",
            ResourceName::Genres => "genres",
            ResourceName::Movies => "movies",
            ResourceName::People => "people",
            ResourceName::Seasons => "seasons",
            ResourceName::Episodes => "episodes",
            ResourceName::Shows => "shows",
            ResourceName::Sync => "sync",
            ResourceName::Users => "users",
            ResourceName::Recommendations => "recommendations",
            ResourceName::Search => "search",
            ResourceName::Account => "account",
            ResourceName::Activity => "activity",
            ResourceName::Calendar => "calendar",
            ResourceName::Comment => "comment",
            ResourceName::Genre => "genre",
            ResourceName::List => "lists",
            ResourceName::Movie => "movie",
            ResourceName::Network => "network",
            ResourceName::Rate => "rate",
            ResourceName::Show => "show",
            ResourceName::User => "user",
        }
    }

    /// Whether the group exists in `version`.
    pub fn supports(self, version: ApiVersion) -> bool {
        use ResourceName::*;
        match self {
            Recommendations | Search => true,
            Auth | Calendars | Checkin | Comments | Genres | Movies | People | Seasons
            | Episodes | Shows | Sync | Users => version == ApiVersion::V2,
            Account | Activity | Calendar | Comment | Genre | List | Movie | Network | Rate
            | Show | User => version == ApiVersion::V1,
        }
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceName {
    type Err = TraktError;

    /// Accepts the path segment of a group, plus `list` for the v1 `lists`
    /// group.
    fn from_str(s: &str) -> Result<Self> {
        if s.eq_ignore_ascii_case("list") {
            return Ok(ResourceName::List);
        }
        ResourceName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TraktError::UnknownResource(s.to_string()))
    }
}

/// A typed binding for one resource group.
pub trait Resource: Sized {
    const NAME: ResourceName;

    fn from_handle(handle: ResourceHandle) -> Self;
}

/// Untyped accessor for one resource group.
///
/// Paths passed to its methods are relative to the group, so
/// `handle.get("popular")` on the `movies` group requests `movies/popular`.
#[derive(Debug, Clone)]
pub struct ResourceHandle {
    name: ResourceName,
    transport: Arc<Transport>,
}

impl ResourceHandle {
    pub(crate) fn new(name: ResourceName, transport: Arc<Transport>) -> Self {
        Self { name, transport }
    }

    pub fn name(&self) -> ResourceName {
        self.name
    }

    /// The transport requests are sent through.
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    /// Full path of `sub` within this group.
    pub fn path(&self, sub: &str) -> String {
        let sub = sub.trim_start_matches('/');
        if sub.is_empty() {
            self.name.as_str().to_string()
        } else {
            format!("{}/{}", self.name.as_str(), sub)
        }
    }

    pub async fn get(&self, sub: &str) -> Result<ApiResponse> {
        self.transport.get(&self.path(sub)).await
    }

    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        sub: &str,
        query: &Q,
    ) -> Result<ApiResponse> {
        self.transport.get_with_query(&self.path(sub), query).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, sub: &str, body: &B) -> Result<ApiResponse> {
        self.transport.post(&self.path(sub), body).await
    }

    pub async fn delete(&self, sub: &str) -> Result<ApiResponse> {
        self.transport.delete(&self.path(sub)).await
    }

    /// GET and deserialize the body.
    pub async fn get_json<T: DeserializeOwned>(&self, sub: &str) -> Result<T> {
        self.get(sub).await?.json()
    }

    /// GET with query parameters and deserialize the body.
    pub async fn get_json_with_query<Q: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        sub: &str,
        query: &Q,
    ) -> Result<T> {
        self.get_with_query(sub, query).await?.json()
    }

    /// POST a JSON body and deserialize the response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        sub: &str,
        body: &B,
    ) -> Result<T> {
        self.post(sub, body).await?.json()
    }
}

/// `?extended=` query shared by most listing endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct ExtendedQuery {
    pub extended: Extended,
}

/// `?extended=&page=&limit=` query for paginated listings.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct PagedQuery {
    pub extended: Extended,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for name in ResourceName::ALL {
            assert_eq!(name.as_str().parse::<ResourceName>().unwrap(), name);
        }
        assert!("nope".parse::<ResourceName>().is_err());
    }

    #[test]
    fn test_v1_list_group_accepts_both_spellings() {
        assert_eq!("list".parse::<ResourceName>().unwrap(), ResourceName::List);
        assert_eq!("lists".parse::<ResourceName>().unwrap(), ResourceName::List);
        assert_eq!("List".parse::<ResourceName>().unwrap(), ResourceName::List);
        assert_eq!(ResourceName::List.as_str(), "lists");
        assert!(ResourceName::List.supports(ApiVersion::V1));
    }

    #[test]
    fn test_supports_by_generation() {
        assert!(ResourceName::Calendars.supports(ApiVersion::V2));
        assert!(!ResourceName::Calendars.supports(ApiVersion::V1));
        assert!(ResourceName::Calendar.supports(ApiVersion::V1));
        assert!(!ResourceName::Calendar.supports(ApiVersion::V2));
        assert!(ResourceName::Search.supports(ApiVersion::V1));
        assert!(ResourceName::Search.supports(ApiVersion::V2));
    }

    #[test]
    fn test_paged_query_serializes_flat() {
        let query = PagedQuery {
            extended: Extended::Full,
            pagination: PaginationParams::for_page(2, 5),
        };
        let json = serde_json::to_value(query).unwrap();
        assert_eq!(json, serde_json::json!({ "extended": "full", "page": 2, "limit": 5 }));
    }
}
