//! Legacy v1 bindings.
//!
//! v1 endpoints carry the API key as the `{apikey}` path segment; the
//! interceptor fills it in. User-specific calls authenticate with Basic auth
//! from [`Trakt::set_credentials`](crate::Trakt::set_credentials).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{Resource, ResourceHandle, ResourceName};

/// Status body returned by v1 write and check calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// Account checks (v1).
#[derive(Debug, Clone)]
pub struct Account {
    handle: ResourceHandle,
}

impl Resource for Account {
    const NAME: ResourceName = ResourceName::Account;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Account {
    /// Check that the configured username and password digest are valid.
    #[tracing::instrument(skip(self))]
    pub async fn test(&self) -> Result<Response> {
        self.handle
            .post_json("test/{apikey}", &serde_json::json!({}))
            .await
    }
}

/// A show in a v1 calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarShow {
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub tvdb_id: Option<u32>,
}

/// An episode in a v1 calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEpisode {
    pub season: Option<u32>,
    pub number: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub first_aired_iso: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarTvEntry {
    pub show: CalendarShow,
    pub episode: CalendarEpisode,
}

/// One day of a v1 show calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub date: NaiveDate,
    #[serde(default)]
    pub episodes: Vec<CalendarTvEntry>,
}

/// Show calendar (v1).
#[derive(Debug, Clone)]
pub struct Calendar {
    handle: ResourceHandle,
}

impl Resource for Calendar {
    const NAME: ResourceName = ResourceName::Calendar;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Calendar {
    /// Episodes airing from `date` for `days` days.
    #[tracing::instrument(skip(self))]
    pub async fn shows(&self, date: NaiveDate, days: u32) -> Result<Vec<CalendarDate>> {
        let sub = format!("shows.json/{{apikey}}/{}/{days}", date.format("%Y%m%d"));
        self.handle.get_json(&sub).await
    }
}
