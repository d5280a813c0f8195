use chrono::NaiveDate;

use crate::error::Result;
use crate::models::Calendar;

use super::{Resource, ResourceHandle, ResourceName};

/// Show and movie calendars (v2).
///
/// Without a user token the calendars list everything airing in the period.
/// With one, they are limited to what the user has watched, collected or
/// added to their watchlist.
#[derive(Debug, Clone)]
pub struct Calendars {
    handle: ResourceHandle,
}

impl Resource for Calendars {
    const NAME: ResourceName = ResourceName::Calendars;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Calendars {
    /// Episodes airing from `start_date` for `days` days.
    #[tracing::instrument(skip(self))]
    pub async fn shows(&self, start_date: NaiveDate, days: u32) -> Result<Calendar> {
        self.get(&format!("shows/{}/{days}", fmt_date(start_date))).await
    }

    /// Series premieres (first episode of a new show).
    #[tracing::instrument(skip(self))]
    pub async fn new_shows(&self, start_date: NaiveDate, days: u32) -> Result<Calendar> {
        self.get(&format!("shows/new/{}/{days}", fmt_date(start_date)))
            .await
    }

    /// Season premieres (first episode of a season).
    #[tracing::instrument(skip(self))]
    pub async fn season_premieres(&self, start_date: NaiveDate, days: u32) -> Result<Calendar> {
        self.get(&format!("shows/premieres/{}/{days}", fmt_date(start_date)))
            .await
    }

    /// Movies released from `start_date` for `days` days.
    #[tracing::instrument(skip(self))]
    pub async fn movies(&self, start_date: NaiveDate, days: u32) -> Result<Calendar> {
        self.get(&format!("movies/{}/{days}", fmt_date(start_date)))
            .await
    }

    async fn get(&self, sub: &str) -> Result<Calendar> {
        self.handle.get_json(sub).await
    }
}

fn fmt_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
