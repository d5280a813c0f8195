//! Calendar models.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::episode::Episode;
use super::movie::Movie;
use super::show::Show;

/// One item in a calendar day.
///
/// Show calendars fill `airs_at`, `episode` and `show`; the movie calendar
/// fills only `movie`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airs_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode: Option<Episode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<Show>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie: Option<Movie>,
}

impl CalendarEntry {
    pub fn is_show_entry(&self) -> bool {
        self.show.is_some() && self.episode.is_some()
    }
}

/// Calendar entries grouped by day.
pub type Calendar = BTreeMap<NaiveDate, Vec<CalendarEntry>>;
