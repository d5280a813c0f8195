//! Show and season models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Rating;
use super::episode::BaseEpisode;
use super::ids::{SeasonIds, ShowIds};

/// Airing schedule of a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airs {
    pub day: Option<String>,
    pub time: Option<String>,
    pub timezone: Option<String>,
}

/// A TV show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Show {
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub ids: ShowIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airs: Option<Airs>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aired_episodes: Option<u32>,
}

/// A season of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub number: Option<u32>,
    #[serde(default)]
    pub ids: SeasonIds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aired_episodes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
}

/// A show in a user's collection, watched list or watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseShow {
    pub show: Show,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<BaseSeason>,
    /// collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_collected_at: Option<DateTime<Utc>>,
    /// watched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<u32>,
    /// watchlist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub listed_at: Option<DateTime<Utc>>,
}

/// Per-season breakdown inside a [`BaseShow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseSeason {
    pub number: u32,
    #[serde(default)]
    pub episodes: Vec<BaseEpisode>,
}

/// A show with the user's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedShow {
    pub rated_at: Option<DateTime<Utc>>,
    pub rating: Rating,
    pub show: Show,
}

/// A season with the user's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedSeason {
    pub rated_at: Option<DateTime<Utc>>,
    pub rating: Rating,
    pub show: Show,
    pub season: Season,
}
