//! Episode models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Rating;
use super::ids::EpisodeIds;
use super::show::Show;

/// An episode of a show.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub season: Option<u32>,
    pub number: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub ids: EpisodeIds,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_abs: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_aired: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u32>,
}

/// Per-episode state inside a collected or watched show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseEpisode {
    pub number: Option<u32>,
    /// collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    /// watched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plays: Option<u32>,
    /// progress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

/// An episode with the user's rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedEpisode {
    pub rated_at: Option<DateTime<Utc>>,
    pub rating: Rating,
    pub show: Show,
    pub episode: Episode,
}

/// An episode on the user's watchlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistedEpisode {
    pub listed_at: Option<DateTime<Utc>>,
    pub show: Show,
    pub episode: Episode,
}
