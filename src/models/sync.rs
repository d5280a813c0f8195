//! Models for reading and writing a user's synced lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Rating;
use super::ids::{EpisodeIds, MovieIds, SeasonIds, ShowIds};

/// Items to add to or remove from a collection, history, ratings or
/// watchlist.
///
/// ```
/// use trakt::{MovieIds, ShowIds, SyncItems, SyncMovie, SyncShow};
///
/// let items = SyncItems::new()
///     .movie(SyncMovie::new(MovieIds::tmdb(20526)))
///     .show(SyncShow::new(ShowIds::slug("community")));
/// assert_eq!(items.movies.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncItems {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub movies: Vec<SyncMovie>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shows: Vec<SyncShow>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
}

impl SyncItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one movie.
    pub fn movie(mut self, movie: SyncMovie) -> Self {
        self.movies.push(movie);
        self
    }

    /// Replace the movie list.
    pub fn movies(mut self, movies: Vec<SyncMovie>) -> Self {
        self.movies = movies;
        self
    }

    /// Append one show.
    pub fn show(mut self, show: SyncShow) -> Self {
        self.shows.push(show);
        self
    }

    /// Replace the show list.
    pub fn shows(mut self, shows: Vec<SyncShow>) -> Self {
        self.shows = shows;
        self
    }

    /// Append one episode identified by its own ids.
    pub fn episode(mut self, episode: SyncEpisode) -> Self {
        self.episodes.push(episode);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty() && self.shows.is_empty() && self.episodes.is_empty()
    }
}

/// A movie in a sync request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncMovie {
    pub ids: MovieIds,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncMovie {
    pub fn new(ids: MovieIds) -> Self {
        Self {
            ids,
            ..Default::default()
        }
    }

    pub fn collected_at(mut self, at: DateTime<Utc>) -> Self {
        self.collected_at = Some(at);
        self
    }

    pub fn watched_at(mut self, at: DateTime<Utc>) -> Self {
        self.watched_at = Some(at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// A show in a sync request. Without seasons the whole show is affected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncShow {
    pub ids: ShowIds,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<SyncSeason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncShow {
    pub fn new(ids: ShowIds) -> Self {
        Self {
            ids,
            ..Default::default()
        }
    }

    pub fn season(mut self, season: SyncSeason) -> Self {
        self.seasons.push(season);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// A season in a sync request. Without episodes the whole season is
/// affected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncSeason {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<SeasonIds>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub episodes: Vec<SyncEpisode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncSeason {
    pub fn number(number: u32) -> Self {
        Self {
            number: Some(number),
            ..Default::default()
        }
    }

    pub fn episode(mut self, episode: SyncEpisode) -> Self {
        self.episodes.push(episode);
        self
    }

    pub fn episodes(mut self, episodes: Vec<SyncEpisode>) -> Self {
        self.episodes = episodes;
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// An episode in a sync request, by number within a season or by ids.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncEpisode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<EpisodeIds>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collected_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watched_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl SyncEpisode {
    pub fn number(number: u32) -> Self {
        Self {
            number: Some(number),
            ..Default::default()
        }
    }

    pub fn ids(ids: EpisodeIds) -> Self {
        Self {
            ids: Some(ids),
            ..Default::default()
        }
    }

    pub fn watched_at(mut self, at: DateTime<Utc>) -> Self {
        self.watched_at = Some(at);
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Counts per item type in a [`SyncResponse`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movies: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasons: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episodes: Option<u32>,
}

/// Items trakt could not match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncErrors {
    #[serde(default)]
    pub movies: Vec<SyncMovie>,
    #[serde(default)]
    pub shows: Vec<SyncShow>,
    #[serde(default)]
    pub seasons: Vec<SyncSeason>,
    #[serde(default)]
    pub episodes: Vec<SyncEpisode>,
}

/// Result of a sync write.
///
/// Adds fill `added`, `existing` and `not_found`; removals fill `deleted`
/// and `not_found`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added: Option<SyncStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub existing: Option<SyncStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<SyncStats>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_found: Option<SyncErrors>,
}

/// When a user last changed each of their lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastActivities {
    pub all: Option<DateTime<Utc>>,
    #[serde(default)]
    pub movies: Option<LastActivityMore>,
    #[serde(default)]
    pub episodes: Option<LastActivityMore>,
    #[serde(default)]
    pub shows: Option<LastActivity>,
    #[serde(default)]
    pub seasons: Option<LastActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastActivity {
    pub rated_at: Option<DateTime<Utc>>,
    pub watchlisted_at: Option<DateTime<Utc>>,
    pub commented_at: Option<DateTime<Utc>>,
}

/// [`LastActivity`] plus watch and collection times.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LastActivityMore {
    #[serde(flatten)]
    pub activity: LastActivity,
    pub watched_at: Option<DateTime<Utc>>,
    pub collected_at: Option<DateTime<Utc>>,
}
