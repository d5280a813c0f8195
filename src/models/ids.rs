//! Identifier sets attached to trakt items.
//!
//! trakt accepts any one of the ids when looking an item up, so the
//! constructors below set a single field and leave the rest empty.

use serde::{Deserialize, Serialize};

/// Ids of a movie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
}

impl MovieIds {
    pub fn trakt(id: u32) -> Self {
        Self {
            trakt: Some(id),
            ..Default::default()
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn tmdb(id: u32) -> Self {
        Self {
            tmdb: Some(id),
            ..Default::default()
        }
    }

    /// The id to use in a URL path: trakt id, then slug, then IMDb id.
    pub fn path_id(&self) -> Option<String> {
        self.trakt
            .map(|id| id.to_string())
            .or_else(|| self.slug.clone())
            .or_else(|| self.imdb.clone())
    }
}

/// Ids of a show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvrage: Option<u32>,
}

impl ShowIds {
    pub fn trakt(id: u32) -> Self {
        Self {
            trakt: Some(id),
            ..Default::default()
        }
    }

    pub fn slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Default::default()
        }
    }

    pub fn imdb(id: impl Into<String>) -> Self {
        Self {
            imdb: Some(id.into()),
            ..Default::default()
        }
    }

    pub fn tmdb(id: u32) -> Self {
        Self {
            tmdb: Some(id),
            ..Default::default()
        }
    }

    pub fn tvdb(id: u32) -> Self {
        Self {
            tvdb: Some(id),
            ..Default::default()
        }
    }

    /// The id to use in a URL path: trakt id, then slug, then IMDb id.
    pub fn path_id(&self) -> Option<String> {
        self.trakt
            .map(|id| id.to_string())
            .or_else(|| self.slug.clone())
            .or_else(|| self.imdb.clone())
    }
}

/// Ids of a season.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
}

/// Ids of an episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeIds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trakt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tvdb: Option<u32>,
}
