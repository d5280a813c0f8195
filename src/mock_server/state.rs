//! Mock server state management.
//!
//! Provides the in-memory data store for the mock trakt API server.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use crate::{
    BaseMovie, Calendar, CalendarEntry, Genre, LastActivities, Movie, MovieIds, SyncMovie,
};

/// Lists kept for one user.
#[derive(Debug, Clone, Default)]
pub struct UserLists {
    pub collection_movies: Vec<BaseMovie>,
    pub watchlist_movies: Vec<BaseMovie>,
    pub last_activities: LastActivities,
}

/// A request as seen by the server, for asserting on credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub path: String,
    pub api_key: Option<String>,
    pub user_token: Option<String>,
    pub authorization: Option<String>,
}

/// Shared state for the mock server.
///
/// This struct holds all the mock data that the server will serve.
/// It's wrapped in `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Accepted API keys. When empty, any key is accepted.
    pub api_keys: HashSet<String>,

    /// Passwords indexed by username.
    pub users: HashMap<String, String>,

    /// SHA1 password digests indexed by username, for v1 Basic auth.
    pub password_digests: HashMap<String, String>,

    /// Issued tokens, mapped to their username.
    pub tokens: HashMap<String, String>,

    /// Answer logins with an empty token.
    pub issue_empty_tokens: bool,

    /// Movie catalogue, in popularity order.
    pub movies: Vec<Movie>,

    /// Genres served for both movies and shows.
    pub genres: Vec<Genre>,

    /// Show calendar entries indexed by day.
    pub show_calendar: Calendar,

    /// Movie calendar entries indexed by day.
    pub movie_calendar: Calendar,

    /// Per-user lists indexed by username.
    pub lists: HashMap<String, UserLists>,

    /// Every request received, in order.
    pub requests: Vec<RecordedRequest>,

    token_counter: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Accept `key` as an API key.
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_keys.insert(key.to_string());
        self
    }

    /// Add a user who can log in with `password`.
    pub fn with_user(mut self, username: &str, password: &str) -> Self {
        self.users.insert(username.to_string(), password.to_string());
        self.lists.entry(username.to_string()).or_default();
        self
    }

    /// Add a v1 user authenticating with a password digest.
    pub fn with_v1_user(mut self, username: &str, password_digest: &str) -> Self {
        self.password_digests
            .insert(username.to_string(), password_digest.to_string());
        self
    }

    /// Add a movie to the catalogue.
    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.movies.push(movie);
        self
    }

    /// Replace the genre list.
    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    /// Add a calendar entry. Entries with a movie go to the movie calendar.
    pub fn with_calendar_entry(mut self, day: NaiveDate, entry: CalendarEntry) -> Self {
        let calendar = if entry.movie.is_some() {
            &mut self.movie_calendar
        } else {
            &mut self.show_calendar
        };
        calendar.entry(day).or_default().push(entry);
        self
    }

    /// Whether `key` is an accepted API key.
    pub fn accepts_api_key(&self, key: Option<&str>) -> bool {
        match key {
            Some(key) => self.api_keys.is_empty() || self.api_keys.contains(key),
            None => false,
        }
    }

    /// Check a login and issue a token.
    pub fn login(&mut self, username: &str, password: &str) -> Option<String> {
        if self.users.get(username).map(String::as_str) != Some(password) {
            return None;
        }
        if self.issue_empty_tokens {
            return Some(String::new());
        }
        self.token_counter += 1;
        let token = format!("token-{}-{}", username, self.token_counter);
        self.tokens.insert(token.clone(), username.to_string());
        Some(token)
    }

    /// The user a token belongs to.
    pub fn user_for_token(&self, token: &str) -> Option<&str> {
        self.tokens.get(token).map(String::as_str)
    }

    /// Revoke every token of `username`.
    pub fn revoke_tokens(&mut self, username: &str) {
        self.tokens.retain(|_, user| user != username);
    }

    /// Whether the username and digest match a v1 user.
    pub fn check_digest(&self, username: &str, digest: &str) -> bool {
        self.password_digests.get(username).map(String::as_str) == Some(digest)
    }

    /// Find a catalogue movie matching any id in `ids`.
    pub fn find_movie(&self, ids: &MovieIds) -> Option<&Movie> {
        self.movies.iter().find(|m| {
            (ids.trakt.is_some() && m.ids.trakt == ids.trakt)
                || (ids.slug.is_some() && m.ids.slug == ids.slug)
                || (ids.imdb.is_some() && m.ids.imdb == ids.imdb)
                || (ids.tmdb.is_some() && m.ids.tmdb == ids.tmdb)
        })
    }

    /// Find a catalogue movie by trakt id or slug as used in URL paths.
    pub fn find_movie_by_path_id(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| {
            m.ids.slug.as_deref() == Some(id)
                || m.ids.trakt.map(|t| t.to_string()).as_deref() == Some(id)
                || m.ids.imdb.as_deref() == Some(id)
        })
    }

    /// Calendar days in `[start, start + days)`.
    pub fn calendar_range(calendar: &Calendar, start: NaiveDate, days: u32) -> Calendar {
        let end = start + chrono::Duration::days(i64::from(days));
        calendar
            .range(start..end)
            .map(|(day, entries)| (*day, entries.clone()))
            .collect()
    }

    /// Add movies to a user's collection.
    ///
    /// Returns (added, existing, not found).
    pub fn collect_movies(
        &mut self,
        username: &str,
        movies: &[SyncMovie],
    ) -> (u32, u32, Vec<SyncMovie>) {
        let mut added = 0;
        let mut existing = 0;
        let mut not_found = Vec::new();

        for sync_movie in movies {
            let Some(movie) = self.find_movie(&sync_movie.ids).cloned() else {
                not_found.push(sync_movie.clone());
                continue;
            };
            let lists = self.lists.entry(username.to_string()).or_default();
            if lists
                .collection_movies
                .iter()
                .any(|m| m.movie.ids == movie.ids)
            {
                existing += 1;
                continue;
            }
            lists.collection_movies.push(BaseMovie {
                movie,
                collected_at: Some(sync_movie.collected_at.unwrap_or_else(Utc::now)),
                last_watched_at: None,
                plays: None,
                listed_at: None,
            });
            lists.last_activities.all = Some(Utc::now());
            added += 1;
        }

        (added, existing, not_found)
    }

    /// Remove movies from a user's collection.
    ///
    /// Returns (deleted, not found).
    pub fn uncollect_movies(&mut self, username: &str, movies: &[SyncMovie]) -> (u32, Vec<SyncMovie>) {
        let mut deleted = 0;
        let mut not_found = Vec::new();

        for sync_movie in movies {
            let Some(ids) = self.find_movie(&sync_movie.ids).map(|m| m.ids.clone()) else {
                not_found.push(sync_movie.clone());
                continue;
            };
            let lists = self.lists.entry(username.to_string()).or_default();
            let before = lists.collection_movies.len();
            lists.collection_movies.retain(|m| m.movie.ids != ids);
            if lists.collection_movies.len() < before {
                deleted += 1;
                lists.last_activities.all = Some(Utc::now());
            }
        }

        (deleted, not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_login_issues_distinct_tokens() {
        let mut state = MockState::new().with_user("sean", "pw");
        let first = state.login("sean", "pw").unwrap();
        let second = state.login("sean", "pw").unwrap();
        assert_ne!(first, second);
        assert_eq!(state.user_for_token(&first), Some("sean"));
        assert!(state.login("sean", "wrong").is_none());
    }

    #[test]
    fn test_empty_token_mode() {
        let mut state = MockState::new().with_user("sean", "pw");
        state.issue_empty_tokens = true;
        assert_eq!(state.login("sean", "pw").as_deref(), Some(""));
        assert!(state.tokens.is_empty());
    }

    #[test]
    fn test_collect_and_uncollect() {
        let mut state = MockState::new()
            .with_user("sean", "pw")
            .with_movie(Fixtures::movie(1, "tron-legacy-2010", "TRON: Legacy", 2010));

        let tron = SyncMovie::new(MovieIds::slug("tron-legacy-2010"));
        let missing = SyncMovie::new(MovieIds::tmdb(999));

        let (added, existing, not_found) =
            state.collect_movies("sean", &[tron.clone(), missing.clone()]);
        assert_eq!((added, existing, not_found.len()), (1, 0, 1));

        let (added, existing, _) = state.collect_movies("sean", &[tron.clone()]);
        assert_eq!((added, existing), (0, 1));

        let (deleted, not_found) = state.uncollect_movies("sean", &[tron]);
        assert_eq!((deleted, not_found.len()), (1, 0));
        assert!(state.lists["sean"].collection_movies.is_empty());
    }

    #[test]
    fn test_api_key_acceptance() {
        let open = MockState::new();
        assert!(open.accepts_api_key(Some("anything")));
        assert!(!open.accepts_api_key(None));

        let strict = MockState::new().with_api_key("abc");
        assert!(strict.accepts_api_key(Some("abc")));
        assert!(!strict.accepts_api_key(Some("def")));
    }
}
