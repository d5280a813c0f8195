//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::{CalendarEntry, Episode, EpisodeIds, Genre, Movie, MovieIds, Show, ShowIds};

use super::state::MockState;

/// API key accepted by the default scenario.
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_USERNAME: &str = "sean";
pub const TEST_PASSWORD: &str = "hunter2";
/// SHA1 of `TEST_PASSWORD`.
pub const TEST_PASSWORD_SHA1: &str = "f3bbbd66a63d4bf1747940578ec3d0103530e21d";

/// Collection of fixture factories for test data.
pub struct Fixtures;

impl Fixtures {
    // =========================================================================
    // Media Fixtures
    // =========================================================================

    /// Create a movie with minimal info.
    pub fn movie(trakt_id: u32, slug: &str, title: &str, year: i32) -> Movie {
        Movie {
            title: Some(title.to_string()),
            year: Some(year),
            ids: MovieIds {
                trakt: Some(trakt_id),
                slug: Some(slug.to_string()),
                imdb: None,
                tmdb: Some(trakt_id + 20_000),
            },
            ..Default::default()
        }
    }

    /// Create a show with minimal info.
    pub fn show(trakt_id: u32, slug: &str, title: &str, year: i32) -> Show {
        Show {
            title: Some(title.to_string()),
            year: Some(year),
            ids: ShowIds {
                trakt: Some(trakt_id),
                slug: Some(slug.to_string()),
                tvdb: Some(trakt_id + 80_000),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// A calendar entry for an episode airing at 02:00 UTC on `day`.
    pub fn episode_entry(day: NaiveDate, show: Show, season: u32, number: u32) -> CalendarEntry {
        let airs_at = day
            .and_hms_opt(2, 0, 0)
            .map(|dt| Utc.from_utc_datetime(&dt));
        CalendarEntry {
            airs_at,
            episode: Some(Episode {
                season: Some(season),
                number: Some(number),
                title: Some(format!("Episode {number}")),
                ids: EpisodeIds {
                    trakt: Some(season * 100 + number),
                    ..Default::default()
                },
                ..Default::default()
            }),
            show: Some(show),
            movie: None,
        }
    }

    /// A calendar entry for a movie release.
    pub fn movie_entry(movie: Movie) -> CalendarEntry {
        CalendarEntry {
            movie: Some(movie),
            ..Default::default()
        }
    }

    pub fn genre(name: &str) -> Genre {
        Genre {
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// The default scenario: one v2 user, one v1 user, a small catalogue
    /// and a calendar around the week of 2014-09-01.
    pub fn default_state() -> MockState {
        let week = NaiveDate::from_ymd_opt(2014, 9, 1).unwrap_or_default();
        let true_blood = Self::show(5, "true-blood", "True Blood", 2008);
        let the_strain = Self::show(6, "the-strain", "The Strain", 2014);
        let tron = Self::movie(1, "tron-legacy-2010", "TRON: Legacy", 2010);

        MockState::new()
            .with_api_key(TEST_API_KEY)
            .with_user(TEST_USERNAME, TEST_PASSWORD)
            .with_v1_user(TEST_USERNAME, TEST_PASSWORD_SHA1)
            .with_movie(tron.clone())
            .with_movie(Self::movie(2, "batman-begins-2005", "Batman Begins", 2005))
            .with_movie(Self::movie(3, "the-dark-knight-2008", "The Dark Knight", 2008))
            .with_movie(Self::movie(4, "inception-2010", "Inception", 2010))
            .with_movie(Self::movie(5, "interstellar-2014", "Interstellar", 2014))
            .with_calendar_entry(week, Self::episode_entry(week, true_blood.clone(), 7, 10))
            .with_calendar_entry(
                week + chrono::Duration::days(2),
                Self::episode_entry(week + chrono::Duration::days(2), the_strain, 1, 9),
            )
            .with_calendar_entry(
                week + chrono::Duration::days(10),
                Self::episode_entry(week + chrono::Duration::days(10), true_blood, 8, 1),
            )
            .with_calendar_entry(week, Self::movie_entry(tron))
            .with_genres(vec![Self::genre("Action"), Self::genre("Science Fiction")])
    }
}
