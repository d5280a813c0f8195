//! v2 resource binding tests.
//!
//! Uses wiremock to check request paths and queries and the parsing of
//! response bodies.

use chrono::NaiveDate;
use tokio_test::{assert_err, assert_ok};
use trakt::{
    Calendars, Extended, MovieIds, Movies, PaginationParams, Rating, RatingsFilter,
    Recommendations, Shows, SyncEpisode, SyncItems, SyncMovie, SyncResource, SyncSeason,
    SyncShow, ShowIds, Trakt,
};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session(mock_server: &MockServer) -> Trakt {
    let mut trakt = Trakt::v2();
    trakt
        .set_api_key("key")
        .set_token("sean", "tok")
        .set_base_url(mock_server.uri());
    trakt
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_calendar_shows_groups_by_day() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendars/shows/2014-09-01/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "2014-09-01": [{
                "airs_at": "2014-09-01T09:00:00.000Z",
                "episode": { "season": 7, "number": 4, "title": "Death is Not the End", "ids": { "trakt": 443 } },
                "show": { "title": "True Blood", "year": 2008, "ids": { "trakt": 5, "slug": "true-blood" } }
            }],
            "2014-09-03": [{
                "airs_at": "2014-09-03T01:00:00.000Z",
                "episode": { "season": 1, "number": 9, "ids": { "trakt": 500 } },
                "show": { "title": "The Strain", "year": 2014, "ids": { "trakt": 6 } }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let calendar = trakt
        .resource::<Calendars>()
        .unwrap()
        .shows(day(2014, 9, 1), 7)
        .await
        .unwrap();

    assert_eq!(calendar.len(), 2);
    let first = &calendar[&day(2014, 9, 1)][0];
    assert!(first.is_show_entry());
    assert_eq!(first.show.as_ref().unwrap().ids.slug.as_deref(), Some("true-blood"));
    assert_eq!(first.episode.as_ref().unwrap().number, Some(4));
}

#[tokio::test]
async fn test_calendar_variants_use_their_paths() {
    let mock_server = MockServer::start().await;

    for p in [
        "/calendars/shows/new/2014-09-01/7",
        "/calendars/shows/premieres/2014-09-01/7",
        "/calendars/movies/2014-09-01/7",
    ] {
        Mock::given(method("GET"))
            .and(path(p))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let mut trakt = session(&mock_server);
    let calendars = trakt.resource::<Calendars>().unwrap();
    let start = day(2014, 9, 1);

    assert!(calendars.new_shows(start, 7).await.unwrap().is_empty());
    assert!(calendars.season_premieres(start, 7).await.unwrap().is_empty());
    assert!(calendars.movies(start, 7).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_sync_collection_movies_with_extended() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sync/collection/movies"))
        .and(query_param("extended", "full,images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "collected_at": "2014-09-01T09:10:11.000Z",
            "movie": { "title": "TRON: Legacy", "year": 2010, "ids": { "trakt": 1, "slug": "tron-legacy-2010", "tmdb": 20526 } }
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let movies = trakt
        .resource::<SyncResource>()
        .unwrap()
        .collection_movies(Extended::FullImages)
        .await
        .unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].movie.ids.tmdb, Some(20526));
    assert!(movies[0].collected_at.is_some());
}

#[tokio::test]
async fn test_sync_add_episodes_to_history() {
    let mock_server = MockServer::start().await;

    let items = SyncItems::new().show(
        SyncShow::new(ShowIds::tvdb(257655)).season(
            SyncSeason::number(1)
                .episode(SyncEpisode::number(1))
                .episode(SyncEpisode::number(2)),
        ),
    );

    Mock::given(method("POST"))
        .and(path("/sync/history"))
        .and(body_json(serde_json::to_value(&items).unwrap()))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "added": { "movies": 0, "episodes": 2 },
            "not_found": { "movies": [], "shows": [], "seasons": [], "episodes": [] }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let response = trakt
        .resource::<SyncResource>()
        .unwrap()
        .add_items_to_watched_history(&items)
        .await
        .unwrap();

    assert_eq!(response.added.unwrap().episodes, Some(2));
    assert!(response.not_found.unwrap().shows.is_empty());
}

#[tokio::test]
async fn test_sync_remove_ratings_reports_deleted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sync/ratings/remove"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "deleted": { "movies": 1 },
            "not_found": { "movies": [ { "ids": { "imdb": "tt0000111" } } ] }
        })))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let items = SyncItems::new()
        .movie(SyncMovie::new(MovieIds::slug("tron-legacy-2010")))
        .movie(SyncMovie::new(MovieIds::imdb("tt0000111")));
    let response = trakt
        .resource::<SyncResource>()
        .unwrap()
        .delete_ratings(&items)
        .await
        .unwrap();

    assert!(response.added.is_none());
    assert_eq!(response.deleted.unwrap().movies, Some(1));
    let not_found = response.not_found.unwrap();
    assert_eq!(not_found.movies[0].ids.imdb.as_deref(), Some("tt0000111"));
}

#[tokio::test]
async fn test_sync_ratings_filter_in_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sync/ratings/movies/10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "rated_at": "2014-09-01T09:10:11.000Z",
            "rating": 10,
            "movie": { "title": "TRON: Legacy", "year": 2010, "ids": { "trakt": 1 } }
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/sync/ratings/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let sync = trakt.resource::<SyncResource>().unwrap();

    let rated = sync
        .ratings_movies(RatingsFilter::Only(Rating::TotallyNinja), Extended::Min)
        .await
        .unwrap();
    assert_eq!(rated[0].rating, Rating::TotallyNinja);

    let episodes = sync
        .ratings_episodes(RatingsFilter::All, Extended::Min)
        .await
        .unwrap();
    assert!(episodes.is_empty());
}

#[tokio::test]
async fn test_sync_watchlist_episodes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/sync/watchlist/episodes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
            "listed_at": "2014-09-01T09:10:11.000Z",
            "episode": { "season": 1, "number": 1, "ids": { "trakt": 73640 } },
            "show": { "title": "Game of Thrones", "year": 2011, "ids": { "trakt": 1390 } }
        }])))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let episodes = trakt
        .resource::<SyncResource>()
        .unwrap()
        .watchlist_episodes(Extended::Min)
        .await
        .unwrap();

    assert_eq!(episodes[0].show.ids.trakt, Some(1390));
    assert_eq!(episodes[0].episode.ids.trakt, Some(73640));
}

#[tokio::test]
async fn test_movies_popular_reads_pagination_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies/popular"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "2"))
        .and(query_param("extended", "min"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Pagination-Page", "2")
                .insert_header("X-Pagination-Limit", "2")
                .insert_header("X-Pagination-Page-Count", "3")
                .insert_header("X-Pagination-Item-Count", "5")
                .set_body_json(serde_json::json!([
                    { "title": "The Dark Knight", "year": 2008, "ids": { "trakt": 3 } },
                    { "title": "Inception", "year": 2010, "ids": { "trakt": 4 } }
                ])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let page = trakt
        .resource::<Movies>()
        .unwrap()
        .popular(PaginationParams::for_page(2, 2), Extended::Min)
        .await
        .unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total, Some(5));
    assert_eq!(page.page_count, Some(3));
    assert!(page.has_more);
    let titles: Vec<_> = page.iter().filter_map(|m| m.title.as_deref()).collect();
    assert_eq!(titles, vec!["The Dark Knight", "Inception"]);
}

#[tokio::test]
async fn test_movie_and_show_summaries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movies/tron-legacy-2010"))
        .and(query_param("extended", "full"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "TRON: Legacy",
            "year": 2010,
            "ids": { "trakt": 1, "slug": "tron-legacy-2010" },
            "runtime": 125,
            "released": "2010-12-16"
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/shows/breaking-bad"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "title": "Breaking Bad",
            "year": 2008,
            "ids": { "trakt": 1, "tvdb": 81189 },
            "airs": { "day": "Sunday", "time": "21:00", "timezone": "America/New_York" }
        })))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);

    let movie = trakt
        .resource::<Movies>()
        .unwrap()
        .summary("tron-legacy-2010", Extended::Full)
        .await
        .unwrap();
    assert_eq!(movie.runtime, Some(125));
    assert_eq!(movie.released, Some(day(2010, 12, 16)));

    let show = trakt
        .resource::<Shows>()
        .unwrap()
        .summary("breaking-bad", Extended::Min)
        .await
        .unwrap();
    assert_eq!(show.airs.unwrap().day.as_deref(), Some("Sunday"));
}

#[tokio::test]
async fn test_recommendations_dismiss() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/recommendations/movies/922"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/recommendations/shows/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let mut trakt = session(&mock_server);
    let recommendations = trakt.resource::<Recommendations>().unwrap();

    assert_ok!(recommendations.dismiss_movie("922").await);
    assert_err!(recommendations.dismiss_show("missing").await);
}
