//! Calendar endpoint handlers.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;

use super::{admit, error, SharedState};
use crate::mock_server::state::MockState;
use crate::Calendar;

#[derive(Clone, Copy)]
enum Kind {
    Shows,
    NewShows,
    Premieres,
    Movies,
}

/// GET /calendars/shows/{start}/{days}
pub async fn calendar_shows(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path((start, days)): Path<(String, u32)>,
) -> Response {
    serve(state, uri, headers, start, days, Kind::Shows).await
}

/// GET /calendars/shows/new/{start}/{days}
pub async fn calendar_new_shows(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path((start, days)): Path<(String, u32)>,
) -> Response {
    serve(state, uri, headers, start, days, Kind::NewShows).await
}

/// GET /calendars/shows/premieres/{start}/{days}
pub async fn calendar_season_premieres(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path((start, days)): Path<(String, u32)>,
) -> Response {
    serve(state, uri, headers, start, days, Kind::Premieres).await
}

/// GET /calendars/movies/{start}/{days}
pub async fn calendar_movies(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path((start, days)): Path<(String, u32)>,
) -> Response {
    serve(state, uri, headers, start, days, Kind::Movies).await
}

async fn serve(
    state: SharedState,
    uri: Uri,
    headers: HeaderMap,
    start: String,
    days: u32,
    kind: Kind,
) -> Response {
    if let Err(rejection) = admit(&state, uri.path(), &headers).await {
        return rejection;
    }
    let Ok(start) = NaiveDate::parse_from_str(&start, "%Y-%m-%d") else {
        return error(StatusCode::BAD_REQUEST, "start date must be YYYY-MM-DD");
    };

    let state = state.read().await;
    let calendar: Calendar = match kind {
        Kind::Movies => MockState::calendar_range(&state.movie_calendar, start, days),
        Kind::Shows => MockState::calendar_range(&state.show_calendar, start, days),
        // first episode of a season, and of season 1 for new shows
        Kind::Premieres | Kind::NewShows => {
            let mut calendar = MockState::calendar_range(&state.show_calendar, start, days);
            for entries in calendar.values_mut() {
                entries.retain(|e| {
                    let episode = e.episode.as_ref();
                    let first = episode.and_then(|ep| ep.number) == Some(1);
                    match kind {
                        Kind::NewShows => first && episode.and_then(|ep| ep.season) == Some(1),
                        _ => first,
                    }
                });
            }
            calendar.retain(|_, entries| !entries.is_empty());
            calendar
        }
    };

    (StatusCode::OK, Json(calendar)).into_response()
}
