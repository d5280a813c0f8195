//! v1 endpoint handlers. The API key is part of the path.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::NaiveDate;

use super::{error, record, SharedState};
use crate::mock_server::state::MockState;
use crate::v1::{CalendarDate, CalendarEpisode, CalendarShow, CalendarTvEntry};

async fn admit_v1(
    state: &SharedState,
    uri: &Uri,
    headers: &HeaderMap,
    api_key: &str,
) -> Result<(), Response> {
    record(state, uri.path(), Some(api_key.to_string()), headers).await;
    let state = state.read().await;
    if !state.accepts_api_key(Some(api_key)) {
        return Err(error(StatusCode::UNAUTHORIZED, "invalid API key"));
    }
    Ok(())
}

/// Decode `Basic base64(user:digest)`.
fn basic_credentials(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = String::from_utf8(STANDARD.decode(encoded).ok()?).ok()?;
    let (user, digest) = decoded.split_once(':')?;
    Some((user.to_string(), digest.to_string()))
}

/// POST /account/test/{apikey}
pub async fn v1_account_test(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path(api_key): Path<String>,
) -> Response {
    if let Err(rejection) = admit_v1(&state, &uri, &headers, &api_key).await {
        return rejection;
    }
    let valid = match basic_credentials(&headers) {
        Some((user, digest)) => state.read().await.check_digest(&user, &digest),
        None => false,
    };

    if valid {
        (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "success", "message": "all good!" })),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "status": "failure", "error": "failed authentication" })),
        )
            .into_response()
    }
}

/// GET /calendar/shows.json/{apikey}/{date}/{days}
pub async fn v1_calendar_shows(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path((api_key, date, days)): Path<(String, String, u32)>,
) -> Response {
    if let Err(rejection) = admit_v1(&state, &uri, &headers, &api_key).await {
        return rejection;
    }
    let Ok(start) = NaiveDate::parse_from_str(&date, "%Y%m%d") else {
        return error(StatusCode::BAD_REQUEST, "date must be YYYYMMDD");
    };

    let state = state.read().await;
    let days: Vec<CalendarDate> = MockState::calendar_range(&state.show_calendar, start, days)
        .into_iter()
        .map(|(date, entries)| CalendarDate {
            date,
            episodes: entries
                .into_iter()
                .filter_map(|e| {
                    let show = e.show?;
                    let episode = e.episode?;
                    Some(CalendarTvEntry {
                        show: CalendarShow {
                            title: show.title,
                            year: show.year,
                            url: show.ids.slug.map(|s| format!("{}/shows/{}", crate::SITE_URL, s)),
                            imdb_id: show.ids.imdb,
                            tvdb_id: show.ids.tvdb,
                        },
                        episode: CalendarEpisode {
                            season: episode.season,
                            number: episode.number,
                            title: episode.title,
                            first_aired_iso: e.airs_at.map(|a| a.to_rfc3339()),
                        },
                    })
                })
                .collect(),
        })
        .collect();

    (StatusCode::OK, Json(days)).into_response()
}
