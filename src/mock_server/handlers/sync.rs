//! Sync endpoint handlers. All of them require a user token.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use super::{admit, require_user, SharedState};
use crate::{SyncErrors, SyncItems, SyncResponse, SyncStats};

async fn authorize(
    state: &SharedState,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<String, Response> {
    admit(state, uri.path(), headers).await?;
    require_user(state, headers).await
}

/// GET /sync/last_activities
pub async fn last_activities(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let user = match authorize(&state, &uri, &headers).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };
    let state = state.read().await;
    let activities = state
        .lists
        .get(&user)
        .map(|l| l.last_activities.clone())
        .unwrap_or_default();
    (StatusCode::OK, Json(activities)).into_response()
}

/// GET /sync/collection/movies
pub async fn collection_movies(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let user = match authorize(&state, &uri, &headers).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };
    let state = state.read().await;
    let movies = state
        .lists
        .get(&user)
        .map(|l| l.collection_movies.clone())
        .unwrap_or_default();
    (StatusCode::OK, Json(movies)).into_response()
}

/// GET /sync/watchlist/movies
pub async fn watchlist_movies(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let user = match authorize(&state, &uri, &headers).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };
    let state = state.read().await;
    let movies = state
        .lists
        .get(&user)
        .map(|l| l.watchlist_movies.clone())
        .unwrap_or_default();
    (StatusCode::OK, Json(movies)).into_response()
}

/// POST /sync/collection
pub async fn add_to_collection(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Json(items): Json<SyncItems>,
) -> Response {
    let user = match authorize(&state, &uri, &headers).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };
    let mut state = state.write().await;
    let (added, existing, not_found) = state.collect_movies(&user, &items.movies);

    let response = SyncResponse {
        added: Some(stats(added)),
        existing: Some(stats(existing)),
        deleted: None,
        not_found: Some(SyncErrors {
            movies: not_found,
            // the mock has no show catalogue
            shows: items.shows,
            ..Default::default()
        }),
    };
    (StatusCode::CREATED, Json(response)).into_response()
}

/// POST /sync/collection/remove
pub async fn remove_from_collection(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Json(items): Json<SyncItems>,
) -> Response {
    let user = match authorize(&state, &uri, &headers).await {
        Ok(user) => user,
        Err(rejection) => return rejection,
    };
    let mut state = state.write().await;
    let (deleted, not_found) = state.uncollect_movies(&user, &items.movies);

    let response = SyncResponse {
        added: None,
        existing: None,
        deleted: Some(stats(deleted)),
        not_found: Some(SyncErrors {
            movies: not_found,
            shows: items.shows,
            ..Default::default()
        }),
    };
    (StatusCode::OK, Json(response)).into_response()
}

fn stats(movies: u32) -> SyncStats {
    SyncStats {
        movies: Some(movies),
        episodes: Some(0),
        ..Default::default()
    }
}
