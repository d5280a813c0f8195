//! Movie and genre endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{admit, error, SharedState};
use crate::pagination::{
    HEADER_PAGINATION_ITEM_COUNT, HEADER_PAGINATION_LIMIT, HEADER_PAGINATION_PAGE,
    HEADER_PAGINATION_PAGE_COUNT,
};
use crate::Movie;

/// Query parameters for paginated listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// GET /movies/popular
pub async fn popular_movies(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<ListQuery>,
) -> Response {
    if let Err(rejection) = admit(&state, uri.path(), &headers).await {
        return rejection;
    }
    let state = state.read().await;

    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);
    let total = state.movies.len();

    // Apply pagination
    let start = ((page - 1) * limit) as usize;
    let end = (start + limit as usize).min(total);
    let movies: Vec<Movie> = if start < total {
        state.movies[start..end].to_vec()
    } else {
        vec![]
    };

    let page_count = total.div_ceil(limit as usize);
    let mut response = (StatusCode::OK, Json(movies)).into_response();
    let response_headers = response.headers_mut();
    for (name, value) in [
        (HEADER_PAGINATION_PAGE, page as usize),
        (HEADER_PAGINATION_LIMIT, limit as usize),
        (HEADER_PAGINATION_PAGE_COUNT, page_count),
        (HEADER_PAGINATION_ITEM_COUNT, total),
    ] {
        response_headers.insert(name, HeaderValue::from(value));
    }
    response
}

/// GET /movies/{id}
pub async fn get_movie(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(rejection) = admit(&state, uri.path(), &headers).await {
        return rejection;
    }
    let state = state.read().await;

    match state.find_movie_by_path_id(&id) {
        Some(movie) => (StatusCode::OK, Json(movie.clone())).into_response(),
        None => error(
            StatusCode::NOT_FOUND,
            &format!("No movie found with id: {}", id),
        ),
    }
}

/// GET /genres/movies and /genres/shows
pub async fn list_genres(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if let Err(rejection) = admit(&state, uri.path(), &headers).await {
        return rejection;
    }
    let state = state.read().await;
    (StatusCode::OK, Json(state.genres.clone())).into_response()
}
