//! HTTP request handlers for the mock server.
//!
//! Every handler first records the request and checks the API key, then
//! checks the user credentials where the real service requires them.

use std::sync::Arc;

use axum::{
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::interceptor::{HEADER_TRAKT_API_KEY, HEADER_USER_TOKEN};
use crate::mock_server::state::{MockState, RecordedRequest};

pub mod auth;
pub mod calendars;
pub mod movies;
pub mod sync;
pub mod v1;

pub use auth::*;
pub use calendars::*;
pub use movies::*;
pub use sync::*;
pub use v1::*;

pub type SharedState = Arc<RwLock<MockState>>;

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// JSON error body with the given status.
pub(crate) fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": status.canonical_reason().unwrap_or("error"),
            "message": message
        })),
    )
        .into_response()
}

/// Record the request and check the v2 API key header.
pub(crate) async fn admit(state: &SharedState, path: &str, headers: &HeaderMap) -> Result<(), Response> {
    let api_key = header(headers, HEADER_TRAKT_API_KEY);
    record(state, path, api_key.clone(), headers).await;

    let state = state.read().await;
    if !state.accepts_api_key(api_key.as_deref()) {
        return Err(error(StatusCode::UNAUTHORIZED, "invalid API key"));
    }
    Ok(())
}

pub(crate) async fn record(
    state: &SharedState,
    path: &str,
    api_key: Option<String>,
    headers: &HeaderMap,
) {
    let mut state = state.write().await;
    state.requests.push(RecordedRequest {
        path: path.to_string(),
        api_key,
        user_token: header(headers, HEADER_USER_TOKEN),
        authorization: header(headers, "authorization"),
    });
}

/// The user the request's token belongs to.
pub(crate) async fn require_user(state: &SharedState, headers: &HeaderMap) -> Result<String, Response> {
    let token = header(headers, HEADER_USER_TOKEN)
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "a valid access token must be provided"))?;

    let state = state.read().await;
    state
        .user_for_token(&token)
        .map(str::to_string)
        .ok_or_else(|| error(StatusCode::UNAUTHORIZED, "token is invalid or revoked"))
}
