//! Login endpoint handler.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::IntoResponse,
    Json,
};

use super::{admit, error, SharedState};
use crate::{Login, UserToken};

/// POST /auth/login
pub async fn login(
    State(state): State<SharedState>,
    uri: Uri,
    headers: HeaderMap,
    Json(login): Json<Login>,
) -> impl IntoResponse {
    if let Err(rejection) = admit(&state, uri.path(), &headers).await {
        return rejection;
    }

    let mut state = state.write().await;
    match state.login(&login.login, &login.password) {
        Some(token) => (StatusCode::OK, Json(UserToken { token: Some(token) })).into_response(),
        None => error(StatusCode::UNAUTHORIZED, "invalid login or password"),
    }
}
