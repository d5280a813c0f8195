//! Mock trakt API server.
//!
//! Provides an axum-based HTTP server that simulates the v1 and v2 trakt
//! APIs on one port.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;
use super::handlers;
use super::state::{MockState, RecordedRequest};

/// A mock trakt API server for testing.
///
/// The server runs in the background; point a session at it with
/// [`Trakt::set_base_url`](crate::Trakt::set_base_url).
pub struct MockServer {
    /// The URL where the server is listening.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: Arc<RwLock<MockState>>,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Fixtures::default_state()).await
    }

    /// Start a mock server with empty state. Any API key is accepted.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Server error");
        });

        Self {
            url: format!("http://{}", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock server.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows modifying the mock data during a test.
    pub fn state(&self) -> Arc<RwLock<MockState>> {
        self.state.clone()
    }

    /// Every request the server has received so far.
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.state.read().await.requests.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task. It's safe to call multiple times.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// Create the axum router with all routes.
pub fn create_router(state: Arc<RwLock<MockState>>) -> Router {
    Router::new()
        // Auth
        .route("/auth/login", post(handlers::login))
        // Calendars
        .route(
            "/calendars/shows/new/:start/:days",
            get(handlers::calendar_new_shows),
        )
        .route(
            "/calendars/shows/premieres/:start/:days",
            get(handlers::calendar_season_premieres),
        )
        .route("/calendars/shows/:start/:days", get(handlers::calendar_shows))
        .route("/calendars/movies/:start/:days", get(handlers::calendar_movies))
        // Movies and genres
        .route("/movies/popular", get(handlers::popular_movies))
        .route("/movies/:id", get(handlers::get_movie))
        .route("/genres/movies", get(handlers::list_genres))
        .route("/genres/shows", get(handlers::list_genres))
        // Sync
        .route("/sync/last_activities", get(handlers::last_activities))
        .route("/sync/collection/movies", get(handlers::collection_movies))
        .route("/sync/collection", post(handlers::add_to_collection))
        .route(
            "/sync/collection/remove",
            post(handlers::remove_from_collection),
        )
        .route("/sync/watchlist/movies", get(handlers::watchlist_movies))
        // v1
        .route("/account/test/:apikey", post(handlers::v1_account_test))
        .route(
            "/calendar/shows.json/:apikey/:date/:days",
            get(handlers::v1_calendar_shows),
        )
        // Health check
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}
