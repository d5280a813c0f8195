//! Mock trakt API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the trakt
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests:
//! tokens issued by a login are accepted by later sync calls, and items
//! added to a collection show up when the collection is read back.
//!
//! # Example
//!
//! ```ignore
//! use trakt::mock_server::{MockServer, TEST_API_KEY, TEST_PASSWORD, TEST_USERNAME};
//! use trakt::{Extended, SyncResource, Trakt};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let mut trakt = Trakt::v2();
//!     trakt.set_api_key(TEST_API_KEY).set_base_url(server.url());
//!     trakt.set_login(TEST_USERNAME, TEST_PASSWORD).await.unwrap();
//!
//!     let sync = trakt.resource::<SyncResource>().unwrap();
//!     assert!(sync.collection_movies(Extended::Min).await.unwrap().is_empty());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{Fixtures, TEST_API_KEY, TEST_PASSWORD, TEST_PASSWORD_SHA1, TEST_USERNAME};
pub use server::{create_router, MockServer};
pub use state::{MockState, RecordedRequest, UserLists};
