use crate::error::Result;
use crate::models::{
    BaseMovie, BaseShow, Extended, LastActivities, RatedEpisode, RatedMovie, RatedSeason,
    RatedShow, RatingsFilter, SyncItems, SyncResponse, WatchlistedEpisode,
};

use super::{ExtendedQuery, Resource, ResourceHandle, ResourceName};

/// The user's collection, watched history, ratings and watchlist (v2,
/// requires a user token).
#[derive(Debug, Clone)]
pub struct SyncResource {
    handle: ResourceHandle,
}

impl Resource for SyncResource {
    const NAME: ResourceName = ResourceName::Sync;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl SyncResource {
    /// When each list last changed. Compare against a stored value to decide
    /// whether a full download is needed.
    #[tracing::instrument(skip(self))]
    pub async fn last_activities(&self) -> Result<LastActivities> {
        self.handle.get_json("last_activities").await
    }

    // collection

    #[tracing::instrument(skip(self))]
    pub async fn collection_movies(&self, extended: Extended) -> Result<Vec<BaseMovie>> {
        self.list("collection/movies", extended).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn collection_shows(&self, extended: Extended) -> Result<Vec<BaseShow>> {
        self.list("collection/shows", extended).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn add_items_to_collection(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("collection", items).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn delete_items_from_collection(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("collection/remove", items).await
    }

    // watched

    #[tracing::instrument(skip(self))]
    pub async fn watched_movies(&self, extended: Extended) -> Result<Vec<BaseMovie>> {
        self.list("watched/movies", extended).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn watched_shows(&self, extended: Extended) -> Result<Vec<BaseShow>> {
        self.list("watched/shows", extended).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn add_items_to_watched_history(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("history", items).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn delete_items_from_watched_history(
        &self,
        items: &SyncItems,
    ) -> Result<SyncResponse> {
        self.handle.post_json("history/remove", items).await
    }

    // ratings

    #[tracing::instrument(skip(self))]
    pub async fn ratings_movies(
        &self,
        filter: RatingsFilter,
        extended: Extended,
    ) -> Result<Vec<RatedMovie>> {
        self.list(&format!("ratings/movies{}", filter.path_suffix()), extended)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn ratings_shows(
        &self,
        filter: RatingsFilter,
        extended: Extended,
    ) -> Result<Vec<RatedShow>> {
        self.list(&format!("ratings/shows{}", filter.path_suffix()), extended)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn ratings_seasons(
        &self,
        filter: RatingsFilter,
        extended: Extended,
    ) -> Result<Vec<RatedSeason>> {
        self.list(&format!("ratings/seasons{}", filter.path_suffix()), extended)
            .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn ratings_episodes(
        &self,
        filter: RatingsFilter,
        extended: Extended,
    ) -> Result<Vec<RatedEpisode>> {
        self.list(&format!("ratings/episodes{}", filter.path_suffix()), extended)
            .await
    }

    /// Rate items. Each movie, show, season or episode carries its rating.
    #[tracing::instrument(skip(self, items))]
    pub async fn add_ratings(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("ratings", items).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn delete_ratings(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("ratings/remove", items).await
    }

    // watchlist

    #[tracing::instrument(skip(self))]
    pub async fn watchlist_movies(&self, extended: Extended) -> Result<Vec<BaseMovie>> {
        self.list("watchlist/movies", extended).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn watchlist_shows(&self, extended: Extended) -> Result<Vec<BaseShow>> {
        self.list("watchlist/shows", extended).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn watchlist_episodes(&self, extended: Extended) -> Result<Vec<WatchlistedEpisode>> {
        self.list("watchlist/episodes", extended).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn add_items_to_watchlist(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("watchlist", items).await
    }

    #[tracing::instrument(skip(self, items))]
    pub async fn delete_items_from_watchlist(&self, items: &SyncItems) -> Result<SyncResponse> {
        self.handle.post_json("watchlist/remove", items).await
    }

    async fn list<T: serde::de::DeserializeOwned>(
        &self,
        sub: &str,
        extended: Extended,
    ) -> Result<Vec<T>> {
        self.handle
            .get_json_with_query(sub, &ExtendedQuery { extended })
            .await
    }
}
