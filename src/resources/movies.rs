use crate::error::Result;
use crate::models::{Extended, Movie, TrendingMovie};
use crate::pagination::{Page, PaginationParams};

use super::{ExtendedQuery, PagedQuery, Resource, ResourceHandle, ResourceName};

/// Movie lookups and lists (v2).
#[derive(Debug, Clone)]
pub struct Movies {
    handle: ResourceHandle,
}

impl Resource for Movies {
    const NAME: ResourceName = ResourceName::Movies;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Movies {
    /// A single movie by trakt id, slug or IMDb id.
    #[tracing::instrument(skip(self))]
    pub async fn summary(&self, id: &str, extended: Extended) -> Result<Movie> {
        let sub = urlencoding::encode(id);
        self.handle
            .get_json_with_query(&sub, &ExtendedQuery { extended })
            .await
    }

    /// Most popular movies, by rating and number of ratings.
    #[tracing::instrument(skip(self))]
    pub async fn popular(
        &self,
        pagination: PaginationParams,
        extended: Extended,
    ) -> Result<Page<Movie>> {
        let query = PagedQuery {
            extended,
            pagination,
        };
        let response = self.handle.get_with_query("popular", &query).await?;
        let items = response.json()?;
        Ok(Page::from_response(items, &response, pagination))
    }

    /// Movies being watched right now.
    #[tracing::instrument(skip(self))]
    pub async fn trending(
        &self,
        pagination: PaginationParams,
        extended: Extended,
    ) -> Result<Page<TrendingMovie>> {
        let query = PagedQuery {
            extended,
            pagination,
        };
        let response = self.handle.get_with_query("trending", &query).await?;
        let items = response.json()?;
        Ok(Page::from_response(items, &response, pagination))
    }
}
