use crate::error::Result;
use crate::models::{Extended, Show};
use crate::pagination::{Page, PaginationParams};

use super::{ExtendedQuery, PagedQuery, Resource, ResourceHandle, ResourceName};

/// Show lookups and lists (v2).
#[derive(Debug, Clone)]
pub struct Shows {
    handle: ResourceHandle,
}

impl Resource for Shows {
    const NAME: ResourceName = ResourceName::Shows;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Shows {
    /// A single show by trakt id, slug or IMDb id.
    #[tracing::instrument(skip(self))]
    pub async fn summary(&self, id: &str, extended: Extended) -> Result<Show> {
        let sub = urlencoding::encode(id);
        self.handle
            .get_json_with_query(&sub, &ExtendedQuery { extended })
            .await
    }

    /// Most popular shows.
    #[tracing::instrument(skip(self))]
    pub async fn popular(
        &self,
        pagination: PaginationParams,
        extended: Extended,
    ) -> Result<Page<Show>> {
        let query = PagedQuery {
            extended,
            pagination,
        };
        let response = self.handle.get_with_query("popular", &query).await?;
        let items = response.json()?;
        Ok(Page::from_response(items, &response, pagination))
    }
}
