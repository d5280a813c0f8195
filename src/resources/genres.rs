use crate::error::Result;
use crate::models::Genre;

use super::{Resource, ResourceHandle, ResourceName};

/// Genre lists (v2). They rarely change and are worth caching.
#[derive(Debug, Clone)]
pub struct Genres {
    handle: ResourceHandle,
}

impl Resource for Genres {
    const NAME: ResourceName = ResourceName::Genres;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Genres {
    #[tracing::instrument(skip(self))]
    pub async fn movies(&self) -> Result<Vec<Genre>> {
        self.handle.get_json("movies").await
    }

    #[tracing::instrument(skip(self))]
    pub async fn shows(&self) -> Result<Vec<Genre>> {
        self.handle.get_json("shows").await
    }
}
