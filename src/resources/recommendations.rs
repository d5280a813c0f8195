use crate::error::Result;
use crate::models::{Extended, Movie, Show};

use super::{ExtendedQuery, Resource, ResourceHandle, ResourceName};

/// Personal recommendations (v2, requires a user token).
///
/// Recommendations are based on the watched history of the user and their
/// friends.
#[derive(Debug, Clone)]
pub struct Recommendations {
    handle: ResourceHandle,
}

impl Resource for Recommendations {
    const NAME: ResourceName = ResourceName::Recommendations;

    fn from_handle(handle: ResourceHandle) -> Self {
        Self { handle }
    }
}

impl Recommendations {
    #[tracing::instrument(skip(self))]
    pub async fn movies(&self, extended: Extended) -> Result<Vec<Movie>> {
        self.handle
            .get_json_with_query("movies", &ExtendedQuery { extended })
            .await
    }

    /// Hide a movie from future recommendations.
    #[tracing::instrument(skip(self))]
    pub async fn dismiss_movie(&self, movie_id: &str) -> Result<()> {
        self.handle
            .delete(&format!("movies/{}", urlencoding::encode(movie_id)))
            .await?;
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn shows(&self, extended: Extended) -> Result<Vec<Show>> {
        self.handle
            .get_json_with_query("shows", &ExtendedQuery { extended })
            .await
    }

    /// Hide a show from future recommendations.
    #[tracing::instrument(skip(self))]
    pub async fn dismiss_show(&self, show_id: &str) -> Result<()> {
        self.handle
            .delete(&format!("shows/{}", urlencoding::encode(show_id)))
            .await?;
        Ok(())
    }
}
