//! Artwork Lookup Port - resolves a displayable image for a catalog result.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Artwork, MovieResult};

/// Port for finding artwork to show alongside a result.
#[async_trait]
pub trait ArtworkLookup: Send + Sync {
    /// Returns artwork for the result, or `None` when there is nothing usable.
    async fn get_artwork(&self, item: &MovieResult) -> Result<Option<Artwork>, ArtworkError>;
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtworkError {
    #[error("artwork unavailable: {0}")]
    Unavailable(String),
}
