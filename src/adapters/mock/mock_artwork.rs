//! Mock Artwork Lookup for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::domain::catalog::{Artwork, MovieResult};
use crate::ports::{ArtworkError, ArtworkLookup};

/// Returns the same configured artwork for every item.
#[derive(Debug, Clone, Default)]
pub struct MockArtworkLookup {
    artwork: Option<Artwork>,
    failure: Option<ArtworkError>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl MockArtworkLookup {
    /// A lookup that never finds artwork.
    pub fn none() -> Self {
        Self::default()
    }

    /// A lookup that always finds artwork at `url`.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            artwork: Some(Artwork::new(url)),
            ..Self::default()
        }
    }

    /// A lookup that always fails.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(ArtworkError::Unavailable(message.into())),
            ..Self::default()
        }
    }

    /// Slugs looked up so far.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArtworkLookup for MockArtworkLookup {
    async fn get_artwork(&self, item: &MovieResult) -> Result<Option<Artwork>, ArtworkError> {
        self.lookups.lock().unwrap().push(item.slug.clone());
        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(self.artwork.clone()),
        }
    }
}
