//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `radarr` - Radarr catalog provider
//! - `artwork` - Artwork selection from provider images
//! - `http` - Voice-platform webhook (axum)
//! - `mock` - Configurable in-memory ports for tests

pub mod artwork;
pub mod http;
pub mod mock;
pub mod radarr;

pub use artwork::PosterArtworkLookup;
pub use radarr::{RadarrProvider, RadarrProviderConfig};
