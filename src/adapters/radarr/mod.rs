//! Radarr Adapters.
//!
//! - `RadarrProvider` - MediaProvider backed by Radarr's v3 REST API

mod dto;
mod radarr_provider;

pub use dto::{AddMovieRequest, RadarrImage, RadarrMovie};
pub use radarr_provider::{RadarrProvider, RadarrProviderConfig};
