//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application handlers and the outside world. Adapters implement these ports.
//!
//! - `MediaProvider` - Catalog service that tracks and searches media
//! - `ArtworkLookup` - Resolves displayable artwork for a result

mod artwork_lookup;
mod media_provider;

pub use artwork_lookup::{ArtworkError, ArtworkLookup};
pub use media_provider::{MediaProvider, ProviderError};
