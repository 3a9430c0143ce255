//! Mock adapters.
//!
//! Configurable in-memory implementations of the ports, used by handler
//! tests and by the HTTP integration tests.

mod mock_artwork;
mod mock_provider;

pub use mock_artwork::MockArtworkLookup;
pub use mock_provider::{MockMediaProvider, ProviderCall};
