//! Artwork Adapters.
//!
//! - `PosterArtworkLookup` - picks a poster (or fanart) from the result's images

mod poster_lookup;

pub use poster_lookup::PosterArtworkLookup;
