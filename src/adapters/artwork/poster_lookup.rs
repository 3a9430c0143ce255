//! Poster Artwork Lookup - picks artwork from the images a provider returned.
//!
//! Display devices only load images over HTTPS, so plain `http://` URLs are
//! upgraded and anything else is ignored.

use async_trait::async_trait;

use crate::domain::catalog::{Artwork, CoverType, MovieResult};
use crate::ports::{ArtworkError, ArtworkLookup};

/// Cover types tried in order of preference.
const PREFERRED_COVERS: [CoverType; 2] = [CoverType::Poster, CoverType::Fanart];

/// Artwork lookup over a result's own image list.
#[derive(Debug, Clone, Default)]
pub struct PosterArtworkLookup;

impl PosterArtworkLookup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtworkLookup for PosterArtworkLookup {
    async fn get_artwork(&self, item: &MovieResult) -> Result<Option<Artwork>, ArtworkError> {
        Ok(PREFERRED_COVERS
            .iter()
            .filter_map(|cover| item.image(*cover))
            .find_map(|image| secure_url(&image.url))
            .map(Artwork::new))
    }
}

fn secure_url(url: &str) -> Option<String> {
    if url.starts_with("https://") {
        Some(url.to_string())
    } else {
        url.strip_prefix("http://")
            .map(|rest| format!("https://{}", rest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prefers_poster_over_fanart() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021")
            .with_image(CoverType::Fanart, "https://img/fanart.jpg")
            .with_image(CoverType::Poster, "https://img/poster.jpg");

        let artwork = PosterArtworkLookup::new().get_artwork(&movie).await.unwrap();
        assert_eq!(artwork, Some(Artwork::new("https://img/poster.jpg")));
    }

    #[tokio::test]
    async fn falls_back_to_fanart() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021")
            .with_image(CoverType::Banner, "https://img/banner.jpg")
            .with_image(CoverType::Fanart, "https://img/fanart.jpg");

        let artwork = PosterArtworkLookup::new().get_artwork(&movie).await.unwrap();
        assert_eq!(artwork, Some(Artwork::new("https://img/fanart.jpg")));
    }

    #[tokio::test]
    async fn upgrades_http_to_https() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021")
            .with_image(CoverType::Poster, "http://image.tmdb.org/poster.jpg");

        let artwork = PosterArtworkLookup::new().get_artwork(&movie).await.unwrap();
        assert_eq!(artwork, Some(Artwork::new("https://image.tmdb.org/poster.jpg")));
    }

    #[tokio::test]
    async fn no_usable_image_is_none() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021")
            .with_image(CoverType::Poster, "ftp://img/poster.jpg")
            .with_image(CoverType::Banner, "https://img/banner.jpg");

        let artwork = PosterArtworkLookup::new().get_artwork(&movie).await.unwrap();
        assert_eq!(artwork, None);
    }
}
