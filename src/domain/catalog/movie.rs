//! Catalog results and artwork references.

use serde::{Deserialize, Serialize};

/// A movie returned by a catalog provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResult {
    pub title: String,
    pub year: i32,
    /// Stable identifier, used as the display template token.
    pub slug: String,
    #[serde(default)]
    pub tmdb_id: i64,
    #[serde(default)]
    pub images: Vec<MediaImage>,
}

impl MovieResult {
    pub fn new(title: impl Into<String>, year: i32, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            year,
            slug: slug.into(),
            tmdb_id: 0,
            images: Vec::new(),
        }
    }

    pub fn with_tmdb_id(mut self, tmdb_id: i64) -> Self {
        self.tmdb_id = tmdb_id;
        self
    }

    pub fn with_image(mut self, cover_type: CoverType, url: impl Into<String>) -> Self {
        self.images.push(MediaImage {
            cover_type,
            url: url.into(),
        });
        self
    }

    /// Title with the release year in parentheses, e.g. `Dune (2021)`.
    pub fn display_title(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }

    /// Loose title match used when checking the tracked list: case, spacing
    /// and punctuation are ignored, and `name` may be a fragment of the title.
    pub fn title_matches(&self, name: &str) -> bool {
        let name = normalize_title(name);
        !name.is_empty() && normalize_title(&self.title).contains(&name)
    }

    /// First image of the given cover type.
    pub fn image(&self, cover_type: CoverType) -> Option<&MediaImage> {
        self.images.iter().find(|i| i.cover_type == cover_type)
    }
}

/// An image attached to a catalog result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaImage {
    pub cover_type: CoverType,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverType {
    Poster,
    Fanart,
    Banner,
    #[serde(other)]
    Other,
}

/// Reference to artwork that a device can load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub url: String,
}

impl Artwork {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn normalize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_title_includes_year() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021");
        assert_eq!(movie.display_title(), "Dune (2021)");
    }

    #[test]
    fn title_match_ignores_case_and_punctuation() {
        let movie = MovieResult::new("Spider-Man: Into the Spider-Verse", 2018, "spider-verse");
        assert!(movie.title_matches("spiderman into the spiderverse"));
        assert!(movie.title_matches("Spider Verse"));
        assert!(!movie.title_matches("Batman"));
        assert!(!movie.title_matches("  "));
    }

    #[test]
    fn finds_image_by_cover_type() {
        let movie = MovieResult::new("Dune", 2021, "dune-2021")
            .with_image(CoverType::Fanart, "https://img/fanart.jpg")
            .with_image(CoverType::Poster, "https://img/poster.jpg");

        assert_eq!(
            movie.image(CoverType::Poster).map(|i| i.url.as_str()),
            Some("https://img/poster.jpg")
        );
        assert!(movie.image(CoverType::Banner).is_none());
    }

    #[test]
    fn unknown_cover_types_deserialize_as_other() {
        let image: MediaImage =
            serde_json::from_value(json!({ "coverType": "clearlogo", "url": "u" })).unwrap();
        assert_eq!(image.cover_type, CoverType::Other);
    }
}
