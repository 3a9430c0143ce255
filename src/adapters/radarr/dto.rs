//! Radarr v3 API wire types.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{CoverType, MediaImage, MovieResult};

/// A movie as returned by `/movie` and `/movie/lookup`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrMovie {
    pub title: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub title_slug: Option<String>,
    #[serde(default)]
    pub tmdb_id: i64,
    #[serde(default)]
    pub images: Vec<RadarrImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadarrImage {
    pub cover_type: CoverType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
}

impl RadarrMovie {
    /// Converts to the domain result. Relative image paths (served by Radarr
    /// itself) are resolved against `base_url`.
    pub fn into_result(self, base_url: &str) -> MovieResult {
        let slug = self
            .title_slug
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("tmdb-{}", self.tmdb_id));

        let images = self
            .images
            .into_iter()
            .filter_map(|image| {
                let url = image.remote_url.or(image.url)?;
                let url = if url.starts_with('/') {
                    format!("{}{}", base_url.trim_end_matches('/'), url)
                } else {
                    url
                };
                Some(MediaImage {
                    cover_type: image.cover_type,
                    url,
                })
            })
            .collect();

        MovieResult {
            title: self.title,
            year: self.year,
            slug,
            tmdb_id: self.tmdb_id,
            images,
        }
    }
}

/// Body for `POST /movie`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddMovieRequest {
    pub title: String,
    pub year: i32,
    pub tmdb_id: i64,
    pub title_slug: String,
    pub images: Vec<RadarrImage>,
    pub quality_profile_id: u32,
    pub root_folder_path: String,
    pub monitored: bool,
    pub minimum_availability: &'static str,
    pub add_options: AddOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOptions {
    pub search_for_movie: bool,
}

impl AddMovieRequest {
    pub fn new(
        item: &MovieResult,
        quality_profile_id: u32,
        root_folder_path: impl Into<String>,
        search_for_movie: bool,
    ) -> Self {
        Self {
            title: item.title.clone(),
            year: item.year,
            tmdb_id: item.tmdb_id,
            title_slug: item.slug.clone(),
            images: item
                .images
                .iter()
                .map(|image| RadarrImage {
                    cover_type: image.cover_type,
                    url: None,
                    remote_url: Some(image.url.clone()),
                })
                .collect(),
            quality_profile_id,
            root_folder_path: root_folder_path.into(),
            monitored: true,
            minimum_availability: "released",
            add_options: AddOptions { search_for_movie },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_lookup_result() {
        let movie: RadarrMovie = serde_json::from_value(json!({
            "title": "Inception",
            "year": 2010,
            "titleSlug": "inception-27205",
            "tmdbId": 27205,
            "images": [
                { "coverType": "poster", "remoteUrl": "https://image.tmdb.org/p.jpg" },
                { "coverType": "fanart", "url": "/MediaCover/1/fanart.jpg" },
                { "coverType": "banner" }
            ],
            "overview": "ignored"
        }))
        .unwrap();

        let result = movie.into_result("http://radarr.local:7878/");
        assert_eq!(result.title, "Inception");
        assert_eq!(result.year, 2010);
        assert_eq!(result.slug, "inception-27205");
        assert_eq!(result.tmdb_id, 27205);
        assert_eq!(result.images.len(), 2);
        assert_eq!(result.images[0].url, "https://image.tmdb.org/p.jpg");
        assert_eq!(
            result.images[1].url,
            "http://radarr.local:7878/MediaCover/1/fanart.jpg"
        );
    }

    #[test]
    fn missing_slug_falls_back_to_tmdb_id() {
        let movie: RadarrMovie =
            serde_json::from_value(json!({ "title": "Obscure", "tmdbId": 42 })).unwrap();
        let result = movie.into_result("http://radarr");
        assert_eq!(result.slug, "tmdb-42");
        assert_eq!(result.year, 0);
    }

    #[test]
    fn add_request_carries_profile_and_folder() {
        let item = MovieResult::new("Heat", 1995, "heat-949")
            .with_tmdb_id(949)
            .with_image(CoverType::Poster, "https://image.tmdb.org/heat.jpg");

        let body = serde_json::to_value(AddMovieRequest::new(&item, 4, "/movies", true)).unwrap();
        assert_eq!(
            body,
            json!({
                "title": "Heat",
                "year": 1995,
                "tmdbId": 949,
                "titleSlug": "heat-949",
                "images": [{ "coverType": "poster", "remoteUrl": "https://image.tmdb.org/heat.jpg" }],
                "qualityProfileId": 4,
                "rootFolderPath": "/movies",
                "monitored": true,
                "minimumAvailability": "released",
                "addOptions": { "searchForMovie": true }
            })
        );
    }
}
