//! Radarr Provider - Implementation of MediaProvider for Radarr's v3 API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = RadarrProviderConfig::new("http://radarr.local:7878", api_key)
//!     .with_root_folder("/movies")
//!     .with_quality_profile(4);
//!
//! let provider = RadarrProvider::new(config)?;
//! ```
//!
//! # Endpoints
//!
//! - `GET /api/v3/movie` - tracked movies, filtered locally by title
//! - `GET /api/v3/movie/lookup?term=` - catalog search
//! - `POST /api/v3/movie` - add a movie to the tracked list

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::config::RadarrConfig;
use crate::domain::catalog::MovieResult;
use crate::domain::foundation::ContentType;
use crate::ports::{MediaProvider, ProviderError};

use super::dto::{AddMovieRequest, RadarrMovie};

/// Configuration for the Radarr provider.
#[derive(Debug, Clone)]
pub struct RadarrProviderConfig {
    /// API key sent as `X-Api-Key`.
    api_key: Secret<String>,
    /// Base URL of the Radarr instance.
    pub base_url: String,
    /// Quality profile for added movies.
    pub quality_profile_id: u32,
    /// Root folder for added movies.
    pub root_folder_path: String,
    /// Whether adding a movie also starts a search for it.
    pub search_on_add: bool,
    /// Request timeout.
    pub timeout: Duration,
}

impl RadarrProviderConfig {
    /// Creates a new configuration with the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            quality_profile_id: 1,
            root_folder_path: String::new(),
            search_on_add: true,
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the quality profile.
    pub fn with_quality_profile(mut self, id: u32) -> Self {
        self.quality_profile_id = id;
        self
    }

    /// Sets the root folder.
    pub fn with_root_folder(mut self, path: impl Into<String>) -> Self {
        self.root_folder_path = path.into();
        self
    }

    /// Sets whether to search right after adding.
    pub fn with_search_on_add(mut self, search: bool) -> Self {
        self.search_on_add = search;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl From<&RadarrConfig> for RadarrProviderConfig {
    fn from(config: &RadarrConfig) -> Self {
        Self::new(&config.base_url, &config.api_key)
            .with_quality_profile(config.quality_profile_id)
            .with_root_folder(&config.root_folder_path)
            .with_search_on_add(config.search_on_add)
            .with_timeout(config.timeout())
    }
}

/// Radarr API provider implementation.
pub struct RadarrProvider {
    config: RadarrProviderConfig,
    client: Client,
}

impl RadarrProvider {
    /// Creates a new Radarr provider with the given configuration.
    pub fn new(config: RadarrProviderConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds an API endpoint URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v3/{}", self.config.base_url, path)
    }

    /// Sends an authenticated request and decodes the JSON body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ProviderError> {
        let response = request
            .header("X-Api-Key", self.config.api_key())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })?;

        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ProviderError::invalid_response(format!("Failed to parse response: {}", e)))
    }

    /// Maps non-success statuses to provider errors.
    async fn check_status(response: Response) -> Result<Response, ProviderError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(ProviderError::Unauthorized),
            code => Err(ProviderError::unexpected_status(code, body)),
        }
    }

    fn into_results(&self, movies: Vec<RadarrMovie>) -> Vec<MovieResult> {
        movies
            .into_iter()
            .map(|m| m.into_result(&self.config.base_url))
            .collect()
    }
}

#[async_trait]
impl MediaProvider for RadarrProvider {
    fn content_type(&self) -> ContentType {
        ContentType::Movies
    }

    async fn list(&self, name: &str) -> Result<Vec<MovieResult>, ProviderError> {
        let movies: Vec<RadarrMovie> = self.send(self.client.get(self.endpoint("movie"))).await?;
        let total = movies.len();

        let matches: Vec<MovieResult> = self
            .into_results(movies)
            .into_iter()
            .filter(|m| m.title_matches(name))
            .collect();

        debug!(name = %name, total, matched = matches.len(), "listed tracked movies");
        Ok(matches)
    }

    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, ProviderError> {
        let request = self
            .client
            .get(self.endpoint("movie/lookup"))
            .query(&[("term", query)]);
        let movies: Vec<RadarrMovie> = self.send(request).await?;

        debug!(query = %query, results = movies.len(), "searched catalog");
        Ok(self.into_results(movies))
    }

    async fn add(&self, item: &MovieResult) -> Result<MovieResult, ProviderError> {
        let body = AddMovieRequest::new(
            item,
            self.config.quality_profile_id,
            &self.config.root_folder_path,
            self.config.search_on_add,
        );
        let request = self.client.post(self.endpoint("movie")).json(&body);
        let added: RadarrMovie = self.send(request).await?;

        Ok(added.into_result(&self.config.base_url))
    }
}
