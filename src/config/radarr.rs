//! Radarr catalog configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Radarr connection and add-defaults configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RadarrConfig {
    /// Base URL of the Radarr instance, e.g. `http://radarr.local:7878`
    pub base_url: String,

    /// Radarr API key
    pub api_key: String,

    /// Quality profile assigned to added movies
    #[serde(default = "default_quality_profile")]
    pub quality_profile_id: u32,

    /// Root folder added movies are stored under
    pub root_folder_path: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Start a download search immediately after adding
    #[serde(default = "default_search_on_add")]
    pub search_on_add: bool,
}

impl RadarrConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate Radarr configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("RADARR__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidRadarrUrl);
        }
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("RADARR__API_KEY"));
        }
        if self.root_folder_path.is_empty() {
            return Err(ValidationError::MissingRequired("RADARR__ROOT_FOLDER_PATH"));
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_quality_profile() -> u32 {
    1
}

fn default_timeout() -> u64 {
    10
}

fn default_search_on_add() -> bool {
    true
}
