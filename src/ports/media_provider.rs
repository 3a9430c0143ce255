//! Media Provider Port - Interface for catalog services that track wanted media.
//!
//! A provider answers two questions for the skill: "is this already on my
//! list?" (`list`) and "what does the catalog know about this title?"
//! (`search`). Follow-up turns use `add` to put a search result on the list.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct StaticProvider;
//!
//! #[async_trait]
//! impl MediaProvider for StaticProvider {
//!     fn content_type(&self) -> ContentType {
//!         ContentType::Movies
//!     }
//!
//!     async fn list(&self, _name: &str) -> Result<Vec<MovieResult>, ProviderError> {
//!         Ok(vec![])
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::MovieResult;
use crate::domain::foundation::ContentType;

/// Port for catalog provider interactions.
#[async_trait]
pub trait MediaProvider: Send + Sync {
    /// The content type this provider manages.
    fn content_type(&self) -> ContentType;

    /// Tracked items whose title matches `name`. Empty when nothing matches.
    async fn list(&self, name: &str) -> Result<Vec<MovieResult>, ProviderError>;

    /// Catalog search, best match first. Empty when nothing matches.
    async fn search(&self, query: &str) -> Result<Vec<MovieResult>, ProviderError>;

    /// Adds a search result to the tracked list and returns the stored item.
    async fn add(&self, item: &MovieResult) -> Result<MovieResult, ProviderError>;
}

/// Errors from catalog providers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// API key rejected.
    #[error("authentication failed")]
    Unauthorized,

    /// Provider answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Failed to parse provider response.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// No provider registered for the content type.
    #[error("no provider configured for {0}")]
    NotConfigured(ContentType),
}

impl ProviderError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an unexpected status error.
    pub fn unexpected_status(status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            ProviderError::Timeout { timeout_secs: 10 }.to_string(),
            "request timed out after 10s"
        );
        assert_eq!(
            ProviderError::unexpected_status(500, "boom").to_string(),
            "unexpected status 500: boom"
        );
        assert_eq!(
            ProviderError::NotConfigured(ContentType::Movies).to_string(),
            "no provider configured for MOVIES"
        );
    }
}
