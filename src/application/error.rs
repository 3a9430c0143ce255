//! Errors surfaced by intent handlers.
//!
//! Handlers do not recover from collaborator failures; they hand them to the
//! caller, which decides what the user hears.

use thiserror::Error;

use crate::ports::{ArtworkError, ProviderError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SkillError {
    #[error("catalog provider failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("artwork lookup failed: {0}")]
    Artwork(#[from] ArtworkError),

    #[error("invalid session state: {0}")]
    Session(String),
}
