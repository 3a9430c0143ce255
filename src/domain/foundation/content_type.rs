//! ContentType enum tagging which catalog a result belongs to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of media a catalog provider manages.
///
/// Providers are registered under this tag and session payloads carry it, so a
/// follow-up turn knows which provider to call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentType {
    Movies,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Movies => write!(f, "MOVIES"),
        }
    }
}
