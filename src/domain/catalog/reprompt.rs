//! Session payload carried between a prompt and the user's yes/no answer.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ContentType;

use super::MovieResult;

/// Session key under which the pending prompt is stored.
pub const PROMPT_DATA_KEY: &str = "promptData";

/// Results offered to the user, first entry being the one currently proposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptData {
    #[serde(rename = "type")]
    pub content_type: ContentType,
    pub results: Vec<MovieResult>,
}

impl PromptData {
    /// The result currently being offered.
    pub fn current(&self) -> Option<&MovieResult> {
        self.results.first()
    }

    /// Drops the current result. Returns the result offered next together
    /// with the remaining payload, or `None` when nothing is left to offer.
    pub fn advance(mut self) -> Option<(MovieResult, Self)> {
        if self.results.len() <= 1 {
            return None;
        }
        self.results.remove(0);
        let next = self.results[0].clone();
        Some((next, self))
    }

    /// Serialises into a session attribute value.
    pub fn to_value(&self) -> Value {
        // Plain data with string keys, serialisation cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    /// Reads the payload back from a session attribute.
    pub fn from_value(value: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

/// Packages search results for the next turn.
pub fn build_reprompt(results: &[MovieResult], content_type: ContentType) -> PromptData {
    PromptData {
        content_type,
        results: results.to_vec(),
    }
}
