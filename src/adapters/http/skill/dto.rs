//! HTTP DTOs for the skill endpoint.
//!
//! The request envelope is deserialized straight into the domain
//! `SkillRequest`; this module holds the outgoing envelope.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::domain::skill::{Card, DisplayDirective, SkillResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response envelope returned to the voice platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: &'static str,
    pub session_attributes: HashMap<String, Value>,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<DisplayDirective>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub ssml: String,
}

impl From<SkillResponse> for ResponseEnvelope {
    fn from(response: SkillResponse) -> Self {
        let output_speech = (!response.speech_text().is_empty()).then(|| OutputSpeech {
            kind: "SSML",
            ssml: response.ssml(),
        });

        Self {
            version: "1.0",
            session_attributes: response.session_attributes().clone(),
            response: ResponseBody {
                output_speech,
                card: response.card_ref().cloned(),
                directives: response.directives().to_vec(),
                should_end_session: response.ends_session(),
            },
        }
    }
}

/// Error body for requests rejected before reaching a handler.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self {
            code: "FORBIDDEN".to_string(),
            message: message.into(),
        }
    }
}
