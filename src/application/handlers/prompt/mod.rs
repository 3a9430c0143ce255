//! Handlers answering a pending "should I add it?" prompt.
//!
//! These are the only handlers that read session state: the `promptData`
//! payload written by the movie handlers on the previous turn.

mod confirm_add;
mod decline;

pub use confirm_add::ConfirmAddHandler;
pub use decline::DeclineHandler;

use crate::application::SkillError;
use crate::domain::catalog::{PromptData, PROMPT_DATA_KEY};
use crate::domain::skill::SkillRequest;

/// Reads the pending prompt from the request's session attributes.
fn pending_prompt(request: &SkillRequest) -> Result<Option<PromptData>, SkillError> {
    request
        .session_attribute(PROMPT_DATA_KEY)
        .map(|value| PromptData::from_value(value).map_err(|e| SkillError::Session(e.to_string())))
        .transpose()
}
