//! DeclineHandler - moves on to the next search result when the user says no.

use tracing::debug;

use crate::application::SkillError;
use crate::domain::catalog::{replies, PROMPT_DATA_KEY};
use crate::domain::skill::{SkillRequest, SkillResponse};

use super::pending_prompt;

/// Handler for `AMAZON.NoIntent`.
#[derive(Debug, Default)]
pub struct DeclineHandler;

impl DeclineHandler {
    pub fn new() -> Self {
        Self
    }

    pub async fn handle(
        &self,
        request: &SkillRequest,
        response: SkillResponse,
    ) -> Result<SkillResponse, SkillError> {
        let Some(prompt) = pending_prompt(request)? else {
            debug!("decline without a pending prompt");
            return Ok(response.say(replies::nothing_to_confirm()));
        };

        // Leaving promptData out of the response clears it for the next turn.
        let Some((item, next)) = prompt.advance() else {
            return Ok(response.say(replies::no_more_results()));
        };

        debug!(title = %item.title, year = item.year, "offering next search result");
        Ok(response
            .say(replies::next_prompt(&item.title, item.year))
            .session(PROMPT_DATA_KEY, next.to_value())
            .should_end_session(false))
    }
}
