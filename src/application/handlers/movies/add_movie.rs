//! AddMovieHandler - searches the catalog and offers to add the top match.

use std::sync::Arc;

use tracing::debug;

use crate::application::SkillError;
use crate::domain::catalog::{build_reprompt, replies, PROMPT_DATA_KEY};
use crate::domain::foundation::ContentType;
use crate::domain::skill::{build_display, SkillRequest, SkillResponse, MOVIE_NAME_SLOT};
use crate::ports::{ArtworkLookup, MediaProvider};

use super::query::build_query;

/// Handler for `AddMovieIntent`.
pub struct AddMovieHandler {
    provider: Arc<dyn MediaProvider>,
    artwork: Arc<dyn ArtworkLookup>,
}

impl AddMovieHandler {
    pub fn new(provider: Arc<dyn MediaProvider>, artwork: Arc<dyn ArtworkLookup>) -> Self {
        Self { provider, artwork }
    }

    pub async fn handle(
        &self,
        request: &SkillRequest,
        response: SkillResponse,
    ) -> Result<SkillResponse, SkillError> {
        let Some(movie_name) = request.slot(MOVIE_NAME_SLOT) else {
            debug!("add movie requested without a movie name");
            return Ok(response.say(replies::no_movie_slot()));
        };

        let query = build_query(request);
        let results = self.provider.search(&query).await?;

        let Some(top) = results.first() else {
            debug!(query = %query, "no catalog results");
            return Ok(response.say(replies::add_not_found(movie_name)));
        };

        debug!(query = %query, results = results.len(), "offering top search result");
        let prompt = replies::add_prompt(&top.title, top.year);
        let mut response = response
            .say(&prompt)
            .session(
                PROMPT_DATA_KEY,
                build_reprompt(&results, ContentType::Movies).to_value(),
            )
            .should_end_session(false);

        if let Some(artwork) = self.artwork.get_artwork(top).await? {
            if request.has_display() {
                response = response.directive(build_display(
                    top.display_title(),
                    &artwork,
                    prompt,
                    &top.slug,
                ));
            }
        }

        Ok(response)
    }
}
