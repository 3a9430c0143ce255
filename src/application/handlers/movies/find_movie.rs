//! FindMovieHandler - checks the wanted list for a movie, offering to add it
//! when it is not there yet.

use std::sync::Arc;

use tracing::debug;

use crate::application::SkillError;
use crate::domain::catalog::{build_reprompt, replies, PROMPT_DATA_KEY};
use crate::domain::foundation::ContentType;
use crate::domain::skill::{build_card, build_display, SkillRequest, SkillResponse, MOVIE_NAME_SLOT};
use crate::ports::{ArtworkLookup, MediaProvider};

use super::query::build_query;

/// Handler for `FindMovieIntent`.
pub struct FindMovieHandler {
    provider: Arc<dyn MediaProvider>,
    artwork: Arc<dyn ArtworkLookup>,
}

impl FindMovieHandler {
    pub fn new(provider: Arc<dyn MediaProvider>, artwork: Arc<dyn ArtworkLookup>) -> Self {
        Self { provider, artwork }
    }

    pub async fn handle(
        &self,
        request: &SkillRequest,
        mut response: SkillResponse,
    ) -> Result<SkillResponse, SkillError> {
        let Some(movie_name) = request.slot(MOVIE_NAME_SLOT) else {
            debug!("find movie requested without a movie name");
            return Ok(response.say(replies::no_movie_slot()));
        };

        let tracked = self.provider.list(movie_name).await?;
        let Some(result) = tracked.first() else {
            return self.search_catalog(request, response).await;
        };

        debug!(title = %result.title, year = result.year, "movie already tracked");
        let text = replies::already_wanted(&result.title, result.year);

        if let Some(artwork) = self.artwork.get_artwork(result).await? {
            let title = result.display_title();
            response = response.card(build_card(&title, &artwork, &text));
            if request.has_display() {
                response = response.directive(build_display(title, &artwork, &text, &result.slug));
            }
        }

        Ok(response.say(text))
    }

    /// Not on the list: search the catalog and offer the top match.
    async fn search_catalog(
        &self,
        request: &SkillRequest,
        response: SkillResponse,
    ) -> Result<SkillResponse, SkillError> {
        let query = build_query(request);
        let response = response.say(replies::no_movie_found(&query));

        let results = self.provider.search(&query).await?;
        let Some(top) = results.first() else {
            debug!(query = %query, "no catalog results");
            return Ok(response);
        };

        debug!(query = %query, results = results.len(), "offering top search result");
        Ok(response
            .say(replies::add_prompt(&top.title, top.year))
            .session(
                PROMPT_DATA_KEY,
                build_reprompt(&results, ContentType::Movies).to_value(),
            )
            .should_end_session(false))
    }
}
