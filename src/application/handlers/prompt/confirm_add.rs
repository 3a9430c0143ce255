//! ConfirmAddHandler - adds the currently offered result when the user says yes.

use tracing::{debug, info};

use crate::application::{MediaProviders, SkillError};
use crate::domain::catalog::replies;
use crate::domain::skill::{SkillRequest, SkillResponse};

use super::pending_prompt;

/// Handler for `AMAZON.YesIntent`.
pub struct ConfirmAddHandler {
    providers: MediaProviders,
}

impl ConfirmAddHandler {
    pub fn new(providers: MediaProviders) -> Self {
        Self { providers }
    }

    pub async fn handle(
        &self,
        request: &SkillRequest,
        response: SkillResponse,
    ) -> Result<SkillResponse, SkillError> {
        let prompt = pending_prompt(request)?;
        let Some((prompt, item)) = prompt
            .as_ref()
            .and_then(|p| p.current().map(|item| (p, item)))
        else {
            debug!("confirmation without a pending prompt");
            return Ok(response.say(replies::nothing_to_confirm()));
        };

        let provider = self.providers.get(prompt.content_type)?;
        let added = provider.add(item).await?;

        info!(title = %added.title, year = added.year, "added to wanted list");
        Ok(response.say(replies::added(&added.title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;

    use crate::adapters::mock::{MockMediaProvider, ProviderCall};
    use crate::domain::catalog::{build_reprompt, MovieResult, PROMPT_DATA_KEY};
    use crate::domain::foundation::ContentType;
    use crate::ports::ProviderError;

    fn yes_with_prompt(results: &[MovieResult]) -> SkillRequest {
        SkillRequest::intent("AMAZON.YesIntent").with_session_attribute(
            PROMPT_DATA_KEY,
            build_reprompt(results, ContentType::Movies).to_value(),
        )
    }

    fn handler(provider: &MockMediaProvider) -> ConfirmAddHandler {
        ConfirmAddHandler::new(MediaProviders::new().with_provider(Arc::new(provider.clone())))
    }

    #[tokio::test]
    async fn adds_current_result() {
        let provider = MockMediaProvider::new();
        let heat = MovieResult::new("Heat", 1995, "heat-1995");

        let response = handler(&provider)
            .handle(&yes_with_prompt(&[heat.clone()]), SkillResponse::new())
            .await
            .unwrap();

        assert_eq!(response.speech_text(), replies::added("Heat"));
        assert!(response.ends_session());
        assert!(response.session_attributes().is_empty());
        assert_eq!(provider.tracked(), vec![heat]);
        assert_eq!(provider.calls(), vec![ProviderCall::Add("heat-1995".to_string())]);
    }

    #[tokio::test]
    async fn without_prompt_explains_nothing_pending() {
        let provider = MockMediaProvider::new();

        let response = handler(&provider)
            .handle(&SkillRequest::intent("AMAZON.YesIntent"), SkillResponse::new())
            .await
            .unwrap();

        assert_eq!(response.speech_text(), replies::nothing_to_confirm());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn empty_result_list_counts_as_nothing_pending() {
        let provider = MockMediaProvider::new();

        let response = handler(&provider)
            .handle(&yes_with_prompt(&[]), SkillResponse::new())
            .await
            .unwrap();

        assert_eq!(response.speech_text(), replies::nothing_to_confirm());
    }

    #[tokio::test]
    async fn malformed_prompt_is_session_error() {
        let provider = MockMediaProvider::new();
        let request = SkillRequest::intent("AMAZON.YesIntent")
            .with_session_attribute(PROMPT_DATA_KEY, json!("not a prompt"));

        let result = handler(&provider).handle(&request, SkillResponse::new()).await;
        assert!(matches!(result, Err(SkillError::Session(_))));
    }

    #[tokio::test]
    async fn unregistered_content_type_is_provider_error() {
        let handler = ConfirmAddHandler::new(MediaProviders::new());
        let request = yes_with_prompt(&[MovieResult::new("Heat", 1995, "heat-1995")]);

        let result = handler.handle(&request, SkillResponse::new()).await;
        assert_eq!(
            result,
            Err(SkillError::Provider(ProviderError::NotConfigured(ContentType::Movies)))
        );
    }
}
