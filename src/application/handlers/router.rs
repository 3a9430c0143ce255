//! IntentRouter - dispatches a request to the handler for its intent.

use std::sync::Arc;

use tracing::info;

use crate::application::{MediaProviders, SkillError};
use crate::domain::catalog::replies;
use crate::domain::foundation::ContentType;
use crate::domain::skill::{RequestKind, SkillRequest, SkillResponse};
use crate::ports::ArtworkLookup;

use super::movies::{AddMovieHandler, FindMovieHandler};
use super::prompt::{ConfirmAddHandler, DeclineHandler};

pub const FIND_MOVIE_INTENT: &str = "FindMovieIntent";
pub const ADD_MOVIE_INTENT: &str = "AddMovieIntent";
pub const YES_INTENT: &str = "AMAZON.YesIntent";
pub const NO_INTENT: &str = "AMAZON.NoIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";

/// Routes requests to intent handlers.
pub struct IntentRouter {
    find_movie: FindMovieHandler,
    add_movie: AddMovieHandler,
    confirm_add: ConfirmAddHandler,
    decline: DeclineHandler,
}

impl IntentRouter {
    /// Wires handlers to the registered providers.
    ///
    /// Fails when no movie provider is registered.
    pub fn new(
        providers: MediaProviders,
        artwork: Arc<dyn ArtworkLookup>,
    ) -> Result<Self, SkillError> {
        let movies = providers.get(ContentType::Movies)?;
        Ok(Self {
            find_movie: FindMovieHandler::new(movies.clone(), artwork.clone()),
            add_movie: AddMovieHandler::new(movies, artwork),
            confirm_add: ConfirmAddHandler::new(providers),
            decline: DeclineHandler::new(),
        })
    }

    pub async fn dispatch(&self, request: &SkillRequest) -> Result<SkillResponse, SkillError> {
        let response = SkillResponse::new();

        match request.request.kind {
            RequestKind::LaunchRequest => {
                info!("launch request");
                return Ok(response.say(replies::welcome()).should_end_session(false));
            }
            RequestKind::SessionEndedRequest => {
                info!("session ended");
                return Ok(response);
            }
            RequestKind::IntentRequest | RequestKind::Other => {}
        }

        let intent = request.intent_name().unwrap_or_default();
        info!(intent = %intent, "dispatching intent");

        match intent {
            FIND_MOVIE_INTENT => self.find_movie.handle(request, response).await,
            ADD_MOVIE_INTENT => self.add_movie.handle(request, response).await,
            YES_INTENT => self.confirm_add.handle(request, response).await,
            NO_INTENT => self.decline.handle(request, response).await,
            HELP_INTENT => Ok(response.say(replies::help()).should_end_session(false)),
            STOP_INTENT | CANCEL_INTENT => Ok(response.say(replies::goodbye())),
            _ => Ok(response.say(replies::unknown_intent())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockArtworkLookup, MockMediaProvider, ProviderCall};
    use crate::domain::catalog::MovieResult;
    use crate::domain::skill::{RequestBody, MOVIE_NAME_SLOT};
    use crate::ports::ProviderError;

    fn router(provider: &MockMediaProvider) -> IntentRouter {
        IntentRouter::new(
            MediaProviders::new().with_provider(Arc::new(provider.clone())),
            Arc::new(MockArtworkLookup::none()),
        )
        .unwrap()
    }

    fn of_kind(kind: RequestKind) -> SkillRequest {
        SkillRequest {
            request: RequestBody {
                kind,
                ..RequestBody::default()
            },
            ..SkillRequest::default()
        }
    }

    #[test]
    fn requires_movie_provider() {
        let result = IntentRouter::new(MediaProviders::new(), Arc::new(MockArtworkLookup::none()));
        assert!(matches!(
            result,
            Err(SkillError::Provider(ProviderError::NotConfigured(ContentType::Movies)))
        ));
    }

    #[tokio::test]
    async fn launch_welcomes_and_keeps_session_open() {
        let response = router(&MockMediaProvider::new())
            .dispatch(&of_kind(RequestKind::LaunchRequest))
            .await
            .unwrap();

        assert_eq!(response.speech_text(), replies::welcome());
        assert!(!response.ends_session());
    }

    #[tokio::test]
    async fn session_ended_is_silent() {
        let response = router(&MockMediaProvider::new())
            .dispatch(&of_kind(RequestKind::SessionEndedRequest))
            .await
            .unwrap();

        assert_eq!(response.speech_text(), "");
    }

    #[tokio::test]
    async fn routes_find_and_add_intents() {
        let provider = MockMediaProvider::new()
            .with_tracked(MovieResult::new("Dune", 2021, "dune-2021"));
        let router = router(&provider);

        let find = SkillRequest::intent(FIND_MOVIE_INTENT).with_slot(MOVIE_NAME_SLOT, "Dune");
        let response = router.dispatch(&find).await.unwrap();
        assert_eq!(response.speech_text(), replies::already_wanted("Dune", 2021));

        let add = SkillRequest::intent(ADD_MOVIE_INTENT).with_slot(MOVIE_NAME_SLOT, "Heat");
        let response = router.dispatch(&add).await.unwrap();
        assert_eq!(response.speech_text(), replies::add_not_found("Heat"));

        assert_eq!(
            provider.calls(),
            vec![
                ProviderCall::List("Dune".to_string()),
                ProviderCall::Search("Heat".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn builtin_intents_have_fixed_replies() {
        let router = router(&MockMediaProvider::new());

        let help = router.dispatch(&SkillRequest::intent(HELP_INTENT)).await.unwrap();
        assert_eq!(help.speech_text(), replies::help());
        assert!(!help.ends_session());

        for intent in [STOP_INTENT, CANCEL_INTENT] {
            let bye = router.dispatch(&SkillRequest::intent(intent)).await.unwrap();
            assert_eq!(bye.speech_text(), replies::goodbye());
            assert!(bye.ends_session());
        }
    }

    #[tokio::test]
    async fn unknown_intent_gets_fallback_reply() {
        let response = router(&MockMediaProvider::new())
            .dispatch(&SkillRequest::intent("PlayMusicIntent"))
            .await
            .unwrap();

        assert_eq!(response.speech_text(), replies::unknown_intent());
    }
}
