//! HTTP handlers for the skill endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

use crate::application::IntentRouter;
use crate::config::SkillConfig;
use crate::domain::catalog::replies;
use crate::domain::skill::{SkillRequest, SkillResponse};

use super::dto::{ErrorResponse, ResponseEnvelope};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SkillAppState {
    router: Arc<IntentRouter>,
    skill: Arc<SkillConfig>,
}

impl SkillAppState {
    pub fn new(router: Arc<IntentRouter>, skill: SkillConfig) -> Self {
        Self {
            router,
            skill: Arc::new(skill),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /skill - Handle one voice-platform request
///
/// Handler failures still answer 200 with a spoken apology, since the
/// platform only reads speech from successful responses.
pub async fn handle_skill_request(
    State(state): State<SkillAppState>,
    Json(request): Json<SkillRequest>,
) -> Response {
    if !state.skill.accepts(request.application_id()) {
        warn!(
            application_id = ?request.application_id(),
            "Rejected request addressed to another skill"
        );
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::forbidden("Unknown application id")),
        )
            .into_response();
    }

    let response = match state.router.dispatch(&request).await {
        Ok(response) => response,
        Err(e) => {
            error!(
                request_id = request.request.request_id.as_deref().unwrap_or("-"),
                intent = request.intent_name().unwrap_or("-"),
                "Intent handler failed: {}",
                e
            );
            SkillResponse::new().say(replies::service_error())
        }
    };

    (StatusCode::OK, Json(ResponseEnvelope::from(response))).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
