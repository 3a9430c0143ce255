//! HTTP routes for the skill endpoint.

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{handle_skill_request, health, SkillAppState};

/// Creates the skill router.
///
/// # Routes
///
/// - `POST /skill` - voice-platform webhook
/// - `GET /health` - liveness probe
pub fn skill_routes(state: SkillAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/skill", post(handle_skill_request))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
