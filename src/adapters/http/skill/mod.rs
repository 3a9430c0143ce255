//! HTTP adapter for the voice-platform webhook.
//!
//! - `POST /skill` - Handle a request envelope and return a response envelope
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, OutputSpeech, ResponseBody, ResponseEnvelope};
pub use handlers::SkillAppState;
pub use routes::skill_routes;
