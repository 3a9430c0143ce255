//! Application layer - Intent handlers and their wiring.
//!
//! This layer orchestrates catalog lookups and reply building, coordinating
//! between ports. Handlers take the request and a response value and return
//! the enriched response.

mod error;
pub mod handlers;
mod provider_registry;

pub use error::SkillError;
pub use handlers::{
    build_query, AddMovieHandler, ConfirmAddHandler, DeclineHandler, FindMovieHandler,
    IntentRouter,
};
pub use provider_registry::MediaProviders;
