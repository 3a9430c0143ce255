//! Application handlers.
//!
//! Intent handlers that orchestrate catalog lookups and build responses.

pub mod movies;
pub mod prompt;
mod router;

pub use movies::{build_query, AddMovieHandler, FindMovieHandler};
pub use prompt::{ConfirmAddHandler, DeclineHandler};
pub use router::{
    IntentRouter, ADD_MOVIE_INTENT, CANCEL_INTENT, FIND_MOVIE_INTENT, HELP_INTENT, NO_INTENT,
    STOP_INTENT, YES_INTENT,
};
