//! Movie intent handlers.

mod add_movie;
mod find_movie;
mod query;

pub use add_movie::AddMovieHandler;
pub use find_movie::FindMovieHandler;
pub use query::build_query;
