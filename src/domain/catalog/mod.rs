//! Movie catalog vocabulary: results, release dates, session payloads and
//! the reply templates spoken back to the user.

mod movie;
mod release_date;
mod reprompt;
pub mod replies;

pub use movie::{Artwork, CoverType, MediaImage, MovieResult};
pub use release_date::{parse_date, ParsedDate};
pub use reprompt::{build_reprompt, PromptData, PROMPT_DATA_KEY};
