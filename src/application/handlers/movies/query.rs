//! Search query construction from intent slots.

use crate::domain::catalog::parse_date;
use crate::domain::skill::{SkillRequest, MOVIE_NAME_SLOT, RELEASE_DATE_SLOT};

/// Builds the catalog search query: the movie name, followed by the release
/// year when the release-date slot resolves to one.
pub fn build_query(request: &SkillRequest) -> String {
    let movie_name = request.slot(MOVIE_NAME_SLOT).unwrap_or_default();
    let release_date = request.slot(RELEASE_DATE_SLOT).and_then(parse_date);

    match release_date {
        Some(date) => format!("{} {}", movie_name, date.year),
        None => movie_name.to_string(),
    }
}
