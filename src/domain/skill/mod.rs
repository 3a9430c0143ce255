//! Voice-platform request and response model.

mod card;
mod display;
mod request;
mod response;

pub use card::{build_card, Card, CardImage};
pub use display::{build_display, BodyTemplate, DisplayDirective};
pub use request::{
    Application, Context, Device, Intent, RequestBody, RequestKind, Session, SkillRequest, Slot,
    SupportedInterfaces, SystemContext, MOVIE_NAME_SLOT, RELEASE_DATE_SLOT,
};
pub use response::SkillResponse;
