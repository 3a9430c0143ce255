//! Domain layer containing the skill's vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (content type tags)
//! - `catalog` - Movie results, release dates, session payloads, reply text
//! - `skill` - Voice-platform request/response model, cards and display directives

pub mod catalog;
pub mod foundation;
pub mod skill;
