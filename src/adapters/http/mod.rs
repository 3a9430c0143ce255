//! HTTP adapters - REST API implementations.

pub mod skill;

pub use skill::{skill_routes, SkillAppState};
