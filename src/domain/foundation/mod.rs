//! Foundation module - Shared domain primitives.

mod content_type;

pub use content_type::ContentType;
