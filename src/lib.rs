//! Marquee - Voice skill backend for a Radarr movie library
//!
//! Answers "is this movie on my wanted list?" and "add this movie" requests
//! from a voice platform, replying with speech, a companion-app card and,
//! on screen devices, a display template.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
