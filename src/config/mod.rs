//! Plan configuration for hookplan.
//!
//! This module defines the Config struct that controls board volume, tone
//! and content-mix filtering. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), sensible defaults for optional fields, and
//! validation of config values.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
pub use types::{ContentMix, CtaType, MAX_SLOTS, Tone, WEEKS_PER_BOARD};
