//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Volume, tone and filtering settings for one board.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Posts planned per week; the board covers four weeks.
    #[serde(default = "default_posts_per_week")]
    pub posts_per_week: u32,

    /// Tone intensity for hooks and CTAs.
    #[serde(default)]
    pub tone: Tone,

    /// Content-mix filter. Empty means every category is allowed.
    #[serde(default)]
    pub content_mix: BTreeSet<ContentMix>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_per_week: default_posts_per_week(),
            tone: Tone::default(),
            content_mix: BTreeSet::new(),
        }
    }
}
