//! Configuration enums, constants and defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of weeks a board covers.
pub const WEEKS_PER_BOARD: u32 = 4;

/// Hard ceiling on the number of posts in one board.
pub const MAX_SLOTS: u32 = 30;

/// How assertive hooks and CTAs read. Levels are ordered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Soft, low-pressure phrasing.
    Mild,
    /// Confident but friendly (default).
    #[default]
    Balanced,
    /// Direct and provocative.
    Bold,
}

impl Tone {
    /// All tone levels, lowest intensity first.
    pub const ALL: [Tone; 3] = [Tone::Mild, Tone::Balanced, Tone::Bold];

    /// Parse a tone from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mild" | "low" | "soft" => Some(Self::Mild),
            "balanced" | "medium" => Some(Self::Balanced),
            "bold" | "high" | "spicy" => Some(Self::Bold),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Mild => "mild",
            Tone::Balanced => "balanced",
            Tone::Bold => "bold",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content-mix category used to filter the template pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentMix {
    /// Personal narrative posts.
    Story,
    /// Opinion and observation posts.
    Insight,
    /// Results, case studies and social proof.
    Proof,
    /// How-to and teaching posts.
    Education,
    /// Questions, polls and conversation starters.
    Engagement,
}

impl ContentMix {
    /// All content-mix categories.
    pub const ALL: [ContentMix; 5] = [
        ContentMix::Story,
        ContentMix::Insight,
        ContentMix::Proof,
        ContentMix::Education,
        ContentMix::Engagement,
    ];

    /// Parse a content-mix category from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "story" | "stories" => Some(Self::Story),
            "insight" | "insights" => Some(Self::Insight),
            "proof" | "case_study" => Some(Self::Proof),
            "education" | "educational" | "how_to" => Some(Self::Education),
            "engagement" | "question" => Some(Self::Engagement),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMix::Story => "story",
            ContentMix::Insight => "insight",
            ContentMix::Proof => "proof",
            ContentMix::Education => "education",
            ContentMix::Engagement => "engagement",
        }
    }
}

impl fmt::Display for ContentMix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Call-to-action mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CtaType {
    /// Ask the reader to send a direct message.
    Dm,
    /// Ask the reader to comment a keyword.
    Comment,
    /// Point the reader at a link.
    Link,
    /// Ask the reader to save or bookmark the post.
    Save,
}

impl CtaType {
    /// All CTA types.
    pub const ALL: [CtaType; 4] = [CtaType::Dm, CtaType::Comment, CtaType::Link, CtaType::Save];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CtaType::Dm => "dm",
            CtaType::Comment => "comment",
            CtaType::Link => "link",
            CtaType::Save => "save",
        }
    }
}

impl fmt::Display for CtaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Default value functions for serde
pub(crate) fn default_posts_per_week() -> u32 {
    3
}
