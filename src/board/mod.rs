//! Board and post model.
//!
//! A board is produced by one generation call. Afterwards only individual
//! post fields change (see [`Board::edit_post`]); slots are never renumbered
//! and the goal, context and config snapshot stay as generated.
//!
//! Boards serialize with serde. Post fields missing from a stored board
//! deserialize to their initial values, so older files keep loading.

use crate::config::Config;
use crate::context::Context;
use crate::goals::Goal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

mod io;
mod mutations;

pub use mutations::PostField;

/// Workflow column a post sits in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    /// Freshly generated (default).
    #[default]
    Ideas,
    /// Being written.
    Drafting,
    /// Ready and scheduled.
    Scheduled,
    /// Live.
    Published,
}

impl Column {
    /// Parse a column from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ideas" | "idea" => Some(Self::Ideas),
            "drafting" | "draft" => Some(Self::Drafting),
            "scheduled" => Some(Self::Scheduled),
            "published" | "posted" => Some(Self::Published),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Ideas => "ideas",
            Column::Drafting => "drafting",
            Column::Scheduled => "scheduled",
            Column::Published => "published",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// 1-based position, unique within the board.
    pub slot: u32,
    /// Opening line(s).
    #[serde(default)]
    pub hook: String,
    /// Supporting framing.
    #[serde(default)]
    pub angle: String,
    /// Call-to-action.
    #[serde(default)]
    pub cta: String,
    /// Prompt that invites comments.
    #[serde(default)]
    pub comment_prompt: String,
    /// Template the post was generated from.
    #[serde(default)]
    pub template_id: String,
    /// Set once any field is edited after generation.
    #[serde(default)]
    pub edited: bool,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Workflow column.
    #[serde(default)]
    pub column: Column,
}

impl Post {
    /// A freshly generated post: unedited, no notes, in the ideas column.
    pub fn new(
        slot: u32,
        template_id: impl Into<String>,
        hook: impl Into<String>,
        angle: impl Into<String>,
        cta: impl Into<String>,
        comment_prompt: impl Into<String>,
    ) -> Self {
        Self {
            slot,
            hook: hook.into(),
            angle: angle.into(),
            cta: cta.into(),
            comment_prompt: comment_prompt.into(),
            template_id: template_id.into(),
            edited: false,
            notes: String::new(),
            column: Column::default(),
        }
    }

    /// The four generated text fields, labelled.
    pub fn text_fields(&self) -> [(&'static str, &str); 4] {
        [
            ("hook", self.hook.as_str()),
            ("angle", self.angle.as_str()),
            ("cta", self.cta.as_str()),
            ("comment_prompt", self.comment_prompt.as_str()),
        ]
    }
}

/// A generated content calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Goal the board was generated for.
    pub goal: Goal,
    /// Context snapshot.
    #[serde(default)]
    pub context: Context,
    /// Config snapshot.
    #[serde(default)]
    pub config: Config,
    /// Posts in slot order.
    #[serde(default)]
    pub posts: Vec<Post>,
    /// When the board was generated.
    pub generated_at: DateTime<Utc>,
    /// Seed that reproduces the board, when generation was seeded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Counts shown by `hookplan show`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSummary {
    /// Total posts.
    pub posts: usize,
    /// Posts marked as edited.
    pub edited: usize,
    /// Posts per workflow column.
    pub by_column: BTreeMap<Column, usize>,
    /// Posts per template id.
    pub by_template: BTreeMap<String, usize>,
}

impl Board {
    /// Assemble a board stamped with the current time.
    pub fn new(goal: Goal, context: Context, config: Config, posts: Vec<Post>) -> Self {
        Self {
            goal,
            context,
            config,
            posts,
            generated_at: Utc::now(),
            seed: None,
        }
    }

    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Whether the board has no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Check that slots are exactly 1..=len in order.
    pub fn has_contiguous_slots(&self) -> bool {
        self.posts
            .iter()
            .enumerate()
            .all(|(i, post)| post.slot as usize == i + 1)
    }

    /// Aggregate counts for display.
    pub fn summary(&self) -> BoardSummary {
        let mut summary = BoardSummary {
            posts: self.posts.len(),
            ..Default::default()
        };
        for post in &self.posts {
            if post.edited {
                summary.edited += 1;
            }
            *summary.by_column.entry(post.column).or_insert(0) += 1;
            *summary
                .by_template
                .entry(post.template_id.clone())
                .or_insert(0) += 1;
        }
        summary
    }
}
