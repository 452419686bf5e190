//! Field-level edits applied after generation.

use super::{Board, Column, Post};
use crate::error::{PlanError, Result};
use std::fmt;

/// A post field that can be edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostField {
    Hook,
    Angle,
    Cta,
    CommentPrompt,
    Notes,
    Column,
}

impl PostField {
    /// Parse a field name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "hook" => Some(Self::Hook),
            "angle" => Some(Self::Angle),
            "cta" => Some(Self::Cta),
            "comment_prompt" | "comment" => Some(Self::CommentPrompt),
            "notes" => Some(Self::Notes),
            "column" => Some(Self::Column),
            _ => None,
        }
    }

    /// Canonical field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PostField::Hook => "hook",
            PostField::Angle => "angle",
            PostField::Cta => "cta",
            PostField::CommentPrompt => "comment_prompt",
            PostField::Notes => "notes",
            PostField::Column => "column",
        }
    }
}

impl fmt::Display for PostField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Board {
    /// Find a post by slot number.
    pub fn post(&self, slot: u32) -> Option<&Post> {
        self.posts.iter().find(|p| p.slot == slot)
    }

    /// Replace one field of one post and mark the post as edited.
    ///
    /// The slot number and every other field stay untouched. A `column`
    /// value must name a known column.
    pub fn edit_post(&mut self, slot: u32, field: PostField, value: &str) -> Result<()> {
        let len = self.posts.len();
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.slot == slot)
            .ok_or(PlanError::UnknownSlot { slot, len })?;

        match field {
            PostField::Hook => post.hook = value.to_string(),
            PostField::Angle => post.angle = value.to_string(),
            PostField::Cta => post.cta = value.to_string(),
            PostField::CommentPrompt => post.comment_prompt = value.to_string(),
            PostField::Notes => post.notes = value.to_string(),
            PostField::Column => {
                post.column = Column::from_str(value).ok_or_else(|| {
                    PlanError::UserError(format!(
                        "unknown column '{}'. Expected one of: ideas, drafting, scheduled, published",
                        value
                    ))
                })?;
            }
        }

        post.edited = true;
        Ok(())
    }
}
