//! Board export: CSV for spreadsheets, plain text for reading.

use crate::board::Post;
use crate::error::{PlanError, Result};
use std::fmt::Write as _;


/// CSV header row.
pub const CSV_HEADER: [&str; 5] = ["Slot", "Hook", "Angle", "CTA", "Comment Prompt"];

const RULE_WIDTH: usize = 80;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// Comma-separated values.
    Csv,
}

impl ExportFormat {
    /// Parse a format name.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Render posts in this format.
    pub fn render(&self, posts: &[Post]) -> Result<String> {
        match self {
            ExportFormat::Text => Ok(to_text(posts)),
            ExportFormat::Csv => to_csv(posts),
        }
    }
}

/// Render posts as CSV.
///
/// Every field is quoted and embedded quotes are doubled, so commas and line
/// breaks inside a field survive a round-trip.
pub fn to_csv(posts: &[Post]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(csv_error)?;
    for post in posts {
        writer
            .write_record([
                post.slot.to_string().as_str(),
                post.hook.as_str(),
                post.angle.as_str(),
                post.cta.as_str(),
                post.comment_prompt.as_str(),
            ])
            .map_err(csv_error)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PlanError::Io(format!("failed to finish CSV output: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| PlanError::Io(format!("CSV output is not UTF-8: {}", e)))
}

fn csv_error(e: csv::Error) -> PlanError {
    PlanError::Io(format!("failed to write CSV: {}", e))
}

/// Render posts as plain-text blocks, one per post.
pub fn to_text(posts: &[Post]) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    for post in posts {
        let _ = writeln!(out, "{}", heavy);
        let _ = writeln!(out, "POST {} [{}]", post.slot, post.column);
        let _ = writeln!(out, "{}", heavy);

        for (label, text) in [
            ("HOOK", post.hook.as_str()),
            ("ANGLE", post.angle.as_str()),
            ("CTA", post.cta.as_str()),
            ("COMMENT PROMPT", post.comment_prompt.as_str()),
        ] {
            let _ = writeln!(out, "{}:", label);
            let _ = writeln!(out, "{}", text);
            let _ = writeln!(out, "{}", light);
        }

        if !post.notes.is_empty() {
            let _ = writeln!(out, "NOTES:");
            let _ = writeln!(out, "{}", post.notes);
            let _ = writeln!(out, "{}", light);
        }

        out.push('\n');
    }

    out
}
