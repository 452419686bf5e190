//! Implementation of the `hookplan show` command.
//!
//! Displays the metadata of a saved board and post counts per column and
//! per template.

use crate::board::Board;
use crate::cli::ShowArgs;
use crate::error::Result;
use std::fmt::Write as _;

/// Execute the `hookplan show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let board = Board::load(&args.board)?;
    print!("{}", format_summary(&board));
    Ok(())
}

pub(crate) fn format_summary(board: &Board) -> String {
    let summary = board.summary();
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out, "Board: {} ({} posts)", board.goal, summary.posts);
    let _ = writeln!(out, "{}", "=".repeat(80));
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "Generated:  {}",
        board.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    if let Some(seed) = board.seed {
        let _ = writeln!(out, "Seed:       {}", seed);
    }
    let _ = writeln!(out, "Audience:   {}", board.context.audience());
    let _ = writeln!(out, "Helps with: {}", board.context.help_with());
    let _ = writeln!(out, "Platforms:  {}", board.context.platform_list());
    let _ = writeln!(out, "Tone:       {}", board.config.tone);
    let _ = writeln!(out, "Per week:   {}", board.config.posts_per_week);
    let _ = writeln!(out, "Edited:     {}", summary.edited);

    let _ = writeln!(out);
    let _ = writeln!(out, "Columns:");
    for (column, count) in &summary.by_column {
        let _ = writeln!(out, "  {:<10} {}", column.as_str(), count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Templates:");
    for (template, count) in &summary.by_template {
        let _ = writeln!(out, "  {:<22} {}", template, count);
    }

    out
}
