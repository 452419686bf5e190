//! Implementation of the `hookplan export` command.

use super::emit;
use crate::board::Board;
use crate::cli::ExportArgs;
use crate::error::{PlanError, Result};
use crate::export::ExportFormat;

/// Execute the `hookplan export` command.
pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let format = ExportFormat::from_str(&args.format).ok_or_else(|| {
        PlanError::UserError(format!(
            "unknown export format '{}'. Expected csv or text",
            args.format
        ))
    })?;

    let board = Board::load(&args.board)?;
    emit(&format.render(&board.posts)?, args.output.as_deref())
}
