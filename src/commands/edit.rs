//! Implementation of the `hookplan edit` command.

use crate::board::{Board, PostField};
use crate::cli::EditArgs;
use crate::error::{PlanError, Result};
use tracing::info;

/// Execute the `hookplan edit` command.
pub fn cmd_edit(args: EditArgs) -> Result<()> {
    let field = PostField::from_str(&args.field).ok_or_else(|| {
        PlanError::UserError(format!(
            "unknown field '{}'. Expected one of: hook, angle, cta, comment_prompt, notes, column",
            args.field
        ))
    })?;

    let mut board = Board::load(&args.board)?;
    board.edit_post(args.slot, field, &args.value)?;
    board.save(&args.board)?;

    info!(board = %args.board.display(), slot = args.slot, field = %field, "edited post");
    println!("Updated {} of slot {}", field, args.slot);
    Ok(())
}
