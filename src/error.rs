//! Error types for hookplan.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! The generation engine itself is permissive; these variants cover the
//! configuration, file and edit paths around it.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for hookplan operations.
#[derive(Error, Debug)]
pub enum PlanError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A file could not be read, parsed or written.
    #[error("I/O error: {0}")]
    Io(String),

    /// A pattern could not be rendered in strict mode.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// No template in the corpus is tagged with the requested goal.
    #[error("no templates available for goal '{goal}'")]
    EmptyTemplatePool {
        /// The goal that produced an empty pool.
        goal: String,
    },

    /// The edit contract addressed a slot that does not exist on the board.
    #[error("slot {slot} does not exist (board has {len} posts)")]
    UnknownSlot {
        /// Requested slot number.
        slot: u32,
        /// Number of posts on the board.
        len: usize,
    },

    /// The placeholder lint found unresolved references.
    #[error("lint failed: {0}")]
    LintFailure(String),
}

impl PlanError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlanError::UserError(_) => exit_codes::USER_ERROR,
            PlanError::Io(_) => exit_codes::IO_FAILURE,
            PlanError::Template(_) => exit_codes::USER_ERROR,
            PlanError::EmptyTemplatePool { .. } => exit_codes::USER_ERROR,
            PlanError::UnknownSlot { .. } => exit_codes::USER_ERROR,
            PlanError::LintFailure(_) => exit_codes::LINT_FAILURE,
        }
    }
}

/// Result type alias for hookplan operations.
pub type Result<T> = std::result::Result<T, PlanError>;
