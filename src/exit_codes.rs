//! Exit code constants for the hookplan CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, unknown slot, empty template pool)
//! - 2: Lint failure (unresolved placeholders in a corpus)
//! - 3: I/O failure (reading or writing board, config or corpus files)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or a request the engine cannot satisfy.
pub const USER_ERROR: i32 = 1;

/// Lint failure: a corpus references placeholders with no resolution path.
pub const LINT_FAILURE: i32 = 2;

/// I/O failure: a file could not be read, parsed or written.
pub const IO_FAILURE: i32 = 3;
