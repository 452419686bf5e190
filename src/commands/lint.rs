//! Implementation of the `hookplan lint` command.

use super::load_corpus;
use crate::cli::LintArgs;
use crate::error::Result;
use crate::lint::lint_corpus;

/// Execute the `hookplan lint` command.
///
/// Prints the report; fails with a lint error when any placeholder has no
/// resolution path.
pub fn cmd_lint(args: LintArgs) -> Result<()> {
    let corpus = load_corpus(args.corpus.as_deref())?;
    let report = lint_corpus(&corpus);
    print!("{}", report.format());
    report.into_result().map(|_| ())
}
