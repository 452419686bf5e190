//! Command implementations for hookplan.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the small helpers they share.

mod edit;
mod export;
mod generate;
mod lint;
mod show;
mod templates;


use crate::cli::Command;
use crate::config::ContentMix;
use crate::corpus::Corpus;
use crate::error::{PlanError, Result};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Templates(args) => templates::cmd_templates(args),
        Command::Lint(args) => lint::cmd_lint(args),
        Command::Edit(args) => edit::cmd_edit(args),
        Command::Export(args) => export::cmd_export(args),
        Command::Show(args) => show::cmd_show(args),
    }
}

/// Load a corpus file, or the built-in corpus when no path is given.
fn load_corpus(path: Option<&Path>) -> Result<Corpus> {
    match path {
        Some(path) => {
            let corpus = Corpus::load(path)?;
            info!(path = %path.display(), templates = corpus.len(), "loaded corpus");
            Ok(corpus)
        }
        None => Corpus::builtin(),
    }
}

/// Parse content-mix names.
fn parse_mix(values: &[String]) -> Result<BTreeSet<ContentMix>> {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .map(|v| {
            ContentMix::from_str(v).ok_or_else(|| {
                PlanError::UserError(format!(
                    "unknown content mix '{}'. Expected one of: {}",
                    v,
                    ContentMix::ALL
                        .iter()
                        .map(|m| m.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
        })
        .collect()
}

/// Write output to a file atomically, or to stdout.
fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            crate::fs::atomic_write_file(path, content)?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
            Ok(())
        }
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
