//! CLI argument parsing for hookplan.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// hookplan: generate a month of post ideas from a template corpus.
///
/// Each post on a board has a hook, an angle, a call-to-action and a
/// comment prompt tailored to your goal, audience and tone.
#[derive(Parser, Debug)]
#[command(name = "hookplan")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hookplan.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a new board.
    ///
    /// Prints the board to stdout, or writes it to --output.
    Generate(GenerateArgs),

    /// List templates in the corpus.
    Templates(TemplatesArgs),

    /// Check that every template placeholder can be resolved.
    ///
    /// Exits with code 2 when unresolved placeholders are found.
    Lint(LintArgs),

    /// Edit one field of one post in a saved board.
    ///
    /// Marks the post as edited. Slots are never renumbered.
    Edit(EditArgs),

    /// Export a saved board as CSV or text.
    Export(ExportArgs),

    /// Show a summary of a saved board.
    Show(ShowArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Goal of the board (calls, sales, followers).
    pub goal: String,

    /// Who the posts are for.
    #[arg(short, long)]
    pub audience: Option<String>,

    /// What you help the audience do (e.g., "close more deals").
    #[arg(long)]
    pub help_with: Option<String>,

    /// Platforms you post on, in order of preference.
    #[arg(short, long, value_delimiter = ',')]
    pub platform: Vec<String>,

    /// Resource or offer to promote.
    #[arg(long)]
    pub promotion: Option<String>,

    /// Posts per week (overrides config).
    #[arg(short = 'n', long)]
    pub posts_per_week: Option<u32>,

    /// Tone level: mild, balanced, bold (overrides config).
    #[arg(short, long)]
    pub tone: Option<String>,

    /// Content-mix categories to draw from (overrides config).
    #[arg(short, long, value_delimiter = ',')]
    pub mix: Vec<String>,

    /// Config file (YAML).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Template corpus file (YAML). Defaults to the built-in corpus.
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Seed for a reproducible board.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: text, csv, json, yaml.
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `templates` command.
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Only list templates for this goal.
    #[arg(short, long)]
    pub goal: Option<String>,

    /// Only list templates in these content-mix categories.
    #[arg(short, long, value_delimiter = ',')]
    pub mix: Vec<String>,

    /// Template corpus file (YAML). Defaults to the built-in corpus.
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

/// Arguments for the `lint` command.
#[derive(Parser, Debug)]
pub struct LintArgs {
    /// Template corpus file (YAML). Defaults to the built-in corpus.
    #[arg(long)]
    pub corpus: Option<PathBuf>,
}

/// Arguments for the `edit` command.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Board file (JSON).
    pub board: PathBuf,

    /// Slot number of the post (1-based).
    pub slot: u32,

    /// Field to replace: hook, angle, cta, comment_prompt, notes, column.
    pub field: String,

    /// New value.
    pub value: String,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Board file (JSON).
    pub board: PathBuf,

    /// Output format: csv or text.
    #[arg(short, long, default_value = "csv")]
    pub format: String,

    /// Write to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Board file (JSON).
    pub board: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
