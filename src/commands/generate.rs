//! Implementation of the `hookplan generate` command.

use super::{emit, load_corpus, parse_mix};
use crate::board::Board;
use crate::cli::GenerateArgs;
use crate::config::{Config, Tone};
use crate::context::Context;
use crate::engine::BoardGenerator;
use crate::error::{PlanError, Result};
use crate::export;
use crate::goals::Goal;
use tracing::{info, warn};

/// Output formats for a freshly generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    Text,
    Csv,
    Json,
    Yaml,
}

impl OutputFormat {
    #[allow(clippy::should_implement_trait)]
    pub(crate) fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Execute the `hookplan generate` command.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let format = OutputFormat::from_str(&args.format).ok_or_else(|| {
        PlanError::UserError(format!(
            "unknown format '{}'. Expected one of: text, csv, json, yaml",
            args.format
        ))
    })?;

    let config = build_config(&args)?;
    let context = build_context(&args);
    let goal = Goal::parse(&args.goal);
    if !goal.is_recognized() {
        warn!(goal = %goal, "goal has no registered provider; generic phrasing will be used");
    }

    let generator = BoardGenerator::new(load_corpus(args.corpus.as_deref())?);
    let board = match args.seed {
        Some(seed) => generator.generate_seeded(&goal, &context, &config, seed)?,
        None => generator.generate(&goal, &context, &config)?,
    };
    info!(
        goal = %board.goal,
        posts = board.len(),
        seed = ?board.seed,
        "generated board"
    );

    emit(&render(&board, format)?, args.output.as_deref())
}

/// Merge the config file (if any) with command-line overrides.
pub(crate) fn build_config(args: &GenerateArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(posts_per_week) = args.posts_per_week {
        config.posts_per_week = posts_per_week;
    }

    if let Some(tone) = &args.tone {
        config.tone = Tone::from_str(tone).ok_or_else(|| {
            PlanError::UserError(format!(
                "unknown tone '{}'. Expected one of: mild, balanced, bold",
                tone
            ))
        })?;
    }

    if !args.mix.is_empty() {
        config.content_mix = parse_mix(&args.mix)?;
    }

    config.validate()?;
    Ok(config)
}

pub(crate) fn build_context(args: &GenerateArgs) -> Context {
    let mut context = Context::new(
        args.audience.clone().unwrap_or_default(),
        args.help_with.clone().unwrap_or_default(),
    )
    .with_platforms(args.platform.iter().cloned());

    if let Some(promotion) = &args.promotion {
        context = context.with_promotion(promotion.clone());
    }

    context
}

pub(crate) fn render(board: &Board, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(export::to_text(&board.posts)),
        OutputFormat::Csv => export::to_csv(&board.posts),
        OutputFormat::Json => board.to_json().map(|mut json| {
            json.push('\n');
            json
        }),
        OutputFormat::Yaml => board.to_yaml(),
    }
}
