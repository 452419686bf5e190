//! Implementation of the `hookplan templates` command.

use super::{load_corpus, parse_mix};
use crate::cli::TemplatesArgs;
use crate::corpus::Template;
use crate::error::Result;
use crate::goals::Goal;
use std::fmt::Write as _;

/// Execute the `hookplan templates` command.
pub fn cmd_templates(args: TemplatesArgs) -> Result<()> {
    let corpus = load_corpus(args.corpus.as_deref())?;
    let mix = parse_mix(&args.mix)?;

    let templates: Vec<&Template> = match &args.goal {
        Some(goal) => corpus.for_goal_and_mix(&Goal::parse(goal), &mix),
        None => corpus
            .templates()
            .iter()
            .filter(|t| mix.is_empty() || t.in_mix(&mix))
            .collect(),
    };

    print!("{}", format_templates(&templates));
    Ok(())
}

/// One line per template: id, CTA type, goals and mix.
pub(crate) fn format_templates(templates: &[&Template]) -> String {
    let mut out = String::new();
    let width = templates.iter().map(|t| t.id.len()).max().unwrap_or(0);

    for template in templates {
        let goals: Vec<&str> = template.goals.iter().map(|g| g.as_str()).collect();
        let mix: Vec<&str> = template.mix.iter().map(|m| m.as_str()).collect();
        let _ = writeln!(
            out,
            "{:<width$}  {:<7}  goals: {:<24}  mix: {}",
            template.id,
            template.cta.as_str(),
            goals.join(", "),
            mix.join(", "),
            width = width
        );
    }

    let _ = writeln!(out, "{} template(s)", templates.len());
    out
}
