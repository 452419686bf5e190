//! Placeholder lint.
//!
//! Checks that every placeholder in a corpus and in the CTA matrix has a
//! registered way to be resolved, for every goal its template is tagged with.
//! A placeholder resolves when it is:
//!
//! - a context variable (`audience`, `struggle`, ...)
//! - a goal variable (`offer`, `keyword`, ...) and the goal has a provider
//! - a pool declared on the same template
//! - a comment variable (`question`, `reply_ask`, ...), in comment patterns only
//!
//! Registered names that nothing references, and pools that are never used,
//! are reported as notes. They do not fail the lint.

use crate::config::{CtaType, Tone};
use crate::context::CONTEXT_VARIABLES;
use crate::corpus::{Corpus, Template};
use crate::engine::cta::{CTA_VARIABLES, phrasings};
use crate::error::{PlanError, Result};
use crate::goals::{self, COMMENT_VARIABLES, GOAL_VARIABLES, Goal};
use crate::template::placeholders;
use std::collections::BTreeSet;
use std::fmt::Write as _;


/// One problem found in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Template id, or `cta/<type>/<tone>` for the CTA matrix.
    pub source: String,
    /// Pattern field (`hooks.bold`, `comment`, ...).
    pub field: String,
    /// What is wrong.
    pub message: String,
}

impl Finding {
    fn new(source: impl Into<String>, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of linting a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    /// Templates checked.
    pub templates: usize,
    /// Placeholders with no resolution path.
    pub unresolved: Vec<Finding>,
    /// Patterns that do not parse.
    pub malformed: Vec<Finding>,
    /// Registered variables no pattern references.
    pub unused_variables: Vec<String>,
    /// Pools that can never be picked from.
    pub unused_pools: Vec<Finding>,
}

impl LintReport {
    /// Whether every placeholder resolves and every pattern parses.
    pub fn passed(&self) -> bool {
        self.unresolved.is_empty() && self.malformed.is_empty()
    }

    /// Convert a failing report into [`PlanError::LintFailure`].
    pub fn into_result(self) -> Result<Self> {
        if self.passed() {
            Ok(self)
        } else {
            Err(PlanError::LintFailure(format!(
                "{} unresolved placeholder(s), {} malformed pattern(s)",
                self.unresolved.len(),
                self.malformed.len()
            )))
        }
    }

    /// Human-readable report.
    pub fn format(&self) -> String {
        let mut out = String::new();

        for f in &self.malformed {
            let _ = writeln!(out, "error: {} {}: {}", f.source, f.field, f.message);
        }
        for f in &self.unresolved {
            let _ = writeln!(out, "error: {} {}: {}", f.source, f.field, f.message);
        }
        for f in &self.unused_pools {
            let _ = writeln!(out, "note: {} {}: {}", f.source, f.field, f.message);
        }
        if !self.unused_variables.is_empty() {
            let _ = writeln!(
                out,
                "note: registered but unreferenced: {}",
                self.unused_variables.join(", ")
            );
        }

        let _ = writeln!(
            out,
            "{} templates checked: {} error(s), {} note(s)",
            self.templates,
            self.unresolved.len() + self.malformed.len(),
            self.unused_pools.len() + usize::from(!self.unused_variables.is_empty())
        );
        out
    }
}

/// Names a hook or angle on `template` may use when generating for `goal`.
fn resolvable(goal: &Goal, template: &Template) -> BTreeSet<String> {
    let mut names: BTreeSet<String> = CONTEXT_VARIABLES.iter().map(|s| s.to_string()).collect();
    names.extend(goals::goal_variables(goal).into_iter().map(|(k, _)| k.to_string()));
    names.extend(template.pools.keys().cloned());
    names
}

/// Whether the context or `goal`'s defaults define `name` before pools are picked.
fn shadows(goal: &Goal, name: &str) -> bool {
    CONTEXT_VARIABLES.contains(&name)
        || goals::goal_variables(goal).iter().any(|(k, _)| *k == name)
}

/// Every variable name some layer registers, besides template pools.
fn registered() -> BTreeSet<&'static str> {
    let mut names: BTreeSet<&'static str> = CONTEXT_VARIABLES.into_iter().collect();
    names.extend(GOAL_VARIABLES);
    names.extend(["keyword", "keyword_alt"]);
    names.extend(COMMENT_VARIABLES);
    names
}

/// Lint a corpus together with the built-in CTA matrix.
pub fn lint_corpus(corpus: &Corpus) -> LintReport {
    let mut report = LintReport {
        templates: corpus.len(),
        ..Default::default()
    };
    let mut referenced: BTreeSet<String> = BTreeSet::new();

    for template in corpus.templates() {
        lint_template(template, &mut report, &mut referenced);
    }
    lint_cta_matrix(&mut report, &mut referenced);

    report.unused_variables = registered()
        .into_iter()
        .filter(|name| !referenced.contains(*name))
        .map(str::to_string)
        .collect();

    report
}

fn lint_template(template: &Template, report: &mut LintReport, referenced: &mut BTreeSet<String>) {
    let mut used_here: BTreeSet<String> = BTreeSet::new();

    for (field, pattern) in template.patterns() {
        let names = match placeholders(pattern) {
            Ok(names) => names,
            Err(e) => {
                report
                    .malformed
                    .push(Finding::new(&template.id, field, e.to_string()));
                continue;
            }
        };

        for goal in &template.goals {
            let mut allowed = resolvable(goal, template);
            if field == "comment" {
                allowed.extend(COMMENT_VARIABLES.iter().map(|s| s.to_string()));
            }
            for name in names.iter().filter(|n| !allowed.contains(*n)) {
                report.unresolved.push(Finding::new(
                    &template.id,
                    field,
                    format!("'{{{}}}' has no resolution for goal '{}'", name, goal),
                ));
            }
        }

        used_here.extend(names);
    }

    for pool in template.pools.keys() {
        let shadowed = !template.goals.is_empty()
            && template.goals.iter().all(|goal| shadows(goal, pool));
        if shadowed {
            report.unused_pools.push(Finding::new(
                &template.id,
                format!("pools.{}", pool),
                "shadowed by a registered variable; never picked",
            ));
        } else if !used_here.contains(pool) {
            report.unused_pools.push(Finding::new(
                &template.id,
                format!("pools.{}", pool),
                "not referenced by any pattern",
            ));
        }
    }

    referenced.extend(used_here);
}

fn lint_cta_matrix(report: &mut LintReport, referenced: &mut BTreeSet<String>) {
    for cta in CtaType::ALL {
        for tone in Tone::ALL {
            let source = format!("cta/{}/{}", cta, tone);
            for (i, pattern) in phrasings(cta, tone).iter().enumerate() {
                let field = format!("phrasing {}", i + 1);
                let names = match placeholders(pattern) {
                    Ok(names) => names,
                    Err(e) => {
                        report
                            .malformed
                            .push(Finding::new(&source, &field, e.to_string()));
                        continue;
                    }
                };
                for name in names.iter().filter(|n| !CTA_VARIABLES.contains(&n.as_str())) {
                    report.unresolved.push(Finding::new(
                        &source,
                        &field,
                        format!("'{{{}}}' is not a CTA variable", name),
                    ));
                }
                referenced.extend(names);
            }
        }
    }
}
