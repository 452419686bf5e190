//! Template corpus: the catalog boards are synthesized from.
//!
//! A corpus is a YAML document with a `templates` list. The crate embeds a
//! built-in corpus; alternative corpora can be loaded from files and are
//! validated the same way.
//!
//! # Template Format
//!
//! ```text
//! templates:
//!   - id: step-framework
//!     goals: [calls, sales]
//!     mix: [education]
//!     cta: save
//!     hooks:
//!       mild: "A simple {number}-step framework for {audience_goal}."
//!       balanced: "The {number}-step framework I use with {audience}."
//!       bold: "Steal my {number}-step framework."
//!     angle: "List the steps in order."
//!     comment: "{question} {reply_ask}."
//!     pools:
//!       number: ["3", "4", "5"]
//! ```

use crate::config::{ContentMix, CtaType, Tone};
use crate::error::{PlanError, Result};
use crate::goals::Goal;
use crate::template::placeholders;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

#[cfg(test)]
mod tests;

/// The corpus shipped with the crate.
const BUILTIN_CORPUS: &str = include_str!("templates.yaml");

/// Hook patterns for each tone level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneVariants {
    /// Hook for [`Tone::Mild`].
    pub mild: String,
    /// Hook for [`Tone::Balanced`].
    pub balanced: String,
    /// Hook for [`Tone::Bold`].
    pub bold: String,
}

impl ToneVariants {
    /// The hook pattern for a tone level.
    pub fn get(&self, tone: Tone) -> &str {
        match tone {
            Tone::Mild => &self.mild,
            Tone::Balanced => &self.balanced,
            Tone::Bold => &self.bold,
        }
    }
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier.
    pub id: String,
    /// Goals this template serves.
    pub goals: Vec<Goal>,
    /// Content-mix categories this template belongs to.
    pub mix: Vec<ContentMix>,
    /// Call-to-action mechanism.
    pub cta: CtaType,
    /// Hook pattern per tone level.
    pub hooks: ToneVariants,
    /// Angle-note pattern.
    pub angle: String,
    /// Comment-prompt pattern.
    pub comment: String,
    /// Example-variable pools: name -> candidate literals.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pools: BTreeMap<String, Vec<String>>,
}

impl Template {
    /// Whether the template is tagged with a goal.
    pub fn serves(&self, goal: &Goal) -> bool {
        self.goals.contains(goal)
    }

    /// Whether the template belongs to any of the given categories.
    pub fn in_mix(&self, mix: &BTreeSet<ContentMix>) -> bool {
        self.mix.iter().any(|m| mix.contains(m))
    }

    /// Every pattern on the template, labelled by field.
    pub fn patterns(&self) -> [(&'static str, &str); 5] {
        [
            ("hooks.mild", self.hooks.mild.as_str()),
            ("hooks.balanced", self.hooks.balanced.as_str()),
            ("hooks.bold", self.hooks.bold.as_str()),
            ("angle", self.angle.as_str()),
            ("comment", self.comment.as_str()),
        ]
    }
}

/// A validated collection of templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    templates: Vec<Template>,
}

impl Corpus {
    /// Build a corpus from templates, validating it.
    pub fn new(templates: Vec<Template>) -> Result<Self> {
        let corpus = Self { templates };
        corpus.validate()?;
        Ok(corpus)
    }

    /// Parse the built-in corpus.
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CORPUS)
    }

    /// Load a corpus from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PlanError::Io(format!(
                "failed to read corpus file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a corpus from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let corpus: Corpus = serde_yaml::from_str(yaml)
            .map_err(|e| PlanError::UserError(format!("failed to parse corpus YAML: {}", e)))?;

        corpus.validate()?;
        Ok(corpus)
    }

    /// Validate structural rules.
    ///
    /// - ids are non-empty and unique
    /// - every template has at least one goal and one mix tag
    /// - no pattern is blank, and every pattern parses
    /// - every pool has at least one non-blank value
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for template in &self.templates {
            let id = template.id.trim();
            if id.is_empty() {
                return Err(invalid("template ids must be non-empty".to_string()));
            }
            if !seen.insert(id) {
                return Err(invalid(format!("duplicate template id '{}'", id)));
            }
            if template.goals.is_empty() {
                return Err(invalid(format!("template '{}' has no goals", id)));
            }
            if template.mix.is_empty() {
                return Err(invalid(format!("template '{}' has no content mix", id)));
            }
            for (field, pattern) in template.patterns() {
                if pattern.trim().is_empty() {
                    return Err(invalid(format!("template '{}' has an empty {}", id, field)));
                }
                placeholders(pattern)
                    .map_err(|e| invalid(format!("template '{}' {}: {}", id, field, e)))?;
            }
            for (name, pool) in &template.pools {
                if pool.is_empty() || pool.iter().any(|v| v.trim().is_empty()) {
                    return Err(invalid(format!(
                        "template '{}' pool '{}' must contain non-empty values",
                        id, name
                    )));
                }
            }
        }

        Ok(())
    }

    /// All templates in catalog order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the corpus has no templates.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Find a template by id.
    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates tagged with a goal.
    pub fn for_goal(&self, goal: &Goal) -> Vec<&Template> {
        self.templates.iter().filter(|t| t.serves(goal)).collect()
    }

    /// Templates tagged with a goal and any of the given categories.
    ///
    /// An empty category set means no filtering.
    pub fn for_goal_and_mix(&self, goal: &Goal, mix: &BTreeSet<ContentMix>) -> Vec<&Template> {
        self.templates
            .iter()
            .filter(|t| t.serves(goal) && (mix.is_empty() || t.in_mix(mix)))
            .collect()
    }
}

fn invalid(message: String) -> PlanError {
    PlanError::UserError(format!("corpus validation failed: {}", message))
}
