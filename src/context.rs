//! User context for board generation.
//!
//! The context describes who the posts are for and what the author helps
//! them with. Every field is free text; blank fields fall back to fixed
//! defaults so that resolved posts never contain empty phrases.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Audience used when none is supplied.
pub const DEFAULT_AUDIENCE: &str = "professionals";

/// Help-with phrase used when none is supplied.
pub const DEFAULT_HELP_WITH: &str = "grow their business";

/// Promotion used when none is supplied.
pub const DEFAULT_PROMOTION: &str = "my free resource";

/// Primary platform used when the platform list is empty.
pub const DEFAULT_PLATFORM: &str = "LinkedIn";

/// User-supplied description of the audience and offer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    /// Who the posts speak to (e.g., "B2B founders").
    pub audience: String,
    /// What the audience wants to achieve (e.g., "close more deals").
    pub help_with: String,
    /// Target platforms in the user's order.
    pub platforms: Vec<String>,
    /// Optional offer or lead magnet to promote.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion: Option<String>,
}

impl Context {
    /// Create a context for an audience and help-with phrase.
    pub fn new(audience: impl Into<String>, help_with: impl Into<String>) -> Self {
        Self {
            audience: audience.into(),
            help_with: help_with.into(),
            ..Default::default()
        }
    }

    /// Set the target platforms.
    pub fn with_platforms<I, S>(mut self, platforms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.platforms = platforms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the promotion phrase.
    pub fn with_promotion(mut self, promotion: impl Into<String>) -> Self {
        self.promotion = Some(promotion.into());
        self
    }

    /// Audience, or the default when blank.
    pub fn audience(&self) -> &str {
        non_blank(&self.audience).unwrap_or(DEFAULT_AUDIENCE)
    }

    /// Help-with phrase, or the default when blank.
    pub fn help_with(&self) -> &str {
        non_blank(&self.help_with).unwrap_or(DEFAULT_HELP_WITH)
    }

    /// Whether the user supplied a help-with phrase of their own.
    pub fn has_help_with(&self) -> bool {
        non_blank(&self.help_with).is_some()
    }

    /// Promotion, or the default when absent or blank.
    pub fn promotion(&self) -> &str {
        self.promotion
            .as_deref()
            .and_then(non_blank)
            .unwrap_or(DEFAULT_PROMOTION)
    }

    /// Non-blank platform names in the user's order.
    pub fn platform_names(&self) -> impl Iterator<Item = &str> {
        self.platforms.iter().filter_map(|p| non_blank(p))
    }

    /// First listed platform, or LinkedIn.
    pub fn primary_platform(&self) -> &str {
        self.platform_names().next().unwrap_or(DEFAULT_PLATFORM)
    }

    /// Platforms joined with ", ", or LinkedIn.
    pub fn platform_list(&self) -> String {
        let names: Vec<&str> = self.platform_names().collect();
        if names.is_empty() {
            DEFAULT_PLATFORM.to_string()
        } else {
            names.join(", ")
        }
    }

    /// Convert the context to the generic template variables.
    ///
    /// These are the base layer of every variable dictionary.
    pub fn to_template_vars(&self) -> HashMap<String, String> {
        let audience = self.audience();
        let help_with = self.help_with();

        let mut vars = HashMap::new();
        vars.insert("audience".to_string(), audience.to_string());
        vars.insert("help_with".to_string(), help_with.to_string());
        vars.insert("promotion".to_string(), self.promotion().to_string());
        vars.insert("platform".to_string(), self.primary_platform().to_string());
        vars.insert("platforms".to_string(), self.platform_list());

        // Derived phrases
        vars.insert("struggle".to_string(), format!("struggling to {}", help_with));
        vars.insert(
            "audience_goal".to_string(),
            format!("{} who want to {}", audience, help_with),
        );
        vars.insert("wish".to_string(), format!("wish they could {}", help_with));

        vars
    }
}

/// Names of the variables produced by [`Context::to_template_vars`].
pub const CONTEXT_VARIABLES: [&str; 8] = [
    "audience",
    "help_with",
    "promotion",
    "platform",
    "platforms",
    "struggle",
    "audience_goal",
    "wish",
];

fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
