//! Goals and the per-goal provider registry.
//!
//! Each recognized goal registers one [`GoalProfile`]: a small data table with
//! the CTA keywords, the literal variable defaults overlaid on every
//! dictionary, and the comment-prompt fill used when no platform override
//! applies. Adding a goal means adding a variant and a profile; nothing else
//! branches on the goal.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// What the board is meant to achieve.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    /// Book discovery or sales calls.
    Calls,
    /// Sell an offer directly.
    Sales,
    /// Grow the follower count.
    Followers,
    /// Any other goal. No provider is registered for it.
    Other(String),
}

impl Goal {
    /// The three goals with registered providers.
    pub const RECOGNIZED: [Goal; 3] = [Goal::Calls, Goal::Sales, Goal::Followers];

    /// Parse a goal name.
    ///
    /// Matching ignores case and treats `-` and spaces as `_`. Unknown names
    /// are kept as [`Goal::Other`] in that normalized form, so corpus tags
    /// and command-line goals compare equal however they are written.
    pub fn parse(s: &str) -> Self {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "calls" | "call" | "book_calls" | "booked_calls" => Goal::Calls,
            "sales" | "sell" | "sales_calls" => Goal::Sales,
            "followers" | "growth" | "audience" | "grow_followers" => Goal::Followers,
            _ => Goal::Other(normalized),
        }
    }

    /// Canonical name used in corpora and board files.
    pub fn as_str(&self) -> &str {
        match self {
            Goal::Calls => "calls",
            Goal::Sales => "sales",
            Goal::Followers => "followers",
            Goal::Other(name) => name,
        }
    }

    /// Whether a provider is registered for this goal.
    pub fn is_recognized(&self) -> bool {
        profile(self).is_some()
    }
}

impl FromStr for Goal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Goal::parse(s))
    }
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        Goal::parse(&s)
    }
}

impl From<Goal> for String {
    fn from(goal: Goal) -> Self {
        goal.as_str().to_string()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal tables registered for one goal.
#[derive(Debug)]
pub struct GoalProfile {
    /// Primary CTA keyword (e.g., "BOOK").
    pub keyword: &'static str,
    /// Secondary CTA keyword (e.g., "CALL").
    pub keyword_alt: &'static str,
    /// Goal defaults overlaid on the context variables.
    pub variables: &'static [(&'static str, &'static str)],
    /// Comment-prompt values used for names no platform override set.
    pub comment_fill: &'static [(&'static str, &'static str)],
}

/// Variable names every goal profile defines, besides the keywords.
pub const GOAL_VARIABLES: [&str; 5] = ["offer", "result", "metric", "next_step", "win"];

/// Variable names owned by the comment-prompt layers.
pub const COMMENT_VARIABLES: [&str; 4] = ["question", "reply_ask", "pain_question", "goal_question"];

/// CTA keywords for goals without a provider.
pub const GENERIC_KEYWORDS: (&str, &str) = ("YES", "MORE");

/// Comment fill for goals without a provider.
pub static GENERIC_COMMENT_FILL: &[(&str, &str)] = &[
    ("question", "What do you think?"),
    ("reply_ask", "Let me know in the comments"),
    ("pain_question", "What is your biggest challenge right now?"),
    ("goal_question", "What would change if you solved this?"),
];

static CALLS: GoalProfile = GoalProfile {
    keyword: "BOOK",
    keyword_alt: "CALL",
    variables: &[
        ("offer", "a free 20-minute strategy call"),
        ("result", "a calendar full of qualified calls"),
        ("metric", "booked calls"),
        ("next_step", "book a call"),
        ("win", "4 discovery calls booked in one week"),
    ],
    comment_fill: &[
        ("question", "Have you ever turned a post into a booked call?"),
        ("reply_ask", "Comment CALL and I will send you my booking link"),
        ("pain_question", "What is stopping you from booking more calls right now?"),
        ("goal_question", "How many calls a week would change things for you?"),
    ],
};

static SALES: GoalProfile = GoalProfile {
    keyword: "INFO",
    keyword_alt: "CASE",
    variables: &[
        ("offer", "the full case study"),
        ("result", "a pipeline that closes without chasing"),
        ("metric", "closed deals"),
        ("next_step", "grab the offer"),
        ("win", "a 38% jump in close rate"),
    ],
    comment_fill: &[
        ("question", "What makes you say yes to an offer?"),
        ("reply_ask", "Comment INFO and I will send you the details"),
        ("pain_question", "Where do your deals usually stall?"),
        ("goal_question", "What would one extra closed deal a month be worth to you?"),
    ],
};

static FOLLOWERS: GoalProfile = GoalProfile {
    keyword: "TIPS",
    keyword_alt: "GROWTH",
    variables: &[
        ("offer", "my weekly growth notes"),
        ("result", "an audience that actually engages"),
        ("metric", "new followers"),
        ("next_step", "hit follow"),
        ("win", "1,200 new followers in 30 days"),
    ],
    comment_fill: &[
        ("question", "Which post format gets you the most reach?"),
        ("reply_ask", "Comment TIPS and I will share my growth checklist"),
        ("pain_question", "What is the hardest part of growing an audience for you?"),
        ("goal_question", "What would you post if you knew people would read it?"),
    ],
};

/// Look up the provider registered for a goal.
pub fn profile(goal: &Goal) -> Option<&'static GoalProfile> {
    match goal {
        Goal::Calls => Some(&CALLS),
        Goal::Sales => Some(&SALES),
        Goal::Followers => Some(&FOLLOWERS),
        Goal::Other(_) => None,
    }
}

/// CTA keywords for a goal, falling back to the generic pair.
pub fn keywords(goal: &Goal) -> (&'static str, &'static str) {
    profile(goal)
        .map(|p| (p.keyword, p.keyword_alt))
        .unwrap_or(GENERIC_KEYWORDS)
}

/// Comment fill table for a goal, falling back to the generic table.
pub fn comment_fill(goal: &Goal) -> &'static [(&'static str, &'static str)] {
    profile(goal)
        .map(|p| p.comment_fill)
        .unwrap_or(GENERIC_COMMENT_FILL)
}

/// The goal overlay: keywords plus the profile's variable defaults.
///
/// Empty for goals without a provider.
pub fn goal_variables(goal: &Goal) -> Vec<(&'static str, &'static str)> {
    match profile(goal) {
        Some(p) => {
            let mut vars = vec![("keyword", p.keyword), ("keyword_alt", p.keyword_alt)];
            vars.extend_from_slice(p.variables);
            vars
        }
        None => Vec::new(),
    }
}
