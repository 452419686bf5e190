//! Platform detection and platform-specific comment phrasing.

use std::fmt;

/// Platforms with dedicated comment-prompt phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Professional network: formal, value-oriented questions.
    LinkedIn,
    /// Microblogging: short and punchy.
    Twitter,
    /// Photo sharing: conversational.
    Instagram,
}

impl Platform {
    /// Override priority. The first of these present in the context wins,
    /// whatever order the user listed platforms in.
    pub const PRIORITY: [Platform; 3] = [Platform::LinkedIn, Platform::Twitter, Platform::Instagram];

    /// Whether a free-text platform name refers to this platform.
    pub fn matches(&self, name: &str) -> bool {
        let name = name.trim().to_ascii_lowercase();
        match self {
            Platform::LinkedIn => matches!(name.as_str(), "linkedin" | "linked in" | "li"),
            Platform::Twitter => matches!(name.as_str(), "twitter" | "x" | "x.com" | "x/twitter"),
            Platform::Instagram => matches!(name.as_str(), "instagram" | "insta" | "ig"),
        }
    }

    /// Pick the platform whose overrides apply to a platform list.
    pub fn detect<S: AsRef<str>>(platforms: &[S]) -> Option<Platform> {
        Self::PRIORITY
            .into_iter()
            .find(|p| platforms.iter().any(|name| p.matches(name.as_ref())))
    }

    /// Comment-prompt overrides for this platform, embedding the goal keyword.
    pub fn comment_overrides(&self, keyword: &str) -> [(&'static str, String); 2] {
        match self {
            Platform::LinkedIn => [
                (
                    "question",
                    "What has been the most valuable lesson from your own experience here?"
                        .to_string(),
                ),
                (
                    "reply_ask",
                    format!(
                        "Share your perspective below, or comment \"{}\" and I will send you the details",
                        keyword
                    ),
                ),
            ],
            Platform::Twitter => [
                ("question", "Agree or disagree?".to_string()),
                ("reply_ask", format!("Reply \"{}\"", keyword)),
            ],
            Platform::Instagram => [
                ("question", "Be honest, which one sounds like you?".to_string()),
                (
                    "reply_ask",
                    format!("Drop \"{}\" in the comments and I'll DM you", keyword),
                ),
            ],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::Twitter => "X",
            Platform::Instagram => "Instagram",
        };
        f.write_str(name)
    }
}
