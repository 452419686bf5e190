//! Comment-prompt synthesis.
//!
//! The dictionary is built by an ordered overlay and the pattern is rendered
//! once. Layers, in order:
//!
//! | # | Layer                 | Mode      |
//! |---|-----------------------|-----------|
//! | 1 | variable dictionary   | overwrite |
//! | 2 | named context phrases | overwrite |
//! | 3 | platform overrides    | overwrite |
//! | 4 | goal comment fill     | fill only |
//! | 5 | pain personalization  | overwrite |
//!
//! A name written by several overwrite layers keeps the last value. The goal
//! fill never replaces a platform override.

use super::resolver::{fill_missing, overlay};
use crate::context::Context;
use crate::corpus::Template;
use crate::goals::{self, Goal};
use crate::platform::Platform;
use crate::template::{Rendered, render_lenient};
use std::collections::HashMap;

/// Build the merged comment dictionary.
pub fn comment_dictionary(
    goal: &Goal,
    context: &Context,
    vars: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut dict = vars.clone();

    overlay(
        &mut dict,
        [
            ("audience", context.audience()),
            ("help_with", context.help_with()),
            ("promotion", context.promotion()),
        ],
    );

    if let Some(platform) = Platform::detect(&context.platforms) {
        let (keyword, _) = goals::keywords(goal);
        overlay(&mut dict, platform.comment_overrides(keyword));
    }

    fill_missing(&mut dict, goals::comment_fill(goal).iter().copied());

    if context.has_help_with() {
        overlay(&mut dict, pain_personalization(context.help_with()));
    }

    dict
}

/// Pain and goal framing built from the user's own help-with phrase.
fn pain_personalization(help_with: &str) -> [(&'static str, String); 2] {
    [
        (
            "pain_question",
            format!("What is the hardest part about trying to {}?", help_with),
        ),
        (
            "goal_question",
            format!("What would it mean for you to finally {}?", help_with),
        ),
    ]
}

/// Render a template's comment prompt.
pub fn synthesize_comment(
    template: &Template,
    goal: &Goal,
    context: &Context,
    vars: &HashMap<String, String>,
) -> Rendered {
    render_lenient(&template.comment, &comment_dictionary(goal, context, vars))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::COMMENT_VARIABLES;

    fn dict_for(goal: &Goal, context: &Context) -> HashMap<String, String> {
        comment_dictionary(goal, context, &context.to_template_vars())
    }

    #[test]
    fn test_platform_override_beats_goal_fill() {
        let ctx = Context::new("founders", "").with_platforms(["Instagram", "LinkedIn"]);
        let dict = dict_for(&Goal::Calls, &ctx);

        assert_eq!(
            dict["question"],
            "What has been the most valuable lesson from your own experience here?"
        );
        assert!(dict["reply_ask"].contains("\"BOOK\""));
        // Not touched by the platform layer, so the goal fill applies
        assert_eq!(
            dict["pain_question"],
            "What is stopping you from booking more calls right now?"
        );
    }

    #[test]
    fn test_goal_fill_without_platform_match() {
        let ctx = Context::new("founders", "").with_platforms(["TikTok"]);
        let dict = dict_for(&Goal::Sales, &ctx);
        assert_eq!(dict["reply_ask"], "Comment INFO and I will send you the details");
        assert_eq!(dict["question"], "What makes you say yes to an offer?");
    }

    #[test]
    fn test_pain_personalization_overrides_fill() {
        let ctx = Context::new("founders", "close more deals");
        let dict = dict_for(&Goal::Followers, &ctx);
        assert_eq!(
            dict["pain_question"],
            "What is the hardest part about trying to close more deals?"
        );
        assert_eq!(
            dict["goal_question"],
            "What would it mean for you to finally close more deals?"
        );
    }

    #[test]
    fn test_unrecognized_goal_uses_generic_fill_and_keyword() {
        let ctx = Context::new("", "").with_platforms(["X"]);
        let dict = dict_for(&Goal::Other("hiring".into()), &ctx);
        assert_eq!(dict["reply_ask"], "Reply \"YES\"");
        assert_eq!(dict["goal_question"], "What would change if you solved this?");
        for name in COMMENT_VARIABLES {
            assert!(dict.contains_key(name), "{}", name);
        }
    }

    #[test]
    fn test_named_layer_restores_context_phrases() {
        let ctx = Context::new("designers", "win better clients");
        let mut vars = ctx.to_template_vars();
        vars.remove("audience");
        let dict = comment_dictionary(&Goal::Calls, &ctx, &vars);
        assert_eq!(dict["audience"], "designers");
    }

    #[test]
    fn test_synthesized_comment_has_no_markers() {
        let template = crate::test_support::template_with_pools(&[]);
        let ctx = Context::new("coaches", "fill their programme").with_platforms(["LinkedIn"]);
        let rendered = synthesize_comment(&template, &Goal::Calls, &ctx, &ctx.to_template_vars());
        assert!(rendered.missing.is_empty(), "{:?}", rendered.missing);
        assert!(rendered.text.contains("Share your perspective below"));
        assert!(rendered.text.contains("fill their programme"));
    }
}
