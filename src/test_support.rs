//! Shared fixtures for unit tests.

use crate::board::Board;
use crate::config::{ContentMix, CtaType};
use crate::context::Context;
use crate::corpus::{Template, ToneVariants};
use crate::goals::Goal;
use crate::template::leaked_markers;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The context used across the scenario tests.
pub(crate) fn founders_context() -> Context {
    Context::new("B2B founders", "close more deals")
}

/// A deterministic RNG.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A template serving every recognized goal, with the given pools.
///
/// Hooks read `"{tone} hook for {audience}"`; the comment pattern uses
/// `{question}`, `{reply_ask}` and `{pain_question}`.
pub(crate) fn template_with_pools(pools: &[(&str, &[&str])]) -> Template {
    Template {
        id: "fixture".to_string(),
        goals: Goal::RECOGNIZED.to_vec(),
        mix: vec![ContentMix::Story],
        cta: CtaType::Comment,
        hooks: ToneVariants {
            mild: "mild hook for {audience}".to_string(),
            balanced: "balanced hook for {audience}".to_string(),
            bold: "bold hook for {audience}".to_string(),
        },
        angle: "angle for {audience}".to_string(),
        comment: "{question} {reply_ask} {pain_question}".to_string(),
        pools: pools
            .iter()
            .map(|(name, values)| {
                (
                    name.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect(),
    }
}

/// `n` fixture templates with ids `t0..t{n-1}`.
pub(crate) fn named_templates(n: usize) -> Vec<Template> {
    (0..n)
        .map(|i| Template {
            id: format!("t{}", i),
            ..template_with_pools(&[])
        })
        .collect()
}

/// Fail if any generated field still holds a `{name}` marker.
pub(crate) fn assert_no_placeholders(board: &Board) {
    for post in &board.posts {
        for (field, text) in post.text_fields() {
            let leaked = leaked_markers(text);
            assert!(
                leaked.is_empty(),
                "slot {} ({}) {} has unresolved markers {:?}: {}",
                post.slot,
                post.template_id,
                field,
                leaked,
                text
            );
        }
    }
}
