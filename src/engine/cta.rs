//! Call-to-action synthesis.
//!
//! A fixed matrix holds three phrasings per (CTA type, tone) cell. Every
//! phrasing references `{help_with}`; phrasings may also use `{promotion}`,
//! `{keyword}` and `{keyword_alt}`. Each cell has at least one phrasing with
//! a goal keyword, so every CTA type reads differently per goal.

use crate::config::{CtaType, Tone};
use crate::context::Context;
use crate::goals::{self, Goal};
use crate::template::{Rendered, render_lenient};
use rand::Rng;
use std::collections::HashMap;

/// Variables a CTA phrasing may reference.
pub const CTA_VARIABLES: [&str; 4] = ["help_with", "promotion", "keyword", "keyword_alt"];

type Cell = [&'static str; 3];

const DM: [Cell; 3] = [
    [
        "If you want to {help_with}, feel free to send me a DM with the word \"{keyword}\".",
        "Happy to help if you're looking to {help_with}. DM me \"{keyword_alt}\" anytime.",
        "Want to {help_with}? My DMs are open, just send \"{keyword}\".",
    ],
    [
        "DM me \"{keyword}\" and I'll show you how to {help_with}.",
        "Ready to {help_with}? Send me \"{keyword_alt}\" in a DM.",
        "Send me a DM with \"{keyword}\" and I'll share {promotion} so you can {help_with}.",
    ],
    [
        "Serious about wanting to {help_with}? DM me \"{keyword}\" today.",
        "Stop guessing how to {help_with}. DM \"{keyword_alt}\" now.",
        "DM me \"{keyword}\" right now if you're done waiting to {help_with}.",
    ],
];

const COMMENT: [Cell; 3] = [
    [
        "If you'd like help to {help_with}, leave a comment with \"{keyword}\".",
        "Comment \"{keyword_alt}\" if you want to {help_with} and I'll reach out.",
        "Drop \"{keyword}\" below if {promotion} would help you {help_with}.",
    ],
    [
        "Comment \"{keyword}\" and I'll send you {promotion} to {help_with}.",
        "Want to {help_with}? Comment \"{keyword_alt}\" below.",
        "Type \"{keyword}\" in the comments to get my playbook to {help_with}.",
    ],
    [
        "Comment \"{keyword}\" now if you're serious about wanting to {help_with}.",
        "If you want to {help_with}, comment \"{keyword_alt}\". No excuses.",
        "Comment \"{keyword}\". I'll send {promotion}. Then go {help_with}.",
    ],
];

const LINK: [Cell; 3] = [
    [
        "If you want to {help_with}, {promotion} is linked in the comments.",
        "There's a link to {promotion} in my profile if you want to {help_with}.",
        "Want to {help_with}? You'll find {promotion} below, or comment \"{keyword}\" and I'll send it.",
    ],
    [
        "Grab {promotion} at the link below and start to {help_with}.",
        "Click the link in the comments to get {promotion} and {help_with}, or reply \"{keyword}\" for a copy.",
        "Everything you need to {help_with} is in {promotion}. Link below.",
    ],
    [
        "Click the link now. {promotion} will help you {help_with} faster than anything else.",
        "Stop scrolling and grab {promotion}. It's how you {help_with}. Link below.",
        "The link is below. Use {promotion} to {help_with}, then reply \"{keyword_alt}\" with your results.",
    ],
];

const SAVE: [Cell; 3] = [
    [
        "Save this post for the next time you want to {help_with}.",
        "Bookmark this if you're working to {help_with}, and comment \"{keyword}\" if you want {promotion} too.",
        "Keep this handy for when you're ready to {help_with}.",
    ],
    [
        "Save this so you have it when you need to {help_with}. Comment \"{keyword}\" for {promotion}.",
        "Save this post and share it with someone who wants to {help_with}.",
        "Bookmark this, then comment \"{keyword_alt}\" if you want more on how to {help_with}.",
    ],
    [
        "Save this now. You'll need it when you finally {help_with}. Want {promotion}? Comment \"{keyword}\".",
        "Don't scroll past this. Save it and use it to {help_with}.",
        "Save this and repost it. Every one of your peers wants to {help_with}.",
    ],
];

/// The three phrasings for a (CTA type, tone) cell.
pub fn phrasings(cta: CtaType, tone: Tone) -> &'static Cell {
    let rows = match cta {
        CtaType::Dm => &DM,
        CtaType::Comment => &COMMENT,
        CtaType::Link => &LINK,
        CtaType::Save => &SAVE,
    };
    let row = match tone {
        Tone::Mild => 0,
        Tone::Balanced => 1,
        Tone::Bold => 2,
    };
    &rows[row]
}

/// Dictionary for CTA phrasings: context phrases plus goal keywords.
pub fn cta_variables(goal: &Goal, context: &Context) -> HashMap<String, String> {
    let (keyword, keyword_alt) = goals::keywords(goal);
    crate::template::vars([
        ("help_with", context.help_with()),
        ("promotion", context.promotion()),
        ("keyword", keyword),
        ("keyword_alt", keyword_alt),
    ])
}

/// Pick one phrasing uniformly at random and render it.
pub fn synthesize_cta<R: Rng + ?Sized>(
    cta: CtaType,
    tone: Tone,
    goal: &Goal,
    context: &Context,
    rng: &mut R,
) -> Rendered {
    let cell = phrasings(cta, tone);
    let pattern = cell[rng.gen_range(0..cell.len())];
    render_lenient(pattern, &cta_variables(goal, context))
}
