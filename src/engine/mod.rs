//! Board generation.
//!
//! [`BoardGenerator`] turns a goal, a context and a config into a [`Board`]:
//! it filters the corpus into a candidate pool, samples one template per slot
//! without short-term repetition, resolves each template's variables and
//! synthesizes the hook, angle, CTA and comment prompt.
//!
//! Generation is synchronous and has no shared state. Every call creates its
//! own [`SamplerState`]; randomness comes from the caller or from a seed.

pub mod comment;
pub mod cta;
pub mod resolver;
pub mod sampler;
pub mod tone;

#[cfg(test)]
mod tests;

use crate::board::{Board, Post};
use crate::config::Config;
use crate::context::Context;
use crate::corpus::{Corpus, Template};
use crate::error::{PlanError, Result};
use crate::goals::Goal;
use crate::template::{Rendered, render_lenient};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tracing::{debug, warn};

pub use sampler::SamplerState;

/// Generates boards from a corpus.
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    corpus: Corpus,
}

impl BoardGenerator {
    /// A generator over the given corpus.
    pub fn new(corpus: Corpus) -> Self {
        Self { corpus }
    }

    /// A generator over the built-in corpus.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Corpus::builtin()?))
    }

    /// The corpus templates are drawn from.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Templates eligible for a board.
    ///
    /// The goal filter always applies. The content-mix filter applies when
    /// non-empty, and is dropped if it leaves nothing to sample from.
    pub fn candidate_pool(&self, goal: &Goal, config: &Config) -> Result<Vec<&Template>> {
        let goal_pool = self.corpus.for_goal(goal);
        if goal_pool.is_empty() {
            return Err(PlanError::EmptyTemplatePool {
                goal: goal.to_string(),
            });
        }

        if config.content_mix.is_empty() {
            return Ok(goal_pool);
        }

        let mixed = self.corpus.for_goal_and_mix(goal, &config.content_mix);
        if mixed.is_empty() {
            warn!(
                goal = %goal,
                "no template matches the content mix; using every template for the goal"
            );
            return Ok(goal_pool);
        }

        Ok(mixed)
    }

    /// Generate a board with a fresh random seed.
    pub fn generate(&self, goal: &Goal, context: &Context, config: &Config) -> Result<Board> {
        self.generate_seeded(goal, context, config, rand::random())
    }

    /// Generate a reproducible board. The seed is recorded on the board.
    pub fn generate_seeded(
        &self,
        goal: &Goal,
        context: &Context,
        config: &Config,
        seed: u64,
    ) -> Result<Board> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = self.generate_with_rng(goal, context, config, &mut rng)?;
        board.seed = Some(seed);
        Ok(board)
    }

    /// Generate a board drawing randomness from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        goal: &Goal,
        context: &Context,
        config: &Config,
        rng: &mut R,
    ) -> Result<Board> {
        config.validate()?;

        let pool = self.candidate_pool(goal, config)?;
        let slots = config.slot_count();
        debug!(
            goal = %goal,
            tone = %config.tone,
            slots,
            pool = pool.len(),
            "generating board"
        );

        let mut state = SamplerState::new();
        let mut posts = Vec::with_capacity(slots);

        for slot in 1..=slots as u32 {
            let template = state
                .pick(&pool, rng)
                .ok_or_else(|| PlanError::EmptyTemplatePool {
                    goal: goal.to_string(),
                })?;
            debug!(slot, template = %template.id, "sampled template");

            posts.push(build_post(slot, template, goal, context, config, rng));
        }

        Ok(Board::new(goal.clone(), context.clone(), config.clone(), posts))
    }
}

/// Instantiate one template into a post.
fn build_post<R: Rng + ?Sized>(
    slot: u32,
    template: &Template,
    goal: &Goal,
    context: &Context,
    config: &Config,
    rng: &mut R,
) -> Post {
    let vars: HashMap<String, String> = resolver::resolve_variables(goal, context, template, rng);

    let hook = tone::select_hook(template, config.tone, &vars);
    let angle = render_lenient(&template.angle, &vars);
    let cta = cta::synthesize_cta(template.cta, config.tone, goal, context, rng);
    let comment = comment::synthesize_comment(template, goal, context, &vars);

    Post::new(
        slot,
        template.id.clone(),
        checked(hook, template, "hook"),
        checked(angle, template, "angle"),
        checked(cta, template, "cta"),
        checked(comment, template, "comment_prompt"),
    )
}

fn checked(rendered: Rendered, template: &Template, field: &str) -> String {
    for name in &rendered.missing {
        warn!(
            template = %template.id,
            field,
            variable = %name,
            "unresolved placeholder left in generated text"
        );
    }
    rendered.text
}

/// Generate a board from the built-in corpus with a fresh random seed.
pub fn generate_board(goal: &Goal, context: &Context, config: &Config) -> Result<Board> {
    BoardGenerator::builtin()?.generate(goal, context, config)
}
