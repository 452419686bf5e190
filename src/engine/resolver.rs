//! Variable resolution: builds the dictionary one template is rendered with.
//!
//! Layers, lowest precedence first:
//!
//! 1. Generic context variables ([`Context::to_template_vars`])
//! 2. The goal provider's defaults (skipped for goals without a provider)
//! 3. One random pick from each template pool whose name is still undefined

use crate::context::Context;
use crate::corpus::Template;
use crate::goals::{self, Goal};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashMap;

/// Insert every pair, replacing existing values.
pub fn overlay<I, K, V>(vars: &mut HashMap<String, String>, pairs: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    for (k, v) in pairs {
        vars.insert(k.into(), v.into());
    }
}

/// Insert only pairs whose name is not defined yet.
pub fn fill_missing<I, K, V>(vars: &mut HashMap<String, String>, pairs: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    for (k, v) in pairs {
        vars.entry(k.into()).or_insert_with(|| v.into());
    }
}

/// Build the variable dictionary for one template instantiation.
///
/// Pools are visited in name order, so a seeded RNG reproduces the same picks.
pub fn resolve_variables<R: Rng + ?Sized>(
    goal: &Goal,
    context: &Context,
    template: &Template,
    rng: &mut R,
) -> HashMap<String, String> {
    let mut vars = context.to_template_vars();
    overlay(&mut vars, goals::goal_variables(goal));

    for (name, pool) in &template.pools {
        if vars.contains_key(name) {
            continue;
        }
        if let Some(value) = pool.choose(rng) {
            vars.insert(name.clone(), value.clone());
        }
    }

    vars
}
