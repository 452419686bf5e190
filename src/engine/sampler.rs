//! Anti-repetition template sampling.
//!
//! One [`SamplerState`] belongs to one board generation. It tracks which
//! templates the current cycle has used; a template only recurs after every
//! pool member has been used once, at which point the cycle resets.

use crate::corpus::Template;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Per-board sampling state.
#[derive(Debug, Clone, Default)]
pub struct SamplerState {
    used: HashSet<String>,
    last: Option<String>,
    resets: usize,
}

impl SamplerState {
    /// Fresh state for a new board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose the template for the next slot.
    ///
    /// Picks uniformly among templates unused in the current cycle. When the
    /// cycle is exhausted the used set is cleared and the pick excludes the
    /// previous slot's template, so consecutive slots differ whenever the
    /// pool has two or more members. Returns `None` for an empty pool.
    pub fn pick<'a, R: Rng + ?Sized>(
        &mut self,
        pool: &[&'a Template],
        rng: &mut R,
    ) -> Option<&'a Template> {
        let unused: Vec<&'a Template> = pool
            .iter()
            .copied()
            .filter(|t| !self.used.contains(&t.id))
            .collect();

        let choice = match unused.choose(rng) {
            Some(template) => *template,
            None => {
                self.used.clear();
                self.resets += 1;
                let candidates: Vec<&'a Template> = pool
                    .iter()
                    .copied()
                    .filter(|t| pool.len() == 1 || self.last.as_deref() != Some(t.id.as_str()))
                    .collect();
                *candidates.choose(rng)?
            }
        };

        self.used.insert(choice.id.clone());
        self.last = Some(choice.id.clone());
        Some(choice)
    }

    /// How many times the used set has been cleared.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Templates used in the current cycle.
    pub fn used_in_cycle(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{named_templates, seeded_rng};

    #[test]
    fn test_empty_pool_yields_none() {
        let mut state = SamplerState::new();
        assert!(state.pick(&[], &mut seeded_rng(1)).is_none());
    }

    #[test]
    fn test_single_member_pool_repeats() {
        let templates = named_templates(1);
        let pool: Vec<&Template> = templates.iter().collect();
        let mut state = SamplerState::new();
        let mut rng = seeded_rng(1);
        for _ in 0..5 {
            assert_eq!(state.pick(&pool, &mut rng).unwrap().id, "t0");
        }
    }

    #[test]
    fn test_pool_is_exhausted_before_any_repeat() {
        let templates = named_templates(6);
        let pool: Vec<&Template> = templates.iter().collect();
        let mut rng = seeded_rng(11);
        let mut state = SamplerState::new();

        for _cycle in 0..4 {
            let mut seen = HashSet::new();
            for _ in 0..pool.len() {
                let pick = state.pick(&pool, &mut rng).unwrap();
                assert!(seen.insert(pick.id.clone()), "{} repeated within a cycle", pick.id);
            }
            assert_eq!(seen.len(), pool.len());
        }
        assert_eq!(state.resets(), 3);
    }

    #[test]
    fn test_no_consecutive_repeats_across_resets() {
        for size in 2..6 {
            let templates = named_templates(size);
            let pool: Vec<&Template> = templates.iter().collect();
            for seed in 0..25 {
                let mut rng = seeded_rng(seed);
                let mut state = SamplerState::new();
                let mut previous: Option<String> = None;
                for _ in 0..30 {
                    let id = state.pick(&pool, &mut rng).unwrap().id.clone();
                    assert_ne!(previous.as_deref(), Some(id.as_str()));
                    previous = Some(id);
                }
            }
        }
    }

    #[test]
    fn test_states_are_independent() {
        let templates = named_templates(3);
        let pool: Vec<&Template> = templates.iter().collect();
        let mut rng = seeded_rng(5);

        let mut a = SamplerState::new();
        a.pick(&pool, &mut rng);
        a.pick(&pool, &mut rng);

        let b = SamplerState::new();
        assert_eq!(a.used_in_cycle(), 2);
        assert_eq!(b.used_in_cycle(), 0);
    }
}
