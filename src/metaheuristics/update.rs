//! Per-agent position update.
//!
//! # Rule
//!
//! ```text
//! c = 2 (T - t) / T                                   per generation
//!
//! sp_leader < threshold, |c| < 1   (encircling)   ref = Best
//! sp_leader < threshold, |c| >= 1  (search)       ref = random agent
//!     x' = ref - c |2 b ref - x|,  b ~ U[0, 1) once per agent
//!
//! otherwise                        (spiral)
//!     x' = |Best - x| cos(2π m) + Best,  m ~ U[-1, 1] once per agent
//! ```
//!
//! Coordinates that leave the range are replaced by fresh uniform draws.
//! `b` and `m` are scalars shared across all coordinates of one agent.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::population::Population;
use super::random::RandomSource;
use super::search_space::SearchSpace;

/// Control coefficient for generation `generation` of `max_iterations`.
///
/// Decreases linearly from 2 (at generation 0) towards, but never reaching,
/// 0 at the last generation.
#[must_use]
pub fn control_coefficient(generation: usize, max_iterations: usize) -> f64 {
    (max_iterations - generation) as f64 * 2.0 / max_iterations as f64
}

/// Which movement an agent performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Branch {
    /// Shrink towards the best agent (exploitation)
    Encircling,
    /// Move relative to a randomly picked agent (exploration)
    Search,
    /// Spiral around the best agent
    Spiral,
}

/// How often each branch was taken during a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchCounts {
    /// Agent updates that took the encircling branch
    pub encircling: usize,
    /// Agent updates that took the search branch
    pub search: usize,
    /// Agent updates that took the spiral branch
    pub spiral: usize,
}

impl BranchCounts {
    /// Count one agent update.
    pub fn record(&mut self, branch: Branch) {
        match branch {
            Branch::Encircling => self.encircling += 1,
            Branch::Search => self.search += 1,
            Branch::Spiral => self.spiral += 1,
        }
    }

    /// Total agent updates.
    #[must_use]
    pub fn total(&self) -> usize {
        self.encircling + self.search + self.spiral
    }
}

/// Branch selection plus the position formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateRule {
    threshold: f64,
}

impl UpdateRule {
    /// Rule with the given `sp_leader` threshold.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Branch for a generation with leadership value `sp_leader` and
    /// control coefficient `c`.
    #[must_use]
    pub fn branch(&self, sp_leader: f64, c: f64) -> Branch {
        if sp_leader < self.threshold {
            if c.abs() < 1.0 {
                Branch::Encircling
            } else {
                Branch::Search
            }
        } else {
            Branch::Spiral
        }
    }

    /// New in-range position for `current`.
    ///
    /// Random draws, in order: the reference index (search only), the
    /// per-agent scalar, then one draw per coordinate that left the range.
    /// The reference is copied before use, and `population` reflects any
    /// agents already replaced earlier in the same generation.
    #[allow(clippy::too_many_arguments)]
    pub fn next_position(
        &self,
        branch: Branch,
        c: f64,
        current: &[f64],
        best: &[f64],
        population: &Population,
        space: &SearchSpace,
        rng: &mut RandomSource,
    ) -> Vec<f64> {
        let mut next = match branch {
            Branch::Encircling => Self::approach(best, current, c, rng.uniform()),
            Branch::Search => {
                // Duplicates with the current agent are allowed.
                let idx = rng.index(population.len());
                let reference = population.agents()[idx].position.clone();
                Self::approach(&reference, current, c, rng.uniform())
            }
            Branch::Spiral => Self::spiral(best, current, rng.uniform_inclusive(-1.0, 1.0)),
        };

        space.rerandomize_outside(&mut next, rng);
        next
    }

    /// `ref - c |2 nudge ref - x|`, coordinate-wise.
    #[must_use]
    pub fn approach(reference: &[f64], current: &[f64], c: f64, nudge: f64) -> Vec<f64> {
        reference
            .iter()
            .zip(current)
            .map(|(&r, &x)| {
                let dist = (2.0 * nudge * r - x).abs();
                r - dist * c
            })
            .collect()
    }

    /// `|best - x| cos(2π m) + best`, coordinate-wise.
    #[must_use]
    pub fn spiral(best: &[f64], current: &[f64], m: f64) -> Vec<f64> {
        let turn = (2.0 * PI * m).cos();
        best.iter()
            .zip(current)
            .map(|(&b, &x)| (b - x).abs() * turn + b)
            .collect()
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
