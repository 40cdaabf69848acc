//! Sea Lion Optimization for bounded continuous black-box minimization.
//!
//! # Components
//!
//! - [`RandomSource`] - one seeded generator per run, threaded through
//!   every stochastic step
//! - [`SearchSpace`] / [`SearchRange`] - dimensionality and the interval
//!   applied to every coordinate
//! - [`Agent`] / [`Population`] - candidate solutions and their fitness
//! - [`FitnessEvaluator`] - the objective being minimized
//! - [`LeaderStrategy`] - the per-generation `sp_leader` draw
//! - [`UpdateRule`] - encircling, search and spiral moves plus
//!   boundary re-randomization
//! - [`BestTracker`] - best and pocket-best, updated mid-sweep
//! - [`SeaLion`] - the optimization loop
//!
//! ## Benchmark Functions
//! - [`benchmarks`] - Schwefel 2.22, Sphere, Rastrigin and friends
//!
//! # Example
//!
//! ```
//! use sealion::metaheuristics::{benchmarks::schwefel_2_22, SeaLion, SearchSpace};
//!
//! let mut slo = SeaLion::new()
//!     .with_population_size(30)
//!     .with_max_iterations(100)
//!     .with_threshold(0.25)
//!     .with_seed(7);
//! let space = SearchSpace::continuous(10, -10.0, 10.0);
//! let result = slo.optimize(&schwefel_2_22, &space).unwrap();
//!
//! assert_eq!(result.history.len(), 101);
//! assert!(result.objective_value() <= result.history[0].pocket_best);
//! ```
//!
//! # Reproducibility
//!
//! The sweep over agents is strictly sequential: each agent sees the best
//! agent as already improved by earlier agents of the same generation, and
//! all random draws come from a single generator in a fixed order. The same
//! seed, configuration and objective therefore reproduce a run exactly.

pub mod benchmarks;
mod evaluator;
mod leader;
mod population;
mod random;
mod sea_lion;
mod search_space;
mod tracker;
mod update;

pub use evaluator::{infallible, FitnessEvaluator};
pub use leader::LeaderStrategy;
pub use population::{Agent, Population};
pub use random::RandomSource;
pub use sea_lion::{OptimizationResult, SeaLion};
pub use search_space::{SearchRange, SearchSpace};
pub use tracker::{BestTracker, GenerationRecord};
pub use update::{control_coefficient, Branch, BranchCounts, UpdateRule};

#[cfg(test)]
mod tests;
#[cfg(test)]
mod tests_slo_contract;
