//! Sealion: Sea Lion Optimization for continuous minimization in pure Rust.
//!
//! Sealion minimizes a black-box objective over a box-bounded search space
//! with a population of agents that encircle, scout and spiral towards the
//! best position found so far. Runs are fully reproducible from a seed.
//!
//! # Quick Start
//!
//! ```
//! use sealion::prelude::*;
//!
//! let mut slo = SeaLion::new()
//!     .with_population_size(20)
//!     .with_max_iterations(50)
//!     .with_seed(42);
//! let space = SearchSpace::continuous(4, -10.0, 10.0);
//!
//! let result = slo.optimize(&schwefel_2_22, &space).unwrap();
//! assert_eq!(result.history.len(), 51);
//! assert!(result.objective_value() < result.history[0].pocket_best);
//! ```
//!
//! # Modules
//!
//! - [`metaheuristics`]: the optimizer, its building blocks and benchmarks
//! - [`error`]: configuration errors
//! - [`prelude`]: common imports

pub mod error;
pub mod metaheuristics;
pub mod prelude;

pub use error::{Result, SeaLionError};
