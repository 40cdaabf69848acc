//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use sealion::prelude::*;
//! ```

pub use crate::error::SeaLionError;
pub use crate::metaheuristics::benchmarks::{schwefel_2_22, sphere, Benchmark};
pub use crate::metaheuristics::{
    FitnessEvaluator, GenerationRecord, LeaderStrategy, OptimizationResult, SeaLion, SearchSpace,
};
