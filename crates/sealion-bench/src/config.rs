//! Experiment configuration.
//!
//! Every field has a default matching the reference experiments, so an
//! experiment file only needs the keys it changes:
//!
//! ```json
//! { "n_vars": 10, "trials": 3, "seed": 42 }
//! ```

use crate::error::{BenchError, Result};
use sealion::metaheuristics::benchmarks::Benchmark;
use sealion::metaheuristics::{LeaderStrategy, OptimizationResult, SeaLion, SearchSpace};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which fitness series an experiment records per generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    /// Best fitness seen over the whole run
    #[default]
    Pocket,
    /// Running best as tracked during each generation
    Best,
}

impl Series {
    /// Extract this series from a finished run.
    #[must_use]
    pub fn select(self, result: &OptimizationResult) -> Vec<f64> {
        match self {
            Self::Pocket => result.pocket_history(),
            Self::Best => result.best_history(),
        }
    }

    /// Short name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pocket => "pocket",
            Self::Best => "best",
        }
    }
}

/// Settings shared by all harness modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Agents per run
    pub population_size: usize,
    /// Generations per run
    pub max_iterations: usize,
    /// Problem dimensionality
    pub n_vars: usize,
    /// Lower bound of every coordinate
    pub lower: f64,
    /// Upper bound of every coordinate
    pub upper: f64,
    /// Branch threshold for `run` and `trials`
    pub threshold: f64,
    /// `sp_leader` strategy
    pub leader: LeaderStrategy,
    /// Objective to minimize
    pub function: Benchmark,
    /// Base seed; run `k` uses `seed + k`
    pub seed: Option<u64>,
    /// Recorded series
    pub series: Series,
    /// Independent runs in `trials` mode
    pub trials: usize,
    /// Thresholds visited by `sweep`
    pub thresholds: Vec<f64>,
    /// Runs averaged per threshold in `sweep`
    pub avg_over: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            population_size: 300,
            max_iterations: 500,
            n_vars: 30,
            lower: -10.0,
            upper: 10.0,
            threshold: 0.25,
            leader: LeaderStrategy::default(),
            function: Benchmark::default(),
            seed: None,
            series: Series::default(),
            trials: 10,
            thresholds: vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
            avg_over: 5,
        }
    }
}

impl ExperimentConfig {
    /// Read an experiment file. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::Io`] if the file cannot be read and
    /// [`BenchError::ConfigParse`] if it is not a valid experiment.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| BenchError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Seed for the `run`-th run of a series, if seeding is enabled.
    #[must_use]
    pub fn run_seed(&self, run: usize) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(run as u64))
    }

    /// Search space shared by every run.
    #[must_use]
    pub fn space(&self) -> SearchSpace {
        SearchSpace::continuous(self.n_vars, self.lower, self.upper)
    }

    /// Optimizer for the `run`-th run at `threshold`.
    #[must_use]
    pub fn optimizer(&self, threshold: f64, run: usize) -> SeaLion {
        let slo = SeaLion::new()
            .with_population_size(self.population_size)
            .with_max_iterations(self.max_iterations)
            .with_threshold(threshold)
            .with_leader(self.leader);
        match self.run_seed(run) {
            Some(seed) => slo.with_seed(seed),
            None => slo,
        }
    }

    /// Check the settings before anything runs.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidExperiment`] for empty trial or sweep
    /// settings and [`BenchError::Optimizer`] for an optimizer setting the
    /// core rejects.
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::InvalidExperiment(
                "trials must be at least 1".to_string(),
            ));
        }
        if self.avg_over == 0 {
            return Err(BenchError::InvalidExperiment(
                "avg_over must be at least 1".to_string(),
            ));
        }
        if self.thresholds.is_empty() {
            return Err(BenchError::InvalidExperiment(
                "thresholds must not be empty".to_string(),
            ));
        }
        let space = self.space();
        self.optimizer(self.threshold, 0).validate(&space)?;
        for &t in &self.thresholds {
            self.optimizer(t, 0).validate(&space)?;
        }
        Ok(())
    }
}
