//! Sea Lion Optimization (SLnO).
//!
//! A population-based metaheuristic modelled on the hunting behaviour of
//! sea lions: agents either close in on the best-known prey, scout around a
//! randomly chosen peer, or spiral towards the prey.
//!
//! # Algorithm
//!
//! ```text
//! 1. Draw `pop` agents uniformly from the range and evaluate them
//! 2. Best = Pocket = fittest agent
//! 3. For t in 0..T:
//!      c = 2 (T - t) / T
//!      sp_leader = leader.draw()
//!      for each agent, in order:
//!          move it (encircling / search / spiral), re-randomize
//!          out-of-range coordinates, evaluate, update Best and Pocket
//! 4. Best = fittest of the final population; offer it to Pocket
//! ```
//!
//! All `T` generations always run; there is no convergence-based stop.
//!
//! # References
//!
//! - Masadeh, Mahafzah & Sharieh (2019): "Sea Lion Optimization Algorithm",
//!   IJACSA 10(5)

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use super::evaluator::{infallible, FitnessEvaluator};
use super::leader::LeaderStrategy;
use super::population::{Agent, Population};
use super::random::RandomSource;
use super::search_space::SearchSpace;
use super::tracker::{BestTracker, GenerationRecord};
use super::update::{control_coefficient, BranchCounts, UpdateRule};
use crate::error::{Result, SeaLionError};

/// Sea Lion optimizer.
///
/// # Example
///
/// ```
/// use sealion::metaheuristics::{SeaLion, SearchSpace};
///
/// // Sphere function: f(x) = Σxᵢ²
/// let objective = |x: &[f64]| x.iter().map(|xi| xi * xi).sum();
///
/// let mut slo = SeaLion::new()
///     .with_population_size(40)
///     .with_max_iterations(200)
///     .with_seed(42);
/// let space = SearchSpace::continuous(5, -10.0, 10.0);
/// let result = slo.optimize(&objective, &space).unwrap();
///
/// assert_eq!(result.history.len(), 201);
/// assert!(result.pocket_best.fitness <= result.history[0].pocket_best);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeaLion {
    /// Number of agents (default: 300)
    pub population_size: usize,

    /// Number of generations (default: 500)
    pub max_iterations: usize,

    /// `sp_leader` cutoff for the encircling/search branch, in `[0, 1]`
    /// (default: 0.25)
    pub threshold: f64,

    /// How `sp_leader` is drawn each generation
    #[serde(default)]
    pub leader: LeaderStrategy,

    /// Random seed for reproducibility
    #[serde(default)]
    seed: Option<u64>,

    // Internal state (not serialized)
    #[serde(skip)]
    population: Population,
    #[serde(skip)]
    history: Vec<GenerationRecord>,
    #[serde(skip)]
    pocket_best: Option<Agent>,
}

impl Default for SeaLion {
    fn default() -> Self {
        Self {
            population_size: 300,
            max_iterations: 500,
            threshold: 0.25,
            leader: LeaderStrategy::default(),
            seed: None,
            population: Population::default(),
            history: Vec::new(),
            pocket_best: None,
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Lowest-fitness agent observed over the whole run
    pub pocket_best: Agent,
    /// Fittest agent of the final population
    pub best: Agent,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
    /// One record for the initial population and one per generation
    pub history: Vec<GenerationRecord>,
    /// Objective evaluations performed
    pub evaluations: usize,
    /// Branch selections over all agent updates
    pub branches: BranchCounts,
}

impl OptimizationResult {
    /// Best objective value found.
    #[must_use]
    pub fn objective_value(&self) -> f64 {
        self.pocket_best.fitness
    }

    /// Position of the best objective value found.
    #[must_use]
    pub fn solution(&self) -> &[f64] {
        &self.pocket_best.position
    }

    /// Pocket-best fitness per recorded generation.
    #[must_use]
    pub fn pocket_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.pocket_best).collect()
    }

    /// Running-best fitness per recorded generation.
    #[must_use]
    pub fn best_history(&self) -> Vec<f64> {
        self.history.iter().map(|r| r.best).collect()
    }
}

impl SeaLion {
    /// Create an optimizer with default parameters.
    ///
    /// Default: 300 agents, 500 generations, threshold 0.25, uniform leader.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the population size.
    #[must_use]
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Set the number of generations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the branch-selection threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the `sp_leader` strategy.
    #[must_use]
    pub fn with_leader(mut self, leader: LeaderStrategy) -> Self {
        self.leader = leader;
        self
    }

    /// Set random seed for reproducibility.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Check the configuration against `space` without drawing or evaluating.
    pub fn validate(&self, space: &SearchSpace) -> Result<()> {
        if self.population_size == 0 {
            return Err(SeaLionError::hyperparameter(
                "population_size",
                self.population_size,
                "at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SeaLionError::hyperparameter(
                "threshold",
                self.threshold,
                "within [0, 1]",
            ));
        }
        space.validate()
    }

    /// Minimize an objective that cannot fail.
    ///
    /// # Errors
    ///
    /// Returns [`SeaLionError`] if the configuration or `space` is invalid.
    pub fn optimize<F>(&mut self, objective: &F, space: &SearchSpace) -> Result<OptimizationResult>
    where
        F: Fn(&[f64]) -> f64,
    {
        self.try_optimize(infallible(|x: &[f64]| objective(x)), space)
    }

    /// Minimize a fallible objective.
    ///
    /// Configuration problems are converted into the evaluator's error type;
    /// an error from the evaluator ends the run and is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns the evaluator's error, or a converted [`SeaLionError`] if the
    /// configuration is invalid.
    #[instrument(
        skip(self, objective, space),
        fields(
            pop = self.population_size,
            n_vars = space.dimension(),
            max_iter = self.max_iterations
        )
    )]
    pub fn try_optimize<O>(
        &mut self,
        mut objective: O,
        space: &SearchSpace,
    ) -> std::result::Result<OptimizationResult, O::Error>
    where
        O: FitnessEvaluator,
        O::Error: From<SeaLionError>,
    {
        self.validate(space)?;
        self.reset();

        let start = Instant::now();
        let mut rng = RandomSource::from_seed_option(self.seed);

        let mut population =
            Population::initialize(self.population_size, space, &mut rng, &mut objective)?;
        let mut tracker = BestTracker::from_population(&population).ok_or_else(|| {
            SeaLionError::hyperparameter("population_size", population.len(), "at least 1")
        })?;

        let rule = UpdateRule::new(self.threshold);
        let mut branches = BranchCounts::default();
        let mut history = Vec::with_capacity(self.max_iterations + 1);
        history.push(tracker.record());

        for generation in 0..self.max_iterations {
            let c = control_coefficient(generation, self.max_iterations);
            let sp_leader = self.leader.draw(&mut rng);
            let branch = rule.branch(sp_leader, c);

            for idx in 0..population.len() {
                let position = rule.next_position(
                    branch,
                    c,
                    &population.agents()[idx].position,
                    &tracker.best().position,
                    &population,
                    space,
                    &mut rng,
                );
                let agent = Agent::evaluated(idx, position, &mut objective)?;
                tracker.observe(&agent);
                population.replace(agent);
                branches.record(branch);
            }

            let record = tracker.record();
            debug!(
                generation,
                c,
                sp_leader,
                ?branch,
                best = record.best,
                pocket_best = record.pocket_best,
                "generation complete"
            );
            history.push(record);
        }

        tracker.reconcile(&population);
        let elapsed = start.elapsed();
        let (pocket_best, best) = tracker.into_agents();

        info!(
            elapsed_secs = elapsed.as_secs_f64(),
            pocket_best = pocket_best.fitness,
            best = best.fitness,
            encircling = branches.encircling,
            search = branches.search,
            spiral = branches.spiral,
            "sea lion run complete"
        );

        self.population = population;
        self.history = history.clone();
        self.pocket_best = Some(pocket_best.clone());

        Ok(OptimizationResult {
            pocket_best,
            best,
            elapsed,
            history,
            evaluations: self.population_size * (self.max_iterations + 1),
            branches,
        })
    }

    /// Pocket-best agent of the last run.
    #[must_use]
    pub fn best(&self) -> Option<&Agent> {
        self.pocket_best.as_ref()
    }

    /// Final population of the last run.
    #[must_use]
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Per-generation records of the last run.
    #[must_use]
    pub fn history(&self) -> &[GenerationRecord] {
        &self.history
    }

    /// Forget the last run.
    pub fn reset(&mut self) {
        self.population = Population::default();
        self.history.clear();
        self.pocket_best = None;
    }
}

#[cfg(test)]
#[path = "sea_lion_tests.rs"]
mod tests;
