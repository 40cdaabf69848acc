//! Running best and pocket-best bookkeeping.
//!
//! Both snapshots are updated agent by agent while a generation is being
//! swept, so an agent later in the sweep already sees improvements made by
//! earlier agents of the same generation.

use serde::{Deserialize, Serialize};

use super::population::{Agent, Population};

/// Fitness pair recorded once per generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Lowest fitness ever observed up to this point
    pub pocket_best: f64,
    /// Fitness of the running best agent
    pub best: f64,
}

/// Best / pocket-best pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestTracker {
    best: Agent,
    pocket_best: Agent,
}

impl BestTracker {
    /// Seed both snapshots from the fittest agent of `population`.
    ///
    /// Returns `None` for an empty population.
    #[must_use]
    pub fn from_population(population: &Population) -> Option<Self> {
        population.fittest().map(|agent| Self {
            best: agent.clone(),
            pocket_best: agent.clone(),
        })
    }

    /// The running best agent.
    #[must_use]
    pub fn best(&self) -> &Agent {
        &self.best
    }

    /// The lowest-fitness agent ever observed.
    #[must_use]
    pub fn pocket_best(&self) -> &Agent {
        &self.pocket_best
    }

    /// Fold in a freshly evaluated agent.
    ///
    /// Both comparisons are strict; ties and `NaN` never replace.
    pub fn observe(&mut self, agent: &Agent) {
        if agent.improves_on(&self.best) {
            self.best = agent.clone();
        }
        if self.best.improves_on(&self.pocket_best) {
            self.pocket_best = self.best.clone();
        }
    }

    /// Recompute best over `population` and offer it to the pocket once more.
    ///
    /// After this, `best` may be worse than `pocket_best`: the agent that set
    /// the pocket may since have moved away.
    pub fn reconcile(&mut self, population: &Population) {
        if let Some(fittest) = population.fittest() {
            self.best = fittest.clone();
        }
        if self.best.improves_on(&self.pocket_best) {
            self.pocket_best = self.best.clone();
        }
    }

    /// Snapshot of the current fitness pair.
    #[must_use]
    pub fn record(&self) -> GenerationRecord {
        GenerationRecord {
            pocket_best: self.pocket_best.fitness,
            best: self.best.fitness,
        }
    }

    /// Consume into `(pocket_best, best)`.
    #[must_use]
    pub fn into_agents(self) -> (Agent, Agent) {
        (self.pocket_best, self.best)
    }
}
