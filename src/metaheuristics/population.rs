//! Agents and the population they form.

use serde::{Deserialize, Serialize};

use super::evaluator::FitnessEvaluator;
use super::random::RandomSource;
use super::search_space::SearchSpace;

/// One candidate solution.
///
/// `fitness` is always the evaluator's value at `position`; whenever the
/// position is replaced the fitness is recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// Stable index within the population
    pub id: usize,
    /// Objective value at `position` (lower is better)
    pub fitness: f64,
    /// Coordinates, one per decision variable
    pub position: Vec<f64>,
}

impl Agent {
    /// Evaluate `position` and wrap it as an agent.
    pub fn evaluated<O>(id: usize, position: Vec<f64>, objective: &mut O) -> Result<Self, O::Error>
    where
        O: FitnessEvaluator,
    {
        let fitness = objective.evaluate(&position)?;
        Ok(Self {
            id,
            fitness,
            position,
        })
    }

    /// Strictly better than `other` (ties and `NaN` never improve).
    #[must_use]
    pub fn improves_on(&self, other: &Self) -> bool {
        self.fitness < other.fitness
    }
}

/// Ordered set of agents, indexed by `Agent::id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    agents: Vec<Agent>,
}

impl Population {
    /// Draw `size` positions uniformly from `space` and evaluate each.
    ///
    /// Draw order is agent-major: all coordinates of agent 0, then agent 1,
    /// and so on. Every position is drawn before the first evaluation.
    pub fn initialize<O>(
        size: usize,
        space: &SearchSpace,
        rng: &mut RandomSource,
        objective: &mut O,
    ) -> Result<Self, O::Error>
    where
        O: FitnessEvaluator,
    {
        let range = space.range();
        let positions: Vec<Vec<f64>> = (0..size)
            .map(|_| {
                (0..space.dimension())
                    .map(|_| range.sample(rng))
                    .collect()
            })
            .collect();

        let agents = positions
            .into_iter()
            .enumerate()
            .map(|(id, position)| Agent::evaluated(id, position, objective))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { agents })
    }

    /// Wrap already-evaluated agents.
    #[must_use]
    pub fn from_agents(agents: Vec<Agent>) -> Self {
        Self { agents }
    }

    /// Number of agents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// True when the population holds no agents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Agents in population order.
    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Agent at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Agent> {
        self.agents.get(index)
    }

    /// Replace the agent at its own `id` slot.
    pub(crate) fn replace(&mut self, agent: Agent) {
        let slot = agent.id;
        self.agents[slot] = agent;
    }

    /// Lowest-fitness agent; the first one wins ties.
    ///
    /// `NaN` agents are skipped. The scan starts from the first agent with a
    /// comparable fitness and only falls back to agent 0 when every fitness
    /// is `NaN`.
    #[must_use]
    pub fn fittest(&self) -> Option<&Agent> {
        let first = self
            .agents
            .iter()
            .find(|a| !a.fitness.is_nan())
            .or_else(|| self.agents.first())?;
        Some(self.agents.iter().fold(first, |best, agent| {
            if agent.improves_on(best) {
                agent
            } else {
                best
            }
        }))
    }

    /// Consume into the underlying agents.
    #[must_use]
    pub fn into_agents(self) -> Vec<Agent> {
        self.agents
    }
}
