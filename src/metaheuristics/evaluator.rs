//! Objective function interface.

/// Maps a position to the scalar being minimized.
///
/// The optimizer calls `evaluate` exactly once per agent at initialization
/// and once per agent per generation, always on the agent's current
/// position. Results are never cached. An error aborts the run and is
/// handed back to the caller as is.
///
/// Any `FnMut(&[f64]) -> Result<f64, E>` is an evaluator; infallible
/// closures can be adapted with [`infallible`].
pub trait FitnessEvaluator {
    /// Error raised by the objective.
    type Error;

    /// Objective value at `position`.
    fn evaluate(&mut self, position: &[f64]) -> Result<f64, Self::Error>;
}

impl<F, E> FitnessEvaluator for F
where
    F: FnMut(&[f64]) -> Result<f64, E>,
{
    type Error = E;

    fn evaluate(&mut self, position: &[f64]) -> Result<f64, E> {
        self(position)
    }
}

/// Adapt a plain objective that cannot fail.
///
/// The error type is free so the adapter fits whatever the caller's
/// pipeline reports; it is never produced.
///
/// # Example
///
/// ```
/// use std::convert::Infallible;
/// use sealion::metaheuristics::{infallible, FitnessEvaluator};
///
/// let mut f = infallible::<_, Infallible>(|x: &[f64]| x.iter().sum());
/// assert_eq!(f.evaluate(&[1.0, 2.0]), Ok(3.0));
/// ```
pub fn infallible<F, E>(mut objective: F) -> impl FitnessEvaluator<Error = E>
where
    F: FnMut(&[f64]) -> f64,
{
    move |x: &[f64]| Ok::<f64, E>(objective(x))
}
