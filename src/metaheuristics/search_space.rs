//! Bounded continuous search space.
//!
//! A single scalar interval is applied uniformly to every coordinate.

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::error::{Result, SeaLionError};

/// Interval shared by every dimension of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchRange {
    /// Lower bound (always included)
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Whether `upper` itself belongs to the range
    #[serde(default = "default_closed")]
    pub closed: bool,
}

fn default_closed() -> bool {
    true
}

impl SearchRange {
    /// Closed interval `[lower, upper]`.
    #[must_use]
    pub fn closed(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            closed: true,
        }
    }

    /// Half-open interval `[lower, upper)`.
    #[must_use]
    pub fn half_open(lower: f64, upper: f64) -> Self {
        Self {
            lower,
            upper,
            closed: false,
        }
    }

    /// Interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check that the interval is finite and non-empty.
    ///
    /// A zero-width closed interval is allowed (it holds exactly one point);
    /// a zero-width half-open interval is empty and rejected.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| SeaLionError::InvalidRange {
            lower: self.lower,
            upper: self.upper,
            reason: reason.to_string(),
        };

        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(invalid("bounds must be finite"));
        }
        if !self.width().is_finite() {
            return Err(invalid("range width overflows"));
        }
        if self.lower > self.upper {
            return Err(invalid("lower bound exceeds upper bound"));
        }
        if !self.closed && self.lower == self.upper {
            return Err(invalid("half-open range is empty"));
        }
        Ok(())
    }

    /// Membership test. `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        if self.closed {
            self.lower <= x && x <= self.upper
        } else {
            self.lower <= x && x < self.upper
        }
    }

    /// Draw a uniform value from the interval.
    pub fn sample(&self, rng: &mut RandomSource) -> f64 {
        if self.closed {
            rng.uniform_inclusive(self.lower, self.upper)
        } else {
            rng.uniform_between(self.lower, self.upper)
        }
    }
}

/// Dimensionality plus the per-coordinate range.
///
/// # Example
///
/// ```
/// use sealion::metaheuristics::SearchSpace;
///
/// let space = SearchSpace::continuous(30, -10.0, 10.0);
/// assert_eq!(space.dimension(), 30);
/// assert!(space.range().contains(10.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchSpace {
    dim: usize,
    range: SearchRange,
}

impl SearchSpace {
    /// `dim`-dimensional box with closed bounds `[lower, upper]` on each axis.
    #[must_use]
    pub fn continuous(dim: usize, lower: f64, upper: f64) -> Self {
        Self {
            dim,
            range: SearchRange::closed(lower, upper),
        }
    }

    /// `dim`-dimensional box with half-open bounds `[lower, upper)`.
    #[must_use]
    pub fn half_open(dim: usize, lower: f64, upper: f64) -> Self {
        Self {
            dim,
            range: SearchRange::half_open(lower, upper),
        }
    }

    /// Build from an explicit range.
    #[must_use]
    pub fn with_range(dim: usize, range: SearchRange) -> Self {
        Self { dim, range }
    }

    /// Number of decision variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// The shared coordinate range.
    #[must_use]
    pub fn range(&self) -> &SearchRange {
        &self.range
    }

    /// Validate dimensionality and range.
    pub fn validate(&self) -> Result<()> {
        if self.dim == 0 {
            return Err(SeaLionError::hyperparameter("n_vars", self.dim, "at least 1"));
        }
        self.range.validate()
    }

    /// Whether every coordinate of `position` lies within the range.
    #[must_use]
    pub fn contains(&self, position: &[f64]) -> bool {
        position.len() == self.dim && position.iter().all(|&x| self.range.contains(x))
    }

    /// Replace every out-of-range coordinate with a fresh uniform draw.
    ///
    /// Coordinates are visited in order and one draw is consumed per
    /// replaced coordinate. Returns how many were replaced.
    pub fn rerandomize_outside(&self, position: &mut [f64], rng: &mut RandomSource) -> usize {
        let mut replaced = 0;
        for x in position.iter_mut() {
            if !self.range.contains(*x) {
                *x = self.range.sample(rng);
                replaced += 1;
            }
        }
        replaced
    }
}
