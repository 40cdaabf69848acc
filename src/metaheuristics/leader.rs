//! Per-generation leadership signal (`sp_leader`).
//!
//! One value is drawn per generation and shared by every agent in it. It is
//! compared against the optimizer's threshold to choose between the
//! encircling/search branch and the spiral branch.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::random::RandomSource;

/// How `sp_leader` is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LeaderStrategy {
    /// A single uniform draw in `[0, 1)`.
    #[default]
    Uniform,

    /// Sound-speed ratio from two complementary angles:
    ///
    /// ```text
    /// r  ~ U[0, 1)
    /// v1 = sin(2πr)          (speed of sound in water)
    /// v2 = sin(2π(1 - r))    (speed of sound in air)
    /// sp = |v1 (1 + v2) / v2|
    /// ```
    ///
    /// Consumes one draw, like `Uniform`, but the value can exceed 1.
    AngleRatio,
}

impl LeaderStrategy {
    /// Draw the generation's `sp_leader`.
    pub fn draw(self, rng: &mut RandomSource) -> f64 {
        match self {
            Self::Uniform => rng.uniform(),
            Self::AngleRatio => {
                let radius = rng.uniform();
                let theta = 2.0 * PI * radius;
                let phi = 2.0 * PI * (1.0 - radius);
                let v1 = theta.sin();
                let v2 = phi.sin();
                (v1 * (1.0 + v2) / v2).abs()
            }
        }
    }

    /// Short name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::AngleRatio => "angle-ratio",
        }
    }

    /// Parse from a name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "uniform" | "rand" => Some(Self::Uniform),
            "angle-ratio" | "angle_ratio" | "angle" | "radius" => Some(Self::AngleRatio),
            _ => None,
        }
    }
}
