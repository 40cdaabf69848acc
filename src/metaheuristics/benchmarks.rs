//! Benchmark objectives for evaluating the optimizer.
//!
//! Classic test functions, all minimized with a known optimum of 0.
//! [`schwefel_2_22`] is the function used by the default experiments.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Schwefel 2.22: `Σ|xᵢ| + Π|xᵢ|` - Unimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-10, 10]^D
///
/// # Example
/// ```
/// use sealion::metaheuristics::benchmarks::schwefel_2_22;
/// assert!((schwefel_2_22(&[1.0, -2.0]) - 5.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn schwefel_2_22(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
    let prod: f64 = x.iter().map(|xi| xi.abs()).product();
    sum + prod
}

/// Sphere: `Σxᵢ²` - Unimodal, separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-100, 100]^D
///
/// # Example
/// ```
/// use sealion::metaheuristics::benchmarks::sphere;
/// assert!(sphere(&[0.0, 0.0, 0.0]).abs() < 1e-10);
/// ```
#[must_use]
pub fn sphere(x: &[f64]) -> f64 {
    x.iter().map(|xi| xi * xi).sum()
}

/// Rosenbrock - Unimodal, non-separable
///
/// Global minimum: f(1, 1, ..., 1) = 0
/// Search domain: [-30, 30]^D
#[must_use]
pub fn rosenbrock(x: &[f64]) -> f64 {
    x.windows(2)
        .map(|w| {
            let a = w[1] - w[0] * w[0];
            let b = 1.0 - w[0];
            100.0 * a * a + b * b
        })
        .sum()
}

/// Rastrigin - Multimodal, separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-5.12, 5.12]^D
#[must_use]
pub fn rastrigin(x: &[f64]) -> f64 {
    let n = x.len() as f64;
    10.0 * n
        + x.iter()
            .map(|xi| xi * xi - 10.0 * (2.0 * PI * xi).cos())
            .sum::<f64>()
}

/// Ackley - Multimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-32, 32]^D
#[must_use]
pub fn ackley(x: &[f64]) -> f64 {
    if x.is_empty() {
        return 0.0;
    }
    let n = x.len() as f64;
    let sum_sq: f64 = x.iter().map(|xi| xi * xi).sum();
    let sum_cos: f64 = x.iter().map(|xi| (2.0 * PI * xi).cos()).sum();

    -20.0 * (-0.2 * (sum_sq / n).sqrt()).exp() - (sum_cos / n).exp() + 20.0 + std::f64::consts::E
}

/// Griewank - Multimodal, non-separable
///
/// Global minimum: f(0, 0, ..., 0) = 0
/// Search domain: [-600, 600]^D
#[must_use]
pub fn griewank(x: &[f64]) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi * xi).sum::<f64>() / 4000.0;
    let prod: f64 = x
        .iter()
        .enumerate()
        .map(|(i, xi)| (xi / ((i + 1) as f64).sqrt()).cos())
        .product();
    sum - prod + 1.0
}

/// Named benchmark, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Benchmark {
    /// [`schwefel_2_22`]
    #[default]
    Schwefel222,
    /// [`sphere`]
    Sphere,
    /// [`rosenbrock`]
    Rosenbrock,
    /// [`rastrigin`]
    Rastrigin,
    /// [`ackley`]
    Ackley,
    /// [`griewank`]
    Griewank,
}

impl Benchmark {
    /// Every benchmark, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Schwefel222,
        Self::Sphere,
        Self::Rosenbrock,
        Self::Rastrigin,
        Self::Ackley,
        Self::Griewank,
    ];

    /// Evaluate at `x`.
    #[must_use]
    pub fn evaluate(self, x: &[f64]) -> f64 {
        match self {
            Self::Schwefel222 => schwefel_2_22(x),
            Self::Sphere => sphere(x),
            Self::Rosenbrock => rosenbrock(x),
            Self::Rastrigin => rastrigin(x),
            Self::Ackley => ackley(x),
            Self::Griewank => griewank(x),
        }
    }

    /// Short name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Schwefel222 => "schwefel-2-22",
            Self::Sphere => "sphere",
            Self::Rosenbrock => "rosenbrock",
            Self::Rastrigin => "rastrigin",
            Self::Ackley => "ackley",
            Self::Griewank => "griewank",
        }
    }

    /// Parse from a name.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "schwefel-2-22" | "schwefel222" | "schwefel_2_22" | "f2" => Some(Self::Schwefel222),
            "sphere" | "f1" => Some(Self::Sphere),
            "rosenbrock" => Some(Self::Rosenbrock),
            "rastrigin" => Some(Self::Rastrigin),
            "ackley" => Some(Self::Ackley),
            "griewank" => Some(Self::Griewank),
            _ => None,
        }
    }

    /// Conventional search bounds `(lower, upper)`.
    #[must_use]
    pub fn default_bounds(&self) -> (f64, f64) {
        match self {
            Self::Schwefel222 => (-10.0, 10.0),
            Self::Sphere => (-100.0, 100.0),
            Self::Rosenbrock => (-30.0, 30.0),
            Self::Rastrigin => (-5.12, 5.12),
            Self::Ackley => (-32.0, 32.0),
            Self::Griewank => (-600.0, 600.0),
        }
    }
}

#[cfg(test)]
#[path = "benchmarks_tests.rs"]
mod tests;
