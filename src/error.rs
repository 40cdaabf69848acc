//! Error types for Sea Lion optimization.
//!
//! Only configuration problems are reported by the optimizer itself; once a
//! run has started with a valid configuration it cannot fail except through
//! the caller's own fitness evaluator.

use thiserror::Error;

/// Result alias for fallible configuration checks.
pub type Result<T> = std::result::Result<T, SeaLionError>;

/// Invalid optimizer or search-space configuration.
///
/// # Examples
///
/// ```
/// use sealion::error::SeaLionError;
///
/// let err = SeaLionError::InvalidHyperparameter {
///     param: "threshold".to_string(),
///     value: "1.5".to_string(),
///     constraint: "within [0, 1]".to_string(),
/// };
/// assert!(err.to_string().contains("threshold"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeaLionError {
    /// A scalar parameter is outside its admissible domain.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// The search range is malformed or empty.
    #[error("Invalid search range [{lower}, {upper}]: {reason}")]
    InvalidRange {
        /// Lower bound as given
        lower: f64,
        /// Upper bound as given
        upper: f64,
        /// What is wrong with it
        reason: String,
    },
}

impl SeaLionError {
    pub(crate) fn hyperparameter(
        param: &str,
        value: impl ToString,
        constraint: &str,
    ) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }
}
