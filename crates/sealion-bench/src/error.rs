//! Error types for the experiment harness.

use sealion::SeaLionError;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Harness error types
#[derive(Error, Debug)]
pub enum BenchError {
    /// Experiment file could not be parsed
    #[error("Invalid experiment file {path}: {source}")]
    ConfigParse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Experiment settings are inconsistent
    #[error("Invalid experiment: {0}")]
    InvalidExperiment(String),

    /// Benchmark name not recognised
    #[error("Unknown benchmark function: {0}")]
    UnknownFunction(String),

    /// Leader strategy name not recognised
    #[error("Unknown leader strategy: {0}")]
    UnknownLeader(String),

    /// Histories could not be averaged
    #[error("Cannot average histories: {0}")]
    Averaging(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Optimizer rejected its configuration
    #[error("Optimizer error: {0}")]
    Optimizer(#[from] SeaLionError),
}

impl BenchError {
    /// Get exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigParse { .. } => ExitCode::from(4),
            Self::InvalidExperiment(_) | Self::Optimizer(_) => ExitCode::from(5),
            Self::UnknownFunction(_) | Self::UnknownLeader(_) => ExitCode::from(2),
            Self::Averaging(_) => ExitCode::from(6),
            Self::Io(_) | Self::Csv(_) | Self::Json(_) => ExitCode::from(7),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimizer_error_wraps_message() {
        let err: BenchError = SeaLionError::InvalidRange {
            lower: 2.0,
            upper: 1.0,
            reason: "lower bound exceeds upper bound".to_string(),
        }
        .into();
        assert!(err.to_string().starts_with("Optimizer error: Invalid search range"));
        assert_eq!(err.exit_code(), ExitCode::from(5));
    }

    #[test]
    fn test_unknown_function_exit_code() {
        let err = BenchError::UnknownFunction("levy".to_string());
        assert_eq!(err.to_string(), "Unknown benchmark function: levy");
        assert_eq!(err.exit_code(), ExitCode::from(2));
    }

    #[test]
    fn test_io_error_from() {
        let err: BenchError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, BenchError::Io(_)));
        assert_eq!(err.exit_code(), ExitCode::from(7));
    }
}
