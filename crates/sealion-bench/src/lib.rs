//! Experiment harness for Sea Lion Optimization.
//!
//! Drives [`sealion`] the way the reference experiments do: a single run,
//! a batch of independent trials, or a sweep over branch thresholds with
//! each threshold averaged over several runs. Per-generation fitness
//! series are written as header-less CSV for plotting.
//!
//! # Modules
//!
//! - [`cli`]: `clap` command line and mode dispatch
//! - [`config`]: experiment settings and JSON experiment files
//! - [`experiment`]: trials, sweeps and history averaging
//! - [`report`]: CSV epoch data and JSON run summaries
//! - [`error`]: harness errors and exit codes

pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod report;

pub use cli::{Cli, Commands};
pub use config::{ExperimentConfig, Series};
pub use error::{BenchError, Result};
