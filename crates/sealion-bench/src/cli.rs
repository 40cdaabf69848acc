//! Command-line interface.

use crate::config::{ExperimentConfig, Series};
use crate::error::{BenchError, Result};
use crate::experiment::{run_once, run_trials, threshold_sweep};
use crate::report::{default_output, write_series_file, write_summary, RunSummary};
use clap::{ArgAction, Args, Parser, Subcommand};
use sealion::metaheuristics::benchmarks::Benchmark;
use sealion::metaheuristics::LeaderStrategy;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "sealion-bench")]
#[command(about = "Sea Lion Optimization experiments: single runs, trials and threshold sweeps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: ExperimentArgs,

    /// Increase log verbosity (-v for per-generation debug output)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Options shared by every mode. Each one overrides the experiment file.
#[derive(Args, Debug, Default, Clone)]
pub struct ExperimentArgs {
    /// JSON experiment file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Number of agents
    #[arg(short, long, global = true)]
    pub population_size: Option<usize>,

    /// Number of generations
    #[arg(short = 'i', long, global = true)]
    pub max_iterations: Option<usize>,

    /// Problem dimensionality
    #[arg(short, long, global = true)]
    pub n_vars: Option<usize>,

    /// Lower bound of every coordinate
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub lower: Option<f64>,

    /// Upper bound of every coordinate
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub upper: Option<f64>,

    /// Benchmark function (schwefel-2-22, sphere, rosenbrock, rastrigin, ackley, griewank)
    #[arg(short, long, global = true)]
    pub function: Option<String>,

    /// sp_leader strategy (uniform, angle-ratio)
    #[arg(long, global = true)]
    pub leader: Option<String>,

    /// Base random seed; run k uses seed + k
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Recorded series
    #[arg(long, global = true, value_enum)]
    pub series: Option<Series>,

    /// Output CSV file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Single run; prints the best solution found
    Run {
        /// Branch threshold
        #[arg(short, long)]
        threshold: Option<f64>,

        /// Also write a JSON summary of the run
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Independent runs at one threshold
    Trials {
        /// Number of runs
        #[arg(short = 'N', long)]
        trials: Option<usize>,

        /// Branch threshold
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Averaged runs for each of several thresholds
    Sweep {
        /// Comma-separated thresholds
        #[arg(long, value_delimiter = ',')]
        thresholds: Option<Vec<f64>>,

        /// Runs averaged per threshold
        #[arg(long)]
        avg_over: Option<usize>,
    },
}

impl Commands {
    /// Mode name used in default output paths.
    #[must_use]
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Run { .. } => "run",
            Self::Trials { .. } => "trials",
            Self::Sweep { .. } => "sweep",
        }
    }
}

impl ExperimentArgs {
    /// Apply the options given on the command line on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::UnknownFunction`] or
    /// [`BenchError::UnknownLeader`] for unrecognised names.
    pub fn apply(&self, config: &mut ExperimentConfig) -> Result<()> {
        if let Some(v) = self.population_size {
            config.population_size = v;
        }
        if let Some(v) = self.max_iterations {
            config.max_iterations = v;
        }
        if let Some(v) = self.n_vars {
            config.n_vars = v;
        }
        if let Some(v) = self.lower {
            config.lower = v;
        }
        if let Some(v) = self.upper {
            config.upper = v;
        }
        if let Some(name) = &self.function {
            config.function =
                Benchmark::parse(name).ok_or_else(|| BenchError::UnknownFunction(name.clone()))?;
        }
        if let Some(name) = &self.leader {
            config.leader =
                LeaderStrategy::parse(name).ok_or_else(|| BenchError::UnknownLeader(name.clone()))?;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(v) = self.series {
            config.series = v;
        }
        Ok(())
    }
}

impl Cli {
    /// Resolve the effective configuration: defaults, then the experiment
    /// file, then command-line options.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded, a name is unknown, or the result
    /// does not validate.
    pub fn resolve(&self) -> Result<ExperimentConfig> {
        let mut config = match &self.options.config {
            Some(path) => ExperimentConfig::load(path)?,
            None => ExperimentConfig::default(),
        };
        self.options.apply(&mut config)?;

        match &self.command {
            Commands::Run { threshold, .. } => {
                if let Some(t) = threshold {
                    config.threshold = *t;
                }
            }
            Commands::Trials { trials, threshold } => {
                if let Some(n) = trials {
                    config.trials = *n;
                }
                if let Some(t) = threshold {
                    config.threshold = *t;
                }
            }
            Commands::Sweep {
                thresholds,
                avg_over,
            } => {
                if let Some(ts) = thresholds {
                    config.thresholds.clone_from(ts);
                }
                if let Some(n) = avg_over {
                    config.avg_over = *n;
                }
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Run the selected mode. Returns the CSV file written, if any.
    ///
    /// # Errors
    ///
    /// Propagates configuration, optimizer and output errors.
    pub fn execute(&self) -> Result<Option<PathBuf>> {
        let config = self.resolve()?;
        let output = self
            .options
            .output
            .clone()
            .unwrap_or_else(|| default_output(self.command.mode()));

        info!(
            mode = self.command.mode(),
            function = config.function.as_str(),
            pop = config.population_size,
            max_iter = config.max_iterations,
            n_vars = config.n_vars,
            "starting experiment"
        );

        match &self.command {
            Commands::Run { json, .. } => {
                let result = run_once(&config, config.threshold, 0)?;
                println!("Pocket best fitness: {}", result.pocket_best.fitness);
                println!("Pocket best position: {:?}", result.pocket_best.position);
                println!("Best fitness: {}", result.best.fitness);
                println!("Best position: {:?}", result.best.position);
                if let Some(path) = json {
                    write_summary(
                        path,
                        &RunSummary {
                            config: &config,
                            threshold: config.threshold,
                            result: &result,
                        },
                    )?;
                    info!(path = %path.display(), "wrote run summary");
                }
                Ok(None)
            }
            Commands::Trials { .. } => {
                let series = run_trials(&config)?;
                write_series_file(&output, &series)?;
                info!(path = %output.display(), "wrote trial series");
                Ok(Some(output))
            }
            Commands::Sweep { .. } => {
                let sweep = threshold_sweep(&config)?;
                let columns: Vec<Vec<f64>> = sweep.into_iter().map(|s| s.mean).collect();
                write_series_file(&output, &columns)?;
                info!(path = %output.display(), "wrote sweep series");
                Ok(Some(output))
            }
        }
    }
}
