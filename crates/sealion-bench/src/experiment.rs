//! Repeated runs: independent trials and threshold sweeps.

use crate::config::ExperimentConfig;
use crate::error::{BenchError, Result};
use sealion::metaheuristics::OptimizationResult;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One averaged series of a threshold sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepSeries {
    /// Threshold the runs used
    pub threshold: f64,
    /// Element-wise mean of the recorded series
    pub mean: Vec<f64>,
}

/// Run the optimizer once on the configured benchmark.
///
/// `run` selects the seed offset.
///
/// # Errors
///
/// Returns [`BenchError::Optimizer`] if the configuration is rejected.
pub fn run_once(
    config: &ExperimentConfig,
    threshold: f64,
    run: usize,
) -> Result<OptimizationResult> {
    let mut slo = config.optimizer(threshold, run);
    let function = config.function;
    let result = slo.optimize(&|x: &[f64]| function.evaluate(x), &config.space())?;
    info!(
        run,
        threshold,
        elapsed_secs = result.elapsed.as_secs_f64(),
        pocket_best = result.objective_value(),
        "Time elapsed: {:.3}s",
        result.elapsed.as_secs_f64()
    );
    Ok(result)
}

/// Independent runs at the configured threshold, one recorded series each.
///
/// # Errors
///
/// Propagates the first failing run.
pub fn run_trials(config: &ExperimentConfig) -> Result<Vec<Vec<f64>>> {
    let mut series = Vec::with_capacity(config.trials);
    for k in 0..config.trials {
        info!("{}/{}...", k + 1, config.trials);
        let result = run_once(config, config.threshold, k)?;
        series.push(config.series.select(&result));
    }
    Ok(series)
}

/// For each threshold, average the recorded series of `avg_over` runs.
///
/// Run `k` of every threshold uses the same seed offset, so with a base
/// seed all thresholds start from identical initial populations.
///
/// # Errors
///
/// Propagates the first failing run or averaging error.
pub fn threshold_sweep(config: &ExperimentConfig) -> Result<Vec<SweepSeries>> {
    let mut sweep = Vec::with_capacity(config.thresholds.len());
    for &threshold in &config.thresholds {
        info!("Testing t = {threshold}");
        let mut runs = Vec::with_capacity(config.avg_over);
        for k in 0..config.avg_over {
            info!("{}/{}...", k + 1, config.avg_over);
            let result = run_once(config, threshold, k)?;
            runs.push(config.series.select(&result));
        }
        sweep.push(SweepSeries {
            threshold,
            mean: average_histories(&runs)?,
        });
    }
    Ok(sweep)
}

/// Element-wise mean of equally long histories.
///
/// # Errors
///
/// Returns [`BenchError::Averaging`] if `histories` is empty or the
/// histories differ in length.
///
/// # Example
///
/// ```
/// use sealion_bench::experiment::average_histories;
///
/// let mean = average_histories(&[vec![1.0, 4.0], vec![3.0, 2.0]]).unwrap();
/// assert_eq!(mean, vec![2.0, 3.0]);
/// ```
pub fn average_histories(histories: &[Vec<f64>]) -> Result<Vec<f64>> {
    let first = histories
        .first()
        .ok_or_else(|| BenchError::Averaging("no histories given".to_string()))?;
    let len = first.len();
    if let Some((i, h)) = histories.iter().enumerate().find(|(_, h)| h.len() != len) {
        return Err(BenchError::Averaging(format!(
            "history {i} has {} entries, expected {len}",
            h.len()
        )));
    }

    let n = histories.len() as f64;
    Ok((0..len)
        .map(|g| histories.iter().map(|h| h[g]).sum::<f64>() / n)
        .collect())
}
