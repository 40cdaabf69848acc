//! Epoch-data output.
//!
//! Series are written column-wise without a header: row `g` holds the
//! generation index `g` followed by the value of every series at `g`.

use crate::config::ExperimentConfig;
use crate::error::{BenchError, Result};
use sealion::metaheuristics::OptimizationResult;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default CSV file for a harness mode, e.g. `sea-lion-epoch-data-sweep.csv`.
#[must_use]
pub fn default_output(mode: &str) -> PathBuf {
    PathBuf::from(format!("sea-lion-epoch-data-{mode}.csv"))
}

/// Write `columns` as header-less CSV to `writer`.
///
/// # Errors
///
/// Returns [`BenchError::InvalidExperiment`] if the columns differ in
/// length, or [`BenchError::Csv`] if writing fails.
pub fn write_series<W: Write>(writer: W, columns: &[Vec<f64>]) -> Result<()> {
    let rows = columns.first().map_or(0, Vec::len);
    if columns.iter().any(|c| c.len() != rows) {
        return Err(BenchError::InvalidExperiment(
            "series differ in length".to_string(),
        ));
    }

    let mut csv = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    let mut record = Vec::with_capacity(columns.len() + 1);
    for g in 0..rows {
        record.clear();
        record.push(g.to_string());
        record.extend(columns.iter().map(|c| c[g].to_string()));
        csv.write_record(&record)?;
    }
    csv.flush()?;
    Ok(())
}

/// Write `columns` to a CSV file at `path`, replacing it if present.
///
/// # Errors
///
/// See [`write_series`]; also fails if the file cannot be created.
pub fn write_series_file(path: &Path, columns: &[Vec<f64>]) -> Result<()> {
    write_series(File::create(path)?, columns)
}

/// JSON summary of a single run.
#[derive(Debug, Serialize)]
pub struct RunSummary<'a> {
    /// Settings the run used
    pub config: &'a ExperimentConfig,
    /// Threshold the run used
    pub threshold: f64,
    /// Outcome
    pub result: &'a OptimizationResult,
}

/// Write a pretty-printed [`RunSummary`] to `path`.
///
/// # Errors
///
/// Returns [`BenchError::Io`] or [`BenchError::Json`] on failure.
pub fn write_summary(path: &Path, summary: &RunSummary<'_>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealion::metaheuristics::benchmarks::Benchmark;

    fn to_string(columns: &[Vec<f64>]) -> String {
        let mut buf = Vec::new();
        write_series(&mut buf, columns).expect("equal columns");
        String::from_utf8(buf).expect("utf8")
    }

    #[test]
    fn test_default_output_names() {
        assert_eq!(
            default_output("trials"),
            PathBuf::from("sea-lion-epoch-data-trials.csv")
        );
        assert_eq!(
            default_output("sweep"),
            PathBuf::from("sea-lion-epoch-data-sweep.csv")
        );
    }

    #[test]
    fn test_write_series_layout() {
        let out = to_string(&[vec![3.5, 2.0, 1.25], vec![4.0, 4.0, 0.5]]);
        assert_eq!(out, "0,3.5,4\n1,2,4\n2,1.25,0.5\n");
    }

    #[test]
    fn test_write_single_series() {
        assert_eq!(to_string(&[vec![0.1, 0.05]]), "0,0.1\n1,0.05\n");
    }

    #[test]
    fn test_write_no_series() {
        assert_eq!(to_string(&[]), "");
    }

    #[test]
    fn test_write_rejects_ragged_columns() {
        let mut buf = Vec::new();
        let err = write_series(&mut buf, &[vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, BenchError::InvalidExperiment(_)));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_series_file_roundtrip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("epochs.csv");
        write_series_file(&path, &[vec![9.0, 8.0]]).expect("writable");

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .expect("readable");
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][0], "1");
        assert_eq!(rows[1][1].parse::<f64>().expect("number"), 8.0);
    }

    #[test]
    fn test_write_summary_json() {
        let config = ExperimentConfig {
            population_size: 4,
            max_iterations: 3,
            n_vars: 2,
            function: Benchmark::Sphere,
            seed: Some(1),
            ..ExperimentConfig::default()
        };
        let result = crate::experiment::run_once(&config, 0.25, 0).expect("valid");
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("run.json");
        write_summary(
            &path,
            &RunSummary {
                config: &config,
                threshold: 0.25,
                result: &result,
            },
        )
        .expect("writable");

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(value["config"]["function"], "sphere");
        assert_eq!(value["result"]["history"].as_array().map(Vec::len), Some(4));
        assert_eq!(value["result"]["evaluations"], 16);
    }
}
