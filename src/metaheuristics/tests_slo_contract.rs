// =========================================================================
// FALSIFY-SLO: Sea Lion Optimization contract
//
// Each test names a property the optimizer promises and tries to break it
// on a small, seeded configuration.
//
// References:
//   - Masadeh, Mahafzah & Sharieh (2019) "Sea Lion Optimization Algorithm"
// =========================================================================

use super::benchmarks::{schwefel_2_22, sphere};
use super::*;
use std::cell::Cell;

fn run(threshold: f64, seed: u64) -> (SeaLion, OptimizationResult) {
    let mut slo = SeaLion::new()
        .with_population_size(12)
        .with_max_iterations(30)
        .with_threshold(threshold)
        .with_seed(seed);
    let space = SearchSpace::continuous(4, -10.0, 10.0);
    let result = slo
        .optimize(&schwefel_2_22, &space)
        .expect("valid configuration");
    (slo, result)
}

/// FALSIFY-SLO-001: history holds one record per generation plus the initial one
#[test]
fn falsify_slo_001_history_length() {
    for iterations in [0, 1, 7, 30] {
        let mut slo = SeaLion::new()
            .with_population_size(5)
            .with_max_iterations(iterations)
            .with_seed(1);
        let space = SearchSpace::continuous(2, -1.0, 1.0);
        let result = slo.optimize(&sphere, &space).expect("valid configuration");
        assert_eq!(
            result.history.len(),
            iterations + 1,
            "FALSIFIED SLO-001: history len {} != {}",
            result.history.len(),
            iterations + 1
        );
    }
}

/// FALSIFY-SLO-002: pocket-best never exceeds best in any record
#[test]
fn falsify_slo_002_pocket_dominates_best() {
    for threshold in [0.0, 0.25, 0.6, 1.0] {
        let (_, result) = run(threshold, 17);
        for (t, record) in result.history.iter().enumerate() {
            assert!(
                record.pocket_best <= record.best,
                "FALSIFIED SLO-002: gen {t} pocket {} > best {}",
                record.pocket_best,
                record.best
            );
        }
    }
}

/// FALSIFY-SLO-003: pocket-best fitness is monotonically non-increasing
#[test]
fn falsify_slo_003_pocket_monotonic() {
    let (_, result) = run(0.25, 23);
    for window in result.pocket_history().windows(2) {
        assert!(
            window[1] <= window[0],
            "FALSIFIED SLO-003: pocket rose from {} to {}",
            window[0],
            window[1]
        );
    }
}

/// FALSIFY-SLO-004: every coordinate of the final population lies in range
#[test]
fn falsify_slo_004_population_in_range() {
    let (slo, _) = run(0.25, 31);
    for agent in slo.population().agents() {
        for (d, &x) in agent.position.iter().enumerate() {
            assert!(
                (-10.0..=10.0).contains(&x),
                "FALSIFIED SLO-004: agent {} coord {d}={x} outside [-10, 10]",
                agent.id
            );
        }
    }
}

/// FALSIFY-SLO-005: identical seed and configuration reproduce the run bit for bit
#[test]
fn falsify_slo_005_determinism() {
    let (_, a) = run(0.4, 1234);
    let (_, b) = run(0.4, 1234);
    let bits = |r: &OptimizationResult| -> Vec<(u64, u64)> {
        r.history
            .iter()
            .map(|g| (g.pocket_best.to_bits(), g.best.to_bits()))
            .collect()
    };
    assert_eq!(bits(&a), bits(&b), "FALSIFIED SLO-005: histories diverged");
    assert_eq!(
        a.pocket_best, b.pocket_best,
        "FALSIFIED SLO-005: final pocket-best differs"
    );
}

/// FALSIFY-SLO-006: exactly pop * (max_iter + 1) evaluations
#[test]
fn falsify_slo_006_evaluation_count() {
    let calls = Cell::new(0usize);
    let mut slo = SeaLion::new()
        .with_population_size(7)
        .with_max_iterations(11)
        .with_seed(5);
    let space = SearchSpace::continuous(3, -2.0, 2.0);
    let result = slo
        .optimize(
            &|x: &[f64]| {
                calls.set(calls.get() + 1);
                sphere(x)
            },
            &space,
        )
        .expect("valid configuration");
    assert_eq!(calls.get(), 7 * 12, "FALSIFIED SLO-006: call count");
    assert_eq!(result.evaluations, 7 * 12, "FALSIFIED SLO-006: reported count");
}

/// FALSIFY-SLO-007: the returned pocket-best is at least as good as its first record
#[test]
fn falsify_slo_007_pocket_best_improves_on_initial() {
    let (_, result) = run(0.25, 77);
    assert!(
        result.objective_value() <= result.history[0].pocket_best,
        "FALSIFIED SLO-007: final {} > initial {}",
        result.objective_value(),
        result.history[0].pocket_best
    );
    assert!(
        (schwefel_2_22(result.solution()) - result.objective_value()).abs() < 1e-12,
        "FALSIFIED SLO-007: reported fitness does not match its position"
    );
}

/// FALSIFY-SLO-008: invalid configuration fails before any evaluation
#[test]
fn falsify_slo_008_validation_precedes_work() {
    let calls = Cell::new(0usize);
    let objective = |x: &[f64]| {
        calls.set(calls.get() + 1);
        sphere(x)
    };
    let space = SearchSpace::continuous(2, -1.0, 1.0);

    let mut bad_threshold = SeaLion::new().with_threshold(1.5).with_seed(0);
    assert!(bad_threshold.optimize(&objective, &space).is_err());

    let mut bad_pop = SeaLion::new().with_population_size(0).with_seed(0);
    assert!(bad_pop.optimize(&objective, &space).is_err());

    let mut fine = SeaLion::new().with_population_size(2).with_seed(0);
    assert!(fine
        .optimize(&objective, &SearchSpace::continuous(2, 1.0, -1.0))
        .is_err());

    assert_eq!(calls.get(), 0, "FALSIFIED SLO-008: objective was called");
}
