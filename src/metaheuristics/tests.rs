//! Cross-module tests for the Sea Lion optimizer.

use super::benchmarks::{rastrigin, schwefel_2_22, sphere};
use super::*;

// ============================================================================
// Integration Tests
// ============================================================================

#[test]
fn test_slo_minimizes_sphere() {
    let mut slo = SeaLion::new()
        .with_population_size(50)
        .with_max_iterations(200)
        .with_seed(42);
    let space = SearchSpace::continuous(5, -10.0, 10.0);
    let result = slo.optimize(&sphere, &space).expect("valid configuration");

    assert!(
        result.objective_value() < 1e-6,
        "SLO should minimize sphere, got {}",
        result.objective_value()
    );
    assert!(result.solution().iter().all(|&x| x.abs() < 1e-2));
}

#[test]
fn test_slo_improves_schwefel_over_initial() {
    let mut slo = SeaLion::new()
        .with_population_size(20)
        .with_max_iterations(50)
        .with_seed(42);
    let space = SearchSpace::continuous(4, -10.0, 10.0);
    let result = slo.optimize(&schwefel_2_22, &space).expect("valid configuration");

    let initial = result.history.first().expect("history should not be empty");
    let last = result.history.last().expect("history should not be empty");
    assert!(last.pocket_best < initial.pocket_best);
    assert!(result.objective_value() < 0.5);
}

#[test]
fn test_slo_handles_different_dimensions() {
    for dim in [1, 2, 5, 10] {
        let mut slo = SeaLion::new()
            .with_population_size(30)
            .with_max_iterations(100)
            .with_seed(7);
        let space = SearchSpace::continuous(dim, -10.0, 10.0);
        let result = slo.optimize(&sphere, &space).expect("valid configuration");

        assert_eq!(result.solution().len(), dim);
        assert!(
            result.objective_value() < 1e-2 * dim as f64,
            "Failed for dim={}: {}",
            dim,
            result.objective_value()
        );
    }
}

#[test]
fn test_slo_angle_ratio_leader_converges() {
    let mut slo = SeaLion::new()
        .with_population_size(30)
        .with_max_iterations(100)
        .with_leader(LeaderStrategy::AngleRatio)
        .with_seed(3);
    let space = SearchSpace::continuous(3, -10.0, 10.0);
    let result = slo.optimize(&sphere, &space).expect("valid configuration");

    assert!(result.objective_value() < 1e-2);
    assert_eq!(result.branches.total(), 30 * 100);
}

#[test]
fn test_slo_half_open_range() {
    let mut slo = SeaLion::new()
        .with_population_size(10)
        .with_max_iterations(20)
        .with_seed(11);
    let space = SearchSpace::half_open(3, 0.0, 1.0);
    slo.optimize(&sphere, &space).expect("valid configuration");

    for agent in slo.population().agents() {
        assert!(agent.position.iter().all(|&x| (0.0..1.0).contains(&x)));
    }
}

#[test]
fn test_slo_with_infallible_adapter() {
    let mut slo = SeaLion::new()
        .with_population_size(10)
        .with_max_iterations(10)
        .with_seed(5);
    let space = SearchSpace::continuous(2, -5.0, 5.0);

    let via_adapter = slo
        .try_optimize(infallible::<_, crate::error::SeaLionError>(rastrigin), &space)
        .expect("valid configuration");
    let via_optimize = slo.optimize(&rastrigin, &space).expect("valid configuration");

    assert_eq!(
        via_adapter.objective_value().to_bits(),
        via_optimize.objective_value().to_bits()
    );
}

#[test]
fn test_population_and_tracker_agree_after_run() {
    let mut slo = SeaLion::new()
        .with_population_size(15)
        .with_max_iterations(25)
        .with_seed(99);
    let space = SearchSpace::continuous(3, -10.0, 10.0);
    let result = slo.optimize(&schwefel_2_22, &space).expect("valid configuration");

    let fittest = slo.population().fittest().expect("population not empty");
    assert_eq!(fittest.fitness.to_bits(), result.best.fitness.to_bits());
    assert_eq!(slo.best(), Some(&result.pocket_best));
}

// ============================================================================
// Property-Based Tests (Fast)
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        /// Property: final population stays inside the closed range
        #[test]
        fn prop_population_within_bounds(seed in 0u64..1000) {
            let mut slo = SeaLion::new()
                .with_population_size(8)
                .with_max_iterations(15)
                .with_seed(seed);
            let space = SearchSpace::continuous(3, -2.0, 2.0);
            slo.optimize(&sphere, &space).expect("valid configuration");

            for agent in slo.population().agents() {
                prop_assert!(space.contains(&agent.position),
                    "Agent out of bounds: {:?}", agent.position);
            }
        }

        /// Property: pocket-best history is monotonically non-increasing
        #[test]
        fn prop_pocket_history_monotonic(seed in 0u64..1000) {
            let mut slo = SeaLion::new()
                .with_population_size(8)
                .with_max_iterations(20)
                .with_seed(seed);
            let space = SearchSpace::continuous(3, -5.0, 5.0);
            let result = slo.optimize(&schwefel_2_22, &space).expect("valid configuration");

            for window in result.pocket_history().windows(2) {
                prop_assert!(window[1] <= window[0],
                    "Pocket history not monotonic: {} > {}", window[1], window[0]);
            }
        }

        /// Property: Schwefel 2.22 is non-negative everywhere
        #[test]
        fn prop_schwefel_nonnegative(x in prop::collection::vec(-10.0f64..10.0, 1..10)) {
            prop_assert!(schwefel_2_22(&x) >= 0.0);
        }
    }
}
