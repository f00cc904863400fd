//! Random-sweep integration tests.
//!
//! Tests are run with `cargo test --features generators`.
//!
//! Drives the solver over seeded random (ω, W) populations the way the batch
//! experiments do, asserting the structural invariants that must hold for
//! *every* input — random topologies are not all solvable within budget, so
//! convergence itself is not asserted here.

#![cfg(feature = "generators")]

use rand::rngs::StdRng;
use rand::SeedableRng;

use rmf_core::generate::{random_intensities, random_topology};
use rmf_core::solver::{solve, FormationConfig};
use rmf_core::step::Variant;
use rmf_core::theta::InitialTheta;

#[test]
fn structural_invariants_hold_over_a_random_population() {
    let mut rng = StdRng::seed_from_u64(42);
    let config = FormationConfig { max_iterations: 2_000, ..FormationConfig::default() };

    for omega in random_intensities(4, 6, 5, &mut rng) {
        let w = random_topology(omega.len(), &mut rng);
        let result = solve(&omega, &w, &config).unwrap();

        // RMF-004: budget respected.
        assert!(result.iterations <= config.max_iterations);
        assert_eq!(result.errors.len() as u64, result.iterations);

        // RMF-001: rows sum to 1 at termination.
        for i in 0..result.theta.order() {
            let s = result.theta.row_sum(i);
            assert!((s - 1.0).abs() < 1e-9, "row {} sum = {}", i, s);
        }

        // RMF-002: forbidden transitions carry exactly zero probability.
        for i in 0..w.order() {
            for j in 0..w.order() {
                if !w.permits(i, j) {
                    assert_eq!(result.theta.get(i, j), 0.0, "cell ({i},{j}) leaked mass");
                }
            }
        }
    }
}

#[test]
fn both_policies_solve_the_same_random_inputs() {
    // The smart policy is a different starting point, not a different
    // problem: whenever both terminate early, both must satisfy the same
    // residual condition.
    let mut rng = StdRng::seed_from_u64(1337);
    let budget = 5_000;

    for _ in 0..10 {
        let omega: Vec<f64> = random_intensities(4, 4, 1, &mut rng).remove(0);
        let w = random_topology(4, &mut rng);

        for policy in [InitialTheta::Uniform, InitialTheta::Smart] {
            let config = FormationConfig {
                initial_theta: policy,
                max_iterations: budget,
                ..FormationConfig::default()
            };
            let result = solve(&omega, &w, &config).unwrap();
            if result.converged(budget) {
                let dev = rmf_core::residual::max_deviation(&result.out_omega, &omega);
                assert!(dev <= config.eps, "{:?} stopped early at deviation {}", policy, dev);
            }
        }
    }
}

#[test]
fn conjugate_variant_never_breaks_structure_on_random_inputs() {
    let mut rng = StdRng::seed_from_u64(7);
    let config = FormationConfig {
        variant: Variant::ConjugateDirection,
        max_iterations: 100,
        ..FormationConfig::default()
    };

    for _ in 0..10 {
        let omega: Vec<f64> = random_intensities(5, 5, 1, &mut rng).remove(0);
        let w = random_topology(5, &mut rng);
        let result = solve(&omega, &w, &config).unwrap();

        assert!(result.iterations <= config.max_iterations);
        for i in 0..result.theta.order() {
            let s = result.theta.row_sum(i);
            assert!((s - 1.0).abs() < 1e-9, "row {} sum = {}", i, s);
        }
        for &e in &result.errors {
            assert!(e.is_finite(), "conjugate produced a non-finite error");
        }
    }
}
