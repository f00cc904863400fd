/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Applying a weight-delta matrix to θ and repairing the result.
//!
//! Three stages, in order:
//!
//! 1. **Subtract** the weight-deltas in place. The deltas arrive already
//!    zeroed at fixed coordinates, so frozen cells are untouched (RMF-002).
//! 2. **Negative repair** — if any entry went below zero, add `2·|min(θ)|`
//!    to every non-fixed entry. A crude uniform shift back into the
//!    non-negative orthant, not a simplex projection; the renormalization
//!    below absorbs the added mass.
//! 3. **Renormalize** every row to sum to 1 (RMF-001). Exactly one pass —
//!    the historical scheme ran it twice around the repair, but the second
//!    pass divides each row by a sum that is already 1 and changes nothing.
//!
//! Mid-update θ is allowed to be arbitrarily malformed; the invariants hold
//! only at the stage boundary, which is all the convergence loop observes.

use crate::theta::{FixedMask, RoutingMatrix};

/// Subtract `weight_deltas` from `theta`, repair negatives, renormalize rows.
pub fn apply(theta: &mut RoutingMatrix, weight_deltas: &RoutingMatrix, mask: &FixedMask) {
    let n = theta.order();

    for i in 0..n {
        for j in 0..n {
            theta.set(i, j, theta.get(i, j) - weight_deltas.get(i, j));
        }
    }

    let min = theta.min_cell();
    if min < 0.0 {
        let shift = min.abs() * 2.0;
        for i in 0..n {
            for j in 0..n {
                if !mask.is_fixed(i, j) {
                    theta.set(i, j, theta.get(i, j) + shift);
                }
            }
        }
    }

    theta.renormalize_rows();
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use crate::network::Topology;
    use crate::residual::Residual;
    use crate::theta::InitialTheta;

    fn rows_sum_to_one(theta: &RoutingMatrix) {
        for i in 0..theta.order() {
            let s = theta.row_sum(i);
            assert!((s - 1.0).abs() < 1e-12, "row {} sum = {}", i, s);
        }
    }

    #[test]
    fn subtract_then_renormalize() {
        let mut theta = RoutingMatrix::from_flat(2, vec![0.6, 0.4, 0.5, 0.5]);
        let wd = RoutingMatrix::from_flat(2, vec![0.1, -0.1, 0.0, 0.0]);
        apply(&mut theta, &wd, &FixedMask::default());
        rows_sum_to_one(&theta);
        assert!((theta.get(0, 0) - 0.5).abs() < 1e-15);
        assert!((theta.get(0, 1) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn negative_entries_are_repaired_before_renormalization() {
        let mut theta = RoutingMatrix::from_flat(2, vec![0.6, 0.4, 0.5, 0.5]);
        let wd = RoutingMatrix::from_flat(2, vec![0.7, 0.0, 0.0, 0.0]);
        apply(&mut theta, &wd, &FixedMask::default());
        // After subtraction min = −0.1; every entry gains 0.2, then rows renormalize.
        for &cell in theta.as_flat() {
            assert!(cell >= 0.0, "negative cell survived repair: {}", cell);
        }
        rows_sum_to_one(&theta);
        assert!((theta.get(0, 0) - 0.1 / 0.7).abs() < 1e-12);
    }

    #[test]
    fn repair_skips_fixed_coordinates() {
        // Row 0 is fully determined ([1, 0]); row 1 is free and driven negative.
        let w = Topology::from_rows(&[&[1, 0], &[1, 1]]);
        let omega = [0.5, 0.5];
        let mut theta = InitialTheta::Uniform.build(&w, &omega);
        let mask = crate::theta::FixedMask::from_theta(&theta);
        let wd = RoutingMatrix::from_flat(2, vec![0.0, 0.0, 0.7, 0.0]);
        apply(&mut theta, &wd, &mask);
        assert_eq!(theta.row(0), &[1.0, 0.0], "frozen row must not move");
        rows_sum_to_one(&theta);
    }

    #[test]
    fn row_stochasticity_holds_across_gradient_iterations() {
        // RMF-001 after every iteration, not only at termination.
        let w =
            Topology::from_rows(&[&[0, 1, 1, 1], &[1, 0, 1, 0], &[0, 0, 0, 1], &[1, 1, 0, 0]]);
        let omega = [0.35, 0.27, 0.15, 0.23];
        let mut theta = InitialTheta::Uniform.build(&w, &omega);
        let mask = crate::theta::FixedMask::from_theta(&theta);
        for _ in 0..50 {
            let r = Residual::evaluate(&omega, &theta);
            let wd = crate::step::gradient::weight_deltas(&omega, &r.delta, &mask);
            apply(&mut theta, &wd, &mask);
            rows_sum_to_one(&theta);
        }
    }
}
