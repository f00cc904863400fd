/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Plain gradient step on the squared flow-balance residual.
//!
//! The objective is `E(θ) = Σ_j (out_j − ω_j)² / 2` with `out = ω·θ`, so
//! `∂E/∂θ[i][j] = ω[i]·delta[j]` — the outer product of the target vector and
//! the residual deviation. The step is taken with an implicit unit step size;
//! the row renormalization in the update stage keeps the magnitude in check.

use crate::theta::{FixedMask, RoutingMatrix};

/// The gradient weight-delta matrix `ω ⊗ delta`, zeroed at fixed coordinates.
pub fn weight_deltas(omega: &[f64], delta: &[f64], mask: &FixedMask) -> RoutingMatrix {
    let n = omega.len();
    let mut deltas = RoutingMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            if !mask.is_fixed(i, j) {
                deltas.set(i, j, omega[i] * delta[j]);
            }
        }
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Topology;
    use crate::theta::InitialTheta;

    #[test]
    fn outer_product_form() {
        let omega = [0.6, 0.4];
        let delta = [0.1, -0.1];
        let mask = FixedMask::default();
        let wd = weight_deltas(&omega, &delta, &mask);
        assert!((wd.get(0, 0) - 0.06).abs() < 1e-15);
        assert!((wd.get(0, 1) + 0.06).abs() < 1e-15);
        assert!((wd.get(1, 0) - 0.04).abs() < 1e-15);
        assert!((wd.get(1, 1) + 0.04).abs() < 1e-15);
    }

    #[test]
    fn fixed_coordinates_stay_zero() {
        let w = Topology::from_rows(&[&[0, 1, 1], &[1, 0, 1], &[1, 1, 0]]);
        let omega = [0.4, 0.3, 0.3];
        let theta = InitialTheta::Uniform.build(&w, &omega);
        let mask = crate::theta::FixedMask::from_theta(&theta);
        let delta = [0.05, -0.02, -0.03];
        let wd = weight_deltas(&omega, &delta, &mask);
        assert_eq!(wd.get(0, 0), 0.0);
        assert_eq!(wd.get(1, 1), 0.0);
        assert_eq!(wd.get(2, 2), 0.0);
        assert!(wd.get(0, 1) != 0.0);
    }
}
