/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Conjugate-direction step with a discretized line search.
//!
//! The search direction blends the current residual with the previous
//! direction, Fletcher-Reeves style on the residual vectors:
//!
//! ```text
//! iteration 0:  p = delta,  β = 0
//! iteration k:  β = (delta·delta) / (delta_prev·delta_prev)
//!               p = delta + β·p_prev
//! ```
//!
//! The step scale α comes from a bounded scan rather than a derivative-based
//! search: candidates `a ∈ [0, span)` in increments of `step` are ranked by
//! the trial objective `f(a) = Σ_j (out_j − ω_j)² / 2` with
//! `out = ω·(θ + a·p)` (the row vector p broadcast across rows of θ), and the
//! first-found minimum wins. The applied weight-delta folds the step and a
//! decay toward the step-adjusted direction into one term,
//! `α·(p[j] + θ[i][j])`, masked at fixed coordinates — a quirk of the
//! original formation scheme kept for behavioural parity.
//!
//! # Invariants
//! - **RMF-003** — a zero previous residual falls back to β = 0 instead of
//!   dividing by zero; the engine never emits NaN.

use alloc::vec::Vec;

use crate::theta::{FixedMask, RoutingMatrix};

// ─── LineSearch ─────────────────────────────────────────────────────────────

/// Scan parameters for the discretized step-size search.
///
/// Defaults match the historical scheme: candidates in `[0, 2)` every 0.05.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineSearch {
    /// Exclusive upper bound of the candidate range.
    pub span: f64,
    /// Increment between candidates.
    pub step: f64,
}

impl Default for LineSearch {
    fn default() -> Self {
        Self { span: 2.0, step: 0.05 }
    }
}

impl LineSearch {
    /// Scan `[0, span)` for the candidate minimising the trial objective.
    ///
    /// Ties break toward the smaller candidate (first found in ascending
    /// order), so a direction that cannot improve the objective yields α = 0
    /// and the iteration leaves θ untouched.
    pub fn find_alpha(&self, theta: &RoutingMatrix, omega: &[f64], direction: &[f64]) -> f64 {
        let mut best_alpha = 0.0;
        let mut best_f = f64::INFINITY;
        let mut a = 0.0;
        while a < self.span {
            let f = trial_objective(theta, omega, direction, a);
            if f < best_f {
                best_f = f;
                best_alpha = a;
            }
            a += self.step;
        }
        best_alpha
    }
}

/// Objective of the trial matrix `θ + a·p`: `Σ_j (out_j − ω_j)² / 2`.
fn trial_objective(theta: &RoutingMatrix, omega: &[f64], direction: &[f64], a: f64) -> f64 {
    let n = theta.order();
    let mut f = 0.0;
    for j in 0..n {
        let mut out_j = 0.0;
        for (i, &w) in omega.iter().enumerate().take(n) {
            out_j += w * (theta.get(i, j) + a * direction[j]);
        }
        let d = out_j - omega[j];
        f += d * d;
    }
    f / 2.0
}

// ─── ConjugateState ─────────────────────────────────────────────────────────

/// Cross-iteration state of the conjugate engine.
#[derive(Clone, Debug, PartialEq)]
pub struct ConjugateState {
    /// Residual deviation of the previous iteration (β's denominator).
    pub prev_delta: Vec<f64>,
    /// Search direction of the previous iteration.
    pub direction: Vec<f64>,
}

/// One conjugate-direction weight-delta matrix.
///
/// Updates `state` in place so the next iteration sees this one's delta and
/// direction.
pub fn weight_deltas(
    theta: &RoutingMatrix,
    omega: &[f64],
    delta: &[f64],
    line_search: &LineSearch,
    state: &mut Option<ConjugateState>,
    mask: &FixedMask,
) -> RoutingMatrix {
    let direction: Vec<f64> = match state {
        None => delta.to_vec(),
        Some(prev) => {
            let denom = dot(&prev.prev_delta, &prev.prev_delta);
            // RMF-003: a stalled residual history would divide by zero here.
            let beta = if denom > 0.0 { dot(delta, delta) / denom } else { 0.0 };
            delta
                .iter()
                .zip(&prev.direction)
                .map(|(d, p)| d + beta * p)
                .collect()
        }
    };

    let alpha = line_search.find_alpha(theta, omega, &direction);

    let n = theta.order();
    let mut deltas = RoutingMatrix::zeros(n);
    for i in 0..n {
        for j in 0..n {
            if !mask.is_fixed(i, j) {
                deltas.set(i, j, alpha * (direction[j] + theta.get(i, j)));
            }
        }
    }

    *state = Some(ConjugateState { prev_delta: delta.to_vec(), direction });
    deltas
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
