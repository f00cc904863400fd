//! Residual of the flow-balance equation for the current θ.
//!
//! Pure evaluation, no mutation: `out_ω = ω·θ`, `delta = out_ω − ω`, and the
//! scalar objective `error = Σ delta_i² / 2` that both direction engines
//! descend. Called once per iteration before the update step.

use alloc::vec::Vec;

use crate::theta::RoutingMatrix;

/// One evaluation of the flow-balance residual.
#[derive(Clone, Debug, PartialEq)]
pub struct Residual {
    /// The propagated intensities `ω·θ`.
    pub out_omega: Vec<f64>,
    /// Per-node deviation `out_ω − ω`. Sums to ≈0 while θ is row-stochastic
    /// and ω is normalised (mass is conserved by propagation).
    pub delta: Vec<f64>,
    /// Scalar objective `Σ delta_i² / 2`.
    pub error: f64,
}

impl Residual {
    /// Evaluate the residual of `theta` against the target `omega`.
    pub fn evaluate(omega: &[f64], theta: &RoutingMatrix) -> Self {
        let out_omega = theta.propagate(omega);
        let delta: Vec<f64> = out_omega.iter().zip(omega).map(|(o, w)| o - w).collect();
        let error = delta.iter().map(|d| d * d).sum::<f64>() / 2.0;
        Self { out_omega, delta, error }
    }

    /// Largest absolute per-node deviation, `max_i |delta_i|`.
    pub fn max_deviation(&self) -> f64 {
        self.delta.iter().map(|d| d.abs()).fold(0.0, f64::max)
    }
}

/// `max_i |out_ω_i − ω_i|` without building a [`Residual`].
///
/// The convergence loop checks this against `eps` between iterations.
pub fn max_deviation(out_omega: &[f64], omega: &[f64]) -> f64 {
    out_omega
        .iter()
        .zip(omega)
        .map(|(o, w)| (o - w).abs())
        .fold(0.0, f64::max)
}
