/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! Step direction engines — how each iteration decides what to subtract from θ.
//!
//! Two interchangeable strategies share one contract: given the current θ,
//! the target ω, and the residual delta, produce an n×n weight-delta matrix,
//! already zeroed at every fixed coordinate (RMF-002), for the updater to
//! subtract.
//!
//! - [`gradient`] — plain gradient step: the outer product `ω ⊗ delta` with
//!   an implicit unit step size.
//! - [`conjugate`] — Fletcher-Reeves-style conjugate direction with a
//!   discretized line search for the step scale.
//!
//! [`DirectionEngine`] selects between them at runtime and owns the conjugate
//! variant's cross-iteration state.

pub mod conjugate;
pub mod gradient;

pub use conjugate::{ConjugateState, LineSearch};

use crate::theta::{FixedMask, RoutingMatrix};

// ─── Variant ────────────────────────────────────────────────────────────────

/// Which corrector the convergence loop runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Plain gradient step on the squared residual, unit step size.
    GradientDescent,
    /// Conjugate direction with a discretized line search.
    ConjugateDirection,
}

// ─── DirectionEngine ────────────────────────────────────────────────────────

/// Runtime selector between the two step strategies.
///
/// Constructed once per run; the conjugate variant carries its previous delta
/// and direction across iterations (reset at iteration 0 — a fresh engine has
/// no history).
#[derive(Clone, Debug)]
pub enum DirectionEngine {
    /// Gradient step; stateless.
    Gradient,
    /// Conjugate-direction step with line search and carried state.
    Conjugate {
        /// Scan parameters for the step-size search.
        line_search: LineSearch,
        /// Previous delta and direction; `None` before the first iteration.
        state: Option<ConjugateState>,
    },
}

impl DirectionEngine {
    /// Engine for the given variant. `line_search` only affects the conjugate path.
    pub fn new(variant: Variant, line_search: LineSearch) -> Self {
        match variant {
            Variant::GradientDescent => Self::Gradient,
            Variant::ConjugateDirection => Self::Conjugate { line_search, state: None },
        }
    }

    /// Produce this iteration's weight-delta matrix, masked at fixed coordinates.
    ///
    /// `delta` is the current residual deviation from
    /// [`crate::residual::Residual::evaluate`].
    pub fn weight_deltas(
        &mut self,
        theta: &RoutingMatrix,
        omega: &[f64],
        delta: &[f64],
        mask: &FixedMask,
    ) -> RoutingMatrix {
        match self {
            Self::Gradient => gradient::weight_deltas(omega, delta, mask),
            Self::Conjugate { line_search, state } => {
                conjugate::weight_deltas(theta, omega, delta, line_search, state, mask)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Topology;
    use crate::theta::InitialTheta;
    use crate::residual::Residual;

    #[test]
    fn engine_dispatches_to_gradient() {
        let engine = DirectionEngine::new(Variant::GradientDescent, LineSearch::default());
        assert!(matches!(engine, DirectionEngine::Gradient));
    }

    #[test]
    fn conjugate_engine_starts_without_history() {
        let engine = DirectionEngine::new(Variant::ConjugateDirection, LineSearch::default());
        match engine {
            DirectionEngine::Conjugate { state, .. } => assert!(state.is_none()),
            _ => panic!("expected conjugate engine"),
        }
    }

    #[test]
    fn zero_delta_yields_zero_weight_deltas_for_both_variants() {
        // At a fixed point one iteration must leave θ unchanged.
        let w = Topology::from_rows(&[&[1, 1], &[1, 1]]);
        let omega = [0.5, 0.5];
        let theta = InitialTheta::Uniform.build(&w, &omega);
        let mask = crate::theta::FixedMask::from_theta(&theta);
        let r = Residual::evaluate(&omega, &theta);
        assert_eq!(r.max_deviation(), 0.0);

        for variant in [Variant::GradientDescent, Variant::ConjugateDirection] {
            let mut engine = DirectionEngine::new(variant, LineSearch::default());
            let wd = engine.weight_deltas(&theta, &omega, &r.delta, &mask);
            for &cell in wd.as_flat() {
                assert_eq!(cell, 0.0, "variant {:?} moved at a fixed point", variant);
            }
        }
    }
}
