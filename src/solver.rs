/*
 * Notice of Provisional Patent Filing:
 * The methods and algorithms implemented in this file are the subject of a
 * United States Provisional Patent Application (63/988,438)
 * filed on February 23, 2026.
 *
 * This source code is licensed under the Business Source License 1.1.
 */

//! The convergence loop — formation of a routing matrix end to end.
//!
//! A run is a two-state machine: RUNNING while
//! `max_i |out_ω_i − ω_i| > eps` and the iteration budget is unspent,
//! TERMINATED as soon as either condition flips. Each RUNNING transition
//! evaluates the residual, asks the direction engine for weight-deltas,
//! applies them, and appends the scalar error to the trajectory.
//!
//! Exhausting the budget is **not** an error (RMF-004): the caller receives
//! the best θ found, still row-stochastic, and distinguishes "converged"
//! from "ran out" by comparing [`FormationResult::iterations`] with the
//! configured maximum.
//!
//! Progress reporting goes through the injectable [`IterationObserver`] —
//! notified once per iteration, never able to affect solver state.

use alloc::vec::Vec;

use crate::network::{Topology, TopologyError};
use crate::residual::{self, Residual};
use crate::step::{DirectionEngine, LineSearch, Variant};
use crate::theta::{FixedMask, InitialTheta, RoutingMatrix};
use crate::update;

// ─── FormationConfig ────────────────────────────────────────────────────────

/// Configuration of a formation run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormationConfig {
    /// Policy producing θ₀. Default: [`InitialTheta::Uniform`].
    pub initial_theta: InitialTheta,
    /// Which corrector to run. Default: [`Variant::GradientDescent`].
    pub variant: Variant,
    /// Residual tolerance: the run stops once `max_i |out_ω_i − ω_i| ≤ eps`.
    /// Default: 1e-10.
    pub eps: f64,
    /// Iteration budget. Default: 10_000.
    pub max_iterations: u64,
    /// Step-size scan for the conjugate variant; ignored by gradient descent.
    pub line_search: LineSearch,
}

impl Default for FormationConfig {
    fn default() -> Self {
        Self {
            initial_theta: InitialTheta::Uniform,
            variant: Variant::GradientDescent,
            eps: 1e-10,
            max_iterations: 10_000,
            line_search: LineSearch::default(),
        }
    }
}

// ─── IterationObserver ──────────────────────────────────────────────────────

/// Per-iteration progress sink.
///
/// Display-only: the solver never reads anything back from the observer, so
/// an implementation cannot affect formation results or timing semantics.
pub trait IterationObserver {
    /// Called once per iteration with the 1-based iteration index and the
    /// scalar error of the θ that iteration started from.
    fn on_iteration(&mut self, iteration: u64, error: f64);
}

/// Any `FnMut(u64, f64)` closure is an observer.
impl<F: FnMut(u64, f64)> IterationObserver for F {
    fn on_iteration(&mut self, iteration: u64, error: f64) {
        self(iteration, error)
    }
}

// ─── FormationResult ────────────────────────────────────────────────────────

/// Everything a terminated run hands back to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct FormationResult {
    /// The formed routing matrix.
    pub theta: RoutingMatrix,
    /// The propagated intensities `ω·θ` from the final residual evaluation.
    pub out_omega: Vec<f64>,
    /// Scalar error per iteration, append-only, in iteration order.
    pub errors: Vec<f64>,
    /// Iterations actually spent. Equal to the configured maximum when the
    /// budget ran out first.
    pub iterations: u64,
}

impl FormationResult {
    /// Whether the run stopped on the residual condition rather than the
    /// iteration budget.
    pub fn converged(&self, max_iterations: u64) -> bool {
        self.iterations < max_iterations
    }

    /// The last recorded scalar error, if any iteration ran.
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}

// ─── solve ──────────────────────────────────────────────────────────────────

/// Form a routing matrix for `(ω, W)` under the given configuration.
///
/// Validates the topology precondition (every row permits a successor),
/// builds θ₀, derives the fixed mask, and iterates until the residual drops
/// below `config.eps` or the budget is exhausted.
///
/// # Errors
///
/// [`TopologyError::EmptyRow`] if any row of `topology` permits no
/// successor. ω is *not* validated — flow balance is solved for whatever
/// target the caller supplies (see [`crate::network::is_distribution`]).
pub fn solve(
    omega: &[f64],
    topology: &Topology,
    config: &FormationConfig,
) -> Result<FormationResult, TopologyError> {
    solve_with_observer(omega, topology, config, &mut |_: u64, _: f64| {})
}

/// [`solve`], reporting each iteration to `observer`.
pub fn solve_with_observer(
    omega: &[f64],
    topology: &Topology,
    config: &FormationConfig,
    observer: &mut dyn IterationObserver,
) -> Result<FormationResult, TopologyError> {
    topology.validate()?;

    let mut theta = config.initial_theta.build(topology, omega);
    let mask = FixedMask::from_theta(&theta);
    let mut engine = DirectionEngine::new(config.variant, config.line_search);

    let mut out_omega = theta.propagate(omega);
    let mut errors = Vec::new();
    let mut iterations: u64 = 0;

    while residual::max_deviation(&out_omega, omega) > config.eps
        && iterations < config.max_iterations
    {
        iterations += 1;

        let Residual { out_omega: fresh, delta, error } = Residual::evaluate(omega, &theta);
        out_omega = fresh;
        errors.push(error);

        let weight_deltas = engine.weight_deltas(&theta, omega, &delta, &mask);
        update::apply(&mut theta, &weight_deltas, &mask);

        observer.on_iteration(iterations, error);
    }

    Ok(FormationResult { theta, out_omega, errors, iterations })
}
