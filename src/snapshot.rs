//! RMF_RUN — portable snapshot of a completed formation run.
//!
//! Captures everything a terminated run hands back — the formed θ (flat
//! row-major), the propagated intensities, the error trajectory, and the
//! iteration count — in a serialisable record, so experiment results can be
//! archived and compared without re-running the solver.
//!
//! # Example
//!
//! ```rust,ignore
//! use rmf_core::snapshot::FormationSnapshot;
//!
//! let snapshot = FormationSnapshot::from_result(&result);
//! let json = serde_json::to_string(&snapshot).unwrap();
//! let restored: FormationSnapshot = serde_json::from_str(&json).unwrap();
//! ```
//!
//! # no_std
//!
//! Requires the `serde` feature only; compatible with no_std + alloc.

use alloc::vec::Vec;

use crate::solver::FormationResult;
use crate::theta::RoutingMatrix;

/// Current RMF_RUN record version.
pub const RMF_RUN_VERSION: u16 = 1;

/// A serialisable record of a terminated formation run.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct FormationSnapshot {
    /// Format version — always [`RMF_RUN_VERSION`] for newly created snapshots.
    pub version: u16,
    /// Number of network nodes n.
    pub order: u16,
    /// The formed routing matrix, flat row-major, `order²` entries.
    pub theta: Vec<f64>,
    /// The propagated intensities `ω·θ` at termination.
    pub out_omega: Vec<f64>,
    /// Scalar error per iteration, in iteration order.
    pub errors: Vec<f64>,
    /// Iterations spent before termination.
    pub iterations: u64,
}

impl FormationSnapshot {
    /// Capture a snapshot from a live [`FormationResult`].
    pub fn from_result(result: &FormationResult) -> Self {
        Self {
            version: RMF_RUN_VERSION,
            order: result.theta.order() as u16,
            theta: result.theta.as_flat().to_vec(),
            out_omega: result.out_omega.clone(),
            errors: result.errors.clone(),
            iterations: result.iterations,
        }
    }

    /// Rebuild the routing matrix from the stored flat buffer.
    pub fn routing_matrix(&self) -> RoutingMatrix {
        RoutingMatrix::from_flat(self.order as usize, self.theta.clone())
    }

    /// The last recorded scalar error, if any iteration ran.
    pub fn final_error(&self) -> Option<f64> {
        self.errors.last().copied()
    }
}
