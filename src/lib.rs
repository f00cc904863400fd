//! # rmf-core
//!
//! Routing Matrix Formation — fixed-point routing matrices for queueing networks.
//!
//! Patent pending: US Provisional Application 63/988,438 (priority date 23 Feb 2026).
//!
//! ---
//!
//! ## The problem
//!
//! A queueing network is described by a topology matrix `W` (which node-to-node
//! transitions are physically possible) and a target vector `ω` of relative
//! traffic intensities (what share of total traffic each node should carry).
//! The routing matrix `θ` answers the inverse question: *which transition
//! probabilities make the network actually carry that traffic?*
//!
//! Formally, find a row-stochastic `θ` such that
//!
//! ```text
//! ω · θ = ω          (flow balance)
//! θ[i][j] = 0        wherever W[i][j] = 0   (topology)
//! Σ_j θ[i][j] = 1    for every row i        (row-stochastic)
//! ```
//!
//! There is no closed form for general `W`; this crate solves the fixed point
//! iteratively. Two correctors are provided: a plain gradient step on the
//! squared residual, and a conjugate-direction step with a discretized line
//! search. Both repeatedly adjust only the *free* entries of `θ` — entries the
//! topology forces to 0, or that initialization fully determines at 1, are
//! frozen for the lifetime of the run.
//!
//! ## The pipeline
//!
//! ```text
//! (ω, W) → InitialTheta → FixedMask → ┌─────────────────────────────┐
//!                                     │ Residual → Direction → Update│ ⟲ until
//!                                     └─────────────────────────────┘   max|ω·θ − ω| ≤ eps
//!                                                  ↓                    or budget exhausted
//!                                          FormationResult
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`network`] | [`network::Topology`], [`network::TopologyError`] | Adjacency matrix, precondition validation |
//! | [`theta`] | [`theta::RoutingMatrix`], [`theta::InitialTheta`], [`theta::FixedMask`] | θ storage, initial policies, frozen coordinates |
//! | [`residual`] | [`residual::Residual`] | ω·θ, delta, scalar error |
//! | [`step`] | [`step::DirectionEngine`], [`step::LineSearch`] | Gradient and conjugate-direction weight deltas |
//! | [`update`] | [`update::apply`] | Masked subtraction, negative repair, row renormalization |
//! | [`solver`] | [`solver::FormationConfig`], [`solver::FormationResult`] | Convergence loop and observer hook |
//! | [`persist`] | [`persist::write_series`] | Flat comma-separated dumps (requires `std`) |
//! | [`generate`] | [`generate::random_topology`] | Random test-case generators (requires `generators`) |
//! | [`snapshot`] | [`snapshot::FormationSnapshot`] | Serialisable run record (requires `serde`) |
//!
//! ## Invariants
//!
//! - **RMF-001** — after every iteration each row of θ sums to 1 (± float tolerance).
//! - **RMF-002** — coordinates in the fixed mask never change from their initialized value.
//! - **RMF-003** — numerical degeneracies degrade gracefully: guarded divisions, never NaN.
//! - **RMF-004** — `iterations ≤ max_iterations` always; budget exhaustion is an
//!   approximate result, not an error.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default (alloc is required — matrix dimensions
//! are runtime values). Enable the `std` feature for persistence helpers, the
//! `generators` feature for random test-case generation, and the `serde`
//! feature for serialisation support.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Change date: 23 February 2032 — Apache License 2.0.
//! Commercial production use requires a license from Flout Labs (cbyrne@floutlabs.com).

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Pull in std when the feature is enabled (for persistence helpers, etc.)
#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

extern crate alloc;

pub mod network;   // Topology + precondition validation
pub mod theta;     // RoutingMatrix, initial policies, FixedMask
pub mod residual;  // ω·θ, delta, scalar error
pub mod step;      // gradient / conjugate direction engines
pub mod update;    // masked update + renormalization
pub mod solver;    // convergence loop

#[cfg(feature = "std")]
pub mod persist;   // flat comma-separated dumps

#[cfg(feature = "generators")]
pub mod generate;  // random (ω, W) test cases

#[cfg(feature = "serde")]
pub mod snapshot;  // serialisable run record

#[cfg(feature = "python-ffi")]
pub mod ffi;
