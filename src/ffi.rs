//! Python FFI bindings via PyO3.
//!
//! Exposes the formation solver to Python with the same call shape as the
//! original NumPy experiments: pass ω as a list of floats and W as a nested
//! list of 0/1 rows, get back `(theta, out_omega, errors, iterations)`.
//!
//! # Building the Python extension
//!
//! ```bash
//! pip install maturin
//! maturin develop --features python-ffi
//! ```
//!
//! # Usage
//!
//! ```python
//! from rmf_core import solve
//!
//! omega = [0.35, 0.27, 0.15, 0.23]
//! w = [[0, 1, 1, 1], [1, 0, 1, 0], [0, 0, 0, 1], [1, 1, 0, 0]]
//!
//! theta, out_omega, errors, iterations = solve(omega, w)
//! theta, out_omega, errors, iterations = solve(
//!     omega, w, policy="smart", variant="conjugate", max_iterations=100_000
//! )
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::network::Topology;
use crate::solver::{self, FormationConfig};
use crate::step::{LineSearch, Variant};
use crate::theta::InitialTheta;

fn parse_policy(name: &str) -> PyResult<InitialTheta> {
    match name {
        "uniform" => Ok(InitialTheta::Uniform),
        "smart" => Ok(InitialTheta::Smart),
        other => Err(PyValueError::new_err(format!(
            "unknown policy `{other}` (expected \"uniform\" or \"smart\")"
        ))),
    }
}

fn parse_variant(name: &str) -> PyResult<Variant> {
    match name {
        "gradient" => Ok(Variant::GradientDescent),
        "conjugate" => Ok(Variant::ConjugateDirection),
        other => Err(PyValueError::new_err(format!(
            "unknown variant `{other}` (expected \"gradient\" or \"conjugate\")"
        ))),
    }
}

fn parse_topology(rows: Vec<Vec<u8>>) -> PyResult<Topology> {
    let order = rows.len();
    let mut cells = Vec::with_capacity(order * order);
    for (i, row) in rows.iter().enumerate() {
        if row.len() != order {
            return Err(PyValueError::new_err(format!(
                "w must be square: row {i} has {} entries, expected {order}",
                row.len()
            )));
        }
        cells.extend_from_slice(row);
    }
    Ok(Topology::from_flat(order, cells))
}

/// Form a routing matrix for a queueing network.
///
/// Args:
///     omega:          target relative traffic intensities, one per node
///     w:              adjacency matrix as nested 0/1 rows (square)
///     policy:         initial matrix policy, "uniform" or "smart" (default "uniform")
///     variant:        corrector, "gradient" or "conjugate" (default "gradient")
///     eps:            residual tolerance (default 1e-10)
///     max_iterations: iteration budget (default 10_000)
///
/// Returns:
///     (theta, out_omega, errors, iterations) — theta as nested rows.
#[pyfunction]
#[pyo3(signature = (omega, w, policy="uniform", variant="gradient", eps=1e-10, max_iterations=10_000))]
fn solve(
    omega: Vec<f64>,
    w: Vec<Vec<u8>>,
    policy: &str,
    variant: &str,
    eps: f64,
    max_iterations: u64,
) -> PyResult<(Vec<Vec<f64>>, Vec<f64>, Vec<f64>, u64)> {
    let topology = parse_topology(w)?;
    if omega.len() != topology.order() {
        return Err(PyValueError::new_err(format!(
            "omega has {} entries but w has {} rows",
            omega.len(),
            topology.order()
        )));
    }

    let config = FormationConfig {
        initial_theta: parse_policy(policy)?,
        variant: parse_variant(variant)?,
        eps,
        max_iterations,
        line_search: LineSearch::default(),
    };

    let result = solver::solve(&omega, &topology, &config)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

    let n = result.theta.order();
    let theta: Vec<Vec<f64>> = (0..n).map(|i| result.theta.row(i).to_vec()).collect();
    Ok((theta, result.out_omega, result.errors, result.iterations))
}

// ── Module entry point ────────────────────────────────────────────────────────

/// RMF — Routing Matrix Formation Python bindings.
///
/// Forms row-stochastic routing matrices for queueing networks with
/// prescribed relative traffic intensities.
#[pymodule]
pub fn rmf_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
