//! Random test-case generators for batch formation experiments.
//!
//! Sweeping many random `(ω, W)` pairs is how the formation variants are
//! compared in practice — counting how many iterations each policy needs
//! over a population of topologies. The generators here produce inputs that
//! always satisfy the solver precondition.
//!
//! Requires the `generators` feature (std + rand).

use rand::Rng;

use crate::network::Topology;

/// A random n×n topology in which every row permits at least one successor.
///
/// Off-diagonal cells are independent fair coin flips; afterwards one cell
/// per row, at a random column, is forced to 1. The forced cell may land on
/// the diagonal, so self-loops occur even though the coin flips skip them.
pub fn random_topology<R: Rng + ?Sized>(order: usize, rng: &mut R) -> Topology {
    let mut cells = vec![0u8; order * order];
    for i in 0..order {
        for j in 0..order {
            if i != j {
                cells[i * order + j] = rng.gen_range(0..=1);
            }
        }
        cells[i * order + rng.gen_range(0..order)] = 1;
    }
    Topology::from_flat(order, cells)
}

/// Random intensity vectors for every network size in `min_systems..=max_systems`.
///
/// Produces `count` vectors per size. Each vector starts from integer weights
/// in 5..=10, is normalised and rounded to two decimals, and the rounding
/// drift is folded into one random component so the result sums to exactly 1.
pub fn random_intensities<R: Rng + ?Sized>(
    min_systems: usize,
    max_systems: usize,
    count: usize,
    rng: &mut R,
) -> Vec<Vec<f64>> {
    let mut all = Vec::new();
    for systems in min_systems..=max_systems {
        for _ in 0..count {
            let raw: Vec<u32> = (0..systems).map(|_| rng.gen_range(5..=10)).collect();
            let total: u32 = raw.iter().sum();
            let mut omega: Vec<f64> = raw
                .iter()
                .map(|&r| (r as f64 / total as f64 * 100.0).round() / 100.0)
                .collect();
            let drift = 1.0 - omega.iter().sum::<f64>();
            let idx = rng.gen_range(0..systems);
            omega[idx] += drift;
            all.push(omega);
        }
    }
    all
}
