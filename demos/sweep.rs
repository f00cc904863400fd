//! Batch comparison of the two initialization policies over random topologies.
//!
//! For a population of random networks, counts the iterations each policy
//! needs and dumps the three series (uniform, smart, and their difference
//! where the smart policy won) as flat comma-separated files under `data/`.
//!
//! ```bash
//! cargo run --example sweep --features generators
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;

use rmf_core::generate::random_topology;
use rmf_core::persist::write_series;
use rmf_core::solver::{solve, FormationConfig};
use rmf_core::theta::InitialTheta;

fn main() -> std::io::Result<()> {
    let omega = [0.35, 0.27, 0.15, 0.23];
    let steps = 200;
    let budget = 10_000;
    let mut rng = StdRng::seed_from_u64(0xF10C);

    let mut uniform_its = Vec::new();
    let mut smart_its = Vec::new();
    let mut difference = Vec::new();

    for step in 0..steps {
        let w = random_topology(omega.len(), &mut rng);

        let uniform = FormationConfig { max_iterations: budget, ..FormationConfig::default() };
        let smart = FormationConfig { initial_theta: InitialTheta::Smart, ..uniform.clone() };

        let it = solve(&omega, &w, &uniform).expect("generated rows have successors").iterations;
        let opt_it = solve(&omega, &w, &smart).expect("generated rows have successors").iterations;

        // Only populations where at least one policy converged say anything
        // about the head start.
        if it != budget || opt_it != budget {
            uniform_its.push(it);
            smart_its.push(opt_it);
            if it > opt_it {
                difference.push(it - opt_it);
            }
        }

        println!("{step}/{steps}");
    }

    std::fs::create_dir_all("data")?;
    write_series("data/its.txt", &uniform_its)?;
    write_series("data/opt_its.txt", &smart_its)?;
    write_series("data/diff.txt", &difference)?;

    println!(
        "converging runs: {} / {steps}; smart won {} of them",
        uniform_its.len(),
        difference.len()
    );
    Ok(())
}
