//! Routing matrix formation on the four-node reference network.
//!
//! Runs the gradient corrector under both initialization policies and prints
//! the formed matrices side by side with the target intensities.
//!
//! ```bash
//! cargo run --example formation --features std
//! ```

use rmf_core::network::Topology;
use rmf_core::residual;
use rmf_core::solver::{solve, FormationConfig};
use rmf_core::theta::InitialTheta;

fn print_run(label: &str, omega: &[f64], result: &rmf_core::solver::FormationResult) {
    println!("{label}");
    println!("  iterations: {}", result.iterations);
    println!("  target ω:   {:?}", omega);
    println!("  formed ω·θ: {:?}", result.out_omega);
    println!(
        "  max deviation: {:.3e}",
        residual::max_deviation(&result.out_omega, omega)
    );
    println!("  θ:");
    for i in 0..result.theta.order() {
        let row: Vec<String> = result.theta.row(i).iter().map(|v| format!("{v:.6}")).collect();
        println!("    [{}]", row.join(", "));
    }
    println!();
}

fn main() {
    let omega = [0.35, 0.27, 0.15, 0.23];
    let w = Topology::from_rows(&[&[0, 1, 1, 1], &[1, 0, 1, 0], &[0, 0, 0, 1], &[1, 1, 0, 0]]);

    let uniform = FormationConfig::default();
    let result = solve(&omega, &w, &uniform).expect("reference topology is valid");
    print_run("uniform initial matrix", &omega, &result);

    let smart = FormationConfig { initial_theta: InitialTheta::Smart, ..uniform };
    let result = solve(&omega, &w, &smart).expect("reference topology is valid");
    print_run("ω-weighted (smart) initial matrix", &omega, &result);
}
