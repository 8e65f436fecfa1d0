use std::time::Instant;

use ising_sim::config::SampleConfig;
use ising_sim::{run_beta_scan, Lattice};

const L: usize = 32;
const N_BETAS: usize = 19;
const N_SWEEPS: usize = 5000;
const WARMUP_SWEEPS: usize = 1000;

fn main() {
    let lattice = Lattice::new(L, L).unwrap();

    // beta ladder through the critical region (beta_c ~ 0.4407)
    let betas: Vec<f64> = (0..N_BETAS).map(|i| 0.05 + 0.05 * i as f64).collect();

    let config = SampleConfig {
        n_sweeps: N_SWEEPS,
        warmup_sweeps: WARMUP_SWEEPS,
    };

    println!(
        "Lattice: {}x{}  |  Betas: {}  |  Sweeps: {} (warmup {})",
        L, L, N_BETAS, N_SWEEPS, WARMUP_SWEEPS
    );
    println!("{}", "-".repeat(60));

    let t0 = Instant::now();
    let results = run_beta_scan(&lattice, &betas, &config, 42).unwrap();
    let elapsed = t0.elapsed().as_secs_f64();

    println!(
        "{:>6}  {:>10}  {:>10}  {:>10}",
        "beta", "<E>/N", "<|m|>", "<cluster>"
    );
    for r in &results {
        println!(
            "{:6.2}  {:10.5}  {:10.5}  {:10.5}",
            r.beta, r.energy, r.mag, r.mean_cluster_size
        );
    }
    println!("Total: {:.3} s", elapsed);
}
