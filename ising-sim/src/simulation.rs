use crate::config::SampleConfig;
use crate::errors::SimError;
use crate::lattice::Lattice;
use crate::statistics::{SampleResult, Statistics};
use crate::wolff::WolffSampler;

use rayon::prelude::*;
use validator::Validate;

/// Run warmup plus measurement sweeps on one sampler and average the
/// per-site observables over the measurement window.
///
/// The configuration is randomized here if still unset. `on_sweep` is
/// called once per sweep (useful for progress reporting).
pub fn run_sample_loop(
    sampler: &mut WolffSampler<'_>,
    config: &SampleConfig,
    on_sweep: &(dyn Fn() + Sync),
) -> Result<SampleResult, SimError> {
    config
        .validate()
        .map_err(|e| SimError::InvalidSchedule(format!("{e}")))?;

    if sampler.conf().is_none() {
        sampler.randomize_conf();
    }

    let lattice = sampler.model();
    let n = lattice.size() as f64;

    let mut energy_stat = Statistics::new(1);
    let mut energy2_stat = Statistics::new(2);
    let mut mag_stat = Statistics::new(1);
    let mut mag2_stat = Statistics::new(2);
    let mut cluster_stat = Statistics::new(1);

    for sweep_id in 0..config.n_sweeps {
        on_sweep();
        sampler.sweep()?;
        if sweep_id < config.warmup_sweeps {
            continue;
        }

        let conf = sampler.conf().ok_or(SimError::UninitializedConfiguration)?;
        let e = lattice.energy(conf)? / n;
        let m = lattice.magnetization(conf)? / n;

        energy_stat.update(e);
        energy2_stat.update(e);
        mag_stat.update(m.abs());
        mag2_stat.update(m);
        cluster_stat.update(sampler.last_cluster_size() as f64 / n);
    }

    Ok(SampleResult {
        beta: sampler.beta(),
        energy: energy_stat.average(),
        energy2: energy2_stat.average(),
        mag: mag_stat.average(),
        mag2: mag2_stat.average(),
        mean_cluster_size: cluster_stat.average(),
    })
}

/// Run one independently seeded sampler per β value, in parallel.
///
/// Sampler `i` is seeded `base_seed + i`, so the scan is reproducible and
/// independent of thread scheduling. Each sampler owns its configuration
/// and random stream; only the lattice is shared.
pub fn run_beta_scan(
    lattice: &Lattice,
    betas: &[f64],
    config: &SampleConfig,
    base_seed: u64,
) -> Result<Vec<SampleResult>, SimError> {
    betas
        .par_iter()
        .enumerate()
        .map(|(i, &beta)| {
            let mut sampler = WolffSampler::new(lattice, beta)?;
            sampler.set_seed(base_seed + i as u64);
            sampler.randomize_conf();
            run_sample_loop(&mut sampler, config, &|| {})
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_schedule() {
        let lat = Lattice::new(4, 4).unwrap();
        let mut sampler = WolffSampler::new(&lat, 0.5).unwrap();
        let config = SampleConfig {
            n_sweeps: 5,
            warmup_sweeps: 6,
        };
        assert!(matches!(
            run_sample_loop(&mut sampler, &config, &|| {}),
            Err(SimError::InvalidSchedule(_))
        ));
    }

    #[test]
    fn test_measurement_window_size() {
        let lat = Lattice::new(4, 4).unwrap();
        let mut sampler = WolffSampler::new(&lat, 0.5).unwrap();
        sampler.set_seed(17);
        let config = SampleConfig {
            n_sweeps: 30,
            warmup_sweeps: 10,
        };
        let mut calls = std::sync::atomic::AtomicUsize::new(0);
        let result = run_sample_loop(&mut sampler, &config, &|| {
            calls.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        })
        .unwrap();
        assert_eq!(*calls.get_mut(), 30);
        assert!(result.energy < 0.0 && result.energy >= -2.0);
        assert!(result.mag >= 0.0 && result.mag <= 1.0);
    }

    #[test]
    fn test_beta_scan_orders_at_low_temperature() {
        let lat = Lattice::new(6, 6).unwrap();
        let betas = [0.05, 2.0];
        let config = SampleConfig {
            n_sweeps: 400,
            warmup_sweeps: 100,
        };
        let results = run_beta_scan(&lat, &betas, &config, 42).unwrap();
        assert_eq!(results.len(), 2);
        // hot chain stays disordered, cold chain saturates
        assert!(results[0].mag < 0.7);
        assert!(results[1].mag > 0.95);
        assert!(results[1].energy < results[0].energy);
    }
}
