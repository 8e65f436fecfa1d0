use crate::errors::SimError;
use crate::lattice::Lattice;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seed used until the caller provides one via [`WolffSampler::set_seed`].
const DEFAULT_SEED: u64 = 42;

/// Wolff single-cluster sampler bound to a shared read-only [`Lattice`].
///
/// Owns its spin configuration and random stream, so a trajectory is a pure
/// function of the seed and the sequence of calls. The configuration starts
/// unset; [`WolffSampler::randomize_conf`] must run before the first sweep.
///
/// Growth buffers are kept across sweeps, so a sweep allocates nothing.
pub struct WolffSampler<'a> {
    model: &'a Lattice,
    beta: f64,
    /// Bond activation probability `1 - exp(-2 * beta * J)`, J = 1.
    bond_prob: f64,
    conf: Option<Vec<i8>>,
    rng: Xoshiro256StarStar,
    in_cluster: Vec<bool>,
    stack: Vec<usize>,
    last_cluster_size: usize,
}

impl<'a> WolffSampler<'a> {
    /// Create a sampler at inverse temperature `beta > 0`.
    pub fn new(model: &'a Lattice, beta: f64) -> Result<Self, SimError> {
        if !(beta > 0.0) {
            return Err(SimError::InvalidTemperature { beta });
        }
        Ok(Self {
            model,
            beta,
            bond_prob: 1.0 - (-2.0 * beta).exp(),
            conf: None,
            rng: Xoshiro256StarStar::seed_from_u64(DEFAULT_SEED),
            in_cluster: vec![false; model.size()],
            stack: Vec::with_capacity(model.size()),
            last_cluster_size: 0,
        })
    }

    pub fn model(&self) -> &'a Lattice {
        self.model
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Reinitialize the random stream from `seed`.
    ///
    /// Resets only the stream; the configuration is left untouched. Valid
    /// before or after the configuration is set.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    /// Draw a fresh uniform ±1 configuration.
    ///
    /// Consumes exactly one draw per site, in ascending site order.
    pub fn randomize_conf(&mut self) {
        let n = self.model.size();
        let conf = self.conf.get_or_insert_with(|| vec![0; n]);
        for s in conf.iter_mut() {
            *s = if self.rng.gen::<f64>() < 0.5 { -1 } else { 1 };
        }
    }

    /// Read-only view of the configuration; `None` until first randomized.
    pub fn conf(&self) -> Option<&[i8]> {
        self.conf.as_deref()
    }

    /// Number of sites flipped by the most recent sweep (0 before any).
    pub fn last_cluster_size(&self) -> usize {
        self.last_cluster_size
    }

    /// Perform one Wolff cluster update: grow a cluster of aligned spins
    /// from a random seed site, then flip it in place.
    ///
    /// Membership tests use the spins as they were at the start of the
    /// sweep; the flip is applied only after growth completes.
    pub fn sweep(&mut self) -> Result<(), SimError> {
        let conf = self
            .conf
            .as_mut()
            .ok_or(SimError::UninitializedConfiguration)?;

        let seed = self.rng.gen_range(0..self.model.size());
        let s0 = conf[seed];

        debug_assert!(self.stack.is_empty());
        self.in_cluster[seed] = true;
        self.stack.push(seed);
        let mut cluster_size = 1usize;

        while let Some(site) = self.stack.pop() {
            let nbrs = self.model.neighbors(site)?;
            for (k, &nb) in nbrs.iter().enumerate() {
                // An extent-2 axis wraps both directions onto the same
                // partner; that is one lattice bond and gets one trial.
                if nbrs[..k].contains(&nb) {
                    continue;
                }
                if self.in_cluster[nb] || conf[nb] != s0 {
                    continue;
                }
                if self.rng.gen::<f64>() < self.bond_prob {
                    self.in_cluster[nb] = true;
                    self.stack.push(nb);
                    cluster_size += 1;
                }
            }
        }

        // Flip the cluster and clear the markers for the next sweep.
        for (s, marked) in conf.iter_mut().zip(self.in_cluster.iter_mut()) {
            if *marked {
                *s = -*s;
                *marked = false;
            }
        }
        self.last_cluster_size = cluster_size;
        Ok(())
    }
}
