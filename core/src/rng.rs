//! Random number generation for a generator run.
//!
//! RULE: Nothing in the generator may call a platform RNG directly.
//! All randomness flows through the single GenRng owned by the run.
//!
//! A run is always driven by a concrete u64 seed. When the operator does
//! not supply one, a seed is drawn from OS entropy and kept on the RNG so
//! the run can be logged and replayed later.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The run's one and only random stream.
pub struct GenRng {
    seed: u64,
    inner: Pcg64Mcg,
}

impl GenRng {
    /// Deterministic stream: same seed, same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Fresh stream seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.gen_range(0..n)
    }

    /// Roll a u64 in [lo, hi], both ends included.
    pub fn range_inclusive(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "empty range {lo}..={hi}");
        self.inner.gen_range(lo..=hi)
    }

    /// Bernoulli trial: returns true with probability p.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}
