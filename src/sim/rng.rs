//! Injectable random source
//!
//! The simulation never touches a process-global generator. Sessions own a
//! `RandomSource`; the default wraps a PCG32 seeded per run, tests supply
//! scripted sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random draws used by the spawner and cosmetic effects
pub trait RandomSource {
    /// Uniform float in `[lo, hi)`; returns `lo` for an empty or unbounded range
    fn uniform_f32(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform integer in `[lo, hi)`; returns `lo` for an empty range
    fn uniform_usize(&mut self, lo: usize, hi: usize) -> usize;

    /// Raw 32-bit value (cosmetic seeds)
    fn next_u32(&mut self) -> u32;
}

/// PCG32-backed random source
#[derive(Debug, Clone)]
pub struct PcgSource {
    rng: Pcg32,
}

impl PcgSource {
    /// Reproducible stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Fresh stream seeded from the thread generator
    pub fn from_entropy() -> Self {
        Self {
            rng: Pcg32::from_rng(&mut rand::rng()),
        }
    }
}

impl RandomSource for PcgSource {
    fn uniform_f32(&mut self, lo: f32, hi: f32) -> f32 {
        if !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn uniform_usize(&mut self, lo: usize, hi: usize) -> usize {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }
}
