//! Seeded random source shared by the sampling routines.

use rand::distributions::{uniform::SampleUniform, Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Uniform integer generator over inclusive ranges, always seeded.
///
/// Two generators built from the same seed produce the same stream for the
/// same sequence of calls.
#[derive(Debug, Clone)]
pub struct UniformRandomGenerator {
    rng: StdRng,
}

impl UniformRandomGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw a value uniformly from `[min, max]`.
    ///
    /// # Panics
    /// Panics if `min > max`.
    pub fn rand_int<T>(&mut self, min: T, max: T) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        Uniform::new_inclusive(min, max).sample(&mut self.rng)
    }
}
