//! Uniform random sampler.

use crate::core::Sampler;
use crate::types::DataMatrix;
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler.
///
/// Draws distinct indices (without replacement) whenever the point set is
/// large enough for the requested sample, and falls back to drawing with
/// replacement when it is not.
pub struct UniformRandomSampler {
    seed: Option<u64>,
    rng: UniformRandomGenerator<usize>,
}

impl Default for UniformRandomSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformRandomSampler {
    /// Construct a sampler seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::with_seed(Some(seed))
    }

    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            seed,
            rng: Self::make_rng(seed),
        }
    }

    fn make_rng(seed: Option<u64>) -> UniformRandomGenerator<usize> {
        match seed {
            Some(seed) => UniformRandomGenerator::from_seed(seed),
            None => UniformRandomGenerator::new(),
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(&mut self, data: &DataMatrix, sample_size: usize, out_indices: &mut [usize]) -> bool {
        let n = data.nrows();
        if sample_size == 0 || n == 0 || out_indices.len() < sample_size {
            return false;
        }

        let out = &mut out_indices[..sample_size];
        if sample_size <= n {
            self.rng.gen_unique(out, 0, n - 1);
        } else {
            self.rng.gen_with_replacement(out, 0, n - 1);
        }
        true
    }

    /// Re-seed from the construction seed; unseeded samplers draw fresh entropy.
    fn reset(&mut self) {
        self.rng = Self::make_rng(self.seed);
    }
}
