//! Random-number utilities shared by the samplers.
//!
//! A thin wrapper around a `rand` `StdRng` that draws index sets. Each
//! wrapper owns its generator; nothing here touches thread-local or global
//! generator state after construction.

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::prelude::*;
use std::marker::PhantomData;

/// Uniform integer random-number generator.
///
/// By default this is seeded from OS entropy; tests and reproducible runs
/// construct it from a fixed seed.
pub struct UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    rng: StdRng,
    _marker: PhantomData<T>,
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    /// Construct with an entropy seed (non-reproducible).
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            _marker: PhantomData,
        }
    }

    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            _marker: PhantomData,
        }
    }

    /// Fill `out` with distinct values in `[min, max]`.
    ///
    /// Rejection sampling, suited to the small sample sizes of minimal
    /// solvers. The range must contain at least `out.len()` values.
    pub fn gen_unique(&mut self, out: &mut [T], min: T, max: T)
    where
        T: Eq,
    {
        let dist = Uniform::new_inclusive(min, max);
        for i in 0..out.len() {
            loop {
                let candidate = self.rng.sample(&dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }

    /// Fill `out` with independent draws in `[min, max]`; repeats are allowed.
    pub fn gen_with_replacement(&mut self, out: &mut [T], min: T, max: T) {
        let dist = Uniform::new_inclusive(min, max);
        for v in out.iter_mut() {
            *v = self.rng.sample(&dist);
        }
    }
}

impl<T> Default for UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}
