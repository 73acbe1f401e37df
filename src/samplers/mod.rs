//! Sampling strategies.
//!
//! Samplers implement the shared [`Sampler`](crate::core::Sampler) trait and
//! own their random generator.

pub mod uniform;

pub use uniform::UniformRandomSampler;
