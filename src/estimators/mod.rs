//! Estimators for geometric models.
//!
//! Each estimator implements [`Estimator`](crate::core::Estimator) for one
//! model kind from [`models`](crate::models).

pub mod circle;

pub use circle::CircleEstimator;
