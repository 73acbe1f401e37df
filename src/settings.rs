//! RANSAC configuration.
//!
//! Settings are supplied once when a pipeline is built and are never
//! modified by a run. They derive `serde` traits so an outer layer can load
//! them from a config file.

use serde::{Deserialize, Serialize};

use crate::error::RansacError;

/// Main configuration object for the RANSAC pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Maximum number of iterations, failed fits included.
    pub max_iterations: usize,
    /// Inlier threshold on point-to-boundary distance (inclusive).
    pub inlier_threshold: f64,
    /// Stop early once the best inlier fraction reaches this value, in \[0, 1\].
    pub target_inlier_fraction: f64,
    /// Seed for the sampler's generator; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Refit the best model over its inlier set after sampling.
    pub final_refit: bool,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            inlier_threshold: 10.0,
            target_inlier_fraction: 0.6,
            seed: None,
            final_refit: true,
        }
    }
}

impl RansacSettings {
    /// Check the settings for values no run could use.
    pub fn validate(&self) -> Result<(), RansacError> {
        if self.max_iterations == 0 {
            return Err(RansacError::InvalidSettings(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if !self.inlier_threshold.is_finite() || self.inlier_threshold < 0.0 {
            return Err(RansacError::InvalidSettings(format!(
                "inlier_threshold must be finite and non-negative, got {}",
                self.inlier_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.target_inlier_fraction) {
            return Err(RansacError::InvalidSettings(format!(
                "target_inlier_fraction must be in [0, 1], got {}",
                self.target_inlier_fraction
            )));
        }
        Ok(())
    }
}
