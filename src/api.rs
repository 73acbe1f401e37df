//! High-level API.
//!
//! One-call helpers that build a circle pipeline, run it and return either a
//! model or an error. Callers who need to tell "no model" apart from "low
//! confidence" without an error, or who want to reuse one pipeline, should use
//! [`Ransac`] directly.

use crate::core::{Detection, Ransac};
use crate::error::RansacError;
use crate::estimators::CircleEstimator;
use crate::models::Circle;
use crate::point_source::{IntensityGrid, PointSource};
use crate::settings::RansacSettings;
use crate::types::DataMatrix;

/// Result of a RANSAC estimation.
#[derive(Debug, Clone)]
pub struct EstimationResult<M> {
    /// The estimated model.
    pub model: M,
    /// Indices of inlier points.
    pub inliers: Vec<usize>,
    /// Best inlier fraction found while sampling.
    pub inlier_fraction: f64,
    /// Number of iterations performed.
    pub iterations: usize,
}

impl<M> TryFrom<Detection<M>> for EstimationResult<M> {
    type Error = RansacError;

    fn try_from(detection: Detection<M>) -> Result<Self, Self::Error> {
        let model = detection.model.ok_or(RansacError::NoModelFound)?;
        Ok(Self {
            model,
            inliers: detection.inliers,
            inlier_fraction: detection.inlier_fraction,
            iterations: detection.iterations,
        })
    }
}

/// Estimate a circle from 2D points.
///
/// # Arguments
/// * `points` - Nx2 matrix of `(x, y)` points
/// * `threshold` - Inlier threshold on distance to the circle
/// * `settings_opt` - Optional RANSAC settings (uses defaults if None);
///   `threshold` overrides `inlier_threshold`
///
/// # Returns
/// `EstimationResult` with the circle, its inliers, the inlier fraction and
/// the iteration count, or [`RansacError::NoModelFound`] if no sample gave a
/// valid circle.
pub fn estimate_circle(
    points: &DataMatrix,
    threshold: f64,
    settings_opt: Option<RansacSettings>,
) -> Result<EstimationResult<Circle>, RansacError> {
    let mut ransac = circle_pipeline(threshold, settings_opt)?;
    ransac.detect(points)?.try_into()
}

/// Estimate a circle from the above-zero cells of an intensity grid.
///
/// Fails with [`RansacError::EmptyPointSet`] before sampling if the grid has
/// no such cells.
pub fn estimate_circle_from_intensity_map<G>(
    grid: &G,
    threshold: f64,
    settings_opt: Option<RansacSettings>,
) -> Result<EstimationResult<Circle>, RansacError>
where
    G: IntensityGrid + ?Sized,
{
    let points = PointSource::default().extract(grid)?;
    estimate_circle(&points, threshold, settings_opt)
}

fn circle_pipeline(
    threshold: f64,
    settings_opt: Option<RansacSettings>,
) -> Result<Ransac<CircleEstimator>, RansacError> {
    let settings = RansacSettings {
        inlier_threshold: threshold,
        ..settings_opt.unwrap_or_default()
    };
    Ransac::new(settings, CircleEstimator::new())
}
