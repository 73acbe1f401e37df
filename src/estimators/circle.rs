//! Circle estimator using the algebraic least-squares fit.

use nalgebra::{DMatrix, DVector, Point2, SVD};

use crate::core::Estimator;
use crate::error::{FitError, RansacError};
use crate::models::Circle;
use crate::types::DataMatrix;

/// Singular values below this fraction of the largest one count as zero.
const RANK_TOLERANCE: f64 = 1e-10;

/// Circle estimator.
///
/// Writes the circle as `x² + y² + Dx + Ey + F = 0`, which is linear in
/// `(D, E, F)`, and solves the system rows `[x, y, 1] · (D, E, F) = -(x² + y²)`
/// in the least-squares sense. For three points the solution is exact.
///
/// Points are shifted to their centroid and scaled to unit mean distance
/// before solving (Hartley normalization), so the rank test does not depend
/// on where the points sit or how large the circle is.
#[derive(Debug, Clone, Copy)]
pub struct CircleEstimator {
    sample_size: usize,
}

impl Default for CircleEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleEstimator {
    /// Fewest points that determine a circle.
    pub const MIN_SAMPLE_SIZE: usize = 3;

    pub fn new() -> Self {
        Self {
            sample_size: Self::MIN_SAMPLE_SIZE,
        }
    }

    /// Use minimal samples of `sample_size` points instead of three.
    pub fn with_sample_size(sample_size: usize) -> Result<Self, RansacError> {
        if sample_size < Self::MIN_SAMPLE_SIZE {
            return Err(RansacError::InvalidSettings(format!(
                "circle sample size must be at least {}, got {}",
                Self::MIN_SAMPLE_SIZE,
                sample_size
            )));
        }
        Ok(Self { sample_size })
    }

    /// Centroid and mean distance to it: `(mx, my, scale)`.
    fn normalization(data: &DataMatrix, sample: &[usize]) -> (f64, f64, f64) {
        let n = sample.len() as f64;
        let (sx, sy) = sample
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &i| (sx + data[(i, 0)], sy + data[(i, 1)]));
        let (mx, my) = (sx / n, sy / n);
        let mean_dist = sample
            .iter()
            .map(|&i| (data[(i, 0)] - mx).hypot(data[(i, 1)] - my))
            .sum::<f64>()
            / n;
        (mx, my, mean_dist)
    }
}

impl Estimator for CircleEstimator {
    type Model = Circle;

    fn sample_size(&self) -> usize {
        self.sample_size
    }

    fn estimate_model(&self, data: &DataMatrix, sample: &[usize]) -> Result<Self::Model, FitError> {
        let n = sample.len();
        if n < self.sample_size {
            return Err(FitError::TooFewPoints {
                needed: self.sample_size,
                got: n,
            });
        }

        let (mx, my, scale) = Self::normalization(data, sample);
        if !scale.is_finite() {
            return Err(FitError::NonFinite);
        }
        if scale <= f64::EPSILON * (mx.abs() + my.abs()).max(1.0) {
            // All points coincide.
            return Err(FitError::Singular);
        }

        let mut a = DMatrix::<f64>::zeros(n, 3);
        let mut b = DVector::<f64>::zeros(n);
        for (row, &idx) in sample.iter().enumerate() {
            let u = (data[(idx, 0)] - mx) / scale;
            let v = (data[(idx, 1)] - my) / scale;
            a[(row, 0)] = u;
            a[(row, 1)] = v;
            a[(row, 2)] = 1.0;
            b[row] = -(u * u + v * v);
        }

        let svd = SVD::new(a, true, true);
        let max_sv = svd.singular_values.max();
        let min_sv = svd.singular_values.min();
        if !(max_sv > 0.0) || min_sv <= RANK_TOLERANCE * max_sv {
            return Err(FitError::Singular);
        }
        let coeffs = svd
            .solve(&b, RANK_TOLERANCE * max_sv)
            .map_err(|_| FitError::Singular)?;

        let uc = -coeffs[0] / 2.0;
        let vc = -coeffs[1] / 2.0;
        let r_sq = uc * uc + vc * vc - coeffs[2];
        if !r_sq.is_finite() || !uc.is_finite() || !vc.is_finite() {
            return Err(FitError::NonFinite);
        }
        if r_sq <= 0.0 {
            return Err(FitError::NonPositiveRadius {
                radius_sq: r_sq * scale * scale,
            });
        }

        let center = Point2::new(mx + scale * uc, my + scale * vc);
        Circle::new(center, scale * r_sq.sqrt())
    }
}
