//! Geometric models produced by the estimators.
//!
//! Currently a single model kind, [`Circle`]. Any other shape only needs to
//! implement [`GeometricModel`] and come with an
//! [`Estimator`](crate::core::Estimator) to plug into the same pipeline.

use std::f64::consts::TAU;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::core::GeometricModel;
use crate::error::FitError;

/// Circle `(x - xc)² + (y - yc)² = r²`.
///
/// The radius is always finite and strictly positive; there is no way to
/// build a `Circle` that violates this, including through deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCircle", into = "RawCircle")]
pub struct Circle {
    center: Point2<f64>,
    radius: f64,
}

impl Circle {
    /// Build a circle from a center and radius.
    pub fn new(center: Point2<f64>, radius: f64) -> Result<Self, FitError> {
        if !center.coords.iter().all(|v| v.is_finite()) || !radius.is_finite() {
            return Err(FitError::NonFinite);
        }
        if radius <= 0.0 {
            return Err(FitError::NonPositiveRadius {
                radius_sq: radius.signum() * radius * radius,
            });
        }
        Ok(Self { center, radius })
    }

    /// Circumscribed circle of three points.
    ///
    /// Fails with [`FitError::Singular`] when the points are collinear or two
    /// of them coincide.
    pub fn from_three_points(
        a: Point2<f64>,
        b: Point2<f64>,
        c: Point2<f64>,
    ) -> Result<Self, FitError> {
        let ab = b - a;
        let ac = c - a;
        let d = 2.0 * (ab.x * ac.y - ab.y * ac.x);
        let scale = ab.norm_squared().max(ac.norm_squared());
        if scale == 0.0 || d.abs() <= 1e-12 * scale {
            return Err(FitError::Singular);
        }
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let ux = (ac.y * ab2 - ab.y * ac2) / d;
        let uy = (ab.x * ac2 - ac.x * ab2) / d;
        let offset = nalgebra::Vector2::new(ux, uy);
        Self::new(a + offset, offset.norm())
    }

    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
}

impl GeometricModel for Circle {
    fn distance(&self, point: &Point2<f64>) -> f64 {
        ((point - self.center).norm() - self.radius).abs()
    }

    /// `n` points at angles `2πk/n` for `k = 0..n`.
    ///
    /// The interval is half-open: angle `2π` is not emitted, so the first
    /// point is never repeated at the end.
    fn sample_boundary(&self, n: usize) -> Vec<Point2<f64>> {
        (0..n)
            .map(|k| {
                let theta = TAU * k as f64 / n as f64;
                Point2::new(
                    self.center.x + self.radius * theta.cos(),
                    self.center.y + self.radius * theta.sin(),
                )
            })
            .collect()
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawCircle {
    center: Point2<f64>,
    radius: f64,
}

impl TryFrom<RawCircle> for Circle {
    type Error = FitError;

    fn try_from(raw: RawCircle) -> Result<Self, Self::Error> {
        Circle::new(raw.center, raw.radius)
    }
}

impl From<Circle> for RawCircle {
    fn from(circle: Circle) -> Self {
        Self {
            center: circle.center,
            radius: circle.radius,
        }
    }
}
