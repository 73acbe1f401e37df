//! Core shared types.
//!
//! Point sets are stored the same way everywhere in the crate: a dynamic
//! `N x 2` matrix whose row `i` holds the `(x, y)` coordinates of point `i`.

use nalgebra::{DMatrix, Point2};

/// Dynamic matrix of `f64` used as the point-set container.
///
/// Column 0 is `x`, column 1 is `y`. Estimators, samplers and scoring all
/// address points by row index into this matrix.
pub type DataMatrix = DMatrix<f64>;

/// A single 2D point.
pub type Point = Point2<f64>;

/// Build an `N x 2` point matrix from a slice of `[x, y]` pairs.
pub fn points_from_slice(points: &[[f64; 2]]) -> DataMatrix {
    DataMatrix::from_fn(points.len(), 2, |r, c| points[r][c])
}

/// Read row `idx` of a point matrix as a point.
#[inline]
pub fn point_at(data: &DataMatrix, idx: usize) -> Point {
    Point::new(data[(idx, 0)], data[(idx, 1)])
}
