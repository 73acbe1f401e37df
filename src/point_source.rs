//! Point extraction from 2D intensity grids.
//!
//! Edge detection itself happens upstream. This module only turns an
//! already-computed edge (or intensity) map into the point set consumed by
//! the consensus engine: every cell whose value is above a threshold becomes
//! the point `(x = column, y = row)`.

use log::debug;
use nalgebra::{DMatrix, Scalar};

use crate::error::RansacError;
use crate::types::DataMatrix;

/// Read-only 2D grid of scalar intensities.
pub trait IntensityGrid {
    /// `(rows, cols)`.
    fn dimensions(&self) -> (usize, usize);

    /// Value at `(row, col)`; both are within [`dimensions`](Self::dimensions).
    fn value(&self, row: usize, col: usize) -> f64;
}

impl<T> IntensityGrid for DMatrix<T>
where
    T: Scalar + Copy + Into<f64>,
{
    fn dimensions(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        self[(row, col)].into()
    }
}

#[cfg(feature = "image")]
impl IntensityGrid for image::GrayImage {
    fn dimensions(&self) -> (usize, usize) {
        (self.height() as usize, self.width() as usize)
    }

    fn value(&self, row: usize, col: usize) -> f64 {
        f64::from(self.get_pixel(col as u32, row as u32)[0])
    }
}

/// Threshold adapter from an intensity grid to a point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSource {
    /// Cells with a value strictly greater than this are points.
    pub threshold: f64,
}

impl Default for PointSource {
    fn default() -> Self {
        Self { threshold: 0.0 }
    }
}

impl PointSource {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Collect above-threshold cells in row-major order as an `N x 2` matrix.
    ///
    /// Fails with [`RansacError::EmptyPointSet`] when no cell qualifies.
    pub fn extract<G>(&self, grid: &G) -> Result<DataMatrix, RansacError>
    where
        G: IntensityGrid + ?Sized,
    {
        let (rows, cols) = grid.dimensions();
        let mut coords = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if grid.value(row, col) > self.threshold {
                    coords.push(col as f64);
                    coords.push(row as f64);
                }
            }
        }
        if coords.is_empty() {
            return Err(RansacError::EmptyPointSet);
        }
        let n = coords.len() / 2;
        debug!(
            "point_source: {} of {}x{} cells above {}",
            n, rows, cols, self.threshold
        );
        Ok(DataMatrix::from_row_slice(n, 2, &coords))
    }
}
