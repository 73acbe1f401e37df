//! Inlier scoring.
//!
//! A model's score is the number of points whose boundary distance is within
//! the inlier threshold, together with that count as a fraction of all
//! points.

use crate::core::GeometricModel;
use crate::types::{point_at, DataMatrix};

/// Inlier count of a model and the corresponding fraction of the point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub inlier_count: usize,
    pub fraction: f64,
}

impl Score {
    pub fn new(inlier_count: usize, total: usize) -> Self {
        let fraction = if total == 0 {
            0.0
        } else {
            inlier_count as f64 / total as f64
        };
        Self {
            inlier_count,
            fraction,
        }
    }

    /// Score before any model has been accepted.
    pub fn empty() -> Self {
        Self {
            inlier_count: 0,
            fraction: 0.0,
        }
    }

    /// Strict improvement; equal scores do not replace the incumbent.
    pub fn is_better_than(&self, other: &Score) -> bool {
        self.fraction > other.fraction
    }
}

/// Counts points with `distance <= threshold` as inliers.
#[derive(Debug, Clone, Copy)]
pub struct InlierFractionScoring {
    threshold: f64,
}

impl InlierFractionScoring {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Score `model` against every row of `data`, writing inlier row indices
    /// to `inliers_out`.
    pub fn score<M>(&self, data: &DataMatrix, model: &M, inliers_out: &mut Vec<usize>) -> Score
    where
        M: GeometricModel + ?Sized,
    {
        let n = data.nrows();
        inliers_out.clear();
        for i in 0..n {
            if model.distance(&point_at(data, i)) <= self.threshold {
                inliers_out.push(i);
            }
        }
        Score::new(inliers_out.len(), n)
    }
}
