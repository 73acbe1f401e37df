//! Error types.
//!
//! [`FitError`] is the per-sample failure of an estimator. The consensus loop
//! absorbs it and moves on to the next iteration. [`RansacError`] is what a
//! caller can actually see: malformed input, malformed settings, or (from the
//! high-level `api` helpers only) the absence of any model.

use thiserror::Error;

/// Failure to fit a model to a particular set of points.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum FitError {
    /// Fewer points than the estimator needs.
    #[error("need at least {needed} points to fit, got {got}")]
    TooFewPoints { needed: usize, got: usize },
    /// The linear system is rank deficient (collinear or coincident points).
    #[error("singular system: points are collinear or coincident")]
    Singular,
    /// The solve succeeded but the derived squared radius is not positive.
    #[error("non-positive squared radius {radius_sq}")]
    NonPositiveRadius { radius_sq: f64 },
    /// The solve produced NaN or infinite parameters.
    #[error("fit produced non-finite parameters")]
    NonFinite,
}

/// Errors surfaced to callers of the consensus engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RansacError {
    /// No points to work on (empty matrix, or nothing above the intensity threshold).
    #[error("point set is empty; check the threshold or use an edge image")]
    EmptyPointSet,
    /// Point matrix does not have exactly two columns.
    #[error("point set must be an N x 2 matrix, got {cols} columns")]
    InvalidPointSet { cols: usize },
    /// Settings rejected by validation.
    #[error("invalid settings: {0}")]
    InvalidSettings(String),
    /// No sample ever produced a valid model.
    #[error("no model found")]
    NoModelFound,
}
