//! # circle-ransac - robust circle estimation
//!
//! `circle_ransac` finds the circle that best explains a noisy 2D point
//! cloud, tolerating a large share of outliers. It combines Random Sample
//! Consensus (RANSAC) with an algebraic least-squares circle fit and reports
//! the inlier fraction of the winning circle as a confidence score.
//!
//! ## Quick Start
//!
//! ```rust
//! use circle_ransac::{estimate_circle, points_from_slice, RansacSettings};
//!
//! let points = points_from_slice(&[
//!     [10.0, 0.0], [0.0, 10.0], [-10.0, 0.0], [0.0, -10.0],
//!     [7.071, 7.071], [42.0, -3.0],
//! ]);
//! let settings = RansacSettings { seed: Some(7), ..RansacSettings::default() };
//! let result = estimate_circle(&points, 0.1, Some(settings)).unwrap();
//! println!("center {} radius {:.2}", result.model.center(), result.model.radius());
//! ```
//!
//! ## Using the pipeline directly
//!
//! [`Ransac`](crate::core::Ransac) returns a [`Detection`](crate::core::Detection) whose
//! `model` is `None` when no sample produced a valid fit, and whose
//! `inlier_fraction` carries the confidence otherwise:
//!
//! ```rust
//! use circle_ransac::{points_from_slice, CircleEstimator, Ransac, RansacSettings};
//!
//! let points = points_from_slice(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]]);
//! let settings = RansacSettings { seed: Some(1), max_iterations: 10, ..RansacSettings::default() };
//! let mut ransac = Ransac::new(settings, CircleEstimator::new()).unwrap();
//! let detection = ransac.detect(&points).unwrap();
//! assert!(detection.model.is_none());
//! assert_eq!(detection.inlier_fraction, 0.0);
//! ```
//!
//! ## Extending the Library
//!
//! Other shapes plug into the same pipeline by implementing:
//!
//! - **[`GeometricModel`](crate::core::GeometricModel)**: distance queries and boundary sampling
//! - **[`Estimator`](crate::core::Estimator)**: fitting a model from a sample of point indices
//! - **[`Sampler`](crate::core::Sampler)**: custom sampling strategies
//! - **[`TerminationCriterion`](crate::core::TerminationCriterion)**: custom stopping rules
//!
//! ## Modules
//!
//! - **[`api`](api)**: one-call estimation helpers
//! - **[`core`](core)**: core traits and the `Ransac` pipeline
//! - **[`estimators`](estimators)**: built-in estimators
//! - **[`models`](models)**: geometric model types
//! - **[`point_source`](point_source)**: point extraction from intensity grids
//! - **[`samplers`](samplers)**: built-in sampling strategies
//! - **[`scoring`](scoring)**: inlier scoring
//! - **[`settings`](settings)**: pipeline configuration

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod point_source;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

pub use api::{estimate_circle, estimate_circle_from_intensity_map, EstimationResult};

pub use crate::core::{
    Detection, Estimator, GeometricModel, Ransac, Sampler, TargetFractionTermination,
    TerminationCriterion,
};

pub use error::{FitError, RansacError};
pub use estimators::CircleEstimator;
pub use models::Circle;
pub use point_source::{IntensityGrid, PointSource};
pub use settings::RansacSettings;
pub use types::{points_from_slice, DataMatrix, Point};
