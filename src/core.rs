//! Core traits and the RANSAC pipeline.
//!
//! The pipeline is assembled from a small set of components:
//! - [`Estimator`] turns a sample of point indices into a model, or reports
//!   why it could not.
//! - [`GeometricModel`] answers point-to-boundary distance queries.
//! - [`Sampler`] draws the index sets.
//! - [`TerminationCriterion`] decides when the loop may stop early.
//!
//! [`Ransac`] wires them together with inlier-fraction scoring and a final
//! least-squares refit over the winning consensus set.

use log::{debug, trace};
use nalgebra::Point2;

use crate::error::{FitError, RansacError};
use crate::point_source::{IntensityGrid, PointSource};
use crate::samplers::UniformRandomSampler;
use crate::scoring::{InlierFractionScoring, Score};
use crate::settings::RansacSettings;
use crate::types::{point_at, DataMatrix};

/// A fitted shape that can measure how far points are from its boundary.
pub trait GeometricModel {
    /// Unsigned distance from `point` to the model boundary.
    fn distance(&self, point: &Point2<f64>) -> f64;

    /// Distance of every row of `data`, in row order.
    fn distances(&self, data: &DataMatrix) -> Vec<f64> {
        (0..data.nrows())
            .map(|i| self.distance(&point_at(data, i)))
            .collect()
    }

    /// `n` points evenly distributed along the boundary, for rendering/export.
    fn sample_boundary(&self, n: usize) -> Vec<Point2<f64>>;
}

/// Estimator responsible for fitting models to samples of the data.
pub trait Estimator {
    /// Model type produced by this estimator.
    type Model: GeometricModel + Clone;

    /// Size of a minimal sample for this estimator.
    fn sample_size(&self) -> usize;

    /// Fit a model to the rows listed in `sample`.
    ///
    /// Exactly [`sample_size`](Self::sample_size) indices is a minimal fit;
    /// more indices give a least-squares fit. Indices may repeat.
    fn estimate_model(&self, data: &DataMatrix, sample: &[usize]) -> Result<Self::Model, FitError>;

    /// Fit a model to every row of `data`.
    fn fit(&self, data: &DataMatrix) -> Result<Self::Model, FitError> {
        let all: Vec<usize> = (0..data.nrows()).collect();
        self.estimate_model(data, &all)
    }
}

/// Sampler responsible for drawing samples from the data.
pub trait Sampler {
    /// Draw `sample_size` indices into `out_indices`.
    ///
    /// Returns `false` if no sample could be drawn at all.
    fn sample(&mut self, data: &DataMatrix, sample_size: usize, out_indices: &mut [usize]) -> bool;

    /// Return to the freshly-constructed state. Called at the start of every run.
    fn reset(&mut self);
}

/// Termination criterion deciding when the RANSAC loop can stop.
pub trait TerminationCriterion {
    /// Returns `true` if the loop should stop after the current iteration.
    ///
    /// Implementations may also lower `max_iterations`.
    fn check(
        &mut self,
        data: &DataMatrix,
        best_score: &Score,
        sample_size: usize,
        max_iterations: &mut usize,
    ) -> bool;
}

/// Stops as soon as the best inlier fraction reaches the target (`>=`).
#[derive(Debug, Clone, Copy)]
pub struct TargetFractionTermination {
    pub target: f64,
}

impl TargetFractionTermination {
    pub fn new(target: f64) -> Self {
        Self { target }
    }
}

impl TerminationCriterion for TargetFractionTermination {
    fn check(
        &mut self,
        _data: &DataMatrix,
        best_score: &Score,
        _sample_size: usize,
        _max_iterations: &mut usize,
    ) -> bool {
        best_score.fraction >= self.target
    }
}

/// Outcome of one consensus run.
#[derive(Debug, Clone)]
pub struct Detection<M> {
    /// Best model, `None` if no sample ever produced a valid fit.
    pub model: Option<M>,
    /// Best inlier fraction seen while sampling, in `[0, 1]`.
    pub inlier_fraction: f64,
    /// Inlier indices of `model` (empty when `model` is `None`).
    pub inliers: Vec<usize>,
    /// Iterations consumed, failed fits included.
    pub iterations: usize,
    /// Best fraction after each iteration.
    pub fraction_history: Vec<f64>,
    /// Whether `model` is the least-squares refit rather than the sampled model.
    pub refined: bool,
}

impl<M> Detection<M> {
    pub fn is_found(&self) -> bool {
        self.model.is_some()
    }
}

/// RANSAC pipeline: sample, fit, score, keep the best, refit.
pub struct Ransac<E, Sa = UniformRandomSampler, T = TargetFractionTermination>
where
    E: Estimator,
    Sa: Sampler,
    T: TerminationCriterion,
{
    settings: RansacSettings,
    estimator: E,
    sampler: Sa,
    scoring: InlierFractionScoring,
    termination: T,
}

impl<E> Ransac<E>
where
    E: Estimator,
{
    /// Build a pipeline with the default uniform sampler seeded from
    /// `settings.seed` and a target-fraction termination criterion.
    pub fn new(settings: RansacSettings, estimator: E) -> Result<Self, RansacError> {
        settings.validate()?;
        if estimator.sample_size() == 0 {
            return Err(RansacError::InvalidSettings(
                "estimator sample size must be at least 1".to_string(),
            ));
        }
        let sampler = UniformRandomSampler::with_seed(settings.seed);
        let scoring = InlierFractionScoring::new(settings.inlier_threshold);
        let termination = TargetFractionTermination::new(settings.target_inlier_fraction);
        Ok(Self {
            settings,
            estimator,
            sampler,
            scoring,
            termination,
        })
    }
}

impl<E, Sa, T> Ransac<E, Sa, T>
where
    E: Estimator,
    Sa: Sampler,
    T: TerminationCriterion,
{
    /// Replace the sampler.
    pub fn with_sampler<S2: Sampler>(self, sampler: S2) -> Ransac<E, S2, T> {
        Ransac {
            settings: self.settings,
            estimator: self.estimator,
            sampler,
            scoring: self.scoring,
            termination: self.termination,
        }
    }

    /// Replace the termination criterion.
    pub fn with_termination<T2: TerminationCriterion>(self, termination: T2) -> Ransac<E, Sa, T2> {
        Ransac {
            settings: self.settings,
            estimator: self.estimator,
            sampler: self.sampler,
            scoring: self.scoring,
            termination,
        }
    }

    pub fn settings(&self) -> &RansacSettings {
        &self.settings
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// Run the consensus loop over an `N x 2` point matrix.
    ///
    /// Only malformed input is an error. A run in which every fit failed
    /// returns a [`Detection`] with `model: None` and `inlier_fraction: 0.0`.
    pub fn detect(&mut self, data: &DataMatrix) -> Result<Detection<E::Model>, RansacError> {
        if data.ncols() != 2 {
            return Err(RansacError::InvalidPointSet { cols: data.ncols() });
        }
        let n = data.nrows();
        if n == 0 {
            return Err(RansacError::EmptyPointSet);
        }

        let sample_size = self.estimator.sample_size();
        let mut sample = vec![0usize; sample_size];
        let mut tmp_inliers = Vec::with_capacity(n);

        let mut max_iterations = self.settings.max_iterations;
        let mut best_model: Option<E::Model> = None;
        let mut best_score = Score::empty();
        let mut best_inliers = Vec::new();
        let mut fraction_history = Vec::new();
        let mut iteration = 0usize;

        self.sampler.reset();
        if sample_size > n {
            debug!(
                "ransac: {} points < sample size {}, sampling with replacement",
                n, sample_size
            );
        }

        while iteration < max_iterations {
            iteration += 1;

            if self.sampler.sample(data, sample_size, &mut sample[..]) {
                match self.estimator.estimate_model(data, &sample) {
                    Ok(model) => {
                        let score = self.scoring.score(data, &model, &mut tmp_inliers);
                        if score.is_better_than(&best_score) {
                            trace!(
                                "ransac: iteration {} improved fraction {:.4} -> {:.4}",
                                iteration,
                                best_score.fraction,
                                score.fraction
                            );
                            best_score = score;
                            best_model = Some(model);
                            std::mem::swap(&mut best_inliers, &mut tmp_inliers);
                        }
                    }
                    Err(err) => trace!("ransac: iteration {} fit failed: {}", iteration, err),
                }
            }

            fraction_history.push(best_score.fraction);

            if self
                .termination
                .check(data, &best_score, sample_size, &mut max_iterations)
            {
                debug!(
                    "ransac: target reached at iteration {} (fraction {:.4})",
                    iteration, best_score.fraction
                );
                break;
            }
        }

        let mut refined = false;
        if self.settings.final_refit
            && best_model.is_some()
            && best_score.inlier_count > 0
            && best_inliers.len() >= sample_size
        {
            match self.estimator.estimate_model(data, &best_inliers) {
                Ok(refit) => {
                    self.scoring.score(data, &refit, &mut tmp_inliers);
                    std::mem::swap(&mut best_inliers, &mut tmp_inliers);
                    best_model = Some(refit);
                    refined = true;
                }
                Err(err) => debug!("ransac: final refit failed ({}), keeping sampled model", err),
            }
        }

        if best_model.is_none() {
            best_inliers.clear();
        }

        debug!(
            "ransac: finished after {} iterations, found={}, fraction={:.4}, refined={}",
            iteration,
            best_model.is_some(),
            best_score.fraction,
            refined
        );

        Ok(Detection {
            model: best_model,
            inlier_fraction: best_score.fraction,
            inliers: best_inliers,
            iterations: iteration,
            fraction_history,
            refined,
        })
    }

    /// Extract points from an intensity grid with the default adapter
    /// (value `> 0`) and run [`detect`](Self::detect).
    pub fn detect_from_intensity_map<G>(
        &mut self,
        grid: &G,
    ) -> Result<Detection<E::Model>, RansacError>
    where
        G: IntensityGrid + ?Sized,
    {
        self.detect_from_intensity_map_with(&PointSource::default(), grid)
    }

    /// Like [`detect_from_intensity_map`](Self::detect_from_intensity_map)
    /// with a caller-configured adapter.
    pub fn detect_from_intensity_map_with<G>(
        &mut self,
        source: &PointSource,
        grid: &G,
    ) -> Result<Detection<E::Model>, RansacError>
    where
        G: IntensityGrid + ?Sized,
    {
        let points = source.extract(grid)?;
        self.detect(&points)
    }
}
