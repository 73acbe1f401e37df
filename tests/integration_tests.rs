//! Integration tests for the circle RANSAC pipeline.
//!
//! These run the public API end to end on synthetic point sets and intensity
//! grids.

use approx::assert_relative_eq;
use circle_ransac::*;
use nalgebra::{DMatrix, Point2};
use rand::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// `n_circle` evenly spaced points on the circle plus `n_outliers` uniform
/// points in `[0, 200] x [0, 200]`, shuffled.
fn circle_with_outliers(
    center: (f64, f64),
    radius: f64,
    n_circle: usize,
    n_outliers: usize,
    noise: f64,
    seed: u64,
) -> DataMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pts = Vec::with_capacity(n_circle + n_outliers);
    for k in 0..n_circle {
        let t = std::f64::consts::TAU * k as f64 / n_circle as f64;
        let (dx, dy) = if noise > 0.0 {
            (rng.gen_range(-noise..noise), rng.gen_range(-noise..noise))
        } else {
            (0.0, 0.0)
        };
        pts.push([center.0 + radius * t.cos() + dx, center.1 + radius * t.sin() + dy]);
    }
    for _ in 0..n_outliers {
        pts.push([rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)]);
    }
    pts.shuffle(&mut rng);
    points_from_slice(&pts)
}

fn scenario_settings(seed: u64) -> RansacSettings {
    RansacSettings {
        max_iterations: 200,
        inlier_threshold: 2.0,
        target_inlier_fraction: 0.6,
        seed: Some(seed),
        final_refit: true,
    }
}

#[test]
fn recovers_circle_among_outliers() {
    init_logger();
    let points = circle_with_outliers((100.0, 100.0), 50.0, 300, 100, 0.0, 17);
    let mut ransac = Ransac::new(scenario_settings(42), CircleEstimator::new()).unwrap();
    let detection = ransac.detect(&points).unwrap();

    let circle = detection.model.expect("a circle should be found");
    assert_relative_eq!(circle.center().x, 100.0, epsilon = 1.0);
    assert_relative_eq!(circle.center().y, 100.0, epsilon = 1.0);
    assert_relative_eq!(circle.radius(), 50.0, epsilon = 1.0);
    assert!(
        detection.inlier_fraction >= 0.6,
        "inlier fraction {} below target",
        detection.inlier_fraction
    );
    assert!(detection.iterations <= 200);
    assert!(detection.inliers.len() >= 300);
}

#[test]
fn recovers_noisy_circle_among_outliers() {
    init_logger();
    let points = circle_with_outliers((100.0, 100.0), 50.0, 300, 100, 0.8, 5);
    let mut ransac = Ransac::new(scenario_settings(7), CircleEstimator::new()).unwrap();
    let detection = ransac.detect(&points).unwrap();

    let circle = detection.model.expect("a circle should be found");
    assert_relative_eq!(circle.center().x, 100.0, epsilon = 1.0);
    assert_relative_eq!(circle.center().y, 100.0, epsilon = 1.0);
    assert_relative_eq!(circle.radius(), 50.0, epsilon = 1.0);
    assert!(detection.inlier_fraction >= 0.6);
    assert!(detection.refined);
}

#[test]
fn fixed_seed_is_reproducible() {
    init_logger();
    let points = circle_with_outliers((60.0, 140.0), 30.0, 120, 200, 0.5, 99);
    let settings = RansacSettings {
        target_inlier_fraction: 1.0,
        max_iterations: 50,
        ..scenario_settings(1234)
    };

    let mut a = Ransac::new(settings.clone(), CircleEstimator::new()).unwrap();
    let mut b = Ransac::new(settings, CircleEstimator::new()).unwrap();
    let first = a.detect(&points).unwrap();
    let second = b.detect(&points).unwrap();
    let again = a.detect(&points).unwrap();

    assert_eq!(first.model, second.model);
    assert_eq!(first.inlier_fraction, second.inlier_fraction);
    assert_eq!(first.inliers, second.inliers);
    assert_eq!(first.fraction_history, second.fraction_history);
    assert_eq!(first.model, again.model);
    assert_eq!(first.inlier_fraction, again.inlier_fraction);
}

#[test]
fn best_fraction_never_decreases() {
    init_logger();
    let points = circle_with_outliers((100.0, 100.0), 40.0, 80, 240, 0.3, 3);
    let settings = RansacSettings {
        target_inlier_fraction: 1.0,
        max_iterations: 150,
        ..scenario_settings(8)
    };
    let mut ransac = Ransac::new(settings, CircleEstimator::new()).unwrap();
    let detection = ransac.detect(&points).unwrap();

    assert_eq!(detection.iterations, 150);
    assert_eq!(detection.fraction_history.len(), 150);
    assert!(detection
        .fraction_history
        .windows(2)
        .all(|w| w[0] <= w[1]));
    assert_eq!(
        detection.fraction_history.last().copied(),
        Some(detection.inlier_fraction)
    );
}

#[test]
fn unbounded_iteration_limit_with_reachable_target() {
    init_logger();
    let points = circle_with_outliers((0.0, 0.0), 10.0, 20, 0, 0.0, 2);
    let settings = RansacSettings {
        max_iterations: usize::MAX,
        target_inlier_fraction: 0.5,
        ..scenario_settings(4)
    };
    let mut ransac = Ransac::new(settings, CircleEstimator::new()).unwrap();
    let detection = ransac.detect(&points).unwrap();

    let circle = detection.model.expect("a clean ring should be found");
    assert_relative_eq!(circle.radius(), 10.0, epsilon = 1e-6);
    assert_eq!(detection.iterations, 1);
    assert_eq!(detection.fraction_history.len(), 1);
}

#[test]
fn too_few_points_gives_no_model() {
    init_logger();
    let points = points_from_slice(&[[1.0, 2.0], [5.0, 7.0]]);
    let settings = RansacSettings {
        max_iterations: 25,
        ..scenario_settings(0)
    };
    let mut ransac = Ransac::new(settings, CircleEstimator::new()).unwrap();
    let detection = ransac.detect(&points).unwrap();

    assert!(detection.model.is_none());
    assert_eq!(detection.inlier_fraction, 0.0);
    assert_eq!(detection.iterations, 25);
    assert!(!detection.refined);
}

#[test]
fn empty_intensity_map_is_rejected() {
    init_logger();
    let grid = DMatrix::<u8>::zeros(64, 64);
    let mut ransac = Ransac::new(scenario_settings(0), CircleEstimator::new()).unwrap();
    assert_eq!(
        ransac.detect_from_intensity_map(&grid).unwrap_err(),
        RansacError::EmptyPointSet
    );
}

#[test]
fn detects_circle_in_edge_map() {
    init_logger();
    let truth = Circle::new(Point2::new(70.0, 45.0), 30.0).unwrap();
    let mut grid = DMatrix::<u8>::zeros(100, 140);
    for p in truth.sample_boundary(400) {
        grid[(p.y.round() as usize, p.x.round() as usize)] = 255;
    }
    // Clutter.
    let mut rng = StdRng::seed_from_u64(21);
    for _ in 0..40 {
        grid[(rng.gen_range(0..100usize), rng.gen_range(0..140usize))] = 128;
    }

    let settings = RansacSettings {
        inlier_threshold: 1.0,
        target_inlier_fraction: 0.7,
        max_iterations: 300,
        ..scenario_settings(11)
    };
    let mut ransac = Ransac::new(settings, CircleEstimator::new()).unwrap();
    let detection = ransac.detect_from_intensity_map(&grid).unwrap();
    let circle = detection.model.expect("edge circle should be found");
    assert_relative_eq!(circle.center().x, 70.0, epsilon = 0.5);
    assert_relative_eq!(circle.center().y, 45.0, epsilon = 0.5);
    assert_relative_eq!(circle.radius(), 30.0, epsilon = 0.5);

    // A stricter adapter threshold drops the clutter but keeps the edge.
    let strict = PointSource::new(200.0);
    let detection = ransac.detect_from_intensity_map_with(&strict, &grid).unwrap();
    assert!(detection.inlier_fraction >= 0.7);
}

#[test]
fn boundary_samples_of_detected_circle() {
    let points = circle_with_outliers((100.0, 100.0), 50.0, 300, 100, 0.0, 17);
    let result = estimate_circle(&points, 2.0, Some(scenario_settings(42))).unwrap();
    let boundary = result.model.sample_boundary(16);
    assert_eq!(boundary.len(), 16);
    for p in &boundary {
        assert_relative_eq!(
            (p - result.model.center()).norm(),
            result.model.radius(),
            epsilon = 1e-9
        );
        assert!(result.model.distance(p) < 1e-9);
    }
}

#[test]
fn engines_share_a_point_set_across_threads() {
    let points = circle_with_outliers((100.0, 100.0), 50.0, 300, 100, 0.0, 17);
    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..3)
            .map(|_| {
                let points = &points;
                s.spawn(move || {
                    let mut ransac =
                        Ransac::new(scenario_settings(42), CircleEstimator::new()).unwrap();
                    ransac.detect(points).unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(results.windows(2).all(|w| w[0].model == w[1].model));
    assert!(results[0].is_found());
}
