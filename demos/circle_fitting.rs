//! Example: Robust circle fitting using RANSAC
//!
//! Generates points on a circle with noise, mixes in uniform outliers, and
//! recovers the circle with the `Ransac` pipeline.

use circle_ransac::{points_from_slice, CircleEstimator, GeometricModel, Ransac, RansacSettings};
use rand::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    println!("=== Robust Circle Fitting Example ===\n");

    let n_inliers = 300;
    let n_outliers = 100;
    let n_total = n_inliers + n_outliers;

    let mut rng = StdRng::seed_from_u64(2024);

    let (true_cx, true_cy, true_r) = (100.0, 100.0, 50.0);
    println!(
        "True circle: center ({:.2}, {:.2}), radius {:.2}",
        true_cx, true_cy, true_r
    );
    println!(
        "Generating {} inliers and {} outliers\n",
        n_inliers, n_outliers
    );

    let mut points = Vec::with_capacity(n_total);
    for k in 0..n_inliers {
        let t = std::f64::consts::TAU * k as f64 / n_inliers as f64;
        points.push([
            true_cx + true_r * t.cos() + rng.gen_range(-0.5..0.5),
            true_cy + true_r * t.sin() + rng.gen_range(-0.5..0.5),
        ]);
    }
    for _ in 0..n_outliers {
        points.push([rng.gen_range(0.0..200.0), rng.gen_range(0.0..200.0)]);
    }
    points.shuffle(&mut rng);
    let data = points_from_slice(&points);

    let settings = RansacSettings {
        max_iterations: 200,
        inlier_threshold: 2.0,
        target_inlier_fraction: 0.6,
        seed: Some(42),
        final_refit: true,
    };
    let mut ransac = Ransac::new(settings, CircleEstimator::new())?;
    let detection = ransac.detect(&data)?;

    println!("RANSAC Results:");
    println!("  Iterations: {}", detection.iterations);
    println!("  Inlier fraction: {:.4}", detection.inlier_fraction);
    println!(
        "  Inliers of returned model: {} of {}",
        detection.inliers.len(),
        n_total
    );
    println!("  Refined over inliers: {}", detection.refined);

    let Some(circle) = detection.model else {
        println!("\nNo circle found");
        return Ok(());
    };

    println!(
        "\nEstimated circle: center ({:.4}, {:.4}), radius {:.4}",
        circle.center().x,
        circle.center().y,
        circle.radius()
    );
    println!(
        "  Center error: {:.4}",
        ((circle.center().x - true_cx).powi(2) + (circle.center().y - true_cy).powi(2)).sqrt()
    );
    println!("  Radius error: {:.4}", (circle.radius() - true_r).abs());

    println!("\nBoundary (8 points):");
    for p in circle.sample_boundary(8) {
        println!("  ({:.2}, {:.2})", p.x, p.y);
    }

    Ok(())
}
