//! End-to-end tests of the image-driven analysis pipeline
//!
//! Images are synthesized in a temp directory so the tests carry no binary
//! fixtures.

use coal_sim_core::{
    analyze_batch, analyze_image, AnalysisOptions, BatchStatus, RiskLevel, Scenario,
};
use image::{ImageBuffer, Rgb};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Write a synthetic coal-like test image and return its path
fn write_test_image(name: &str, width: u32, height: u32, base_luma: u8) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("coal-sim-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let path = dir.join(name);

    // Checkered texture so the extractor finds edges and particles
    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 {
            base_luma
        } else {
            base_luma.saturating_add(90)
        };
        Rgb([v, v, v])
    });
    img.save(&path).expect("write test image");
    path
}

#[test]
fn full_pipeline_produces_consistent_report() {
    let path = write_test_image("sample_a.png", 96, 96, 30);
    let mut rng = StdRng::seed_from_u64(1234);
    let report = analyze_image(&path, Scenario::HotDay, &AnalysisOptions::default(), &mut rng)
        .expect("pipeline should succeed on a decodable image");

    assert_eq!(report.scenario, Scenario::HotDay);

    // Temperature statistics honor the simulation bounds
    let ambient = report.environment.ambient_temperature;
    assert!(report.temperature_stats.min_temp >= ambient - 1e-3);
    assert!(report.temperature_stats.max_temp <= ambient + 180.0 + 1e-3);
    assert!(report.temperature_stats.avg_temp >= report.temperature_stats.min_temp);
    assert!(report.temperature_stats.avg_temp <= report.temperature_stats.max_temp);
    assert!((0.0..=100.0).contains(&report.temperature_stats.critical_area_percentage));

    // Combined score is the average of the components
    let expected = f64::midpoint(report.chemical.score, report.thermal.score);
    assert!((report.combined.score - expected).abs() < 1e-9);
    assert_eq!(report.combined.level, RiskLevel::from_score(expected));

    // Composition respects domain bounds
    assert!((1.0..=20.0).contains(&report.coal.moisture));
    assert!((15.0..=50.0).contains(&report.coal.volatile_matter));
    assert!((5.0..=35.0).contains(&report.coal.ash));
    assert!((25.0..=70.0).contains(&report.coal.fixed_carbon));

    assert!(!report.recommendations.is_empty());
}

#[test]
fn pipeline_is_deterministic_under_a_seed() {
    let path = write_test_image("sample_b.png", 80, 64, 50);
    let options = AnalysisOptions::default();
    let a = analyze_image(&path, Scenario::Humid, &options, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = analyze_image(&path, Scenario::Humid, &options, &mut StdRng::seed_from_u64(9)).unwrap();

    assert_eq!(a.environment, b.environment);
    assert_eq!(a.coal, b.coal);
    assert_eq!(a.temperature_stats, b.temperature_stats);
    assert_eq!(a.combined, b.combined);
}

#[test]
fn render_path_writes_comparison_strip() {
    let path = write_test_image("sample_c.png", 64, 48, 40);
    let render_path = path.with_file_name("sample_c_thermal.png");
    let options = AnalysisOptions {
        render_path: Some(render_path.clone()),
    };
    let mut rng = StdRng::seed_from_u64(5);
    analyze_image(&path, Scenario::Normal, &options, &mut rng).unwrap();

    let strip = image::open(&render_path).expect("comparison strip should exist");
    // Three side-by-side panels
    assert_eq!(strip.width(), 64 * 3);
    assert_eq!(strip.height(), 48);
}

#[test]
fn render_failure_does_not_abort_analysis() {
    let path = write_test_image("sample_d.png", 64, 48, 40);
    let options = AnalysisOptions {
        render_path: Some(PathBuf::from("/nonexistent-dir/out.png")),
    };
    let mut rng = StdRng::seed_from_u64(6);
    let report = analyze_image(&path, Scenario::Normal, &options, &mut rng)
        .expect("render failure must fall back to direct statistics");
    assert!(report.temperature_stats.max_temp >= report.temperature_stats.min_temp);
}

#[test]
fn batch_ranks_by_combined_score_and_skips_failures() {
    let good_a = write_test_image("batch_a.png", 72, 72, 25);
    let good_b = write_test_image("batch_b.png", 72, 72, 200);
    let paths = vec![
        good_a,
        PathBuf::from("/nonexistent/broken.jpg"),
        good_b,
    ];

    let summary = analyze_batch(&paths, 10, Some(31));
    assert_eq!(summary.attempted, 3);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.entries.len(), 2);
    assert_eq!(summary.status(), BatchStatus::Ranked);

    // Descending by combined score
    for pair in summary.entries.windows(2) {
        assert!(pair[0].combined_score >= pair[1].combined_score);
    }
}

#[test]
fn batch_is_deterministic_under_a_base_seed() {
    let a = write_test_image("batch_c.png", 64, 64, 60);
    let b = write_test_image("batch_d.png", 64, 64, 120);
    let paths = vec![a, b];

    let first = analyze_batch(&paths, 2, Some(77));
    let second = analyze_batch(&paths, 2, Some(77));
    assert_eq!(first, second);
}

#[test]
fn sample_size_limits_the_batch() {
    let a = write_test_image("batch_e.png", 64, 64, 60);
    let b = write_test_image("batch_f.png", 64, 64, 90);
    let c = write_test_image("batch_g.png", 64, 64, 120);
    let summary = analyze_batch(&[a, b, c], 2, Some(13));
    assert_eq!(summary.attempted, 2);
}
