//! Analysis entry points
//!
//! Three narrow entry points wrap the pipeline: manual proximate-analysis
//! scoring, single-image analysis, and batch analysis over many images.
//! Each invocation builds every entity fresh; nothing persists across
//! calls, so batch items run embarrassingly parallel.

use crate::core_types::{CoalProperties, EnvironmentParams, ImageFeatures, Scenario};
use crate::error::AnalysisError;
use crate::imaging::{extract_features, load_image};
use crate::risk::{
    assess_chemical, assess_thermal, combine, compute_indices, extend_with_thermal,
    recommendations, ChemicalInputs, ChemicalRisk, CoalIndices, CombinedRisk, ThermalRisk,
};
use crate::synth::{generate_environment, synthesize_properties};
use crate::thermal::visualize::save_comparison;
use crate::thermal::{simulate, TempStats};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

fn default_oxygen() -> f64 {
    20.9
}
fn default_ambient() -> f64 {
    25.0
}
fn default_ventilation() -> f64 {
    1.0
}

/// Manually entered proximate analysis plus environmental conditions
///
/// The oxygen, ambient-temperature, and ventilation fields are substituted
/// with atmospheric defaults when absent from the deserialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualInput {
    /// Moisture content (%)
    pub moisture: f64,
    /// Volatile matter (%)
    pub volatile_matter: f64,
    /// Ash content (%)
    pub ash: f64,
    /// Fixed carbon (%)
    pub fixed_carbon: f64,
    /// Oxygen content (%), default 20.9
    #[serde(default = "default_oxygen")]
    pub oxygen: f64,
    /// Ambient temperature (°C), default 25
    #[serde(default = "default_ambient")]
    pub ambient_temperature: f64,
    /// Ventilation rate (m/s), default 1.0
    #[serde(default = "default_ventilation")]
    pub ventilation_rate: f64,
}

/// Result of a manual analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManualReport {
    /// Computed liability indices
    pub indices: CoalIndices,
    /// Chemical risk assessment
    pub risk: ChemicalRisk,
    /// Mitigation recommendations
    pub recommendations: Vec<String>,
}

/// Options for single-image analysis
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// When set, render the three-panel comparison strip to this path.
    /// Rendering failures are logged and never abort the analysis.
    pub render_path: Option<PathBuf>,
}

/// Full result bundle of one image-driven analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageReport {
    /// Scenario the environment was sampled from
    pub scenario: Scenario,
    /// Extracted visual descriptors
    pub features: ImageFeatures,
    /// Sampled environmental conditions
    pub environment: EnvironmentParams,
    /// Synthesized proximate analysis
    pub coal: CoalProperties,
    /// Computed liability indices
    pub indices: CoalIndices,
    /// Temperature field summary statistics
    pub temperature_stats: TempStats,
    /// Chemical risk component
    pub chemical: ChemicalRisk,
    /// Thermal risk component
    pub thermal: ThermalRisk,
    /// Combined assessment
    pub combined: CombinedRisk,
    /// Mitigation recommendations
    pub recommendations: Vec<String>,
}

/// One ranked row of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Source image path
    pub path: PathBuf,
    /// Scenario sampled for this image
    pub scenario: Scenario,
    /// Maximum simulated temperature (°C)
    pub max_temp: f64,
    /// Average simulated temperature (°C)
    pub avg_temp: f64,
    /// Percentage of cells above the critical threshold
    pub critical_area_percentage: f64,
    /// Combined risk score
    pub combined_score: f64,
    /// Crossing-point temperature (°C)
    pub cpt: f64,
    /// Synthesized composition
    pub coal: CoalProperties,
    /// Ambient temperature sampled for this image (°C)
    pub ambient_temperature: f64,
    /// Wind speed sampled for this image (m/s)
    pub wind_speed: f64,
    /// Relative humidity sampled for this image (%)
    pub relative_humidity: f64,
}

/// Outcome classification of a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// No images were submitted or sampled
    NothingProcessed,
    /// Every sampled image failed analysis
    AllFailed,
    /// At least one image produced a ranked entry
    Ranked,
}

/// Results of a batch run, ranked by combined score descending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Ranked entries, highest combined score first
    pub entries: Vec<BatchEntry>,
    /// Number of images the batch attempted
    pub attempted: usize,
    /// Number of images skipped after a fatal per-image error
    pub failed: usize,
}

impl BatchSummary {
    /// Classify the run so an empty input is distinguishable from a run
    /// where every image failed
    #[must_use]
    pub fn status(&self) -> BatchStatus {
        if self.attempted == 0 {
            BatchStatus::NothingProcessed
        } else if self.entries.is_empty() {
            BatchStatus::AllFailed
        } else {
            BatchStatus::Ranked
        }
    }
}

/// Score manually entered proximate-analysis values
///
/// This path never touches the image pipeline or the thermal simulator.
#[must_use]
pub fn analyze_manual(input: &ManualInput) -> ManualReport {
    let coal = CoalProperties {
        moisture: input.moisture,
        volatile_matter: input.volatile_matter,
        ash: input.ash,
        fixed_carbon: input.fixed_carbon,
    };
    let indices = compute_indices(&coal, input.oxygen);
    let risk = assess_chemical(&ChemicalInputs {
        cpt: Some(indices.cpt),
        liability: indices.liability_index,
        wits: Some(indices.wits_index),
        olpinski: indices.olpinski_index,
        ambient_temperature: input.ambient_temperature,
        ventilation_rate: input.ventilation_rate,
    });
    let recs = recommendations(risk.level, &risk.factors, Some(indices.cpt));

    ManualReport {
        indices,
        risk,
        recommendations: recs,
    }
}

/// Run the full image-driven pipeline for one image
///
/// Stages: decode, feature extraction, environment sampling, coal property
/// synthesis, thermal simulation, statistics, both scorers, combiner.
///
/// # Errors
///
/// Returns [`AnalysisError`] when decoding, feature extraction, or the
/// simulation fails; these are hard stops for this image. A failed
/// comparison render is not fatal: statistics come directly from the
/// temperature field.
pub fn analyze_image<R: Rng + ?Sized>(
    path: &Path,
    scenario: Scenario,
    options: &AnalysisOptions,
    rng: &mut R,
) -> Result<ImageReport, AnalysisError> {
    let img = load_image(path)?;
    let features = extract_features(&img)?;
    let environment = generate_environment(Some(&features), scenario, rng);
    let coal = synthesize_properties(Some(&features), &environment, rng);
    let (thermal_field, temperature_field) = simulate(&img, &environment, rng)?;
    let temperature_stats = TempStats::from_field(&temperature_field);

    if let Some(render_path) = &options.render_path {
        if let Err(err) = save_comparison(&img, &thermal_field, &temperature_field, render_path) {
            warn!(%err, "comparison render failed, continuing with direct statistics");
        }
    }

    let indices = compute_indices(&coal, environment.oxygen_content);
    let chemical = assess_chemical(&ChemicalInputs {
        cpt: Some(indices.cpt),
        liability: indices.liability_index,
        wits: Some(indices.wits_index),
        olpinski: indices.olpinski_index,
        ambient_temperature: environment.ambient_temperature,
        ventilation_rate: environment.wind_speed,
    });
    let thermal = assess_thermal(&temperature_stats);
    let combined = combine(&chemical, &thermal);

    let mut recs = recommendations(combined.level, &combined.factors, Some(indices.cpt));
    extend_with_thermal(&mut recs, thermal.score);

    info!(
        path = %path.display(),
        scenario = %scenario,
        combined_score = combined.score,
        level = %combined.level,
        "image analysis complete"
    );

    Ok(ImageReport {
        scenario,
        features,
        environment,
        coal,
        indices,
        temperature_stats,
        chemical,
        thermal,
        combined,
        recommendations: recs,
    })
}

/// Analyze a random sample of images and rank them by combined risk
///
/// At most `sample_size` images are drawn from `paths`; each image gets an
/// independently seeded generator and a randomly drawn scenario, so items
/// run in parallel with no shared state. Per-image failures are logged and
/// skipped, never aborting the batch. Passing `base_seed` makes the whole
/// run (sampling, scenarios, simulation) deterministic.
#[must_use]
pub fn analyze_batch(
    paths: &[PathBuf],
    sample_size: usize,
    base_seed: Option<u64>,
) -> BatchSummary {
    if paths.is_empty() || sample_size == 0 {
        info!("batch invoked with nothing to process");
        return BatchSummary {
            entries: Vec::new(),
            attempted: 0,
            failed: 0,
        };
    }

    let mut master = match base_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let jobs: Vec<(&PathBuf, u64)> = paths
        .choose_multiple(&mut master, sample_size.min(paths.len()))
        .map(|path| (path, master.random::<u64>()))
        .collect();
    let attempted = jobs.len();
    let options = AnalysisOptions::default();

    let mut entries: Vec<BatchEntry> = jobs
        .par_iter()
        .filter_map(|(path, seed)| {
            let mut rng = StdRng::seed_from_u64(*seed);
            let scenario = *Scenario::ALL.choose(&mut rng).unwrap_or(&Scenario::Normal);
            match analyze_image(path, scenario, &options, &mut rng) {
                Ok(report) => Some(batch_entry(path, &report)),
                Err(err) => {
                    warn!(path = %path.display(), %err, "skipping image after analysis failure");
                    None
                }
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(Ordering::Equal)
    });

    let failed = attempted - entries.len();
    info!(attempted, failed, ranked = entries.len(), "batch analysis complete");
    BatchSummary {
        entries,
        attempted,
        failed,
    }
}

fn batch_entry(path: &Path, report: &ImageReport) -> BatchEntry {
    BatchEntry {
        path: path.to_path_buf(),
        scenario: report.scenario,
        max_temp: report.temperature_stats.max_temp,
        avg_temp: report.temperature_stats.avg_temp,
        critical_area_percentage: report.temperature_stats.critical_area_percentage,
        combined_score: report.combined.score,
        cpt: report.indices.cpt,
        coal: report.coal,
        ambient_temperature: report.environment.ambient_temperature,
        wind_speed: report.environment.wind_speed,
        relative_humidity: report.environment.relative_humidity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_input() -> ManualInput {
        ManualInput {
            moisture: 10.0,
            volatile_matter: 35.0,
            ash: 15.0,
            fixed_carbon: 40.0,
            oxygen: 20.9,
            ambient_temperature: 25.0,
            ventilation_rate: 1.0,
        }
    }

    #[test]
    fn manual_reference_composition() {
        let report = analyze_manual(&reference_input());
        assert_relative_eq!(report.indices.cpt, 143.0, epsilon = 1e-9);
        assert_relative_eq!(report.indices.liability_index.unwrap(), 23.33);
        assert_relative_eq!(report.indices.wits_index, 58.78);
        assert_relative_eq!(report.indices.olpinski_index.unwrap(), 0.2);
        // CPT 143 -> 30, LI 23.33 -> 25, WITS 58.78 -> 20
        assert_relative_eq!(report.risk.score, 75.0);
        assert_eq!(report.risk.level, crate::core_types::RiskLevel::High);
        // CPT below 145 adds the relocation recommendation
        assert!(report
            .recommendations
            .iter()
            .any(|r| r.contains("relocating")));
    }

    #[test]
    fn manual_defaults_fill_missing_environment() {
        let input: ManualInput =
            serde_json::from_str(r#"{"moisture":10,"volatile_matter":35,"ash":15,"fixed_carbon":40}"#)
                .unwrap();
        assert_relative_eq!(input.oxygen, 20.9);
        assert_relative_eq!(input.ambient_temperature, 25.0);
        assert_relative_eq!(input.ventilation_rate, 1.0);
    }

    #[test]
    fn manual_zero_ash_skips_liability_index() {
        let mut input = reference_input();
        input.ash = 0.0;
        let report = analyze_manual(&input);
        assert_eq!(report.indices.liability_index, None);
        // The scorer still produces a result from the remaining indices
        assert!(report.risk.score > 0.0);
    }

    #[test]
    fn empty_batch_reports_nothing_processed() {
        let summary = analyze_batch(&[], 10, Some(1));
        assert!(summary.entries.is_empty());
        assert_eq!(summary.attempted, 0);
        assert_eq!(summary.status(), BatchStatus::NothingProcessed);
    }

    #[test]
    fn unreadable_images_are_skipped_not_fatal() {
        let paths = vec![
            PathBuf::from("/nonexistent/a.jpg"),
            PathBuf::from("/nonexistent/b.jpg"),
        ];
        let summary = analyze_batch(&paths, 5, Some(2));
        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.status(), BatchStatus::AllFailed);
    }

    #[test]
    fn missing_image_is_a_decode_error() {
        let mut rng = rand::rng();
        let err = analyze_image(
            Path::new("/nonexistent/sample.png"),
            Scenario::Normal,
            &AnalysisOptions::default(),
            &mut rng,
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::Decode { .. }));
    }
}
