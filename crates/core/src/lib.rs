//! Coal Spontaneous-Combustion Simulation Core Library
//!
//! Estimates spontaneous-combustion risk for stored coal from either
//! manually entered proximate-analysis values or a photograph of a coal
//! sample. The image-driven path synthesizes a heat-intensity field from
//! the photograph, maps it to an absolute-temperature field under sampled
//! environmental conditions, and merges image-derived thermal risk with
//! formula-derived chemical risk.
//!
//! The thermal model is visually plausible rather than physically exact:
//! there is no PDE integration of real thermal diffusivity. Darker pixels
//! seed more heat, Gaussian smoothing models diffusion, and random discs
//! model oxidation points.
//!
//! ## Pipeline
//!
//! image → feature extraction → {environment sampling → coal property
//! synthesis} → thermal simulation → statistics → chemical + thermal
//! scorers → combined assessment. The chemical scorer also runs standalone
//! from manually supplied proximate values.

// Shared entity types
pub mod core_types;

// Pipeline stages
pub mod analysis;
pub mod imaging;
pub mod risk;
pub mod synth;
pub mod thermal;

// Fatal and recoverable error taxonomy
pub mod error;

// Re-export core types
pub use core_types::{
    CoalProperties, EnvironmentParams, ImageFeatures, RiskFactor, RiskLevel, ScalarField,
    Scenario, Severity,
};

// Re-export pipeline entry points and result bundles
pub use analysis::{
    analyze_batch, analyze_image, analyze_manual, AnalysisOptions, BatchEntry, BatchStatus,
    BatchSummary, ImageReport, ManualInput, ManualReport,
};
pub use error::{AnalysisError, VisualizationError};
pub use risk::{ChemicalInputs, ChemicalRisk, CoalIndices, CombinedRisk, ThermalRisk};
pub use thermal::TempStats;
