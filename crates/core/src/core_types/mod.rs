//! Core types shared by every pipeline stage

pub mod coal;
pub mod environment;
pub mod features;
pub mod field;
pub mod risk;

pub use coal::CoalProperties;
pub use environment::{EnvironmentParams, Scenario, ScenarioRanges};
pub use features::ImageFeatures;
pub use field::ScalarField;
pub use risk::{RiskFactor, RiskLevel, Severity};
