//! Liability indices, risk scorers, combiner, and recommendations

pub mod chemical;
pub mod combine;
pub mod indices;
pub mod recommend;
pub mod thermal;

pub use chemical::{assess_chemical, ChemicalInputs, ChemicalRisk};
pub use combine::{combine, CombinedRisk};
pub use indices::{compute_indices, CoalIndices};
pub use recommend::{extend_with_thermal, recommendations};
pub use thermal::{assess_thermal, ThermalRisk};
