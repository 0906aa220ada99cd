//! Combined chemical + thermal risk assessment

use crate::core_types::{RiskFactor, RiskLevel};
use crate::risk::chemical::ChemicalRisk;
use crate::risk::thermal::ThermalRisk;
use serde::{Deserialize, Serialize};

/// Merged risk assessment for one image-driven analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedRisk {
    /// Average of the chemical and thermal scores
    pub score: f64,
    /// Categorical level from the shared thresholds
    pub level: RiskLevel,
    /// Chemical component score
    pub chemical_score: f64,
    /// Thermal component score
    pub thermal_score: f64,
    /// Chemical factors followed by thermal factors
    pub factors: Vec<RiskFactor>,
}

impl CombinedRisk {
    /// Display color tag for the level
    #[must_use]
    pub fn color_tag(&self) -> &'static str {
        self.level.color_tag()
    }
}

/// Average the two component scores and merge their factor lists
#[must_use]
pub fn combine(chemical: &ChemicalRisk, thermal: &ThermalRisk) -> CombinedRisk {
    let score = f64::midpoint(chemical.score, thermal.score);
    let mut factors = chemical.factors.clone();
    factors.extend(thermal.factors.iter().cloned());

    CombinedRisk {
        score,
        level: RiskLevel::from_score(score),
        chemical_score: chemical.score,
        thermal_score: thermal.score,
        factors,
    }
}
