//! Chemical-index risk scoring
//!
//! Each available index contributes a banded score; absent indices
//! contribute nothing and never fail the assessment. Environmental bonuses
//! apply for hot ambient air and poor ventilation. The raw sum is not
//! clamped; band design keeps it near 100 in practice.

use crate::core_types::{RiskFactor, RiskLevel, Severity};
use serde::{Deserialize, Serialize};

/// Inputs to the chemical scorer
///
/// The Olpinski index is accepted for completeness but has no scoring band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalInputs {
    /// Crossing-point temperature (°C), when computable
    pub cpt: Option<f64>,
    /// Liability index, when computable
    pub liability: Option<f64>,
    /// WITS index, when computable
    pub wits: Option<f64>,
    /// Olpinski index; carried but unscored
    pub olpinski: Option<f64>,
    /// Ambient temperature (°C)
    pub ambient_temperature: f64,
    /// Ventilation or wind rate (m/s)
    pub ventilation_rate: f64,
}

/// Scored chemical risk with its triggered factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalRisk {
    /// Total banded score (unclamped sum)
    pub score: f64,
    /// Categorical level from the shared thresholds
    pub level: RiskLevel,
    /// Triggered risk factors, in evaluation order
    pub factors: Vec<RiskFactor>,
}

impl ChemicalRisk {
    /// Display color tag for the level
    #[must_use]
    pub fn color_tag(&self) -> &'static str {
        self.level.color_tag()
    }
}

/// Assess chemical spontaneous-combustion risk
///
/// Bands: CPT <140/<150/<160/else scores 40/30/20/10; liability
/// >2.0/>1.0/else scores 25/15/5; WITS >5.0/>2.0/else scores 20/10/5.
/// Ambient above 30 °C and ventilation below 0.5 m/s each add 15.
///
/// Presence is the only gate: a present index valued 0.0 still scores its
/// low band, only `None` contributes nothing.
#[must_use]
pub fn assess_chemical(inputs: &ChemicalInputs) -> ChemicalRisk {
    let mut score = 0.0;
    let mut factors = Vec::new();

    if let Some(cpt) = inputs.cpt {
        let (severity, points) = if cpt < 140.0 {
            (Severity::VeryHigh, 40.0)
        } else if cpt < 150.0 {
            (Severity::High, 30.0)
        } else if cpt < 160.0 {
            (Severity::Moderate, 20.0)
        } else {
            (Severity::Low, 10.0)
        };
        factors.push(RiskFactor::CrossingPoint { severity });
        score += points;
    }

    if let Some(li) = inputs.liability {
        let (severity, points) = if li > 2.0 {
            (Severity::High, 25.0)
        } else if li > 1.0 {
            (Severity::Moderate, 15.0)
        } else {
            (Severity::Low, 5.0)
        };
        factors.push(RiskFactor::LiabilityIndex { severity });
        score += points;
    }

    if let Some(wits) = inputs.wits {
        let (severity, points) = if wits > 5.0 {
            (Severity::High, 20.0)
        } else if wits > 2.0 {
            (Severity::Moderate, 10.0)
        } else {
            (Severity::Low, 5.0)
        };
        factors.push(RiskFactor::WitsIndex { severity });
        score += points;
    }

    if inputs.ambient_temperature > 30.0 {
        factors.push(RiskFactor::HighAmbientTemperature);
        score += 15.0;
    }
    if inputs.ventilation_rate < 0.5 {
        factors.push(RiskFactor::PoorVentilation);
        score += 15.0;
    }

    ChemicalRisk {
        score,
        level: RiskLevel::from_score(score),
        factors,
    }
}
