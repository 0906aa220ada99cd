//! Thermal-field risk scoring
//!
//! Bands over the temperature field's summary statistics. Unlike the
//! chemical scorer, the final score is explicitly clamped to \[0, 100\].

use crate::core_types::RiskFactor;
use crate::thermal::TempStats;
use serde::{Deserialize, Serialize};

/// Scored thermal risk with its triggered factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalRisk {
    /// Banded score, clamped to \[0, 100\]
    pub score: f64,
    /// Triggered risk factors, in evaluation order
    pub factors: Vec<RiskFactor>,
}

/// Assess thermal risk from temperature statistics
///
/// Bands: max temperature >120/>80/>50 scores 40/30/20; average >45 adds
/// 15; critical area >20%/>10% adds 20/10; hot spots >10/>5 add 15/8.
#[must_use]
pub fn assess_thermal(stats: &TempStats) -> ThermalRisk {
    let mut score: f64 = 0.0;
    let mut factors = Vec::new();

    let max_temp = stats.max_temp;
    if max_temp > 120.0 {
        factors.push(RiskFactor::CriticalHotSpots { max_temp });
        score += 40.0;
    } else if max_temp > 80.0 {
        factors.push(RiskFactor::DangerousTemperatures { max_temp });
        score += 30.0;
    } else if max_temp > 50.0 {
        factors.push(RiskFactor::ElevatedTemperatures { max_temp });
        score += 20.0;
    }

    if stats.avg_temp > 45.0 {
        factors.push(RiskFactor::HighAverageTemperature {
            avg_temp: stats.avg_temp,
        });
        score += 15.0;
    }

    let percent = stats.critical_area_percentage;
    if percent > 20.0 {
        factors.push(RiskFactor::LargeCriticalZone { percent });
        score += 20.0;
    } else if percent > 10.0 {
        factors.push(RiskFactor::ModerateCriticalZone { percent });
        score += 10.0;
    }

    let count = stats.hot_spot_count;
    if count > 10 {
        factors.push(RiskFactor::MultipleHotSpots { count });
        score += 15.0;
    } else if count > 5 {
        factors.push(RiskFactor::SeveralHotSpots { count });
        score += 8.0;
    }

    ThermalRisk {
        score: score.clamp(0.0, 100.0),
        factors,
    }
}
