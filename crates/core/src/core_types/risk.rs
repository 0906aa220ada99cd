//! Risk categories and tagged risk factors
//!
//! Risk factors are a tagged enumeration rather than free-form strings so
//! that the recommendation engine can key off factor kinds instead of
//! substring matching. `Display` renders the operator-facing description.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical risk level derived from a numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    /// Score below 40
    Low,
    /// Score in [40, 60)
    Moderate,
    /// Score in [60, 80)
    High,
    /// Score of 80 or above
    Critical,
}

impl RiskLevel {
    /// Classify a numeric risk score
    ///
    /// Thresholds are shared by the chemical-only and combined paths:
    /// >= 80 CRITICAL, >= 60 HIGH, >= 40 MODERATE, else LOW.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            RiskLevel::Critical
        } else if score >= 60.0 {
            RiskLevel::High
        } else if score >= 40.0 {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }

    /// Display color tag for dashboards (bootstrap-style)
    #[must_use]
    pub fn color_tag(&self) -> &'static str {
        match self {
            RiskLevel::Critical => "danger",
            RiskLevel::High => "warning",
            RiskLevel::Moderate => "info",
            RiskLevel::Low => "success",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Critical => "CRITICAL",
            RiskLevel::High => "HIGH",
            RiskLevel::Moderate => "MODERATE",
            RiskLevel::Low => "LOW",
        };
        f.write_str(label)
    }
}

/// Band severity for index-based risk factors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Lowest band
    Low,
    /// Middle band
    Moderate,
    /// Elevated band
    High,
    /// Highest band (CPT only)
    VeryHigh,
}

/// One triggered risk condition, tagged by kind with its numeric payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskFactor {
    /// Crossing-point temperature band
    CrossingPoint {
        /// Band severity (lower CPT is riskier)
        severity: Severity,
    },
    /// Liability index band
    LiabilityIndex {
        /// Band severity
        severity: Severity,
    },
    /// WITS index band
    WitsIndex {
        /// Band severity
        severity: Severity,
    },
    /// Ambient temperature above 30 °C
    HighAmbientTemperature,
    /// Ventilation rate below 0.5 m/s
    PoorVentilation,
    /// Maximum field temperature above 120 °C
    CriticalHotSpots {
        /// Observed maximum temperature (°C)
        max_temp: f64,
    },
    /// Maximum field temperature above 80 °C
    DangerousTemperatures {
        /// Observed maximum temperature (°C)
        max_temp: f64,
    },
    /// Maximum field temperature above 50 °C
    ElevatedTemperatures {
        /// Observed maximum temperature (°C)
        max_temp: f64,
    },
    /// Average field temperature above 45 °C
    HighAverageTemperature {
        /// Observed average temperature (°C)
        avg_temp: f64,
    },
    /// More than 20% of cells above the critical threshold
    LargeCriticalZone {
        /// Critical-area percentage
        percent: f64,
    },
    /// More than 10% of cells above the critical threshold
    ModerateCriticalZone {
        /// Critical-area percentage
        percent: f64,
    },
    /// More than 10 statistical hot spots
    MultipleHotSpots {
        /// Hot-spot cell count
        count: usize,
    },
    /// More than 5 statistical hot spots
    SeveralHotSpots {
        /// Hot-spot cell count
        count: usize,
    },
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskFactor::CrossingPoint { severity } => match severity {
                Severity::VeryHigh => write!(f, "Very High CPT Risk (CPT < 140°C)"),
                Severity::High => write!(f, "High CPT Risk (CPT 140-150°C)"),
                Severity::Moderate => write!(f, "Moderate CPT Risk (CPT 150-160°C)"),
                Severity::Low => write!(f, "Low CPT Risk (CPT > 160°C)"),
            },
            RiskFactor::LiabilityIndex { severity } => match severity {
                Severity::High | Severity::VeryHigh => {
                    write!(f, "High Liability Index Risk (LI > 2.0)")
                }
                Severity::Moderate => write!(f, "Moderate Liability Index Risk (LI 1.0-2.0)"),
                Severity::Low => write!(f, "Low Liability Index Risk (LI < 1.0)"),
            },
            RiskFactor::WitsIndex { severity } => match severity {
                Severity::High | Severity::VeryHigh => {
                    write!(f, "High WITS Index Risk (WITS > 5.0)")
                }
                Severity::Moderate => write!(f, "Moderate WITS Index Risk (WITS 2.0-5.0)"),
                Severity::Low => write!(f, "Low WITS Index Risk (WITS < 2.0)"),
            },
            RiskFactor::HighAmbientTemperature => {
                write!(f, "High Ambient Temperature Risk (> 30°C)")
            }
            RiskFactor::PoorVentilation => write!(f, "Poor Ventilation Risk (< 0.5 m/s)"),
            RiskFactor::CriticalHotSpots { max_temp } => {
                write!(f, "Critical hot spots detected ({max_temp:.1}°C)")
            }
            RiskFactor::DangerousTemperatures { max_temp } => {
                write!(f, "Dangerous temperatures observed ({max_temp:.1}°C)")
            }
            RiskFactor::ElevatedTemperatures { max_temp } => {
                write!(f, "Elevated temperatures detected ({max_temp:.1}°C)")
            }
            RiskFactor::HighAverageTemperature { avg_temp } => {
                write!(f, "High average temperature ({avg_temp:.1}°C)")
            }
            RiskFactor::LargeCriticalZone { percent } => {
                write!(f, "Large critical temperature zone ({percent:.1}%)")
            }
            RiskFactor::ModerateCriticalZone { percent } => {
                write!(f, "Moderate critical temperature zone ({percent:.1}%)")
            }
            RiskFactor::MultipleHotSpots { count } => {
                write!(f, "Multiple hot spots detected ({count})")
            }
            RiskFactor::SeveralHotSpots { count } => {
                write!(f, "Several hot spots present ({count})")
            }
        }
    }
}
