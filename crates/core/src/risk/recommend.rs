//! Mitigation recommendations
//!
//! A deterministic rule table keyed by risk level and structured factor
//! kinds, so trigger conditions never depend on matching display strings.

use crate::core_types::{RiskFactor, RiskLevel};

/// CPT below this threshold (°C) triggers the relocation recommendation
const CPT_RELOCATION_THRESHOLD: f64 = 145.0;
/// Thermal score above this threshold adds the thermal monitoring block
const THERMAL_EXTRA_THRESHOLD: f64 = 50.0;

/// Generate mitigation recommendations for an assessment
#[must_use]
pub fn recommendations(
    level: RiskLevel,
    factors: &[RiskFactor],
    cpt: Option<f64>,
) -> Vec<String> {
    let mut recs: Vec<String> = Vec::new();

    if matches!(level, RiskLevel::Critical | RiskLevel::High) {
        recs.extend(
            [
                "Implement immediate monitoring systems for temperature and gas emissions",
                "Increase ventilation rates to minimum 1.0 m/s",
                "Consider water spraying or foam injection for temperature control",
                "Establish regular thermal imaging surveys",
                "Implement CO monitoring systems",
            ]
            .map(String::from),
        );
    }

    if matches!(
        level,
        RiskLevel::Critical | RiskLevel::High | RiskLevel::Moderate
    ) {
        recs.extend(
            [
                "Regular inspection of coal stockpiles every 2-4 hours",
                "Maintain maximum pile height of 3-4 meters",
                "Ensure proper drainage to prevent moisture accumulation",
                "Consider coal blending to reduce volatile matter content",
            ]
            .map(String::from),
        );
    }

    if factors
        .iter()
        .any(|f| matches!(f, RiskFactor::PoorVentilation))
    {
        recs.push("Install or upgrade ventilation systems immediately".to_string());
    }
    if factors
        .iter()
        .any(|f| matches!(f, RiskFactor::HighAmbientTemperature))
    {
        recs.push("Implement cooling measures during hot weather".to_string());
    }

    if let Some(cpt) = cpt {
        if cpt < CPT_RELOCATION_THRESHOLD {
            recs.push("Consider relocating coal to cooler storage areas".to_string());
        }
    }

    if recs.is_empty() {
        recs.extend(
            [
                "Continue regular monitoring procedures",
                "Maintain current storage practices",
                "Review conditions monthly",
            ]
            .map(String::from),
        );
    }

    recs
}

/// Append the thermal monitoring block when the thermal score warrants it
pub fn extend_with_thermal(recs: &mut Vec<String>, thermal_score: f64) {
    if thermal_score > THERMAL_EXTRA_THRESHOLD {
        recs.extend(
            [
                "Implement continuous thermal monitoring with infrared cameras",
                "Establish thermal alert zones around detected hot spots",
                "Consider immediate pile restructuring to break up hot zones",
            ]
            .map(String::from),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_risk_without_factors_gets_default_trio() {
        let recs = recommendations(RiskLevel::Low, &[], Some(160.0));
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0], "Continue regular monitoring procedures");
    }

    #[test]
    fn critical_risk_gets_urgent_and_routine_blocks() {
        let recs = recommendations(RiskLevel::Critical, &[], Some(160.0));
        assert_eq!(recs.len(), 9);
        assert!(recs[0].contains("immediate monitoring"));
        assert!(recs[5].contains("Regular inspection"));
    }

    #[test]
    fn moderate_risk_gets_only_routine_block() {
        let recs = recommendations(RiskLevel::Moderate, &[], Some(160.0));
        assert_eq!(recs.len(), 4);
        assert!(recs[0].contains("Regular inspection"));
    }

    #[test]
    fn poor_ventilation_factor_triggers_ventilation_upgrade() {
        let recs = recommendations(RiskLevel::Low, &[RiskFactor::PoorVentilation], Some(160.0));
        assert!(recs
            .iter()
            .any(|r| r == "Install or upgrade ventilation systems immediately"));
    }

    #[test]
    fn hot_ambient_factor_triggers_cooling() {
        let recs = recommendations(
            RiskLevel::Low,
            &[RiskFactor::HighAmbientTemperature],
            Some(160.0),
        );
        assert!(recs
            .iter()
            .any(|r| r == "Implement cooling measures during hot weather"));
    }

    #[test]
    fn low_cpt_triggers_relocation() {
        let recs = recommendations(RiskLevel::Low, &[], Some(143.0));
        assert!(recs
            .iter()
            .any(|r| r == "Consider relocating coal to cooler storage areas"));
        // Missing CPT never triggers it
        let recs = recommendations(RiskLevel::Low, &[], None);
        assert!(!recs
            .iter()
            .any(|r| r.contains("relocating")));
    }

    #[test]
    fn thermal_block_requires_high_thermal_score() {
        let mut recs = vec!["existing".to_string()];
        extend_with_thermal(&mut recs, 40.0);
        assert_eq!(recs.len(), 1);
        extend_with_thermal(&mut recs, 62.0);
        assert_eq!(recs.len(), 4);
        assert!(recs[1].contains("infrared"));
    }
}
