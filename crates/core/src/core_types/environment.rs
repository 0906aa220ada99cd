//! Storage-environment scenarios and sampled environmental conditions
//!
//! A [`Scenario`] is a named preset of inclusive sampling ranges for the
//! conditions around a coal stockpile. One [`EnvironmentParams`] instance is
//! sampled per analysis and feeds both the coal property synthesizer and the
//! thermal field simulator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Named environmental scenario preset
///
/// Unknown scenario names fall back to [`Scenario::Normal`] rather than
/// erroring; callers passing user input go through [`Scenario::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// Average storage-yard conditions
    Normal,
    /// Hot, dry day with little wind
    HotDay,
    /// High humidity, near-still air
    Humid,
    /// Enclosed or sheltered storage with poor airflow
    PoorVentilation,
}

/// Inclusive sampling ranges defining one scenario
#[derive(Debug, Clone)]
pub struct ScenarioRanges {
    /// Ambient temperature range (°C)
    pub temperature: RangeInclusive<f64>,
    /// Relative humidity range (%)
    pub humidity: RangeInclusive<f64>,
    /// Wind speed range (m/s)
    pub wind: RangeInclusive<f64>,
    /// Oxygen content range (%)
    pub oxygen: RangeInclusive<f64>,
}

impl Scenario {
    /// All scenarios, in catalog order
    pub const ALL: [Scenario; 4] = [
        Scenario::Normal,
        Scenario::HotDay,
        Scenario::Humid,
        Scenario::PoorVentilation,
    ];

    /// Resolve a scenario from its catalog name
    ///
    /// Unknown names silently resolve to `Normal`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "hot_day" => Scenario::HotDay,
            "humid" => Scenario::Humid,
            "poor_ventilation" => Scenario::PoorVentilation,
            _ => Scenario::Normal,
        }
    }

    /// Catalog name of this scenario
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::HotDay => "hot_day",
            Scenario::Humid => "humid",
            Scenario::PoorVentilation => "poor_ventilation",
        }
    }

    /// Sampling ranges for this scenario
    #[must_use]
    pub fn ranges(&self) -> ScenarioRanges {
        match self {
            Scenario::Normal => ScenarioRanges {
                temperature: 20.0..=30.0,
                humidity: 40.0..=70.0,
                wind: 0.5..=2.0,
                oxygen: 20.5..=21.0,
            },
            Scenario::HotDay => ScenarioRanges {
                temperature: 35.0..=45.0,
                humidity: 20.0..=40.0,
                wind: 0.2..=1.0,
                oxygen: 20.8..=21.0,
            },
            Scenario::Humid => ScenarioRanges {
                temperature: 25.0..=35.0,
                humidity: 80.0..=95.0,
                wind: 0.1..=0.8,
                oxygen: 20.0..=20.5,
            },
            Scenario::PoorVentilation => ScenarioRanges {
                temperature: 22.0..=32.0,
                humidity: 50.0..=80.0,
                wind: 0.05..=0.3,
                oxygen: 19.5..=20.2,
            },
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One sampled environmental scenario instance
///
/// Fields are sampled independently within scenario bounds and may then be
/// shifted by image-derived adjustments; consumers must tolerate values
/// outside the original scenario range since no re-clamping is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentParams {
    /// Ambient temperature (°C)
    pub ambient_temperature: f64,
    /// Relative humidity (%, 0-100)
    pub relative_humidity: f64,
    /// Wind speed (m/s, > 0)
    pub wind_speed: f64,
    /// Oxygen content (%)
    pub oxygen_content: f64,
    /// Atmospheric pressure (kPa)
    pub atmospheric_pressure: f64,
    /// Stockpile height (m, > 0)
    pub pile_height: f64,
    /// Storage duration (days, >= 1)
    pub storage_duration: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Scenario::from_name("normal"), Scenario::Normal);
        assert_eq!(Scenario::from_name("hot_day"), Scenario::HotDay);
        assert_eq!(Scenario::from_name("humid"), Scenario::Humid);
        assert_eq!(
            Scenario::from_name("poor_ventilation"),
            Scenario::PoorVentilation
        );
    }

    #[test]
    fn unknown_name_falls_back_to_normal() {
        assert_eq!(Scenario::from_name("tropical"), Scenario::Normal);
        assert_eq!(Scenario::from_name(""), Scenario::Normal);
    }

    #[test]
    fn name_roundtrips_through_from_name() {
        for scenario in Scenario::ALL {
            assert_eq!(Scenario::from_name(scenario.name()), scenario);
        }
    }

    #[test]
    fn hot_day_ranges_are_hotter_and_drier_than_normal() {
        let normal = Scenario::Normal.ranges();
        let hot = Scenario::HotDay.ranges();
        assert!(hot.temperature.start() > normal.temperature.end());
        assert!(hot.humidity.end() <= normal.humidity.end());
    }
}
