//! Spontaneous-combustion liability indices
//!
//! Empirical indices computed from proximate analysis. A denominator of
//! zero makes an index unavailable (`None`); that is an expected condition,
//! not an error, and the chemical scorer simply skips absent indices.

use crate::core_types::CoalProperties;
use serde::{Deserialize, Serialize};

/// Lower bound on the crossing-point temperature (°C)
const CPT_FLOOR: f64 = 120.0;
/// Upper bound on the crossing-point temperature (°C)
const CPT_CEILING: f64 = 200.0;

/// All liability indices for one sample
///
/// The Olpinski index is computed and reported but carries no scoring band;
/// that asymmetry is intentional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoalIndices {
    /// Crossing-point temperature (°C)
    pub cpt: f64,
    /// Liability index, absent when ash is zero
    pub liability_index: Option<f64>,
    /// WITS (Wits-Ehac) index
    pub wits_index: f64,
    /// Olpinski index, absent when ash + volatile matter is zero
    pub olpinski_index: Option<f64>,
}

/// Compute all indices for a composition under a given oxygen content
#[must_use]
pub fn compute_indices(coal: &CoalProperties, oxygen: f64) -> CoalIndices {
    CoalIndices {
        cpt: crossing_point_temperature(
            coal.moisture,
            coal.volatile_matter,
            coal.ash,
            coal.fixed_carbon,
        ),
        liability_index: liability_index(coal.moisture, coal.volatile_matter, coal.ash),
        wits_index: wits_index(coal.moisture, coal.volatile_matter, coal.ash, oxygen),
        olpinski_index: olpinski_index(coal.moisture, coal.volatile_matter, coal.ash),
    }
}

/// Crossing-point temperature (CPT), °C
///
/// The temperature at which heat generation begins to exceed dissipation;
/// lower values are riskier. Inputs summing above 100 are normalized to
/// percentages first. The result is bounded to \[120, 200\] °C.
#[must_use]
pub fn crossing_point_temperature(
    moisture: f64,
    volatile_matter: f64,
    ash: f64,
    fixed_carbon: f64,
) -> f64 {
    let total = moisture + volatile_matter + ash + fixed_carbon;
    let (m, vm, a, fc) = if total > 100.0 {
        let f = 100.0 / total;
        (moisture * f, volatile_matter * f, ash * f, fixed_carbon * f)
    } else {
        (moisture, volatile_matter, ash, fixed_carbon)
    };

    let cpt = 150.0 + 0.3 * a - 0.5 * vm + 0.2 * m + 0.1 * fc;
    cpt.clamp(CPT_FLOOR, CPT_CEILING)
}

/// Liability index: moisture × volatile matter / ash, rounded to 2 dp
///
/// Higher values are riskier. `None` when ash is zero.
#[must_use]
pub fn liability_index(moisture: f64, volatile_matter: f64, ash: f64) -> Option<f64> {
    if ash == 0.0 {
        return None;
    }
    Some(round_dp(moisture * volatile_matter / ash, 2))
}

/// WITS (Wits-Ehac) index: (moisture + VM) × oxygen / (ash + 1), 2 dp
///
/// Higher values are riskier.
#[must_use]
pub fn wits_index(moisture: f64, volatile_matter: f64, ash: f64, oxygen: f64) -> f64 {
    round_dp((moisture + volatile_matter) * oxygen / (ash + 1.0), 2)
}

/// Olpinski index: moisture / (ash + volatile matter), rounded to 3 dp
///
/// Reported for reference only; no scoring band consumes it. `None` when
/// the denominator is zero.
#[must_use]
pub fn olpinski_index(moisture: f64, volatile_matter: f64, ash: f64) -> Option<f64> {
    let denominator = ash + volatile_matter;
    if denominator == 0.0 {
        return None;
    }
    Some(round_dp(moisture / denominator, 3))
}

fn round_dp(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
