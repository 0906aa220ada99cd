//! Temperature field summary statistics
//!
//! This direct reduction is also the fallback path when comparison-image
//! rendering is unavailable: the numbers never depend on the renderer.

use crate::core_types::ScalarField;
use serde::{Deserialize, Serialize};

/// Cells above this temperature (°C) count toward the critical area
pub const CRITICAL_TEMPERATURE: f32 = 80.0;

/// Scalar summary of a temperature field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TempStats {
    /// Minimum temperature (°C)
    pub min_temp: f64,
    /// Maximum temperature (°C)
    pub max_temp: f64,
    /// Mean temperature (°C)
    pub avg_temp: f64,
    /// Cells hotter than mean + 2 standard deviations
    pub hot_spot_count: usize,
    /// Percentage of cells above [`CRITICAL_TEMPERATURE`] (0-100)
    pub critical_area_percentage: f64,
}

impl TempStats {
    /// Reduce a temperature field to its summary statistics
    #[must_use]
    pub fn from_field(temps: &ScalarField) -> Self {
        let mean = temps.mean();
        let std_dev = temps.std_dev();
        let hot_spot_count = temps.count_above(mean + 2.0 * std_dev);
        let critical_cells = temps.count_above(CRITICAL_TEMPERATURE);
        let critical_area_percentage = if temps.is_empty() {
            0.0
        } else {
            critical_cells as f64 / temps.len() as f64 * 100.0
        };

        Self {
            min_temp: f64::from(temps.min()),
            max_temp: f64::from(temps.max()),
            avg_temp: f64::from(mean),
            hot_spot_count,
            critical_area_percentage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn uniform_field_has_no_hot_spots() {
        let field = ScalarField::from_raw(4, 2, vec![30.0; 8]);
        let stats = TempStats::from_field(&field);
        assert_relative_eq!(stats.min_temp, 30.0);
        assert_relative_eq!(stats.max_temp, 30.0);
        assert_relative_eq!(stats.avg_temp, 30.0);
        assert_eq!(stats.hot_spot_count, 0);
        assert_relative_eq!(stats.critical_area_percentage, 0.0);
    }

    #[test]
    fn outlier_cell_counts_as_hot_spot() {
        let mut data = vec![25.0_f32; 99];
        data.push(200.0);
        let field = ScalarField::from_raw(10, 10, data);
        let stats = TempStats::from_field(&field);
        assert_eq!(stats.hot_spot_count, 1);
        assert_relative_eq!(stats.critical_area_percentage, 1.0);
        assert_relative_eq!(stats.max_temp, 200.0);
    }

    #[test]
    fn critical_percentage_counts_cells_above_80() {
        let data = vec![85.0, 85.0, 70.0, 70.0, 70.0, 70.0, 70.0, 70.0, 70.0, 70.0];
        let field = ScalarField::from_raw(5, 2, data);
        let stats = TempStats::from_field(&field);
        assert_relative_eq!(stats.critical_area_percentage, 20.0);
    }
}
