//! Proximate-analysis composition of a coal sample
//!
//! The four proximate percentages (moisture, volatile matter, ash, fixed
//! carbon) drive every chemical liability index. Synthesized compositions
//! are normalized so the four sum to 100, then clamped to per-component
//! domain bounds; clamping happens after normalization, so the final sum may
//! drift slightly from 100. That drift is accepted and never re-normalized.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Proximate analysis of a coal sample, in percent by mass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoalProperties {
    /// Moisture content (%)
    pub moisture: f64,
    /// Volatile matter (%)
    pub volatile_matter: f64,
    /// Ash content (%)
    pub ash: f64,
    /// Fixed carbon (%)
    pub fixed_carbon: f64,
}

/// Base sampling ranges for a bituminous coal composition
pub mod base_ranges {
    use std::ops::RangeInclusive;

    /// Moisture sampling range (%)
    pub const MOISTURE: RangeInclusive<f64> = 6.0..=15.0;
    /// Volatile matter sampling range (%)
    pub const VOLATILE_MATTER: RangeInclusive<f64> = 25.0..=45.0;
    /// Ash sampling range (%)
    pub const ASH: RangeInclusive<f64> = 8.0..=25.0;
    /// Fixed carbon sampling range (%)
    pub const FIXED_CARBON: RangeInclusive<f64> = 35.0..=60.0;
}

/// Hard floor/ceiling for each component after normalization
pub mod domain_bounds {
    use std::ops::RangeInclusive;

    /// Moisture domain bounds (%)
    pub const MOISTURE: RangeInclusive<f64> = 1.0..=20.0;
    /// Volatile matter domain bounds (%)
    pub const VOLATILE_MATTER: RangeInclusive<f64> = 15.0..=50.0;
    /// Ash domain bounds (%)
    pub const ASH: RangeInclusive<f64> = 5.0..=35.0;
    /// Fixed carbon domain bounds (%)
    pub const FIXED_CARBON: RangeInclusive<f64> = 25.0..=70.0;
}

fn clamp_into(value: f64, bounds: &RangeInclusive<f64>) -> f64 {
    value.clamp(*bounds.start(), *bounds.end())
}

impl CoalProperties {
    /// Fixed composition substituted when synthesis fails internally
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            moisture: 10.0,
            volatile_matter: 35.0,
            ash: 15.0,
            fixed_carbon: 40.0,
        }
    }

    /// Sum of the four components (%)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.moisture + self.volatile_matter + self.ash + self.fixed_carbon
    }

    /// Scale all four components so their sum is exactly 100
    ///
    /// A non-positive total leaves the composition untouched.
    pub fn normalize_to_100(&mut self) {
        let total = self.total();
        if total > 0.0 {
            let factor = 100.0 / total;
            self.moisture *= factor;
            self.volatile_matter *= factor;
            self.ash *= factor;
            self.fixed_carbon *= factor;
        }
    }

    /// Clamp each component into its domain floor/ceiling
    ///
    /// Applied after [`normalize_to_100`](Self::normalize_to_100); the
    /// post-clamp sum may deviate slightly from 100.
    pub fn clamp_to_domain(&mut self) {
        self.moisture = clamp_into(self.moisture, &domain_bounds::MOISTURE);
        self.volatile_matter = clamp_into(self.volatile_matter, &domain_bounds::VOLATILE_MATTER);
        self.ash = clamp_into(self.ash, &domain_bounds::ASH);
        self.fixed_carbon = clamp_into(self.fixed_carbon, &domain_bounds::FIXED_CARBON);
    }
}
