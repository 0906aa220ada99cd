//! Proximate-analysis synthesis from image and environment evidence
//!
//! Samples a plausible bituminous composition, perturbs it with image and
//! environment evidence, normalizes the four components to a 100% total,
//! then clamps each into its domain bounds. Any internal failure yields the
//! fixed fallback composition instead of an error.

use crate::core_types::coal::base_ranges;
use crate::core_types::{CoalProperties, EnvironmentParams, ImageFeatures};
use rand::Rng;
use tracing::warn;

/// Synthesize a proximate analysis for one sample
///
/// Adjustments (independent, additive, each conditional):
///
/// - brightness < 60: fixed carbon += U\[2, 8\], volatile matter += U\[1, 5\]
/// - texture variance > 600: moisture += U\[1, 3\], ash += U\[0.5, 2.0\]
/// - particle size < 50 px²: volatile matter += U\[2, 6\]
/// - humidity > 70%: moisture += U\[1, 4\]
/// - storage > 15 days: moisture -= U\[0.5, 2.0\], ash += U\[0.2, 1.0\]
pub fn synthesize_properties<R: Rng + ?Sized>(
    features: Option<&ImageFeatures>,
    env: &EnvironmentParams,
    rng: &mut R,
) -> CoalProperties {
    let mut coal = CoalProperties {
        moisture: rng.random_range(base_ranges::MOISTURE),
        volatile_matter: rng.random_range(base_ranges::VOLATILE_MATTER),
        ash: rng.random_range(base_ranges::ASH),
        fixed_carbon: rng.random_range(base_ranges::FIXED_CARBON),
    };

    if let Some(features) = features {
        // Darker coal typically has higher carbon content
        if features.avg_brightness < 60.0 {
            coal.fixed_carbon += rng.random_range(2.0..=8.0);
            coal.volatile_matter += rng.random_range(1.0..=5.0);
        }
        // Rough, weathered surfaces pick up moisture and mineral residue
        if features.texture_variance > 600.0 {
            coal.moisture += rng.random_range(1.0..=3.0);
            coal.ash += rng.random_range(0.5..=2.0);
        }
        // Fine particles skew toward volatile-rich composition
        if features.avg_particle_size < 50.0 {
            coal.volatile_matter += rng.random_range(2.0..=6.0);
        }
    }

    if env.relative_humidity > 70.0 {
        coal.moisture += rng.random_range(1.0..=4.0);
    }
    if env.storage_duration > 15 {
        // Drying over time, oxidation residue accumulates
        coal.moisture -= rng.random_range(0.5..=2.0);
        coal.ash += rng.random_range(0.2..=1.0);
    }

    let total = coal.total();
    if !total.is_finite() || total <= 0.0 {
        warn!(total, "degenerate synthesized composition, using fallback");
        return CoalProperties::fallback();
    }

    coal.normalize_to_100();
    coal.clamp_to_domain();
    coal
}
