//! Thermal field synthesis
//!
//! Builds a normalized heat-intensity field from a coal photograph and maps
//! it to an absolute-temperature field using environmental multipliers. The
//! model is deliberately visual rather than physical: darker pixels seed
//! higher heat potential, Gaussian smoothing stands in for diffusion, and
//! randomly placed discs model localized oxidation points.

use crate::core_types::{EnvironmentParams, ScalarField};
use crate::error::AnalysisError;
use crate::imaging::{gray_to_f32, GrayF32};
use image::{DynamicImage, Luma};
use imageproc::drawing::draw_filled_circle_mut;
use imageproc::filter::gaussian_blur_f32;
use rand::Rng;
use tracing::debug;

/// Base diffusion blur sigma (equivalent to a 21x21 kernel at sigma 0)
const DIFFUSION_SIGMA: f32 = 3.5;
/// Hot-spot blur sigma (equivalent to a 31x31 kernel at sigma 0)
const HOT_SPOT_SIGMA: f32 = 5.0;
/// Hot spots are scaled by this weight before combining with diffusion
const HOT_SPOT_WEIGHT: f32 = 0.4;
/// Hot-spot centers keep this margin (px) from every image edge
const HOT_SPOT_MARGIN: u32 = 20;
/// Maximum temperature rise above ambient before environmental scaling (°C)
const MAX_TEMP_INCREASE: f32 = 150.0;
/// Hard ceiling on temperature rise above ambient (°C)
const MAX_TEMP_BOUND: f32 = 180.0;

/// Simulate heat-intensity and temperature fields for one image
///
/// Returns the normalized heat-intensity field (values in \[0, 1\]) and the
/// absolute-temperature field (°C, clipped to
/// \[ambient, ambient + 180\]), both in the image's grayscale shape.
///
/// Images too small to keep a hot-spot center 20 px from every edge get no
/// synthetic hot spots; the base diffusion field still applies.
///
/// # Errors
///
/// Returns [`AnalysisError::Simulation`] for degenerate (zero-pixel)
/// images. Callers must treat this as a hard stop, never a zero field.
pub fn simulate<R: Rng + ?Sized>(
    img: &DynamicImage,
    env: &EnvironmentParams,
    rng: &mut R,
) -> Result<(ScalarField, ScalarField), AnalysisError> {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::Simulation {
            reason: "image has no pixels".to_string(),
        });
    }

    // Darker pixels carry more carbon and thus more heat potential
    let mut seed = gray_to_f32(&gray);
    for p in seed.iter_mut() {
        *p = 1.0 - *p / 255.0;
    }
    let diffusion = gaussian_blur_f32(&seed, DIFFUSION_SIGMA);

    let hot_spots = generate_hot_spots(width, height, rng);

    let mut thermal = ScalarField::new(width as usize, height as usize);
    for (i, cell) in thermal.data.iter_mut().enumerate() {
        *cell = (diffusion.as_raw()[i] + hot_spots.as_raw()[i] * HOT_SPOT_WEIGHT).clamp(0.0, 1.0);
    }

    let multiplier = environmental_multiplier(env);
    let ambient = env.ambient_temperature as f32;
    let mut temperature = ScalarField::new(width as usize, height as usize);
    for (i, cell) in temperature.data.iter_mut().enumerate() {
        let t = ambient + thermal.data[i] * MAX_TEMP_INCREASE * multiplier;
        *cell = t.clamp(ambient, ambient + MAX_TEMP_BOUND);
    }

    debug!(
        width,
        height,
        multiplier,
        max_temp = temperature.max(),
        "simulated thermal field"
    );
    Ok((thermal, temperature))
}

/// Product of the four environmental heat-retention factors
///
/// - humidity: 1 + (RH − 50) / 200, more humidity retains more heat
/// - wind: max(0.5, 1 − wind / 5), less wind means more heat buildup
/// - pile: 1 + (height − 3) / 10, larger piles retain more heat
/// - duration: 1 + (days − 1) / 50, longer storage means more oxidation
#[must_use]
pub fn environmental_multiplier(env: &EnvironmentParams) -> f32 {
    let humidity_factor = 1.0 + (env.relative_humidity - 50.0) / 200.0;
    let wind_factor = (1.0 - env.wind_speed / 5.0).max(0.5);
    let pile_factor = 1.0 + (env.pile_height - 3.0) / 10.0;
    let duration_factor = 1.0 + (f64::from(env.storage_duration) - 1.0) / 50.0;
    (humidity_factor * wind_factor * pile_factor * duration_factor) as f32
}

/// Rasterize 3-12 blurred oxidation discs onto a zero field
fn generate_hot_spots<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> GrayF32 {
    let mut spots = GrayF32::new(width, height);
    if width <= 2 * HOT_SPOT_MARGIN || height <= 2 * HOT_SPOT_MARGIN {
        return spots;
    }

    let count = rng.random_range(3..=12);
    for _ in 0..count {
        let x = rng.random_range(HOT_SPOT_MARGIN..=width - HOT_SPOT_MARGIN);
        let y = rng.random_range(HOT_SPOT_MARGIN..=height - HOT_SPOT_MARGIN);
        let intensity: f32 = rng.random_range(0.6..=1.0);
        let radius: i32 = rng.random_range(15..=40);
        draw_filled_circle_mut(&mut spots, (x as i32, y as i32), radius, Luma([intensity]));
    }

    gaussian_blur_f32(&spots, HOT_SPOT_SIGMA)
}
