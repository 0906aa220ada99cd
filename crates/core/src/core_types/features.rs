//! Visual descriptors extracted from a coal sample photograph

use serde::{Deserialize, Serialize};

/// Per-image visual descriptors driving the downstream synthesis stages
///
/// Darker, rougher, more fragmented samples tend to produce hotter
/// simulations: low brightness raises ambient temperature, high texture
/// variance suppresses ventilation, and a high particle count grows the
/// simulated pile.
///
/// All fields are finite; a failed extraction never yields a partially
/// filled value (the extractor returns an error instead).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageFeatures {
    /// Mean grayscale intensity (0-255)
    pub avg_brightness: f64,
    /// Standard deviation of grayscale intensity (0-255)
    pub brightness_std: f64,
    /// Variance of the Laplacian response; higher values indicate rougher,
    /// more fragmented surfaces
    pub texture_variance: f64,
    /// Mean hue (`OpenCV` scale, 0-179)
    pub hue_mean: f64,
    /// Mean saturation (0-255)
    pub saturation_mean: f64,
    /// Mean value channel (0-255)
    pub value_mean: f64,
    /// Fraction of pixels classified as edges (0-1)
    pub edge_density: f64,
    /// Mean area of detected particles in px², 0 when none detected
    pub avg_particle_size: f64,
    /// Number of detected particles with area > 10 px²
    pub particle_count: usize,
}
