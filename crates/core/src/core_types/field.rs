//! Scalar field storage for heat-intensity and temperature maps
//!
//! Fields are stored as flat `Vec<f32>` in row-major order, one value per
//! pixel of the source image. Both the normalized heat-intensity field
//! (values in [0, 1]) and the absolute temperature field (°C) use this
//! container.

use serde::{Deserialize, Serialize};

/// 2D scalar field in row-major order (y * width + x)
///
/// Shares its spatial shape with the grayscale channel of the image the
/// simulation was seeded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalarField {
    /// Field values in row-major order (y * width + x)
    pub data: Vec<f32>,
    /// Field width in cells
    pub width: usize,
    /// Field height in cells
    pub height: usize,
}

impl ScalarField {
    /// Create a new field with given dimensions, initialized to zero
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0.0; width * height],
            width,
            height,
        }
    }

    /// Create a field from an existing row-major buffer
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match `width * height`.
    #[must_use]
    pub fn from_raw(width: usize, height: usize, data: Vec<f32>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "Buffer length must match field dimensions"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Number of cells in the field
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the field holds no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.data[y * self.width + x]
    }

    /// Set value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.data[y * self.width + x] = value;
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Minimum cell value (0.0 for an empty field)
    #[must_use]
    pub fn min(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f32::INFINITY, f32::min)
    }

    /// Maximum cell value (0.0 for an empty field)
    #[must_use]
    pub fn max(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Arithmetic mean of all cells
    #[must_use]
    pub fn mean(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f32>() / self.data.len() as f32
    }

    /// Population standard deviation of all cells
    #[must_use]
    pub fn std_dev(&self) -> f32 {
        if self.data.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .data
            .iter()
            .map(|v| {
                let d = v - mean;
                d * d
            })
            .sum::<f32>()
            / self.data.len() as f32;
        variance.sqrt()
    }

    /// Count of cells strictly greater than a threshold
    #[must_use]
    pub fn count_above(&self, threshold: f32) -> usize {
        self.data.iter().filter(|v| **v > threshold).count()
    }

    /// Clamp every cell into `[lo, hi]` in place
    pub fn clamp_values(&mut self, lo: f32, hi: f32) {
        for v in &mut self.data {
            *v = v.clamp(lo, hi);
        }
    }
}
