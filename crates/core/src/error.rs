//! Fatal error taxonomy for single-image analysis
//!
//! Only conditions that abort an analysis live here. Recoverable conditions
//! are modeled in their own stages: a missing chemical index is an absent
//! `Option`, a visualization failure falls back to direct statistics, and a
//! synthesis failure substitutes the fixed fallback composition.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal failure of one image analysis
///
/// In a batch run these are logged and skipped; they never abort the batch
/// or the host process.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The image could not be read or decoded
    #[error("could not load image {path:?}: {source}")]
    Decode {
        /// Path of the offending image
        path: PathBuf,
        /// Decoder failure
        #[source]
        source: image::ImageError,
    },

    /// Feature extraction could not produce a complete descriptor set
    #[error("feature extraction failed: {reason}")]
    FeatureExtraction {
        /// Human-readable cause
        reason: String,
    },

    /// The thermal field could not be simulated
    #[error("thermal simulation failed: {reason}")]
    Simulation {
        /// Human-readable cause
        reason: String,
    },
}

/// Recoverable failure of the comparison-image renderer
///
/// The pipeline logs this and proceeds with statistics computed directly
/// from the temperature field.
#[derive(Debug, Error)]
pub enum VisualizationError {
    /// Field shape does not match the source image
    #[error("field shape {field_width}x{field_height} does not match image {image_width}x{image_height}")]
    ShapeMismatch {
        /// Field width in cells
        field_width: usize,
        /// Field height in cells
        field_height: usize,
        /// Image width in pixels
        image_width: u32,
        /// Image height in pixels
        image_height: u32,
    },

    /// Encoding or writing the rendered image failed
    #[error("could not write rendered image: {0}")]
    Io(#[from] image::ImageError),
}
