//! Thermal comparison-image rendering
//!
//! Renders a three-panel strip (original sample, heat-intensity field,
//! temperature field) under a cold-to-hot colormap. Rendering is optional:
//! every statistic the pipeline reports is computed directly from the
//! fields, so a rendering failure is recoverable.

use crate::core_types::ScalarField;
use crate::error::VisualizationError;
use image::{DynamicImage, Rgb, RgbImage};
use std::path::Path;

/// Cold-to-hot colormap stops: navy through white
const THERMAL_STOPS: [[u8; 3]; 9] = [
    [0x00, 0x00, 0x80], // deep blue (cold)
    [0x00, 0x00, 0xff], // blue
    [0x00, 0xff, 0xff], // cyan
    [0x00, 0xff, 0x00], // green
    [0xff, 0xff, 0x00], // yellow
    [0xff, 0x80, 0x00], // orange
    [0xff, 0x00, 0x00], // red
    [0xff, 0x00, 0xff], // magenta (very hot)
    [0xff, 0xff, 0xff], // white (extreme heat)
];

/// Map a normalized value in \[0, 1\] onto the thermal colormap
#[must_use]
pub fn thermal_color(t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (THERMAL_STOPS.len() - 1) as f32;
    let idx = (scaled.floor() as usize).min(THERMAL_STOPS.len() - 2);
    let frac = scaled - idx as f32;

    let lo = THERMAL_STOPS[idx];
    let hi = THERMAL_STOPS[idx + 1];
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * frac).round() as u8;
    Rgb([
        lerp(lo[0], hi[0]),
        lerp(lo[1], hi[1]),
        lerp(lo[2], hi[2]),
    ])
}

/// Render a scalar field under the thermal colormap
///
/// Values are normalized into \[`lo`, `hi`\] before color lookup; a
/// degenerate range renders the cold end everywhere.
#[must_use]
pub fn render_field(field: &ScalarField, lo: f32, hi: f32) -> RgbImage {
    let span = hi - lo;
    RgbImage::from_fn(field.width as u32, field.height as u32, |x, y| {
        let v = field.get(x as usize, y as usize);
        let t = if span > 0.0 { (v - lo) / span } else { 0.0 };
        thermal_color(t)
    })
}

/// Render the three-panel comparison strip
///
/// Panels left to right: original sample, heat-intensity field (fixed
/// \[0, 1\] scale), temperature field (scaled to its own min/max).
///
/// # Errors
///
/// Returns [`VisualizationError::ShapeMismatch`] when a field's shape does
/// not match the source image.
pub fn render_comparison(
    original: &DynamicImage,
    thermal: &ScalarField,
    temps: &ScalarField,
) -> Result<RgbImage, VisualizationError> {
    let rgb = original.to_rgb8();
    let (width, height) = rgb.dimensions();
    for field in [thermal, temps] {
        if field.width != width as usize || field.height != height as usize {
            return Err(VisualizationError::ShapeMismatch {
                field_width: field.width,
                field_height: field.height,
                image_width: width,
                image_height: height,
            });
        }
    }

    let thermal_panel = render_field(thermal, 0.0, 1.0);
    let temp_panel = render_field(temps, temps.min(), temps.max());

    let mut strip = RgbImage::new(width * 3, height);
    for y in 0..height {
        for x in 0..width {
            strip.put_pixel(x, y, *rgb.get_pixel(x, y));
            strip.put_pixel(x + width, y, *thermal_panel.get_pixel(x, y));
            strip.put_pixel(x + 2 * width, y, *temp_panel.get_pixel(x, y));
        }
    }
    Ok(strip)
}

/// Render the comparison strip and write it as PNG
///
/// # Errors
///
/// Returns [`VisualizationError`] on shape mismatch or write failure.
pub fn save_comparison(
    original: &DynamicImage,
    thermal: &ScalarField,
    temps: &ScalarField,
    path: &Path,
) -> Result<(), VisualizationError> {
    let strip = render_comparison(original, thermal, temps)?;
    strip.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageBuffer;

    #[test]
    fn colormap_endpoints() {
        assert_eq!(thermal_color(0.0), Rgb([0x00, 0x00, 0x80]));
        assert_eq!(thermal_color(1.0), Rgb([0xff, 0xff, 0xff]));
        // Out-of-range values clamp instead of wrapping
        assert_eq!(thermal_color(-0.5), Rgb([0x00, 0x00, 0x80]));
        assert_eq!(thermal_color(2.0), Rgb([0xff, 0xff, 0xff]));
    }

    #[test]
    fn colormap_midpoint_is_yellow() {
        // t = 0.5 lands exactly on the fifth stop
        assert_eq!(thermal_color(0.5), Rgb([0xff, 0xff, 0x00]));
    }

    #[test]
    fn comparison_strip_is_three_panels_wide() {
        let original = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 6, Rgb([50, 50, 50])));
        let thermal = ScalarField::from_raw(8, 6, vec![0.5; 48]);
        let temps = ScalarField::from_raw(8, 6, vec![40.0; 48]);
        let strip = render_comparison(&original, &thermal, &temps).unwrap();
        assert_eq!(strip.dimensions(), (24, 6));
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let original = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(8, 6, Rgb([50, 50, 50])));
        let thermal = ScalarField::new(4, 4);
        let temps = ScalarField::new(8, 6);
        let err = render_comparison(&original, &thermal, &temps).unwrap_err();
        assert!(matches!(err, VisualizationError::ShapeMismatch { .. }));
    }

    #[test]
    fn degenerate_range_renders_cold_end() {
        let field = ScalarField::from_raw(2, 2, vec![42.0; 4]);
        let panel = render_field(&field, 42.0, 42.0);
        assert_eq!(*panel.get_pixel(0, 0), Rgb([0x00, 0x00, 0x80]));
    }
}
