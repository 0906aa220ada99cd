//! Image decoding and visual feature extraction
//!
//! Derives the scalar descriptors that seed the synthesis stages: grayscale
//! brightness statistics, Laplacian texture variance, HSV color means, Canny
//! edge density, and particle statistics from outer contours on the edge map.
//!
//! Extraction is all-or-nothing: an unreadable or degenerate image yields an
//! error, never a partially filled [`ImageFeatures`].

use crate::core_types::ImageFeatures;
use crate::error::AnalysisError;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use imageproc::contours::{find_contours, BorderType, Contour};
use imageproc::edges::canny;
use imageproc::filter::filter3x3;
use std::path::Path;

/// Grayscale image with f32 subpixels, used for filter responses
pub(crate) type GrayF32 = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Canny low threshold (gradient magnitude)
const CANNY_LOW: f32 = 50.0;
/// Canny high threshold, in the standard 50/150 ratio to the low threshold
const CANNY_HIGH: f32 = 150.0;
/// Contours at or below this area (px²) are treated as noise
const MIN_PARTICLE_AREA: f64 = 10.0;

/// 3x3 Laplacian kernel (4-connected second derivative)
const LAPLACIAN_KERNEL: [f32; 9] = [0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0];

/// Decode an image from disk
///
/// # Errors
///
/// Returns [`AnalysisError::Decode`] when the file is missing or not a
/// decodable raster image.
pub fn load_image(path: &Path) -> Result<DynamicImage, AnalysisError> {
    image::open(path).map_err(|source| AnalysisError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract visual descriptors from a decoded coal sample image
///
/// # Errors
///
/// Returns [`AnalysisError::FeatureExtraction`] for degenerate images
/// (zero pixels); any such failure is a hard stop for the image, callers
/// must not substitute default features.
pub fn extract_features(img: &DynamicImage) -> Result<ImageFeatures, AnalysisError> {
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::FeatureExtraction {
            reason: "image has no pixels".to_string(),
        });
    }
    let pixel_count = f64::from(width) * f64::from(height);

    let (avg_brightness, brightness_std) = intensity_stats(&gray);

    // Texture roughness from the Laplacian response; computed on the
    // 0-255 intensity scale so thresholds match the edge-sharpness bands
    // used downstream.
    let laplacian: GrayF32 = filter3x3(&gray_to_f32(&gray), &LAPLACIAN_KERNEL);
    let texture_variance = variance(laplacian.as_raw());

    let (hue_mean, saturation_mean, value_mean) = hsv_means(img);

    let edges = canny(&gray, CANNY_LOW, CANNY_HIGH);
    let edge_pixels = edges.as_raw().iter().filter(|p| **p > 0).count();
    let edge_density = edge_pixels as f64 / pixel_count;

    let areas = particle_areas(&edges);
    let particle_count = areas.len();
    let avg_particle_size = if areas.is_empty() {
        0.0
    } else {
        areas.iter().sum::<f64>() / areas.len() as f64
    };

    Ok(ImageFeatures {
        avg_brightness,
        brightness_std,
        texture_variance,
        hue_mean,
        saturation_mean,
        value_mean,
        edge_density,
        avg_particle_size,
        particle_count,
    })
}

/// Widen a u8 grayscale image to f32 subpixels, preserving the 0-255 scale
pub(crate) fn gray_to_f32(gray: &GrayImage) -> GrayF32 {
    let (w, h) = gray.dimensions();
    let buf: Vec<f32> = gray.as_raw().iter().map(|p| f32::from(*p)).collect();
    ImageBuffer::from_raw(w, h, buf).expect("buffer length matches dimensions")
}

/// Mean and population standard deviation of grayscale intensity
fn intensity_stats(gray: &GrayImage) -> (f64, f64) {
    let n = gray.as_raw().len() as f64;
    let mean = gray.as_raw().iter().map(|p| f64::from(*p)).sum::<f64>() / n;
    let var = gray
        .as_raw()
        .iter()
        .map(|p| {
            let d = f64::from(*p) - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    (mean, var.sqrt())
}

/// Population variance of a f32 buffer
fn variance(values: &[f32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|v| f64::from(*v)).sum::<f64>() / n;
    values
        .iter()
        .map(|v| {
            let d = f64::from(*v) - mean;
            d * d
        })
        .sum::<f64>()
        / n
}

/// Channel means in the `OpenCV` HSV convention (H 0-179, S and V 0-255)
fn hsv_means(img: &DynamicImage) -> (f64, f64, f64) {
    let rgb = img.to_rgb8();
    let n = f64::from(rgb.width()) * f64::from(rgb.height());
    let (mut h_sum, mut s_sum, mut v_sum) = (0.0_f64, 0.0_f64, 0.0_f64);

    for pixel in rgb.pixels() {
        let (h, s, v) = rgb_to_hsv(pixel.0[0], pixel.0[1], pixel.0[2]);
        h_sum += h;
        s_sum += s;
        v_sum += v;
    }
    (h_sum / n, s_sum / n, v_sum / n)
}

/// Convert one RGB pixel to `OpenCV`-scaled HSV
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let hue_deg = if delta == 0.0 {
        0.0
    } else if (max - r).abs() < f64::EPSILON {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if (max - g).abs() < f64::EPSILON {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 { 0.0 } else { delta / max };

    // OpenCV stores H as degrees/2 so it fits a u8 channel
    (hue_deg / 2.0, saturation * 255.0, max * 255.0)
}

/// Areas of outer contours on the edge map, noise-filtered
fn particle_areas(edges: &GrayImage) -> Vec<f64> {
    let contours: Vec<Contour<i32>> = find_contours(edges);
    contours
        .iter()
        .filter(|c| c.border_type == BorderType::Outer)
        .map(contour_area)
        .filter(|area| *area > MIN_PARTICLE_AREA)
        .collect()
}

/// Polygon area of a contour via the shoelace formula
fn contour_area(contour: &Contour<i32>) -> f64 {
    let points = &contour.points;
    if points.len() < 3 {
        return 0.0;
    }
    let mut doubled = 0i64;
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        doubled += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
    }
    (doubled.abs() as f64) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn flat_image(width: u32, height: u32, luma: u8) -> DynamicImage {
        let rgb = ImageBuffer::from_pixel(width, height, Rgb([luma, luma, luma]));
        DynamicImage::ImageRgb8(rgb)
    }

    #[test]
    fn flat_image_has_no_texture_or_edges() {
        let img = flat_image(32, 32, 120);
        let features = extract_features(&img).unwrap();

        assert!((features.avg_brightness - 120.0).abs() < 1.0);
        assert!(features.brightness_std < 1e-9);
        assert!(features.texture_variance < 1e-6);
        assert_eq!(features.edge_density, 0.0);
        assert_eq!(features.particle_count, 0);
        assert_eq!(features.avg_particle_size, 0.0);
    }

    #[test]
    fn dark_image_reports_low_brightness() {
        let img = flat_image(16, 16, 20);
        let features = extract_features(&img).unwrap();
        assert!(features.avg_brightness < 80.0);
    }

    #[test]
    fn half_split_image_produces_edges() {
        // Left half black, right half white: a single vertical edge
        let mut rgb = ImageBuffer::from_pixel(64, 64, Rgb([0u8, 0, 0]));
        for y in 0..64 {
            for x in 32..64 {
                rgb.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let features = extract_features(&DynamicImage::ImageRgb8(rgb)).unwrap();
        assert!(features.edge_density > 0.0, "edge detector found no edges");
        assert!(features.texture_variance > 0.0);
        assert!(features.brightness_std > 100.0);
    }

    #[test]
    fn rgb_to_hsv_matches_opencv_scaling() {
        // Pure red: H 0, S 255, V 255
        let (h, s, v) = rgb_to_hsv(255, 0, 0);
        assert!(h.abs() < 1e-9);
        assert!((s - 255.0).abs() < 1e-9);
        assert!((v - 255.0).abs() < 1e-9);

        // Pure green: 120° -> 60 in OpenCV half-degrees
        let (h, _, _) = rgb_to_hsv(0, 255, 0);
        assert!((h - 60.0).abs() < 1e-9);

        // Gray: zero saturation
        let (_, s, v) = rgb_to_hsv(128, 128, 128);
        assert!(s.abs() < 1e-9);
        assert!((v - 128.0).abs() < 1.0);
    }

    #[test]
    fn shoelace_area_of_square() {
        use imageproc::point::Point;
        let contour = Contour {
            border_type: BorderType::Outer,
            parent: None,
            points: vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 10),
                Point::new(0, 10),
            ],
        };
        assert!((contour_area(&contour) - 100.0).abs() < 1e-9);
    }
}
