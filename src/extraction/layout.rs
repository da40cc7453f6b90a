//! Layout analytics based on grayscale pixel density

use crate::evidence::model::{LayoutSummary, Orientation};
use crate::io::configuration::{
    FOCAL_DARKNESS, LANDSCAPE_RATIO, LAYOUT_BLUR_SIGMA, PORTRAIT_RATIO, WHITESPACE_BRIGHTNESS,
};
use crate::spatial::regions::{GridRegion, region_mean};
use image::{DynamicImage, GrayImage, Luma};
use ndarray::Array2;

/// Produce coarse layout descriptors for an image
pub fn summarize_layout(image: &DynamicImage) -> LayoutSummary {
    let mut gray = grayscale(image);
    if gray.width() > 0 && gray.height() > 0 {
        gray = image::imageops::blur(&gray, LAYOUT_BLUR_SIGMA);
    }
    let brightness = normalized_brightness(&gray);

    let (height, width) = brightness.dim();
    let aspect_ratio = if height == 0 {
        1.0
    } else {
        width as f64 / height as f64
    };

    LayoutSummary {
        aspect_ratio,
        dominant_orientation: orientation_from_ratio(aspect_ratio),
        whitespace_ratio: whitespace_ratio(&brightness),
        focal_regions: focal_regions(&brightness),
    }
}

/// Orientation bucket for a width/height ratio
pub fn orientation_from_ratio(ratio: f64) -> Orientation {
    if ratio > LANDSCAPE_RATIO {
        Orientation::Landscape
    } else if ratio < PORTRAIT_RATIO {
        Orientation::Portrait
    } else {
        Orientation::Square
    }
}

/// Fraction of values at or above the whitespace brightness
pub fn whitespace_ratio(brightness: &Array2<f64>) -> f64 {
    if brightness.is_empty() {
        return 0.0;
    }
    let white = brightness
        .iter()
        .filter(|&&value| value >= WHITESPACE_BRIGHTNESS)
        .count();
    white as f64 / brightness.len() as f64
}

/// Grid regions whose mean darkness exceeds the focal threshold, in scan order
pub fn focal_regions(brightness: &Array2<f64>) -> Vec<GridRegion> {
    GridRegion::ALL
        .into_iter()
        .filter(|&region| {
            region_mean(brightness, region).is_some_and(|mean| 1.0 - mean > FOCAL_DARKNESS)
        })
        .collect()
}

// ITU-R 601-2 luma, ignoring alpha
fn grayscale(image: &DynamicImage) -> GrayImage {
    let rgb = image.to_rgb8();
    let mut gray = GrayImage::new(rgb.width(), rgb.height());
    for (x, y, pixel) in rgb.enumerate_pixels() {
        let [r, g, b] = pixel.0.map(u32::from);
        let luma = (r * 299 + g * 587 + b * 114 + 500) / 1000;
        gray.put_pixel(x, y, Luma([luma.min(255) as u8]));
    }
    gray
}

fn normalized_brightness(gray: &GrayImage) -> Array2<f64> {
    let (width, height) = gray.dimensions();
    let mut values = Array2::zeros((height as usize, width as usize));
    for (x, y, pixel) in gray.enumerate_pixels() {
        if let Some(slot) = values.get_mut((y as usize, x as usize)) {
            *slot = f64::from(pixel.0[0]) / 255.0;
        }
    }
    values
}
