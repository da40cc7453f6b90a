//! Per-image evidence extraction
//!
//! Runs the color, layout and text analyzers against one decoded image and
//! records advisory notes for degraded evidence.

/// Adaptive palette extraction and named-color labelling
pub mod colors;
/// Orientation, whitespace and focal-region analysis
pub mod layout;
/// OCR line extraction and typography heuristics
pub mod text;

use crate::evidence::model::ImageExtraction;
use crate::io::image::load_image;
use crate::io::ocr::TextRecognizer;
use image::DynamicImage;
use std::path::Path;
use tracing::debug;

const NO_COLORS_NOTE: &str = "No dominant colors detected; image may be transparent or monochrome.";
const NO_SAMPLES_NOTE: &str = "OCR text present but typography heuristics produced no samples.";
const NO_COPY_NOTE: &str =
    "No copy detected automatically; review manually for critical messaging.";

/// Decode the image at `path` and extract its evidence
///
/// # Errors
///
/// Returns [`crate::BrandError::ImageLoad`] naming the path when the file cannot
/// be opened or decoded
pub fn extract_from_path(
    path: &Path,
    recognizer: &dyn TextRecognizer,
    max_colors: usize,
) -> crate::Result<ImageExtraction> {
    debug!(path = %path.display(), "extracting evidence");
    let image = load_image(path)?;
    let extraction = extract_from_image(path, &image, recognizer, max_colors);
    debug!(
        path = %path.display(),
        colors = extraction.colors.len(),
        lines = extraction.detected_copy.len(),
        "extraction finished"
    );
    Ok(extraction)
}

/// Extract evidence from an already decoded image recorded under `source`
pub fn extract_from_image(
    source: &Path,
    image: &DynamicImage,
    recognizer: &dyn TextRecognizer,
    max_colors: usize,
) -> ImageExtraction {
    let colors = colors::extract_colors(image, max_colors);
    let layout = layout::summarize_layout(image);
    let detected_copy = text::extract_text_lines(image, recognizer);
    let typography = text::build_typography_samples(&detected_copy);

    let mut notes = Vec::new();
    if colors.is_empty() {
        notes.push(NO_COLORS_NOTE.to_string());
    }
    if typography.is_empty() && !detected_copy.is_empty() {
        notes.push(NO_SAMPLES_NOTE.to_string());
    }
    if detected_copy.is_empty() {
        notes.push(NO_COPY_NOTE.to_string());
    }

    ImageExtraction {
        source: source.to_path_buf(),
        colors,
        typography,
        layout: Some(layout),
        detected_copy,
        notes,
    }
}
