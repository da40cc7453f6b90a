//! Text extraction and typography heuristics
//!
//! The heuristics are literal decision rules over the recognized line text.

use crate::evidence::model::{Casing, Classification, TypographySample, Weight};
use crate::io::configuration::{
    BOLD_MAX_LENGTH, DISPLAY_MAX_WORDS, HEADLINE_MAX_WORDS, MIN_LINE_LENGTH, REGULAR_MIN_WORDS,
};
use crate::io::ocr::TextRecognizer;
use image::DynamicImage;
use std::collections::HashSet;
use tracing::debug;

/// Recognize text in an image and return distinct lines of at least the minimum length
///
/// An unavailable recognizer or an image without text both yield an empty list.
pub fn extract_text_lines(image: &DynamicImage, recognizer: &dyn TextRecognizer) -> Vec<String> {
    let Some(raw) = recognizer.recognize(image) else {
        debug!("text recognition unavailable; continuing without copy");
        return Vec::new();
    };
    split_lines(&raw)
}

/// Split raw recognizer output into trimmed, length-filtered, distinct lines
pub fn split_lines(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    raw.lines()
        .map(str::trim)
        .filter(|line| line.chars().count() >= MIN_LINE_LENGTH)
        .filter(|line| seen.insert(*line))
        .map(str::to_string)
        .collect()
}

/// Build one typography sample per case-insensitively distinct normalized line
pub fn build_typography_samples(lines: &[String]) -> Vec<TypographySample> {
    let mut seen = HashSet::new();
    let mut samples = Vec::new();

    for line in lines {
        let normalized = normalize_whitespace(line);
        if normalized.is_empty() || !seen.insert(normalized.to_lowercase()) {
            continue;
        }
        samples.push(TypographySample {
            casing: infer_casing(&normalized),
            weight: infer_weight(&normalized),
            classification: infer_classification(&normalized),
            text: normalized,
        });
    }

    samples
}

/// Collapse whitespace runs into single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Casing of the alphabetic characters in a line
pub fn infer_casing(text: &str) -> Casing {
    let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
    let Some(first) = letters.first() else {
        return Casing::Mixed;
    };

    if letters.iter().all(|c| c.is_uppercase()) {
        Casing::Uppercase
    } else if letters.iter().all(|c| c.is_lowercase()) {
        Casing::Lowercase
    } else if first.is_uppercase() {
        Casing::Title
    } else {
        Casing::Mixed
    }
}

/// Apparent weight from length, casing and word count
pub fn infer_weight(text: &str) -> Weight {
    if text.chars().count() <= BOLD_MAX_LENGTH && is_uppercase_text(text) {
        Weight::Bold
    } else if word_count(text) >= REGULAR_MIN_WORDS {
        Weight::Regular
    } else {
        Weight::Medium
    }
}

/// Hierarchy level from word count and casing
pub fn infer_classification(text: &str) -> Classification {
    let words = word_count(text);
    if words <= DISPLAY_MAX_WORDS && is_uppercase_text(text) {
        Classification::Display
    } else if words <= HEADLINE_MAX_WORDS {
        Classification::Headline
    } else {
        Classification::Body
    }
}

/// True when the text has at least one cased character and none are lowercase
pub fn is_uppercase_text(text: &str) -> bool {
    let mut cased = false;
    for c in text.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            cased = true;
        }
    }
    cased
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
