//! Cross-image evidence aggregation
//!
//! Merge policy per field:
//! - palette: keyed by uppercase hex, highest prominence wins, earlier image wins
//!   exact ties; ranked by prominence with a stable sort
//! - typography: keyed by (classification, weight, casing), first occurrence wins
//! - layout patterns, copy, notes: concatenated in image order
//!
//! The image order supplied by the caller is significant and must be deterministic.

use crate::evidence::model::{AggregatedEvidence, ColorSwatch, ImageExtraction, TypographySample};
use crate::io::configuration::LOW_WHITESPACE_RATIO;
use std::collections::{HashMap, HashSet};

/// Merge per-image extractions into a single evidence bundle
pub fn aggregate(extractions: &[ImageExtraction]) -> AggregatedEvidence {
    let mut palette: Vec<ColorSwatch> = Vec::new();
    let mut palette_index: HashMap<String, usize> = HashMap::new();
    let mut typography: Vec<TypographySample> = Vec::new();
    let mut typography_seen = HashSet::new();
    let mut layout_patterns = Vec::new();
    let mut copy_observations = Vec::new();
    let mut production_notes = Vec::new();

    for extraction in extractions {
        for color in &extraction.colors {
            let key = color.key();
            match palette_index.get(&key).and_then(|&i| palette.get_mut(i)) {
                Some(existing) if existing.prominence >= color.prominence => {}
                Some(existing) => *existing = color.clone(),
                None => {
                    palette_index.insert(key, palette.len());
                    palette.push(color.clone());
                }
            }
        }

        for sample in &extraction.typography {
            if typography_seen.insert(sample.key()) {
                typography.push(sample.clone());
            }
        }

        if let Some(layout) = &extraction.layout {
            layout_patterns.push(layout.dominant_orientation);
            if layout.whitespace_ratio < LOW_WHITESPACE_RATIO {
                production_notes.push(low_whitespace_note(extraction));
            }
        }

        copy_observations.extend(extraction.detected_copy.iter().cloned());
        production_notes.extend(extraction.notes.iter().cloned());
    }

    palette.sort_by(|a, b| b.prominence.total_cmp(&a.prominence));

    AggregatedEvidence {
        images: extractions.to_vec(),
        palette,
        typography,
        layout_patterns,
        copy_observations,
        production_notes,
    }
}

fn low_whitespace_note(extraction: &ImageExtraction) -> String {
    format!(
        "Consider reviewing dense composition in {}; whitespace under {:.0}%.",
        extraction.display_name(),
        LOW_WHITESPACE_RATIO * 100.0
    )
}
