//! Brand guideline extraction from a set of design assets
//!
//! Each image is reduced to evidence (a ranked palette, layout density cues and
//! OCR-derived typography), the evidence is merged across the asset set, and a
//! rule-based synthesizer turns it into a sectioned guideline document rendered
//! as Markdown or JSON. A vision-model path can stand in for the palette and
//! voice evidence.

#![deny(unsafe_code)]

/// Per-image records and cross-image aggregation
pub mod evidence;
/// Color, layout and text analyzers for a single image
pub mod extraction;
/// Guideline document synthesis and rendering
pub mod guidelines;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color math, frequency ranking and palette quantization
pub mod math;
/// Composition grid partitioning
pub mod spatial;
/// External vision-model extraction and compilation
pub mod vision;

pub use io::error::{BrandError, Result};
