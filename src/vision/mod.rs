//! External vision-model extraction path
//!
//! Each image is sent to a multimodal model that answers with structured
//! design data; the per-image answers are then compiled into a single
//! [`compile::DesignSpec`] that the guideline synthesizer accepts in place of
//! locally aggregated palette and voice evidence.

/// Blocking HTTP client for the responses endpoint
pub mod client;
/// Cross-image merge of per-image results
pub mod compile;
/// Per-image design data types
pub mod design;
/// Prompt text
pub mod prompts;
/// Strict output schema
pub mod schema;

pub use client::{VisionClient, VisionSettings};
pub use compile::{DesignSpec, ImageDesign, compile_design_data};
pub use design::DesignData;
