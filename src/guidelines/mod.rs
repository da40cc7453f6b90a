//! Guideline document synthesis and rendering

/// Document and section types
pub mod document;
/// Markdown and JSON output
pub mod render;
/// Rule tables turning evidence into sections
pub mod synthesis;

pub use document::{GuidelineDocument, Section};
pub use render::{render_json, render_markdown};
pub use synthesis::{build_document, build_document_from_spec};
