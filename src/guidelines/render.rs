//! Markdown and JSON rendering of guideline documents

use crate::evidence::model::AggregatedEvidence;
use crate::guidelines::document::GuidelineDocument;
use crate::io::error::{BrandError, Result};
use crate::vision::compile::DesignSpec;
use serde::Serialize;

const SEPARATOR: &str = "***";
const FOOTER: &str = "_Generated from current design asset gallery._";

/// Table-of-contents anchor for a section title
pub fn anchor(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

/// Render a document as Markdown with a linked table of contents
pub fn render_markdown(document: &GuidelineDocument) -> String {
    let mut lines = vec![
        format!("# {}", document.title),
        String::new(),
        "## Table of Contents".to_string(),
        String::new(),
    ];
    lines.extend(
        document
            .sections
            .iter()
            .map(|section| format!("- [{}](#{})", section.title, anchor(&section.title))),
    );
    lines.extend([String::new(), SEPARATOR.to_string(), String::new()]);

    for section in &document.sections {
        lines.push(format!("## {}", section.title));
        lines.push(String::new());
        lines.extend(section.body.iter().cloned());
        if section.body.last().is_some_and(|line| !line.is_empty()) {
            lines.push(String::new());
        }
        lines.push(SEPARATOR.to_string());
        lines.push(String::new());
    }

    lines.push(FOOTER.to_string());
    lines.join("\n")
}

/// JSON payload for a run over local evidence
#[derive(Debug, Serialize)]
pub struct LocalReport<'a> {
    /// Synthesized document
    pub document: &'a GuidelineDocument,
    /// Evidence the document was built from
    pub evidence: &'a AggregatedEvidence,
}

/// JSON payload for a run over vision-model results
#[derive(Debug, Serialize)]
pub struct VisionReport<'a> {
    /// Synthesized document
    pub document: &'a GuidelineDocument,
    /// Compiled design spec the document was built from
    pub design_spec: &'a DesignSpec,
}

/// Pretty-printed JSON for any report
///
/// # Errors
///
/// Returns a serialization error if the value cannot be encoded
pub fn render_json<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|source| BrandError::Serialization {
        operation: "render report",
        source,
    })
}
