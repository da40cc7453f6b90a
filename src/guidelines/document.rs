//! Guideline document model

use serde::{Deserialize, Serialize};

/// One titled section of a guideline document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Body lines in display order
    pub body: Vec<String>,
}

impl Section {
    /// Create a section from a title and its body lines
    pub fn new(title: impl Into<String>, body: Vec<String>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }
}

/// Titled, ordered collection of guideline sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidelineDocument {
    /// Document title
    pub title: String,
    /// Sections in display order
    pub sections: Vec<Section>,
}

impl GuidelineDocument {
    /// Find a section by its exact title
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.title == title)
    }
}
