//! Evidence records produced per image and merged across the asset set
//!
//! All records are plain values: built once by their producer and never
//! mutated afterwards. Label enums serialize as lowercase strings.

use crate::spatial::regions::GridRegion;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// A representative color detected in an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSwatch {
    /// Uppercase `#RRGGBB` hex code
    pub hex: String,
    /// Nearest named brand color
    pub name: String,
    /// Fraction of sampled pixels attributed to this color
    pub prominence: f64,
    /// Usage tier derived from prominence
    pub usage_hint: String,
}

impl ColorSwatch {
    /// Deduplication key shared by every swatch with the same color
    pub fn key(&self) -> String {
        self.hex.to_uppercase()
    }
}

/// Letter casing of a detected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Every letter is uppercase
    Uppercase,
    /// Every letter is lowercase
    Lowercase,
    /// Leading capital followed by mixed letters
    Title,
    /// Anything else, including lines without letters
    Mixed,
}

/// Apparent weight of a detected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Short uppercase lines
    Bold,
    /// Neither bold nor running text
    Medium,
    /// Long running text
    Regular,
}

/// Hierarchy level of a detected line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Short uppercase statements
    Display,
    /// Up to eight words
    Headline,
    /// Longer copy
    Body,
}

/// Orientation of an image derived from its aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Wider than tall
    Landscape,
    /// Taller than wide
    Portrait,
    /// Roughly equal sides
    Square,
}

macro_rules! label_display {
    ($ty:ty { $($variant:ident => $label:literal),+ $(,)? }) => {
        impl $ty {
            /// Lowercase label used in evidence and reports
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

label_display!(Casing {
    Uppercase => "uppercase",
    Lowercase => "lowercase",
    Title => "title",
    Mixed => "mixed",
});

label_display!(Weight {
    Bold => "bold",
    Medium => "medium",
    Regular => "regular",
});

label_display!(Classification {
    Display => "display",
    Headline => "headline",
    Body => "body",
});

label_display!(Orientation {
    Landscape => "landscape",
    Portrait => "portrait",
    Square => "square",
});

/// Typographic reading of a single detected line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySample {
    /// Whitespace-normalized line text
    pub text: String,
    /// Letter casing
    pub casing: Casing,
    /// Apparent weight
    pub weight: Weight,
    /// Hierarchy level
    pub classification: Classification,
}

impl TypographySample {
    /// Cross-image deduplication key
    pub const fn key(&self) -> (Classification, Weight, Casing) {
        (self.classification, self.weight, self.casing)
    }
}

/// Composition cues computed from pixel density
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSummary {
    /// Width divided by height
    pub aspect_ratio: f64,
    /// Orientation bucket for the aspect ratio
    pub dominant_orientation: Orientation,
    /// Fraction of near-white pixels
    pub whitespace_ratio: f64,
    /// Dense grid cells in row-major scan order
    pub focal_regions: Vec<GridRegion>,
}

/// All signals collected from a single asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageExtraction {
    /// Path the image was read from
    pub source: PathBuf,
    /// Palette ranked by prominence, descending
    pub colors: Vec<ColorSwatch>,
    /// One sample per distinct detected line
    pub typography: Vec<TypographySample>,
    /// Composition summary
    pub layout: Option<LayoutSummary>,
    /// Raw text lines in detection order
    pub detected_copy: Vec<String>,
    /// Advisory caveats about degraded evidence
    pub notes: Vec<String>,
}

impl ImageExtraction {
    /// File name used when referring to this image in notes
    pub fn display_name(&self) -> String {
        display_name(&self.source)
    }
}

/// File name of a path, or the full path when it has none
pub fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Merged signals across the full asset set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEvidence {
    /// Per-image records in input order
    pub images: Vec<ImageExtraction>,
    /// Unique swatches ranked by prominence, descending
    pub palette: Vec<ColorSwatch>,
    /// Samples unique by (classification, weight, casing)
    pub typography: Vec<TypographySample>,
    /// One orientation per image with a layout, not deduplicated
    pub layout_patterns: Vec<Orientation>,
    /// Every detected line in image order
    pub copy_observations: Vec<String>,
    /// Per-image caveats plus low-whitespace warnings
    pub production_notes: Vec<String>,
}

impl AggregatedEvidence {
    /// Layouts of every image that produced one
    pub fn layouts(&self) -> impl Iterator<Item = &LayoutSummary> {
        self.images.iter().filter_map(|image| image.layout.as_ref())
    }
}
