//! Evidence records and their cross-image aggregation

/// Merging of per-image records into one evidence bundle
pub mod aggregate;
/// Per-image and aggregated evidence records
pub mod model;

pub use aggregate::aggregate;
pub use model::{
    AggregatedEvidence, Casing, Classification, ColorSwatch, ImageExtraction, LayoutSummary,
    Orientation, TypographySample, Weight,
};
