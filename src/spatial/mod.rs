//! Spatial partitioning of images into composition regions

/// Named 3x3 grid regions and per-region statistics
pub mod regions;

pub use regions::GridRegion;
