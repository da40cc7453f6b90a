//! Mathematical utilities for palette and evidence analysis

/// Hex encoding, luminance and distance in RGB space
pub mod color;
/// First-seen frequency ranking and averages
pub mod frequency;
/// Adaptive palette quantization by median cut
pub mod quantize;
