//! Input/output, configuration and error handling

/// Ordered parallel execution of per-image work
pub mod batch;
/// Command-line arguments and batch orchestration
pub mod cli;
/// Thresholds and runtime defaults
pub mod configuration;
/// Image path discovery
pub mod discovery;
/// Dotenv credential lookup
pub mod env;
/// Crate error type
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Diagnostic log setup
pub mod logging;
/// Optical character recognition capability
pub mod ocr;
/// Progress display
pub mod progress;
