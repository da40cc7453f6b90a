//! Error types and path context for extraction and synthesis operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all extraction, aggregation and reporting operations
#[derive(Debug)]
pub enum BrandError {
    /// Source image could not be opened or decoded
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input resolution produced nothing to analyze
    NoInputs {
        /// Description of what was searched
        reason: String,
    },

    /// Every image in the batch failed to produce an extraction
    AllImagesFailed {
        /// Number of images that were attempted
        attempted: usize,
    },

    /// Vision engine selected without an API key
    MissingApiKey,

    /// Transport-level failure while calling the vision model
    VisionRequest {
        /// Image the request was made for
        path: PathBuf,
        /// Underlying HTTP client error
        source: reqwest::Error,
    },

    /// Vision model answered with a non-success status
    VisionStatus {
        /// Image the request was made for
        path: PathBuf,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Vision model answered but the payload was unusable
    VisionResponse {
        /// Image the request was made for
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// JSON serialization or deserialization failed
    Serialization {
        /// Name of the operation that failed
        operation: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for BrandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoInputs { reason } => {
                write!(f, "No valid images were found to analyze: {reason}")
            }
            Self::AllImagesFailed { attempted } => {
                write!(f, "No analyses succeeded ({attempted} images attempted)")
            }
            Self::MissingApiKey => {
                write!(
                    f,
                    "API key not provided; set OPENAI_API_KEY, pass --api-key, or populate the env file"
                )
            }
            Self::VisionRequest { path, source } => {
                write!(
                    f,
                    "Vision request failed for '{}': {source}",
                    path.display()
                )
            }
            Self::VisionStatus { path, status, body } => {
                write!(
                    f,
                    "Vision model returned status {status} for '{}': {body}",
                    path.display()
                )
            }
            Self::VisionResponse { path, reason } => {
                write!(
                    f,
                    "Unusable vision response for '{}': {reason}",
                    path.display()
                )
            }
            Self::Serialization { operation, source } => {
                write!(f, "Serialization error in {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for BrandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::VisionRequest { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, BrandError>;

/// Attaches the offending path to errors that were converted without one
pub trait WithPath<T> {
    /// Replace the placeholder path of a converted error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<BrandError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                BrandError::ImageLoad { path: slot, .. }
                | BrandError::FileSystem { path: slot, .. }
                | BrandError::VisionRequest { path: slot, .. }
                | BrandError::VisionStatus { path: slot, .. }
                | BrandError::VisionResponse { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for BrandError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for BrandError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<reqwest::Error> for BrandError {
    fn from(err: reqwest::Error) -> Self {
        Self::VisionRequest {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for BrandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            operation: "json",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BrandError {
    BrandError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for a specific path and operation
pub fn file_system(path: &Path, operation: &'static str, source: std::io::Error) -> BrandError {
    BrandError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}
