//! Error types for grid construction, falloff painting and file output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all heatmap operations
#[derive(Debug)]
pub enum HeatmapError {
    /// Grid dimensions or cell size are not strictly positive
    InvalidDimension {
        /// Name of the offending construction parameter
        parameter: &'static str,
        /// Provided value, rendered for display
        value: String,
    },

    /// Falloff profile whose inner and outer radius coincide
    ///
    /// The per-radius falloff step divides by `total_range - full_value_range`,
    /// so equal radii have no defined step.
    InvalidFalloffRange {
        /// Radius within which the full value is applied
        full_value_range: i32,
        /// Radius beyond which nothing is applied
        total_range: i32,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Click script line could not be parsed
    ClickScript {
        /// Script the line came from
        path: PathBuf,
        /// One-based line number
        line: usize,
        /// Description of the parse failure
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
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

    /// Animation export requested before any frame was captured
    EmptyCapture,
}

impl fmt::Display for HeatmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { parameter, value } => {
                write!(f, "Invalid grid dimension '{parameter}' = '{value}': must be positive")
            }
            Self::InvalidFalloffRange {
                full_value_range,
                total_range,
            } => {
                write!(
                    f,
                    "Invalid falloff range: total range {total_range} must differ from full value range {full_value_range}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ClickScript { path, line, reason } => {
                write!(
                    f,
                    "Invalid click script '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
            Self::EmptyCapture => write!(f, "No frames captured for animation export"),
        }
    }
}

impl std::error::Error for HeatmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for heatmap results
pub type Result<T> = std::result::Result<T, HeatmapError>;

impl From<image::ImageError> for HeatmapError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> HeatmapError {
    HeatmapError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(parameter: &'static str, value: &impl ToString) -> HeatmapError {
    HeatmapError::InvalidDimension {
        parameter,
        value: value.to_string(),
    }
}
