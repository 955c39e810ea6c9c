//! Error types for loading, cropping and writing tiles

use std::fmt;
use std::path::PathBuf;

/// Main error type for all splitting operations
#[derive(Debug)]
pub enum SplitError {
    /// Source image is missing or cannot be decoded
    ImageLoad {
        /// Path to the source image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Output directory could not be created
    DirectoryCreate {
        /// Directory that was being created
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A single tile could not be encoded or written
    ///
    /// Tiles written before this one are left on disk.
    TileWrite {
        /// Destination file of the failed tile
        path: PathBuf,
        /// Row-major index of the failed tile
        index: usize,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Configuration value validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::DirectoryCreate { path, source } => {
                write!(
                    f,
                    "Failed to create output directory '{}': {source}",
                    path.display()
                )
            }
            Self::TileWrite {
                path,
                index,
                source,
            } => {
                write!(
                    f,
                    "Failed to write tile {index} to '{}': {source}",
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
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::TileWrite { source, .. } => Some(source),
            Self::DirectoryCreate { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

impl SplitError {
    /// Short taxonomy name used in log fields
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ImageLoad { .. } => "LoadError",
            Self::DirectoryCreate { .. } => "DirectoryError",
            Self::TileWrite { .. } => "WriteError",
            Self::InvalidParameter { .. } => "ConfigError",
        }
    }
}

/// Convenience type alias for splitting results
pub type Result<T> = std::result::Result<T, SplitError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SplitError {
    SplitError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
