//! Error types and context for wallpaper generation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all wallpaper operations
#[derive(Debug)]
pub enum WallpaperError {
    /// Failed to read an emblem SVG from the filesystem
    EmblemRead {
        /// Path to the SVG file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Emblem SVG markup could not be parsed
    EmblemParse {
        /// Origin of the markup (file path or the embedded default)
        origin: String,
        /// Underlying SVG parse error
        source: resvg::usvg::Error,
    },

    /// A raster surface could not be allocated
    ///
    /// Occurs when requested dimensions are zero or exceed what the
    /// rasterizer can represent.
    RasterAllocation {
        /// Requested surface width in pixels
        width: u32,
        /// Requested surface height in pixels
        height: u32,
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Device codename has no known resolution
    UnknownDevice {
        /// The unrecognized codename
        codename: String,
    },

    /// Failed to save the finished wallpaper to disk
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
}

impl fmt::Display for WallpaperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmblemRead { path, source } => {
                write!(f, "Failed to read emblem '{}': {source}", path.display())
            }
            Self::EmblemParse { origin, source } => {
                write!(f, "Failed to parse emblem SVG from {origin}: {source}")
            }
            Self::RasterAllocation { width, height } => {
                write!(f, "Cannot allocate a {width}x{height} raster surface")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownDevice { codename } => {
                write!(f, "Unknown device codename: {codename}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export wallpaper to '{}': {source}",
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
        }
    }
}

impl std::error::Error for WallpaperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::EmblemRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::EmblemParse { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wallpaper results
pub type Result<T> = std::result::Result<T, WallpaperError>;

impl From<std::io::Error> for WallpaperError {
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
) -> WallpaperError {
    WallpaperError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a raster allocation error for a rejected surface size
pub const fn raster_allocation(width: u32, height: u32) -> WallpaperError {
    WallpaperError::RasterAllocation { width, height }
}

#[cfg(test)]
mod tests {
    use super::{WallpaperError, invalid_parameter};

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("spacing", &"0.0", &"must be at least 1.0");
        let message = err.to_string();
        assert!(message.contains("spacing"));
        assert!(message.contains("must be at least 1.0"));
    }

    #[test]
    fn test_unknown_device_display() {
        let err = WallpaperError::UnknownDevice {
            codename: "walleye".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown device codename: walleye");
    }
}
