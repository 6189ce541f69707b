//! Flattened PNG export for the finished canvas

use crate::io::error::{Result, WallpaperError};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Write the flattened wallpaper to disk as PNG
///
/// The output format is always PNG regardless of the path's extension.
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn export_wallpaper_as_png(wallpaper: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| WallpaperError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    wallpaper
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| WallpaperError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
