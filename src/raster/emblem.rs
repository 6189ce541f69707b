//! Emblem sources and SVG rasterization
//!
//! The default emblem ships embedded in the binary; a filesystem path can
//! override it. Rendering happens entirely in memory: markup is parsed with
//! `usvg`, scaled to a square target, and rasterized into a pixmap.

use crate::io::error::{Result, WallpaperError, raster_allocation};
use crate::raster::transform::rgba_from_pixmap;
use image::RgbaImage;
use resvg::usvg;
use std::path::PathBuf;
use tiny_skia::{Pixmap, Transform};

// Interlocking emblem silhouette; the alpha channel is the shape mask, the
// fill color never reaches the output.
const EMBEDDED_EMBLEM_SVG: &str = r##"<svg height="253.82401" shape-rendering="geometricPrecision" text-rendering="geometricPrecision" viewBox="0 0 2644.0798 2644" width="253.82401" xmlns="http://www.w3.org/2000/svg"><path d="m771.67168 798 381.00032-217c-7.0001-21-12.0001-43-12.0001-67 0-92 67.0001-168 155.0001-184v-330h64v330c88 16 155 92 155 184 0 24-5 46-13 67l382 217c14-16 31-30 50-42 80-46 180-26 237 42l286-165 32 56-286 165c31 84-2 180-82 226-18 10-36 17-55 21v442c19 4 37 11 55 21 80 46 113 142 82 226l286 165-32 56-286-165c-57 68-157 88-237 42-19-12-36-26-50-42-127 72-254 145-382 217 8 21 13 43 13 67 0 92-67 168-155 184v330h-64v-330c-88-16-155.0001-92-155.0001-184 0-24 5-46 12.0001-67l-381.00032-217c-14 16-31 30-50 42-80 46-180 26-237-42l-285.99999 165-32-56 285.99999-165c-31-84 2-180 82-226 18-10 36-17 55-21v-442c-19-4-37-11-55-21-80-46-113-142-82-226l-285.99999-165 32-56 285.99999 165c57-68 157-88 237-42 19 12 36 26 50 42zm1080.00032 992c-18-50-15-108 14-157 30-52 81-84 136-92v-438c-55-8-106-40-136-92-29-49-32-107-14-157l-382-218c-35 40-85 65-142 65s-107-25-142-65l-382.00032 218c18 50 15 108-14 157-30 52-81 84-136 92v438c55 8 106 40 136 92 29 49 32 107 14 157l382.00032 218c35-40 85-65 142-65s107 25 142 65z" fill="#000000" fill-rule="nonzero" transform="translate(0 .000102)"/></svg>"##;

/// Renders a shape description at a pixel size into an RGBA raster
///
/// The alpha channel of the result is the shape mask consumed by the
/// styling and placement stages.
pub trait Rasterize {
    /// Render the shape at `size_px`×`size_px`
    ///
    /// # Errors
    ///
    /// Returns an error if the shape description cannot be loaded or parsed,
    /// or if the target surface cannot be allocated.
    fn rasterize(&self, size_px: u32) -> Result<RgbaImage>;
}

/// Where the emblem SVG markup comes from
#[derive(Debug, Clone)]
pub enum EmblemSource {
    /// The emblem built into the binary
    Embedded,
    /// An SVG file supplied on the command line
    File(PathBuf),
}

impl EmblemSource {
    fn markup(&self) -> Result<(String, String)> {
        match self {
            Self::Embedded => Ok((EMBEDDED_EMBLEM_SVG.to_string(), "embedded emblem".to_string())),
            Self::File(path) => {
                let markup =
                    std::fs::read_to_string(path).map_err(|e| WallpaperError::EmblemRead {
                        path: path.clone(),
                        source: e,
                    })?;
                Ok((markup, path.display().to_string()))
            }
        }
    }
}

impl Rasterize for EmblemSource {
    fn rasterize(&self, size_px: u32) -> Result<RgbaImage> {
        let (markup, origin) = self.markup()?;

        let tree = usvg::Tree::from_str(&markup, &usvg::Options::default()).map_err(|e| {
            WallpaperError::EmblemParse { origin, source: e }
        })?;

        let mut pixmap =
            Pixmap::new(size_px, size_px).ok_or_else(|| raster_allocation(size_px, size_px))?;

        let intrinsic = tree.size();
        let transform = Transform::from_scale(
            size_px as f32 / intrinsic.width(),
            size_px as f32 / intrinsic.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(rgba_from_pixmap(&pixmap))
    }
}
