//! Tiled emblem wallpaper generation from a vector silhouette
//!
//! The system rasterizes a small vector emblem, styles it into colorable
//! tiles, repeats the tile across a device-sized canvas (axis-aligned grid
//! or tessellated weave), and overlays a single accent instance of the same
//! emblem above the tiled field.

#![forbid(unsafe_code)]

/// Tile styling, hole isolation, accent layering, and grid placement
pub mod compose;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Mathematical utilities for placement geometry
pub mod math;
/// Vector rasterization and raster transforms
pub mod raster;

pub use io::error::{Result, WallpaperError};
