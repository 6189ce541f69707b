//! Vector rasterization and raster transforms
//!
//! The emblem enters the pipeline as SVG markup and leaves this module as
//! plain RGBA rasters; everything downstream is pixel work.

/// Emblem sources and SVG rasterization
pub mod emblem;
/// Pixmap conversion and arbitrary-angle rotation
pub mod transform;

pub use emblem::{EmblemSource, Rasterize};
