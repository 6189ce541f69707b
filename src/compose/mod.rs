//! Tile styling, hole isolation, accent layering, and grid placement
//!
//! This module contains the compositing core:
//! - Alpha mask extraction and dilation
//! - Tile styling with per-row variants
//! - Enclosed-hole flood fill
//! - Accent layering above the tiled field
//! - Simple and tessellated grid placement
//! - Canvas orchestration

/// Accent layering (interior fill beneath a styled outline)
pub mod accent;
/// Canvas compositor and wallpaper configuration
pub mod canvas;
/// Simple axis-aligned grid placement
pub mod grid;
/// Enclosed background region isolation
pub mod hole;
/// Single-channel alpha masks
pub mod mask;
/// Tile styles and row-variant painting
pub mod style;
/// Tessellated weave placement
pub mod weave;

pub use canvas::{WallpaperConfig, render_wallpaper};
pub use mask::AlphaMask;
pub use style::{TilePainter, TileStyle};
