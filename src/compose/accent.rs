//! Accent layering
//!
//! The accent is a single enlarged emblem instance painted above the tiled
//! field. It is built from two layers: an optional interior fill of the
//! emblem's enclosed hole, and the styled outline painted over it. The
//! outline wins wherever both layers are opaque.

use crate::compose::hole::find_enclosed_region;
use crate::compose::mask::AlphaMask;
use crate::compose::style::{TileStyle, flat_tinted, tinted_accent};
use crate::io::color::Rgb;
use image::{Rgba, RgbaImage, imageops};

/// How the accent instance is colored
#[derive(Debug, Clone)]
pub struct AccentSpec {
    /// Style the outline like the field (`None` means a flat fill)
    pub style: Option<TileStyle>,
    /// Tint for the outline layer
    pub outline_rgb: Rgb,
    /// Fill the enclosed interior hole with this color
    pub center_fill: Option<Rgb>,
}

/// Paint the region mask as an opaque color layer
fn interior_layer(mask: &AlphaMask, center_rgb: Rgb) -> RgbaImage {
    let region = find_enclosed_region(mask);
    let mut layer = RgbaImage::new(mask.width(), mask.height());

    for (x, y, pixel) in layer.enumerate_pixels_mut() {
        let inside = region
            .get([y as usize, x as usize])
            .is_some_and(|&value| value == 255);
        if inside {
            *pixel = Rgba([center_rgb[0], center_rgb[1], center_rgb[2], 255]);
        }
    }

    layer
}

/// Build the accent image from a rasterized emblem
///
/// The result has the emblem's dimensions and is fully transparent outside
/// the silhouette and its enclosed hole.
pub fn build_accent(emblem: &RgbaImage, spec: &AccentSpec) -> RgbaImage {
    let mask = AlphaMask::from_rgba(emblem);

    let outline = spec.style.map_or_else(
        || flat_tinted(&mask, spec.outline_rgb),
        |style| tinted_accent(&mask, style, spec.outline_rgb),
    );

    let mut accent = RgbaImage::new(mask.width(), mask.height());
    if let Some(center_rgb) = spec.center_fill {
        let interior = interior_layer(&mask, center_rgb);
        imageops::overlay(&mut accent, &interior, 0, 0);
    }
    imageops::overlay(&mut accent, &outline, 0, 0);

    accent
}
