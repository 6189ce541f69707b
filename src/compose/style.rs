//! Tile styles and row-variant painting
//!
//! A style turns the emblem mask into fully colored RGBA tiles. Coloring is
//! premultiplied by the mask: every output pixel carries the fill color
//! scaled by its opacity, so pastes darken antialiased edges the same way
//! regardless of the backdrop.

use crate::compose::mask::AlphaMask;
use crate::io::color::Rgb;
use crate::math::geometry::{lerp_channel, scale_channel};
use clap::ValueEnum;
use image::{Rgba, RgbaImage, imageops};

// Baked style palette
const GRADIENT_TOP: Rgb = [30, 30, 30];
const GRADIENT_BOTTOM: Rgb = [10, 10, 10];
const GLOSS_TOP: Rgb = [35, 35, 35];
const GLOSS_BOTTOM: Rgb = [12, 12, 12];
const MATTE: Rgb = [28, 28, 28];
const EMBOSS_BASE: Rgb = [25, 25, 25];
const EMBOSS_SHADOW: Rgb = [8, 8, 12];
const EMBOSS_SHADOW_OFFSET: (i64, i64) = (2, 2);

/// The closed set of tile fill styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TileStyle {
    /// Vertical dark gradient, identical on every row
    Gradient,
    /// Alternating glossy gradient and flat matte rows
    Glossmix,
    /// Dark base over an offset drop shadow
    Emboss,
}

/// Fill an image with a vertical gradient, premultiplied by the mask
fn vertical_gradient_fill(mask: &AlphaMask, top: Rgb, bottom: Rgb) -> RgbaImage {
    let (width, height) = (mask.width(), mask.height());
    let mut image = RgbaImage::new(width, height);
    let span = if height > 1 { height - 1 } else { 1 };

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let t = f64::from(y) / f64::from(span);
        let alpha = mask.alpha(x, y);
        let premultiply = |channel: u8| (u16::from(channel) * u16::from(alpha) / 255) as u8;
        *pixel = Rgba([
            premultiply(lerp_channel(top[0], bottom[0], t)),
            premultiply(lerp_channel(top[1], bottom[1], t)),
            premultiply(lerp_channel(top[2], bottom[2], t)),
            alpha,
        ]);
    }

    image
}

/// Fill an image with a flat color, premultiplied by the mask
fn flat_fill(mask: &AlphaMask, rgb: Rgb) -> RgbaImage {
    let (width, height) = (mask.width(), mask.height());
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let alpha = mask.alpha(x, y);
        let premultiply = |channel: u8| (u16::from(channel) * u16::from(alpha) / 255) as u8;
        *pixel = Rgba([
            premultiply(rgb[0]),
            premultiply(rgb[1]),
            premultiply(rgb[2]),
            alpha,
        ]);
    }

    image
}

/// Shadow fringe under a dark base: the mask dilated once and filled with
/// the shadow color, pasted at a small offset beneath the undilated base
fn emboss_composite(mask: &AlphaMask) -> RgbaImage {
    let shadow = flat_fill(&mask.dilate3(), EMBOSS_SHADOW);
    let base = flat_fill(mask, EMBOSS_BASE);

    let mut canvas = RgbaImage::new(mask.width(), mask.height());
    let (dx, dy) = EMBOSS_SHADOW_OFFSET;
    imageops::overlay(&mut canvas, &shadow, dx, dy);
    imageops::overlay(&mut canvas, &base, 0, 0);
    canvas
}

enum Variants {
    Uniform(RgbaImage),
    Alternating {
        glossy: RgbaImage,
        matte: RgbaImage,
    },
}

/// Produces the styled tile for any grid row
///
/// Variants are precomputed once per style; `tile_for_row` only selects.
pub struct TilePainter {
    variants: Variants,
}

impl TilePainter {
    /// Build the row variants for `style` from the emblem mask
    pub fn new(mask: &AlphaMask, style: TileStyle) -> Self {
        let variants = match style {
            TileStyle::Gradient => {
                Variants::Uniform(vertical_gradient_fill(mask, GRADIENT_TOP, GRADIENT_BOTTOM))
            }
            TileStyle::Glossmix => Variants::Alternating {
                glossy: vertical_gradient_fill(mask, GLOSS_TOP, GLOSS_BOTTOM),
                matte: flat_fill(mask, MATTE),
            },
            TileStyle::Emboss => Variants::Uniform(emboss_composite(mask)),
        };
        Self { variants }
    }

    /// The styled tile for a signed grid row
    ///
    /// Row-alternating styles select by the parity of the absolute row
    /// index, so rows above and below the anchor mirror each other.
    pub const fn tile_for_row(&self, row: i64) -> &RgbaImage {
        match &self.variants {
            Variants::Uniform(tile) => tile,
            Variants::Alternating { glossy, matte } => {
                if row.unsigned_abs() % 2 == 0 {
                    glossy
                } else {
                    matte
                }
            }
        }
    }

    /// Tile dimensions in pixels
    pub fn dimensions(&self) -> (u32, u32) {
        self.tile_for_row(0).dimensions()
    }
}

/// Style the accent outline tinted toward an explicit color
///
/// Gradient and glossmix scale the tint into their top/bottom endpoints;
/// emboss keeps its baked shadow/base scheme and only uses the accent's
/// own mask.
pub fn tinted_accent(mask: &AlphaMask, style: TileStyle, rgb: Rgb) -> RgbaImage {
    match style {
        TileStyle::Gradient => {
            let top = rgb.map(|c| scale_channel(c, 0.92));
            let bottom = rgb.map(|c| scale_channel(c, 0.70));
            vertical_gradient_fill(mask, top, bottom)
        }
        TileStyle::Glossmix => {
            let top = rgb.map(|c| scale_channel(c, 1.05));
            let bottom = rgb.map(|c| scale_channel(c, 0.75));
            vertical_gradient_fill(mask, top, bottom)
        }
        TileStyle::Emboss => emboss_composite(mask),
    }
}

/// Flat accent fill without any style treatment
pub fn flat_tinted(mask: &AlphaMask, rgb: Rgb) -> RgbaImage {
    flat_fill(mask, rgb)
}

#[cfg(test)]
mod tests {
    use super::{TilePainter, TileStyle, tinted_accent};
    use crate::compose::mask::AlphaMask;
    use image::{Rgba, RgbaImage};

    fn square_mask(size: u32, margin: u32) -> AlphaMask {
        let mut image = RgbaImage::new(size, size);
        for y in margin..size - margin {
            for x in margin..size - margin {
                image.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
        AlphaMask::from_rgba(&image)
    }

    #[test]
    fn test_styles_preserve_dimensions_and_transparency() {
        let mask = square_mask(20, 4);
        for style in [TileStyle::Gradient, TileStyle::Glossmix, TileStyle::Emboss] {
            let painter = TilePainter::new(&mask, style);
            let tile = painter.tile_for_row(0);
            assert_eq!(tile.dimensions(), (20, 20));
            // Corner is outside both the mask and its dilated shadow
            assert_eq!(tile.get_pixel(0, 0).0[3], 0);
        }

        // Masked fills leave every mask-transparent pixel transparent;
        // emboss is exempt where its offset shadow fringe lands
        for style in [TileStyle::Gradient, TileStyle::Glossmix] {
            let painter = TilePainter::new(&mask, style);
            for row in [0_i64, 1] {
                for (x, y, pixel) in painter.tile_for_row(row).enumerate_pixels() {
                    if mask.alpha(x, y) == 0 {
                        assert_eq!(pixel.0[3], 0, "style leak at ({x}, {y})");
                    }
                }
            }
        }
    }

    #[test]
    fn test_glossmix_alternates_by_row_parity() {
        let mask = square_mask(8, 1);
        let painter = TilePainter::new(&mask, TileStyle::Glossmix);
        assert_eq!(painter.tile_for_row(0), painter.tile_for_row(2));
        assert_eq!(painter.tile_for_row(1), painter.tile_for_row(-1));
        assert_ne!(painter.tile_for_row(0), painter.tile_for_row(1));
    }

    #[test]
    fn test_gradient_darkens_downward() {
        let mask = square_mask(16, 2);
        let painter = TilePainter::new(&mask, TileStyle::Gradient);
        let tile = painter.tile_for_row(0);
        let top = tile.get_pixel(8, 3).0[0];
        let bottom = tile.get_pixel(8, 12).0[0];
        assert!(top > bottom, "gradient should darken toward the bottom");
    }

    #[test]
    fn test_emboss_shadow_forms_a_ring_outside_the_base() {
        let mask = square_mask(24, 6);
        let dilated = mask.dilate3();
        let painter = TilePainter::new(&mask, TileStyle::Emboss);
        let tile = painter.tile_for_row(0);

        let mut shadow_pixels = 0;
        for (x, y, pixel) in tile.enumerate_pixels() {
            if pixel == &Rgba([8, 8, 12, 255]) {
                shadow_pixels += 1;
                // Shadow shows only outside the base silhouette
                assert_eq!(mask.alpha(x, y), 0, "shadow inside base at ({x}, {y})");
                // and only where the dilated mask, shifted by (2,2), covers
                let src_x = x.checked_sub(2);
                let src_y = y.checked_sub(2);
                let covered = match (src_x, src_y) {
                    (Some(sx), Some(sy)) => dilated.alpha(sx, sy) == 255,
                    _ => false,
                };
                assert!(covered, "shadow beyond the dilated ring at ({x}, {y})");
            }
        }
        assert!(shadow_pixels > 0, "emboss must produce a visible shadow fringe");
    }

    #[test]
    fn test_tinted_accent_scales_endpoints() {
        let mask = square_mask(16, 2);
        let tinted = tinted_accent(&mask, TileStyle::Gradient, [200, 100, 50]);
        let top = tinted.get_pixel(8, 2).0[0];
        let bottom = tinted.get_pixel(8, 13).0[0];
        // Endpoints are 0.92x and 0.70x of the requested red channel
        assert!(top <= 184);
        assert!(bottom >= 140);
        assert!(top > bottom);
    }
}
