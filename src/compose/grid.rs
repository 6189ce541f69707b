//! Simple axis-aligned grid placement
//!
//! Repeats the styled tile on a fixed-step grid anchored at the accent
//! position. The iteration range pads far beyond the canvas so the field
//! stays seamless no matter where the anchor lands; off-canvas tiles are
//! skipped with a cheap bounds test before pasting.

use crate::compose::style::TilePainter;
use crate::io::configuration::GRID_PAD_STEPS;
use crate::io::error::{Result, invalid_parameter};
use crate::raster::transform::rotate_rgba;
use image::{RgbaImage, imageops};
use std::borrow::Cow;

/// Periodic scale variance applied to selected rows
#[derive(Debug, Clone, Copy)]
pub struct ScaleVariance {
    /// Apply the factor to every N-th row
    pub every: i64,
    /// Resize factor for affected rows
    pub factor: f64,
}

/// Placement parameters for the simple grid
#[derive(Debug, Clone, Copy)]
pub struct GridLayout {
    /// Top-left x of the logical (0,0) cell in canvas space
    pub anchor_x: i64,
    /// Top-left y of the logical (0,0) cell in canvas space
    pub anchor_y: i64,
    /// Horizontal step between cells in pixels
    pub x_step: i64,
    /// Vertical step between cells in pixels
    pub y_step: i64,
    /// Optional periodic scale variance
    pub scale_variance: Option<ScaleVariance>,
    /// Optional loose weave rotation in degrees
    ///
    /// Rotated tiles expand to their rotated bounding box and may overlap
    /// neighbors; this mode is intentionally not seamless.
    pub loose_weave: Option<f32>,
}

/// Repeat the styled tile across the canvas on an axis-aligned grid
///
/// The logical (0,0) cell is never painted; it is reserved for the accent,
/// which the compositor paints later on top. Returns the number of tiles
/// pasted.
///
/// # Errors
///
/// Returns an error if the step sizes are not positive or a rotation
/// surface cannot be allocated.
pub fn place_grid(
    canvas: &mut RgbaImage,
    painter: &TilePainter,
    layout: &GridLayout,
) -> Result<usize> {
    if layout.x_step <= 0 || layout.y_step <= 0 {
        return Err(invalid_parameter(
            "step",
            &format!("{}x{}", layout.x_step, layout.y_step),
            &"grid steps must be positive",
        ));
    }

    let canvas_w = i64::from(canvas.width());
    let canvas_h = i64::from(canvas.height());
    let mut pasted = 0_usize;

    let mut dy = -(layout.y_step * GRID_PAD_STEPS);
    while dy < canvas_h + layout.y_step * GRID_PAD_STEPS {
        let mut dx = -(layout.x_step * GRID_PAD_STEPS);
        while dx < canvas_w + layout.x_step * GRID_PAD_STEPS {
            if dx == 0 && dy == 0 {
                dx += layout.x_step;
                continue;
            }

            let row_index = dy / layout.y_step;
            let mut tile = Cow::Borrowed(painter.tile_for_row(row_index));

            if let Some(variance) = layout.scale_variance
                && variance.every > 0
                && row_index.unsigned_abs() % variance.every.unsigned_abs() == 0
            {
                let new_w = ((f64::from(tile.width()) * variance.factor) as u32).max(1);
                let new_h = ((f64::from(tile.height()) * variance.factor) as u32).max(1);
                tile = Cow::Owned(imageops::resize(
                    tile.as_ref(),
                    new_w,
                    new_h,
                    imageops::FilterType::CatmullRom,
                ));
            }

            if let Some(degrees) = layout.loose_weave {
                let parity = (dx / layout.x_step + dy / layout.y_step).rem_euclid(2);
                let angle = if parity == 0 { degrees } else { -degrees };
                tile = Cow::Owned(rotate_rgba(tile.as_ref(), angle, true)?);
            }

            let x = layout.anchor_x + dx;
            let y = layout.anchor_y + dy;
            let on_canvas = x < canvas_w
                && y < canvas_h
                && x + i64::from(tile.width()) > 0
                && y + i64::from(tile.height()) > 0;
            if on_canvas {
                imageops::overlay(canvas, tile.as_ref(), x, y);
                pasted += 1;
            }

            dx += layout.x_step;
        }
        dy += layout.y_step;
    }

    Ok(pasted)
}

#[cfg(test)]
mod tests {
    use super::{GridLayout, place_grid};
    use crate::compose::mask::AlphaMask;
    use crate::compose::style::{TilePainter, TileStyle};
    use image::{Rgba, RgbaImage};

    fn solid_painter(size: u32) -> TilePainter {
        let emblem = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 255]));
        TilePainter::new(&AlphaMask::from_rgba(&emblem), TileStyle::Gradient)
    }

    #[test]
    fn test_center_anchor_covers_canvas_and_skips_origin_cell() {
        let painter = solid_painter(100);
        let mut canvas = RgbaImage::from_pixel(1000, 1000, Rgba([255, 0, 0, 255]));
        let layout = GridLayout {
            anchor_x: 450,
            anchor_y: 450,
            x_step: 100,
            y_step: 100,
            scale_variance: None,
            loose_weave: None,
        };

        let Ok(pasted) = place_grid(&mut canvas, &painter, &layout) else {
            unreachable!("valid layout cannot fail");
        };
        assert!(pasted >= 81, "expected at least a 9x9 neighborhood, got {pasted}");

        // The (0,0) cell footprint is untouched background
        assert_eq!(canvas.get_pixel(500, 500), &Rgba([255, 0, 0, 255]));
        // A neighboring cell is covered by the tile fill
        assert_ne!(canvas.get_pixel(600, 500), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_loose_weave_rotates_with_expansion() {
        let painter = solid_painter(40);
        let mut canvas = RgbaImage::from_pixel(300, 300, Rgba([255, 0, 0, 255]));
        let layout = GridLayout {
            anchor_x: 130,
            anchor_y: 130,
            x_step: 64,
            y_step: 64,
            scale_variance: None,
            loose_weave: Some(15.0),
        };

        let Ok(pasted) = place_grid(&mut canvas, &painter, &layout) else {
            unreachable!("valid layout cannot fail");
        };
        assert!(pasted > 0);
        // Expanded rotated tiles overlap into the skipped origin cell, so
        // only the anchor's central area is guaranteed untouched
        assert_eq!(canvas.get_pixel(150, 150), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_scale_variance_keeps_the_paste_count() {
        let painter = solid_painter(20);
        let layout = GridLayout {
            anchor_x: 90,
            anchor_y: 90,
            x_step: 40,
            y_step: 40,
            scale_variance: None,
            loose_weave: None,
        };
        let scaled_layout = GridLayout {
            scale_variance: Some(super::ScaleVariance {
                every: 2,
                factor: 1.5,
            }),
            ..layout
        };

        let mut plain_canvas = RgbaImage::new(200, 200);
        let mut scaled_canvas = RgbaImage::new(200, 200);
        let plain = place_grid(&mut plain_canvas, &painter, &layout);
        let scaled = place_grid(&mut scaled_canvas, &painter, &scaled_layout);
        // Resizing anchors at the unchanged top-left, so cell visibility
        // and counts match the unscaled grid
        assert_eq!(plain.ok(), scaled.ok());
    }

    #[test]
    fn test_zero_step_is_rejected() {
        let painter = solid_painter(10);
        let mut canvas = RgbaImage::new(50, 50);
        let layout = GridLayout {
            anchor_x: 0,
            anchor_y: 0,
            x_step: 0,
            y_step: 10,
            scale_variance: None,
            loose_weave: None,
        };
        assert!(place_grid(&mut canvas, &painter, &layout).is_err());
    }
}
