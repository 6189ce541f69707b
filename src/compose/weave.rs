//! Tessellated weave placement
//!
//! The loose weave of the simple grid rotates tiles with bounding-box
//! expansion, which opens gaps between neighbors. This placer instead pads
//! the tile into a larger square cell before rotating, keeps the rotated
//! output at the fixed cell size, and interlocks rows with a half-cell
//! brick offset — edge-to-edge coverage with no seams.

use crate::compose::style::TilePainter;
use crate::io::configuration::WEAVE_PAD_RATIO;
use crate::io::error::{Result, invalid_parameter};
use crate::math::geometry::ceil_div;
use crate::raster::transform::rotate_rgba;
use image::{RgbaImage, imageops};

/// Which of the two prerotated cell images a grid cell uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaveVariant {
    /// Rotated by the positive weave angle
    Positive,
    /// Rotated by the negative weave angle
    Negative,
}

/// Placement parameters for the tessellated weave
#[derive(Debug, Clone, Copy)]
pub struct WeaveLayout {
    /// Top-left x of the logical (0,0) cell in canvas space
    pub anchor_x: i64,
    /// Top-left y of the logical (0,0) cell in canvas space
    pub anchor_y: i64,
    /// Side length of the padded square cell
    pub cell: i64,
}

/// Canvas position of cell `(i, j)`
///
/// Odd rows shift right by half a cell, interlocking with even rows.
pub const fn cell_position(layout: &WeaveLayout, i: i64, j: i64) -> (i64, i64) {
    let mut x = layout.anchor_x + i * layout.cell;
    let y = layout.anchor_y + j * layout.cell;
    if j.rem_euclid(2) != 0 {
        x += layout.cell / 2;
    }
    (x, y)
}

/// Rotation variant of cell `(i, j)`
///
/// Checkerboard parity, so horizontal and vertical neighbors alternate.
pub const fn cell_variant(i: i64, j: i64) -> WeaveVariant {
    if (i + j).rem_euclid(2) == 0 {
        WeaveVariant::Positive
    } else {
        WeaveVariant::Negative
    }
}

/// Pad a tile symmetrically into a transparent square cell
fn pad_tile(tile: &RgbaImage, pad: u32) -> RgbaImage {
    let side = tile.width() + 2 * pad;
    let mut cell = RgbaImage::new(side, side);
    imageops::overlay(&mut cell, tile, i64::from(pad), i64::from(pad));
    cell
}

/// Tile the canvas with the padded, prerotated weave cells
///
/// `accent_center` anchors the grid: cell (0,0) is centered on it, skipped
/// by the placer, and reserved for the accent. `logo_px` drives the pad
/// width that absorbs rotation bleed. Returns the number of cells pasted.
///
/// # Errors
///
/// Returns an error if the base tile is degenerate or a rotation surface
/// cannot be allocated.
pub fn place_weave(
    canvas: &mut RgbaImage,
    painter: &TilePainter,
    accent_center: (i64, i64),
    logo_px: u32,
    weave_deg: f32,
) -> Result<usize> {
    let base_tile = painter.tile_for_row(0);
    if base_tile.width() == 0 || base_tile.height() == 0 {
        return Err(invalid_parameter(
            "tile",
            &"0x0",
            &"weave tiling requires a non-empty tile",
        ));
    }

    let pad = (f64::from(logo_px) * WEAVE_PAD_RATIO).ceil() as u32;
    let padded = pad_tile(base_tile, pad);
    let cell = i64::from(padded.width());

    let positive = rotate_rgba(&padded, weave_deg, false)?;
    let negative = rotate_rgba(&padded, -weave_deg, false)?;

    let layout = WeaveLayout {
        anchor_x: accent_center.0 - cell / 2,
        anchor_y: accent_center.1 - cell / 2,
        cell,
    };

    let canvas_w = i64::from(canvas.width());
    let canvas_h = i64::from(canvas.height());

    // Index ranges wide enough that every on-canvas pixel gets a cell
    let min_i = -ceil_div(layout.anchor_x + cell, cell);
    let max_i = ceil_div(canvas_w - layout.anchor_x, cell);
    let min_j = -ceil_div(layout.anchor_y + cell, cell);
    let max_j = ceil_div(canvas_h - layout.anchor_y, cell);

    let mut pasted = 0_usize;
    for j in min_j..=max_j {
        for i in min_i..=max_i {
            if i == 0 && j == 0 {
                continue;
            }

            let (x, y) = cell_position(&layout, i, j);
            let on_canvas = x < canvas_w && y < canvas_h && x + cell > 0 && y + cell > 0;
            if !on_canvas {
                continue;
            }

            let image = match cell_variant(i, j) {
                WeaveVariant::Positive => &positive,
                WeaveVariant::Negative => &negative,
            };
            imageops::overlay(canvas, image, x, y);
            pasted += 1;
        }
    }

    Ok(pasted)
}
