//! Pixmap conversion and arbitrary-angle rotation
//!
//! Rotation renders the source through a rotated transform into a fresh
//! surface instead of resampling in place, so repeated placements reuse the
//! same prerotated raster.

use crate::io::error::{Result, raster_allocation};
use crate::math::geometry::rotated_bounds;
use image::{Rgba, RgbaImage};
use tiny_skia::{ColorU8, FilterQuality, Pixmap, PixmapPaint, Transform};

/// Convert a straight-alpha RGBA image into a premultiplied pixmap
///
/// # Errors
///
/// Returns an error if the surface cannot be allocated.
pub fn pixmap_from_rgba(image: &RgbaImage) -> Result<Pixmap> {
    let (width, height) = image.dimensions();
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| raster_allocation(width, height))?;

    for (target, source) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let Rgba([r, g, b, a]) = *source;
        *target = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Ok(pixmap)
}

/// Convert a premultiplied pixmap back into a straight-alpha RGBA image
pub fn rgba_from_pixmap(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());

    for (target, source) in image.pixels_mut().zip(pixmap.pixels().iter()) {
        let color = source.demultiply();
        *target = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }

    image
}

/// Rotate an RGBA image by `degrees` about its center with bicubic filtering
///
/// With `expand` the output grows to the rotated bounding box so no corner
/// is clipped; otherwise the output keeps the source dimensions and
/// rotation bleed is cut off at the original edges.
///
/// # Errors
///
/// Returns an error if a working surface cannot be allocated.
pub fn rotate_rgba(image: &RgbaImage, degrees: f32, expand: bool) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let (out_width, out_height) = if expand {
        rotated_bounds(width, height, degrees)
    } else {
        (width, height)
    };

    let source = pixmap_from_rgba(image)?;
    let mut target =
        Pixmap::new(out_width, out_height).ok_or_else(|| raster_allocation(out_width, out_height))?;

    // Rotate about the source center, then recenter into the target surface
    let recenter_x = (f64::from(out_width) - f64::from(width)) as f32 / 2.0;
    let recenter_y = (f64::from(out_height) - f64::from(height)) as f32 / 2.0;
    let transform = Transform::from_rotate_at(
        degrees,
        width as f32 / 2.0,
        height as f32 / 2.0,
    )
    .post_translate(recenter_x, recenter_y);

    let paint = PixmapPaint {
        quality: FilterQuality::Bicubic,
        ..PixmapPaint::default()
    };
    target.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

    Ok(rgba_from_pixmap(&target))
}

#[cfg(test)]
mod tests {
    use super::{pixmap_from_rgba, rgba_from_pixmap, rotate_rgba};
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_pixmap_round_trip_preserves_opaque_pixels() {
        let mut image = RgbaImage::new(3, 3);
        image.put_pixel(1, 1, Rgba([200, 100, 50, 255]));

        let restored = pixmap_from_rgba(&image).map(|p| rgba_from_pixmap(&p));
        let Ok(restored) = restored else {
            unreachable!("3x3 surface allocation cannot fail");
        };
        assert_eq!(restored.get_pixel(1, 1), &Rgba([200, 100, 50, 255]));
        assert_eq!(restored.get_pixel(0, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn test_rotation_dimensions() {
        let image = RgbaImage::from_pixel(40, 20, Rgba([255, 255, 255, 255]));

        let fixed = rotate_rgba(&image, 3.0, false);
        assert_eq!(fixed.map(|i| i.dimensions()).ok(), Some((40, 20)));

        let expanded = rotate_rgba(&image, 45.0, true);
        let Ok(expanded) = expanded else {
            unreachable!("expanded surface allocation cannot fail");
        };
        let (w, h) = expanded.dimensions();
        assert!(w > 40);
        assert!(h > 20);
    }
}
