//! Single-channel alpha masks
//!
//! A mask is the opacity grid of a rasterized emblem. It is extracted once
//! from the RGBA raster and read-only afterwards; styling and hole
//! isolation both sample it.

use image::RgbaImage;
use ndarray::Array2;

/// Opacity grid of a rasterized shape, indexed `[row, col]`
#[derive(Debug, Clone)]
pub struct AlphaMask {
    data: Array2<u8>,
}

impl AlphaMask {
    /// Extract the alpha channel of an RGBA raster
    pub fn from_rgba(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let mut data = Array2::zeros((height as usize, width as usize));

        for (x, y, pixel) in image.enumerate_pixels() {
            if let Some(cell) = data.get_mut([y as usize, x as usize]) {
                *cell = pixel.0[3];
            }
        }

        Self { data }
    }

    /// Mask width in pixels
    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    /// Mask height in pixels
    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    /// Opacity at `(x, y)`, zero outside the mask bounds
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.data
            .get([y as usize, x as usize])
            .copied()
            .unwrap_or(0)
    }

    /// Dilate by one 3×3 maximum-filter pass
    ///
    /// Grows the silhouette by one pixel in every direction; the emboss
    /// style uses the difference as its drop-shadow fringe.
    pub fn dilate3(&self) -> Self {
        let (rows, cols) = self.data.dim();
        let mut dilated = Array2::zeros((rows, cols));

        for row in 0..rows {
            for col in 0..cols {
                let mut max = 0_u8;
                for dr in 0..3_usize {
                    for dc in 0..3_usize {
                        let Some(r) = (row + dr).checked_sub(1) else {
                            continue;
                        };
                        let Some(c) = (col + dc).checked_sub(1) else {
                            continue;
                        };
                        max = max.max(self.data.get([r, c]).copied().unwrap_or(0));
                    }
                }
                if let Some(cell) = dilated.get_mut([row, col]) {
                    *cell = max;
                }
            }
        }

        Self { data: dilated }
    }
}
