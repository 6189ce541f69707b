//! Canvas compositor and wallpaper configuration
//!
//! The compositor owns the canvas and is the only component that mutates
//! it, in fixed back-to-front order: solid background, tiled field, accent.
//! Every other component hands it standalone images to paste.

use crate::compose::accent::{AccentSpec, build_accent};
use crate::compose::grid::{GridLayout, ScaleVariance, place_grid};
use crate::compose::mask::AlphaMask;
use crate::compose::style::{TilePainter, TileStyle};
use crate::compose::weave::place_weave;
use crate::io::color::{GOLD, Rgb, parse_accent_color};
use crate::io::configuration::{
    BACKGROUND_RGB, DEFAULT_ACCENT_COLOR, DEFAULT_ACCENT_SCALE, DEFAULT_ACCENT_X,
    DEFAULT_ACCENT_Y, DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FP_ANCHOR_RATIO,
    DEFAULT_FP_SCALE, DEFAULT_LOGO_PX, DEFAULT_SCALE_EVERY, DEFAULT_SCALE_FACTOR,
    DEFAULT_SPACING, DEFAULT_WEAVE_DEG, NEUTRAL_ACCENT_RGB,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::StageReporter;
use crate::raster::Rasterize;
use image::{DynamicImage, Rgba, RgbImage, RgbaImage, imageops};

/// Full configuration for one wallpaper render
// Each layout mode and override is an independent toggle
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct WallpaperConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Emblem render size for field tiles in pixels
    pub logo_px: u32,
    /// Spacing multiplier between grid cells (non-tessellated)
    pub spacing: f64,
    /// Tile fill style, shared by the field and the accent outline
    pub style: TileStyle,
    /// Rotate tiles for a woven texture
    pub weave: bool,
    /// Weave rotation in degrees
    pub weave_deg: f32,
    /// Use the padded, seamless tessellation when weaving
    pub tessellate: bool,
    /// Periodically resize rows of tiles
    pub scalevar: bool,
    /// Apply scale variance every N rows
    pub scale_every: i64,
    /// Scale variance resize factor
    pub scale_factor: f64,
    /// Accent color specification (preset, hex, or comma triplet)
    pub accent_color: String,
    /// Accent center x as a fraction of canvas width
    pub accent_x: f64,
    /// Accent center y as a fraction of canvas height
    pub accent_y: f64,
    /// Accent size as a multiple of the emblem render size
    pub accent_scale: f64,
    /// Override accent placement/scale and fill the interior hole
    pub fp_mode: bool,
    /// Interior hole fill color for FP mode
    pub fp_center_rgb: Rgb,
    /// FP anchor position from the top as a fraction of height
    pub fp_anchor_ratio: f64,
    /// FP accent scale relative to the emblem render size
    pub fp_scale: f64,
}

impl Default for WallpaperConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CANVAS_WIDTH,
            height: DEFAULT_CANVAS_HEIGHT,
            logo_px: DEFAULT_LOGO_PX,
            spacing: DEFAULT_SPACING,
            style: TileStyle::Gradient,
            weave: false,
            weave_deg: DEFAULT_WEAVE_DEG,
            tessellate: true,
            scalevar: false,
            scale_every: DEFAULT_SCALE_EVERY,
            scale_factor: DEFAULT_SCALE_FACTOR,
            accent_color: DEFAULT_ACCENT_COLOR.to_string(),
            accent_x: DEFAULT_ACCENT_X,
            accent_y: DEFAULT_ACCENT_Y,
            accent_scale: DEFAULT_ACCENT_SCALE,
            fp_mode: false,
            fp_center_rgb: [31, 31, 31],
            fp_anchor_ratio: DEFAULT_FP_ANCHOR_RATIO,
            fp_scale: DEFAULT_FP_SCALE,
        }
    }
}

impl WallpaperConfig {
    /// Validate every parameter that could degenerate the pipeline
    ///
    /// # Errors
    ///
    /// Returns an invalid-parameter error for zero dimensions, a zero
    /// emblem size, non-positive spacing or scales, or a non-positive
    /// scale-variance period.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{}x{}", self.width, self.height),
                &"canvas dimensions must be positive",
            ));
        }
        if self.logo_px == 0 {
            return Err(invalid_parameter(
                "logo_px",
                &self.logo_px,
                &"emblem render size must be positive",
            ));
        }
        if !(self.spacing.is_finite() && self.spacing > 0.0) {
            return Err(invalid_parameter(
                "spacing",
                &self.spacing,
                &"spacing multiplier must be positive",
            ));
        }
        if self.scalevar && self.scale_every <= 0 {
            return Err(invalid_parameter(
                "scale_every",
                &self.scale_every,
                &"scale variance period must be positive",
            ));
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(invalid_parameter(
                "scale_factor",
                &self.scale_factor,
                &"scale variance factor must be positive",
            ));
        }
        let accent_scale = if self.fp_mode {
            self.fp_scale
        } else {
            self.accent_scale
        };
        if !(accent_scale.is_finite() && accent_scale > 0.0) {
            return Err(invalid_parameter(
                "accent_scale",
                &accent_scale,
                &"accent scale must be positive",
            ));
        }
        Ok(())
    }

    // Accent center and render size, after FP overrides
    fn accent_geometry(&self) -> (i64, i64, u32) {
        if self.fp_mode {
            let center_x = i64::from(self.width / 2);
            let center_y = (f64::from(self.height) * self.fp_anchor_ratio) as i64;
            let size = (f64::from(self.logo_px) * self.fp_scale) as u32;
            (center_x, center_y, size)
        } else {
            let center_x = (f64::from(self.width) * self.accent_x) as i64;
            let center_y = (f64::from(self.height) * self.accent_y) as i64;
            let size = (f64::from(self.logo_px) * self.accent_scale) as u32;
            (center_x, center_y, size)
        }
    }

    // Accent coloring, after FP overrides
    fn accent_spec(&self) -> AccentSpec {
        let parsed = parse_accent_color(&self.accent_color);
        if self.fp_mode {
            AccentSpec {
                style: Some(self.style),
                outline_rgb: parsed.unwrap_or(GOLD),
                center_fill: Some(self.fp_center_rgb),
            }
        } else {
            AccentSpec {
                style: Some(self.style),
                outline_rgb: parsed.unwrap_or(NEUTRAL_ACCENT_RGB),
                center_fill: None,
            }
        }
    }
}

/// Render a complete wallpaper
///
/// Paint order is fixed: solid background, then the tiled field through
/// one of the two placers, then the accent centered on its anchor. The
/// result is flattened to RGB.
///
/// # Errors
///
/// Returns an error for invalid configuration, emblem load/parse failures,
/// or raster surface allocation failures.
pub fn render_wallpaper<R: Rasterize>(
    rasterizer: &R,
    config: &WallpaperConfig,
    reporter: &StageReporter,
) -> Result<RgbImage> {
    config.validate()?;

    reporter.stage("rasterizing emblem");
    let emblem = rasterizer.rasterize(config.logo_px)?;
    let mask = AlphaMask::from_rgba(&emblem);
    let painter = TilePainter::new(&mask, config.style);
    let (tile_w, tile_h) = painter.dimensions();

    let (accent_cx, accent_cy, accent_size) = config.accent_geometry();

    let background = Rgba([BACKGROUND_RGB[0], BACKGROUND_RGB[1], BACKGROUND_RGB[2], 255]);
    let mut canvas = RgbaImage::from_pixel(config.width, config.height, background);

    reporter.stage("placing field tiles");
    let pasted = if config.weave && config.tessellate {
        place_weave(
            &mut canvas,
            &painter,
            (accent_cx, accent_cy),
            config.logo_px,
            config.weave_deg,
        )?
    } else {
        let layout = GridLayout {
            anchor_x: accent_cx - i64::from(tile_w / 2),
            anchor_y: accent_cy - i64::from(tile_h / 2),
            x_step: (f64::from(tile_w) * config.spacing).round() as i64,
            y_step: (f64::from(tile_h) * config.spacing).round() as i64,
            scale_variance: config.scalevar.then_some(ScaleVariance {
                every: config.scale_every,
                factor: config.scale_factor,
            }),
            loose_weave: config.weave.then_some(config.weave_deg),
        };
        place_grid(&mut canvas, &painter, &layout)?
    };
    reporter.stage(&format!("placed {pasted} field tiles"));

    reporter.stage("building accent");
    let accent_raster = rasterizer.rasterize(accent_size)?;
    let accent = build_accent(&accent_raster, &config.accent_spec());
    let accent_x = accent_cx - i64::from(accent.width() / 2);
    let accent_y = accent_cy - i64::from(accent.height() / 2);
    imageops::overlay(&mut canvas, &accent, accent_x, accent_y);

    Ok(DynamicImage::ImageRgba8(canvas).to_rgb8())
}
