//! Command-line interface and wallpaper job orchestration

use crate::compose::canvas::{WallpaperConfig, render_wallpaper};
use crate::compose::style::TileStyle;
use crate::io::color::parse_hex_rgb;
use crate::io::configuration::{
    DEFAULT_ACCENT_COLOR, DEFAULT_ACCENT_SCALE, DEFAULT_ACCENT_X, DEFAULT_ACCENT_Y,
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_FP_ANCHOR_RATIO, DEFAULT_FP_CENTER_HEX,
    DEFAULT_FP_SCALE, DEFAULT_LOGO_PX, DEFAULT_SCALE_EVERY, DEFAULT_SCALE_FACTOR, DEFAULT_SPACING,
    DEFAULT_WEAVE_DEG,
};
use crate::io::device::resolution_for;
use crate::io::error::Result;
use crate::io::export::export_wallpaper_as_png;
use crate::io::progress::StageReporter;
use crate::raster::EmblemSource;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "wallweave")]
#[command(
    version,
    about = "Generate tiled emblem wallpapers with weave tessellation"
)]
/// Command-line arguments for the wallpaper generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Output PNG path
    #[arg(long)]
    pub out: PathBuf,

    /// Alternate emblem SVG path (omit to use the embedded emblem)
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_WIDTH)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_CANVAS_HEIGHT)]
    pub height: u32,

    /// Device codename (e.g. komodo, caiman, tokay); overrides width/height
    #[arg(long)]
    pub device: Option<String>,

    /// Emblem render size in pixels
    #[arg(long, default_value_t = DEFAULT_LOGO_PX)]
    pub logo_px: u32,

    /// Spacing multiplier between grid cells (non-tessellated)
    #[arg(long, default_value_t = DEFAULT_SPACING)]
    pub spacing: f64,

    /// Tile fill style
    #[arg(long, value_enum, default_value = "gradient")]
    pub style: TileStyle,

    /// Enable diagonal weave rotation
    #[arg(long)]
    pub weave: bool,

    /// Weave rotation in degrees
    #[arg(long, default_value_t = DEFAULT_WEAVE_DEG)]
    pub weave_deg: f32,

    /// Use expanded per-tile rotation instead of the seamless tessellation
    /// when weaving
    #[arg(long)]
    pub no_tessellate: bool,

    /// Enable periodic scale variance
    #[arg(long)]
    pub scalevar: bool,

    /// Apply scale variance every N rows
    #[arg(long, default_value_t = DEFAULT_SCALE_EVERY)]
    pub scale_every: i64,

    /// Scale factor for scale variance
    #[arg(long, default_value_t = DEFAULT_SCALE_FACTOR)]
    pub scale_factor: f64,

    /// Accent color preset or custom value (#RRGGBB or R,G,B)
    #[arg(long, default_value = DEFAULT_ACCENT_COLOR)]
    pub accent_color: String,

    /// Accent center X as a fraction of width (0..1)
    #[arg(long, default_value_t = DEFAULT_ACCENT_X)]
    pub accent_x: f64,

    /// Accent center Y as a fraction of height (0..1)
    #[arg(long, default_value_t = DEFAULT_ACCENT_Y)]
    pub accent_y: f64,

    /// Accent size as a multiple of the emblem render size
    #[arg(long, default_value_t = DEFAULT_ACCENT_SCALE)]
    pub accent_scale: f64,

    /// Override accent position/scale to the FP anchor and fill the
    /// interior cut-out
    #[arg(long)]
    pub fp_mode: bool,

    /// FP interior fill color in hex
    #[arg(long, default_value = DEFAULT_FP_CENTER_HEX)]
    pub fp_center_rgb: String,

    /// FP anchor position from the top (fraction of height)
    #[arg(long, default_value_t = DEFAULT_FP_ANCHOR_RATIO)]
    pub fp_anchor: f64,

    /// FP accent scale relative to the emblem render size
    #[arg(long, default_value_t = DEFAULT_FP_SCALE)]
    pub fp_scale: f64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs one wallpaper render from parsed arguments
pub struct WallpaperJob {
    cli: Cli,
}

impl WallpaperJob {
    /// Create a job from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Resolve the configuration, render, and export
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration (unknown device, bad
    /// strict hex, degenerate dimensions), emblem load/parse failures, or
    /// export failures. No output file is written on error.
    pub fn run(&self) -> Result<()> {
        let reporter = StageReporter::new(self.cli.quiet);

        let (width, height) = self
            .cli
            .device
            .as_deref()
            .map_or(Ok((self.cli.width, self.cli.height)), resolution_for)?;

        let config = WallpaperConfig {
            width,
            height,
            logo_px: self.cli.logo_px,
            spacing: self.cli.spacing,
            style: self.cli.style,
            weave: self.cli.weave,
            weave_deg: self.cli.weave_deg,
            tessellate: !self.cli.no_tessellate,
            scalevar: self.cli.scalevar,
            scale_every: self.cli.scale_every,
            scale_factor: self.cli.scale_factor,
            accent_color: self.cli.accent_color.clone(),
            accent_x: self.cli.accent_x,
            accent_y: self.cli.accent_y,
            accent_scale: self.cli.accent_scale,
            fp_mode: self.cli.fp_mode,
            fp_center_rgb: parse_hex_rgb(&self.cli.fp_center_rgb)?,
            fp_anchor_ratio: self.cli.fp_anchor,
            fp_scale: self.cli.fp_scale,
        };

        let source = self
            .cli
            .svg
            .clone()
            .map_or(EmblemSource::Embedded, EmblemSource::File);

        let wallpaper = render_wallpaper(&source, &config, &reporter)?;

        reporter.stage("exporting wallpaper");
        export_wallpaper_as_png(&wallpaper, &self.cli.out)?;
        reporter.finish(&format!("wrote {}", self.cli.out.display()));

        Ok(())
    }
}
