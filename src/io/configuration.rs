//! Pipeline constants and runtime configuration defaults

// Canvas defaults match the largest supported portrait panel
/// Default canvas width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 1344;
/// Default canvas height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 2992;

/// Default emblem render size in pixels
pub const DEFAULT_LOGO_PX: u32 = 200;

/// Default spacing multiplier between grid cells (non-tessellated)
pub const DEFAULT_SPACING: f64 = 1.6;

/// Default weave rotation in degrees
pub const DEFAULT_WEAVE_DEG: f32 = 3.0;

/// Default period for periodic scale variance (every N rows)
pub const DEFAULT_SCALE_EVERY: i64 = 4;
/// Default factor for periodic scale variance
pub const DEFAULT_SCALE_FACTOR: f64 = 1.2;

/// Default accent color preset
pub const DEFAULT_ACCENT_COLOR: &str = "gold";
/// Default accent center X as a fraction of canvas width
pub const DEFAULT_ACCENT_X: f64 = 0.50;
/// Default accent center Y as a fraction of canvas height
pub const DEFAULT_ACCENT_Y: f64 = 0.20;
/// Default accent size as a multiple of the base emblem size
pub const DEFAULT_ACCENT_SCALE: f64 = 1.0;

/// Default interior fill color for FP mode, as strict hex
pub const DEFAULT_FP_CENTER_HEX: &str = "#1f1f1f";
/// Default FP anchor position from the top as a fraction of height
pub const DEFAULT_FP_ANCHOR_RATIO: f64 = 0.718;
/// Default FP accent scale relative to the base emblem
pub const DEFAULT_FP_SCALE: f64 = 2.25;

// Generous padding so no anchor position leaves a canvas edge uncovered
/// Steps iterated beyond the canvas on every side of the simple grid
pub const GRID_PAD_STEPS: i64 = 50;

/// Tile padding for the tessellated weave as a fraction of the emblem size
pub const WEAVE_PAD_RATIO: f64 = 0.35;

/// Radial step between flood-fill seed candidates in pixels
pub const SEED_RING_STEP: u32 = 3;
/// Cap on collected flood-fill seed candidates
pub const MAX_SEED_CANDIDATES: usize = 50;

/// Solid canvas background color
pub const BACKGROUND_RGB: [u8; 3] = [0, 0, 0];

/// Neutral outline tint used when the accent color is `none`
pub const NEUTRAL_ACCENT_RGB: [u8; 3] = [30, 30, 30];
