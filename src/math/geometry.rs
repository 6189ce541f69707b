//! Integer and angular geometry helpers for grid placement
//!
//! Placement math works in signed pixel space because grid cells extend
//! beyond the canvas on every side; these helpers keep the ceiling
//! divisions and channel arithmetic in one place.

/// Ceiling division for a positive divisor
///
/// Rounds the quotient toward positive infinity, matching the index-range
/// derivation used by the tessellated placer for negative anchors.
pub fn ceil_div(numerator: i64, divisor: i64) -> i64 {
    numerator.div_euclid(divisor) + i64::from(numerator.rem_euclid(divisor) != 0)
}

/// Linear interpolation between two channel values at position `t` in 0..=1
///
/// Truncates toward zero, matching integer gradient ramps.
pub fn lerp_channel(top: u8, bottom: u8, t: f64) -> u8 {
    f64::from(top).mul_add(1.0 - t, f64::from(bottom) * t) as u8
}

/// Scale a channel value by a factor, clamped to the valid range
pub fn scale_channel(value: u8, factor: f64) -> u8 {
    (f64::from(value) * factor).clamp(0.0, 255.0) as u8
}

/// Bounding box of a `width`×`height` rectangle rotated by `degrees`
///
/// Used when a rotated tile must not be clipped to its original footprint.
pub fn rotated_bounds(width: u32, height: u32, degrees: f32) -> (u32, u32) {
    let radians = f64::from(degrees).to_radians();
    let (sin, cos) = (radians.sin().abs(), radians.cos().abs());
    let w = f64::from(width);
    let h = f64::from(height);
    let out_w = w.mul_add(cos, h * sin).ceil() as u32;
    let out_h = w.mul_add(sin, h * cos).ceil() as u32;
    (out_w.max(1), out_h.max(1))
}
