//! Accent color parsing with presets and fallback
//!
//! Accent colors are cosmetic, so the relaxed parser degrades to the gold
//! preset instead of failing the run. The strict hex parser is reserved for
//! values where silent substitution would hide a typo.

use crate::io::error::{Result, invalid_parameter};

/// An RGB triplet with 8-bit channels
pub type Rgb = [u8; 3];

/// Gold preset, also the fallback for unrecognized accent strings
pub const GOLD: Rgb = [160, 140, 60];
/// Steel preset
pub const STEEL: Rgb = [70, 70, 70];
/// Red preset
pub const RED: Rgb = [140, 40, 40];

/// Parse an accent color specification
///
/// Accepts preset names (`gold`, `steel`, `red`, `none`), `#RRGGBB` hex,
/// and `R,G,B` comma triplets with components clamped to 0..=255. `none`
/// yields `None` (no explicit accent tint); any unrecognized string falls
/// back to the gold preset.
pub fn parse_accent_color(input: &str) -> Option<Rgb> {
    match input {
        "gold" => return Some(GOLD),
        "steel" => return Some(STEEL),
        "red" => return Some(RED),
        "none" => return None,
        _ => {}
    }

    let trimmed = input.trim();
    if trimmed.starts_with('#')
        && let Ok(rgb) = parse_hex_rgb(trimmed)
    {
        return Some(rgb);
    }
    if let Some(rgb) = parse_comma_triplet(trimmed) {
        return Some(rgb);
    }

    Some(GOLD)
}

/// Parse a strict `#RRGGBB` (or `RRGGBB`) hex color
///
/// # Errors
///
/// Returns an invalid-parameter error when the string is not exactly six
/// hex digits after the optional `#` prefix.
pub fn parse_hex_rgb(input: &str) -> Result<Rgb> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid_parameter(
            "color",
            &input,
            &"expected #RRGGBB with six hex digits",
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| invalid_parameter("color", &input, &"invalid hex digits"))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

fn parse_comma_triplet(input: &str) -> Option<Rgb> {
    let mut parts = input.split(',');
    let mut channels = [0_u8; 3];
    for slot in &mut channels {
        let component = parts.next()?.trim().parse::<i64>().ok()?;
        *slot = component.clamp(0, 255) as u8;
    }
    // Exactly three components
    parts.next().is_none().then_some(channels)
}

#[cfg(test)]
mod tests {
    use super::{GOLD, parse_accent_color, parse_hex_rgb};

    #[test]
    fn test_presets_and_none() {
        assert_eq!(parse_accent_color("gold"), Some([160, 140, 60]));
        assert_eq!(parse_accent_color("steel"), Some([70, 70, 70]));
        assert_eq!(parse_accent_color("red"), Some([140, 40, 40]));
        assert_eq!(parse_accent_color("none"), None);
    }

    #[test]
    fn test_hex_and_triplet_forms() {
        assert_eq!(parse_accent_color("#1f1f1f"), Some([31, 31, 31]));
        assert_eq!(parse_accent_color("200,10,10"), Some([200, 10, 10]));
        assert_eq!(parse_accent_color("300,-5,10"), Some([255, 0, 10]));
    }

    #[test]
    fn test_unrecognized_falls_back_to_gold() {
        assert_eq!(parse_accent_color("bogus"), Some(GOLD));
        assert_eq!(parse_accent_color("#12"), Some(GOLD));
        assert_eq!(parse_accent_color("1,2"), Some(GOLD));
        assert_eq!(parse_accent_color("1,2,3,4"), Some(GOLD));
    }

    #[test]
    fn test_strict_hex_rejects_malformed_input() {
        assert_eq!(parse_hex_rgb("#1f1f1f").ok(), Some([31, 31, 31]));
        assert_eq!(parse_hex_rgb("1f1f1f").ok(), Some([31, 31, 31]));
        assert!(parse_hex_rgb("#1f1f1").is_err());
        assert!(parse_hex_rgb("#gggggg").is_err());
        assert!(parse_hex_rgb("").is_err());
    }
}
