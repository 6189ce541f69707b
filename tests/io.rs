//! Validates the configuration surface: color parsing, device lookup,
//! CLI defaults, and PNG export

use clap::Parser;
use image::RgbImage;
use wallweave::compose::style::TileStyle;
use wallweave::io::cli::Cli;
use wallweave::io::color::{parse_accent_color, parse_hex_rgb};
use wallweave::io::device::resolution_for;
use wallweave::io::export::export_wallpaper_as_png;

#[test]
fn test_accent_color_grammar() {
    assert_eq!(parse_accent_color("#1f1f1f"), Some([31, 31, 31]));
    assert_eq!(parse_accent_color("200,10,10"), Some([200, 10, 10]));
    assert_eq!(parse_accent_color("bogus"), Some([160, 140, 60]));
    assert_eq!(parse_accent_color("none"), None);
}

#[test]
fn test_device_lookup_overrides_resolution() {
    assert_eq!(resolution_for("husky").ok(), Some((1344, 2992)));
    assert_eq!(resolution_for("cheetah").ok(), Some((1440, 3120)));
    assert!(resolution_for("unknown-codename").is_err());
}

#[test]
fn test_cli_defaults_match_the_documented_configuration() {
    let Ok(cli) = Cli::try_parse_from(["wallweave", "--out", "wall.png"]) else {
        unreachable!("minimal arguments must parse");
    };
    assert_eq!(cli.width, 1344);
    assert_eq!(cli.height, 2992);
    assert_eq!(cli.logo_px, 200);
    assert!((cli.spacing - 1.6).abs() < f64::EPSILON);
    assert_eq!(cli.style, TileStyle::Gradient);
    assert!(!cli.weave);
    assert!(!cli.no_tessellate);
    assert!(!cli.fp_mode);
    assert_eq!(cli.accent_color, "gold");
    assert_eq!(cli.fp_center_rgb, "#1f1f1f");
    assert!((cli.fp_anchor - 0.718).abs() < f64::EPSILON);
    assert!((cli.fp_scale - 2.25).abs() < f64::EPSILON);
}

#[test]
fn test_cli_rejects_unknown_style() {
    let parsed = Cli::try_parse_from(["wallweave", "--out", "wall.png", "--style", "chrome"]);
    assert!(parsed.is_err(), "unknown style names must fail fast");
}

#[test]
fn test_strict_hex_is_validated_up_front() {
    assert!(parse_hex_rgb("#0a0b0c").is_ok());
    assert!(parse_hex_rgb("not-a-color").is_err());
}

#[test]
fn test_export_writes_a_png_and_creates_parent_directories() {
    let Ok(dir) = tempfile::tempdir() else {
        unreachable!("temporary directory creation must succeed");
    };
    let path = dir.path().join("nested/out/wallpaper.png");

    let wallpaper = RgbImage::from_pixel(16, 16, image::Rgb([20, 20, 20]));
    let result = export_wallpaper_as_png(&wallpaper, &path);

    assert!(result.is_ok(), "export should succeed: {result:?}");
    assert!(path.exists(), "exported file should exist on disk");

    let reloaded = image::open(&path).map(|i| i.to_rgb8());
    let Ok(reloaded) = reloaded else {
        unreachable!("exported PNG must decode");
    };
    assert_eq!(reloaded.dimensions(), (16, 16));
    assert_eq!(reloaded.get_pixel(8, 8), &image::Rgb([20, 20, 20]));
}
