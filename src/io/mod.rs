//! Input/output operations and error handling
//!
//! This module contains the crate's outer surface:
//! - Command-line interface and job orchestration
//! - Default constants for every configurable knob
//! - Accent color and device resolution parsing
//! - PNG export and progress reporting

/// Command-line interface and wallpaper job orchestration
pub mod cli;
/// Accent color parsing with presets and fallback
pub mod color;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Device codename to portrait resolution lookup
pub mod device;
/// Error types for wallpaper generation
pub mod error;
/// Flattened PNG export for the finished canvas
pub mod export;
/// Stage progress reporting
pub mod progress;
