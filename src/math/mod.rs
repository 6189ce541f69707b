//! Mathematical utilities for placement and color arithmetic

/// Integer and angular geometry helpers for grid placement
pub mod geometry;
