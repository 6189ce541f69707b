//! Device codename to portrait resolution lookup

use crate::io::error::{Result, WallpaperError};

// Portrait resolutions for supported Pixel devices
const RESOLUTIONS: &[(&str, (u32, u32))] = &[
    // Pixel 9 series
    ("tegu", (1080, 2424)),
    ("comet", (2076, 2152)),
    ("komodo", (1344, 2992)),
    ("caiman", (1280, 2856)),
    ("tokay", (1080, 2424)),
    // Pixel 8 series
    ("akita", (1080, 2400)),
    ("husky", (1344, 2992)),
    ("shiba", (1080, 2400)),
    // Pixel Fold + Tablet
    ("felix", (1840, 2208)),
    ("tangorpro", (1600, 2560)),
    // Pixel 7 series
    ("lynx", (1080, 2400)),
    ("cheetah", (1440, 3120)),
    ("panther", (1080, 2400)),
    // Pixel 6 series
    ("bluejay", (1080, 2400)),
    ("raven", (1440, 3120)),
    ("oriole", (1080, 2400)),
];

/// Resolve a device codename to its portrait resolution in pixels
///
/// Lookup is case-insensitive.
///
/// # Errors
///
/// Returns [`WallpaperError::UnknownDevice`] for codenames outside the
/// supported set.
pub fn resolution_for(codename: &str) -> Result<(u32, u32)> {
    let normalized = codename.to_lowercase();
    RESOLUTIONS
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, resolution)| *resolution)
        .ok_or_else(|| WallpaperError::UnknownDevice {
            codename: codename.to_string(),
        })
}
