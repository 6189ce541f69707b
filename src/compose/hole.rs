//! Enclosed background region isolation
//!
//! Finds the transparent region inside the emblem (the cut-out the accent
//! recolors) by flood filling from a seed near the geometric center. The
//! fill traverses only fully transparent pixels, so it cannot cross the
//! silhouette.
//!
//! Precondition: the silhouette must fully enclose its hole. A hole that
//! reaches the mask's bounding box lets the fill escape into the exterior
//! background, which then gets marked as interior.

use crate::compose::mask::AlphaMask;
use crate::io::configuration::{MAX_SEED_CANDIDATES, SEED_RING_STEP};
use bitvec::bitvec;
use bitvec::prelude::BitVec;
use ndarray::Array2;
use std::collections::VecDeque;

/// Single-channel region mask, 255 where the region was reached
pub type RegionMask = Array2<u8>;

// Candidate seeds: the center first, then cardinal rings at increasing
// radii to tolerate emblems whose exact center lies on a stroke.
fn seed_candidates(width: u32, height: u32) -> Vec<(i64, i64)> {
    let cx = i64::from(width / 2);
    let cy = i64::from(height / 2);
    let mut candidates = vec![(cx, cy)];

    let radius_cap = i64::from(width.min(height) / 6);
    let mut radius = 1_i64;
    while radius < radius_cap && candidates.len() <= MAX_SEED_CANDIDATES {
        candidates.extend([
            (cx + radius, cy),
            (cx - radius, cy),
            (cx, cy + radius),
            (cx, cy - radius),
        ]);
        radius += i64::from(SEED_RING_STEP);
    }

    candidates
}

/// Isolate the enclosed background region of an alpha mask
///
/// Returns a mask of the same dimensions with 255 marking every pixel
/// reachable from the seed by 4-connected traversal through fully
/// transparent (alpha == 0) pixels. When no transparent seed exists within
/// the search radius the result is all zero — a shape without an interior
/// hole is valid input, not an error.
pub fn find_enclosed_region(mask: &AlphaMask) -> RegionMask {
    let (width, height) = (mask.width(), mask.height());
    let mut region = Array2::zeros((height as usize, width as usize));

    let seed = seed_candidates(width, height).into_iter().find(|&(x, y)| {
        x >= 0
            && y >= 0
            && x < i64::from(width)
            && y < i64::from(height)
            && mask.alpha(x as u32, y as u32) == 0
    });
    let Some((seed_x, seed_y)) = seed else {
        return region;
    };

    let mut visited: BitVec = bitvec![0; (width as usize) * (height as usize)];
    let mut queue = VecDeque::new();

    let index = |x: u32, y: u32| y as usize * width as usize + x as usize;

    queue.push_back((seed_x as u32, seed_y as u32));
    visited.set(index(seed_x as u32, seed_y as u32), true);

    while let Some((x, y)) = queue.pop_front() {
        if let Some(cell) = region.get_mut([y as usize, x as usize]) {
            *cell = 255;
        }

        let neighbors = [
            (i64::from(x) + 1, i64::from(y)),
            (i64::from(x) - 1, i64::from(y)),
            (i64::from(x), i64::from(y) + 1),
            (i64::from(x), i64::from(y) - 1),
        ];
        for (nx, ny) in neighbors {
            if nx < 0 || ny < 0 || nx >= i64::from(width) || ny >= i64::from(height) {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let already_seen = visited.get(index(nx, ny)).as_deref() == Some(&true);
            if already_seen || mask.alpha(nx, ny) != 0 {
                continue;
            }
            visited.set(index(nx, ny), true);
            queue.push_back((nx, ny));
        }
    }

    region
}
