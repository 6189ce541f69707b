//! Performance measurement for hole isolation and field placement

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use image::{Rgba, RgbaImage};
use std::hint::black_box;
use wallweave::compose::grid::{GridLayout, place_grid};
use wallweave::compose::hole::find_enclosed_region;
use wallweave::compose::mask::AlphaMask;
use wallweave::compose::style::{TilePainter, TileStyle};

fn ring_mask(size: u32) -> AlphaMask {
    let mut image = RgbaImage::new(size, size);
    let center = f64::from(size) / 2.0;
    let outer = f64::from(size) * 0.4;
    let inner = f64::from(size) * 0.2;
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let distance = (f64::from(x) - center).hypot(f64::from(y) - center);
        if distance <= outer && distance >= inner {
            *pixel = Rgba([0, 0, 0, 255]);
        }
    }
    AlphaMask::from_rgba(&image)
}

/// Measures flood-fill cost as the emblem raster grows
fn bench_hole_isolation(c: &mut Criterion) {
    let mut group = c.benchmark_group("hole_isolation");

    for size in &[128_u32, 256, 512] {
        let mask = ring_mask(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(find_enclosed_region(black_box(&mask))));
        });
    }

    group.finish();
}

/// Measures simple grid placement over a phone-sized canvas
fn bench_grid_placement(c: &mut Criterion) {
    let emblem = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 0, 255]));
    let painter = TilePainter::new(&AlphaMask::from_rgba(&emblem), TileStyle::Glossmix);
    let layout = GridLayout {
        anchor_x: 490,
        anchor_y: 1150,
        x_step: 160,
        y_step: 160,
        scale_variance: None,
        loose_weave: None,
    };

    c.bench_function("grid_placement_1080x2400", |b| {
        b.iter(|| {
            let mut canvas = RgbaImage::from_pixel(1080, 2400, Rgba([0, 0, 0, 255]));
            let pasted = place_grid(&mut canvas, &painter, &layout);
            black_box(pasted).ok()
        });
    });
}

criterion_group!(benches, bench_hole_isolation, bench_grid_placement);
criterion_main!(benches);
