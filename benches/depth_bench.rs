use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use depthmap::depth::{self, DepthBuffer};
use depthmap::image;
use depthmap::orientation::ImageOrientation;
use std::hint::black_box;

/// Disparity maps from dual cameras are typically 640x480 or smaller
const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

fn synthetic_depth_map() -> DepthBuffer {
    let samples = (0..WIDTH * HEIGHT)
        .map(|i| {
            let x = (i % WIDTH) as f32;
            let y = (i / WIDTH) as f32;
            0.5 + (x * 0.01).sin() * (y * 0.02).cos()
        })
        .collect();
    DepthBuffer::new(WIDTH, HEIGHT, samples).unwrap()
}

// ============================================================================
// TIER 1: CORE NORMALIZATION (Primary Baseline)
// ============================================================================

/// Both passes over a fresh copy of the map
fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let buffer = synthetic_depth_map();

    group.bench_function("640x480", |b| {
        b.iter_batched(
            || buffer.clone(),
            |mut buffer| black_box(depth::normalize(black_box(&mut buffer))),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

/// Extrema pass alone
fn bench_find_min_max(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_min_max");
    let buffer = synthetic_depth_map();

    group.bench_function("640x480", |b| {
        b.iter(|| depth::find_min_max(black_box(buffer.samples())));
    });

    group.finish();
}

// ============================================================================
// TIER 2: FULL FRAME PIPELINE (Diagnostic)
// ============================================================================

/// Normalize plus rotation into the portrait presentation
fn bench_depth_image_portrait(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_image");
    let buffer = synthetic_depth_map();

    group.bench_function("portrait_640x480", |b| {
        b.iter_batched(
            || buffer.clone(),
            |buffer| image::depth_image(black_box(buffer), ImageOrientation::Right).unwrap(),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalize,
    bench_find_min_max,
    bench_depth_image_portrait,
);

criterion_main!(benches);
