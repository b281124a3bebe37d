// Copyright 2025 the Tumble Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use tumble_sprite::{Collidable, Sprite, Stage, colliding};

fn sprite(x: f64, y: f64, side: f64) -> Sprite {
    Sprite::new(Point::new(x, y), Size::new(side, side))
}

fn rotated_sprite(x: f64, y: f64, side: f64, heading: f64) -> Sprite {
    let mut s = sprite(x, y, side);
    s.set_rotates(true);
    s.pose_mut().set_heading(heading);
    s
}

/// The O(1) oriented-box test, independent of sprite area.
fn bench_oriented(c: &mut Criterion) {
    let mut group = c.benchmark_group("oriented");
    for &side in &[16.0f64, 64.0, 256.0] {
        let a = rotated_sprite(0.0, 0.0, side, 30.0);
        let b = rotated_sprite(side / 2.0, side / 2.0, side, -45.0);
        group.bench_function(format!("overlap_side{}", side as u32), |bench| {
            bench.iter(|| black_box(colliding(black_box(&a), black_box(&b))));
        });
        let far = rotated_sprite(side * 10.0, side * 10.0, side, -45.0);
        group.bench_function(format!("disjoint_side{}", side as u32), |bench| {
            bench.iter(|| black_box(colliding(black_box(&a), black_box(&far))));
        });
    }
    group.finish();
}

/// The O(area) pixel scan for unrotated pairs. Worst case is full overlap
/// with opaque masks that never hit, forcing the scan to completion.
fn bench_pixel_scan(c: &mut Criterion) {
    struct Never;
    impl tumble_sprite::PixelMask for Never {
        fn contains(&self, _pt: Point) -> bool {
            false
        }
    }

    let mut group = c.benchmark_group("pixel_scan");
    for &side in &[16.0f64, 64.0, 256.0] {
        group.throughput(Throughput::Elements((side * side) as u64));
        let a = sprite(0.0, 0.0, side);
        let b = sprite(side / 2.0, side / 2.0, side);
        group.bench_function(format!("first_hit_side{}", side as u32), |bench| {
            bench.iter(|| black_box(colliding(black_box(&a), black_box(&b))));
        });

        let mut opaque_a = sprite(0.0, 0.0, side);
        opaque_a.set_mask(Box::new(Never));
        let mut opaque_b = sprite(0.0, 0.0, side);
        opaque_b.set_mask(Box::new(Never));
        group.bench_function(format!("full_scan_side{}", side as u32), |bench| {
            bench.iter(|| black_box(colliding(black_box(&opaque_a), black_box(&opaque_b))));
        });
    }
    group.finish();
}

fn bench_bounding_box(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounding_box");
    let aligned = sprite(10.0, 10.0, 32.0);
    group.bench_function("aligned", |bench| {
        bench.iter(|| black_box(black_box(&aligned).bounding_box(1.0)));
    });
    let oriented = rotated_sprite(10.0, 10.0, 32.0, 30.0);
    group.bench_function("oriented", |bench| {
        bench.iter(|| black_box(black_box(&oriented).bounding_box(1.0)));
    });
    group.finish();
}

/// A full stage tick plus pairwise collision sweep over n sprites.
fn bench_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("stage");
    for &n in &[16usize, 64, 128] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("tick_and_collisions_n{}", n), |bench| {
            let mut stage = Stage::new(2000.0, 2000.0);
            for i in 0..n {
                let mut s = sprite((i % 40) as f64 * 48.0, (i / 40) as f64 * 48.0, 24.0);
                s.set_speed(3.0);
                s.pose_mut().set_heading(i as f64 * 7.0);
                stage.insert(s);
            }
            bench.iter(|| {
                let damage = stage.tick();
                black_box(&damage);
                black_box(stage.collisions().len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_oriented,
    bench_pixel_scan,
    bench_bounding_box,
    bench_stage
);
criterion_main!(benches);
