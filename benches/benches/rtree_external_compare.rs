// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use orthant_tree::{Quadtree, Rectangle, Vec2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rstar::{AABB, RTree};

fn gen_points(count: usize, side: f64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Vec2::new(rng.gen_range(0.0..side), rng.gen_range(0.0..side)))
        .collect()
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    let side = 2048.0;
    let root = Rectangle::new(0.0, 0.0, side, side).expect("valid root");
    let window = Rectangle::new(800.0, 800.0, 400.0, 400.0).expect("valid window");
    for &n in &[10_000usize, 100_000] {
        let points = gen_points(n, side);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("orthant_build_query_n{n}"), |b| {
            b.iter_batched(
                || Quadtree::with_capacity(root, 8).expect("nonzero capacity"),
                |mut tree| {
                    for p in &points {
                        let _ = tree.insert(*p);
                    }
                    black_box(tree.query(window).len());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_n{n}"), |b| {
            b.iter_batched(
                RTree::<[f64; 2]>::new,
                |mut tree| {
                    for p in &points {
                        tree.insert([p.x, p.y]);
                    }
                    let aabb = AABB::from_corners(
                        [window.x, window.y],
                        [window.max_x(), window.max_y()],
                    );
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{n}"), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    let aabb = AABB::from_corners(
                        [window.x, window.y],
                        [window.max_x(), window.max_y()],
                    );
                    black_box(tree.locate_in_envelope(&aabb).count());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
