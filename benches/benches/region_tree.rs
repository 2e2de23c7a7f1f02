// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use orthant_tree::{Box3, Circle, Octree, Quadtree, Rectangle, Sphere, Vec2, Vec3, Volume};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIDE: f64 = 2048.0;

fn gen_points(count: usize, seed: u64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Vec2::new(rng.gen_range(0.0..SIDE), rng.gen_range(0.0..SIDE)))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Vec2<f64>> {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = rng.gen_range(spread..SIDE - spread);
        let cy = rng.gen_range(spread..SIDE - spread);
        for _ in 0..per_cluster {
            let dx = rng.gen_range(-spread..spread);
            let dy = rng.gen_range(-spread..spread);
            out.push(Vec2::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_points_3d(count: usize, seed: u64) -> Vec<Vec3<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(0.0..SIDE),
                rng.gen_range(0.0..SIDE),
                rng.gen_range(0.0..SIDE),
            )
        })
        .collect()
}

fn root() -> Rectangle<f64> {
    Rectangle::new(0.0, 0.0, SIDE, SIDE).expect("valid root")
}

fn build_quadtree(points: &[Vec2<f64>], capacity: usize) -> Quadtree<f64, Vec2<f64>> {
    let mut tree = Quadtree::with_capacity(root(), capacity).expect("nonzero capacity");
    for p in points {
        let _ = tree.insert(*p);
    }
    tree
}

fn bench_quadtree_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_points(n, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[4usize, 16] {
            group.bench_function(format!("uniform_n{n}_cap{capacity}"), |b| {
                b.iter_batched(
                    || Quadtree::with_capacity(root(), capacity).expect("nonzero capacity"),
                    |mut tree| {
                        for p in &points {
                            let _ = tree.insert(*p);
                        }
                        black_box(tree.len());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    let points = gen_clustered_points(32, 1_000, 24.0);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("clustered_cap8", |b| {
        b.iter_batched(
            || Quadtree::with_capacity(root(), 8).expect("nonzero capacity"),
            |mut tree| {
                for p in &points {
                    let _ = tree.insert(*p);
                }
                black_box(tree.depth());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_quadtree_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let points = gen_points(100_000, 0xFACE_FEED_CAFE_BABE);
    let tree = build_quadtree(&points, 8);
    let window = Rectangle::new(800.0, 800.0, 200.0, 200.0).expect("valid window");
    let lens = Circle::new(1024.0, 1024.0, 120.0).expect("valid circle");

    group.bench_function("rect_window", |b| {
        b.iter(|| black_box(tree.query(black_box(window)).len()));
    });
    group.bench_function("circle", |b| {
        b.iter(|| black_box(tree.query(black_box(lens)).len()));
    });
    group.bench_function("rect_window_linear_scan", |b| {
        b.iter(|| {
            let hits = points.iter().filter(|p| window.contains(*p)).count();
            black_box(hits)
        });
    });
    group.bench_function("circle_linear_scan", |b| {
        b.iter(|| {
            let hits = points.iter().filter(|p| lens.contains(*p)).count();
            black_box(hits)
        });
    });

    let mut rng = StdRng::seed_from_u64(7);
    group.bench_function("random_point", |b| {
        b.iter(|| black_box(tree.random_point(&mut rng).copied()));
    });
    group.finish();
}

fn bench_octree(c: &mut Criterion) {
    let mut group = c.benchmark_group("octree");
    let bounds = Box3::new(0.0, 0.0, 0.0, SIDE, SIDE, SIDE).expect("valid root");
    for &n in &[10_000usize, 100_000] {
        let points = gen_points_3d(n, 0xBADC_F00D_1234_5678);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_query_n{n}"), |b| {
            b.iter_batched(
                || Octree::with_capacity(bounds, 8).expect("nonzero capacity"),
                |mut tree| {
                    for p in &points {
                        let _ = tree.insert(*p);
                    }
                    let probe = Volume::from(
                        Sphere::new(1024.0, 1024.0, 1024.0, 200.0).expect("valid sphere"),
                    );
                    black_box(tree.query(probe).len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_quadtree_insert,
    bench_quadtree_query,
    bench_octree
);
criterion_main!(benches);
