// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Octree basics.
//!
//! Scatter seeded random points through a cube, then compare a sphere query against a
//! brute-force scan and pick a random survivor.
//!
//! Run:
//! - `cargo run -p orthant_demos --example octree_basics`

use orthant_tree::{Box3, Octant, Octree, Sphere, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(42);
    let mut tree =
        Octree::with_capacity(Box3::new(0.0, 0.0, 0.0, 64.0, 64.0, 64.0).unwrap(), 4).unwrap();
    let points: Vec<Vec3<f64>> = (0..2_000)
        .map(|_| {
            Vec3::new(
                rng.gen_range(0.0..64.0),
                rng.gen_range(0.0..64.0),
                rng.gen_range(0.0..64.0),
            )
        })
        .collect();
    for p in &points {
        tree.insert(*p).unwrap();
    }
    println!("{} points, depth {}", tree.len(), tree.depth());

    let far = tree.child(Octant::all()).unwrap();
    println!("far octant {:?} holds {}", far.bounds(), far.len());

    let probe = Sphere::new(32.0, 32.0, 32.0, 10.0).unwrap();
    let hits = tree.query(probe);
    let expected = points.iter().filter(|p| probe.contains(*p)).count();
    println!("sphere query: {} hits (scan agrees: {})", hits.len(), hits.len() == expected);
    assert_eq!(hits.len(), expected);

    if let Some(p) = tree.random_point(&mut rng) {
        println!("random point: {p:?}");
    }
}
