// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Fill a quadtree past its capacity, query it with a rectangle and a circle, and show
//! what happens to a point outside the root.
//!
//! Run:
//! - `cargo run -p orthant_demos --example quadtree_basics`

use orthant_tree::{Circle, Entry, InsertError, Quadrant, Quadtree, Rectangle, Vec2};

fn main() {
    let bounds = Rectangle::new(0.0, 0.0, 100.0, 100.0).unwrap();
    let mut tree = Quadtree::with_capacity(bounds, 2).unwrap();

    for (name, x, y) in [
        ("well", 10.0, 10.0),
        ("mill", 20.0, 20.0),
        ("barn", 30.0, 30.0),
        ("gate", 75.0, 60.0),
    ] {
        tree.insert(Entry::new(Vec2::new(x, y), name)).unwrap();
    }
    println!("{tree:?}");
    for q in Quadrant::ALL {
        let child = tree.child(q).unwrap();
        println!("{q:?}: {} point(s) in {:?}", child.len(), child.bounds());
    }

    // Only the first two lie inside the window; the root holds them directly.
    let near: Vec<_> = tree
        .query(Rectangle::new(0.0, 0.0, 25.0, 25.0).unwrap())
        .into_iter()
        .map(|e| e.data)
        .collect();
    println!("in window: {near:?}");
    assert_eq!(near, ["well", "mill"]);

    // Circles are closed: (75, 60) sits exactly on this one.
    let ring = tree.query(Circle::new(75.0, 50.0, 10.0).unwrap());
    assert_eq!(ring.len(), 1);

    match tree.insert(Entry::new(Vec2::new(100.0, 5.0), "road")) {
        Err(InsertError::OutOfBounds(e)) => println!("{} lies outside {bounds:?}", e.data),
        other => panic!("unexpected insert result: {other:?}"),
    }
}
