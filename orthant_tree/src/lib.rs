// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthant Tree: capacity-split quadtrees and octrees over point sets.
//!
//! - [`Quadtree`] indexes anything with a 2D position inside a [`Rectangle`] and answers
//!   range queries for any [`Area`] (rectangle or circle).
//! - [`Octree`] does the same in 3D with a [`Box3`] root and [`Volume`] queries.
//!
//! Both are aliases of one [`RegionTree`], generic over the [`Bounds`] shape of its nodes.
//! A node stores up to `capacity` points; the insert that finds it full splits its bounds
//! into equally sized children, created once and kept for the life of the tree. Queries
//! skip every subtree whose bounds do not touch the query shape.
//!
//! # Example
//!
//! ```rust
//! use orthant_tree::{Circle, Quadtree, Rectangle, Vec2};
//!
//! let mut tree = Quadtree::with_capacity(Rectangle::new(0.0, 0.0, 100.0, 100.0)?, 2)?;
//! for p in [(10.0, 10.0), (20.0, 20.0), (30.0, 30.0)] {
//!     tree.insert(Vec2::from(p)).expect("inside the root");
//! }
//! assert!(tree.is_divided());
//!
//! let near = tree.query(Rectangle::new(0.0, 0.0, 25.0, 25.0)?);
//! assert_eq!(near, [&Vec2::new(10.0, 10.0), &Vec2::new(20.0, 20.0)]);
//!
//! let ring = tree.query(Circle::new(30.0, 30.0, 1.0)?);
//! assert_eq!(ring.len(), 1);
//!
//! // Points outside the root come back in the error.
//! let err = tree.insert(Vec2::new(100.0, 0.0)).unwrap_err();
//! assert_eq!(*err.point(), Vec2::new(100.0, 0.0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Inserting
//!
//! Children are tried in a fixed order ([`Quadrant`] order for quadtrees, [`Octant`] bit
//! order for octrees) and the first one that contains the point keeps it. Bounds are
//! half-open, and the far children of a split are sized to end exactly on the parent's max
//! edge even where `mid + width / 2` would round short of it. Every point a node accepts is
//! therefore claimed by one of its children. [`InsertError::Unclaimed`] is logged at `warn`
//! level and only arises from a custom [`Bounds`] whose split leaves a gap.
//!
//! ## Randomness
//!
//! [`RegionTree::random_point`] takes any [`rand::Rng`], so seeding is up to the caller.
//!
//! ## Logging
//!
//! Subdivision is logged at `trace` level through the [`log`] facade.
//!
//! ## Features
//!
//! - `std` (default) and `libm`: forwarded to `orthant_shapes`.
//! - `kurbo`: enables Kurbo interop in `orthant_shapes`, for drawing trees.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod bounds;
pub mod error;
pub mod octree;
pub mod quadtree;
pub mod tree;

pub use bounds::Bounds;
pub use error::{InsertError, TreeError};
pub use octree::{Octant, Octree};
pub use quadtree::{Quadrant, Quadtree};
pub use tree::{DEFAULT_CAPACITY, RegionTree};

pub use orthant_shapes::{
    Area, Box3, Circle, Entry, Position2, Position3, Rectangle, Scalar, ShapeError, Sphere,
    Vec2, Vec3, Volume,
};
