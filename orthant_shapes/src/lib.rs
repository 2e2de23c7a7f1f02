// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orthant Shapes: vectors and containment/intersection primitives for region trees.
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`]: plain coordinate tuples.
//! - [`Position2`] / [`Position3`]: "has a location" traits that trees index by. Implemented
//!   for the vector types, tuples, arrays, references, and [`Entry`] (position + payload).
//! - [`Rectangle`], [`Circle`], [`Box3`], [`Sphere`]: primitives with `contains` and
//!   pairwise `intersects_*` tests.
//! - [`Area`] and [`Volume`]: closed variants over the planar and solid primitives with an
//!   explicit intersection dispatch for every pair.
//!
//! Everything is generic over a [`Scalar`] (`f32` or `f64`).
//!
//! ## Boundary semantics
//!
//! Axis-aligned shapes are half-open (`[min, max)` on every axis) so that neighbouring
//! cells never both claim a point on their shared edge. Circles and spheres are closed
//! (`distance <= radius`). Shape-shape tests differ again: touching rectangles or boxes
//! intersect, touching circles or spheres do not.
//!
//! # Example
//!
//! ```rust
//! use orthant_shapes::{Area, Circle, Rectangle};
//!
//! let room = Rectangle::new(0.0, 0.0, 10.0, 10.0)?;
//! let lamp = Circle::new(14.0, 5.0, 5.0)?;
//!
//! assert!(room.contains(&(0.0, 0.0)));
//! assert!(!room.contains(&(10.0, 5.0)));
//! assert!(Area::from(room).intersects(&Area::from(lamp)));
//! assert!(Rectangle::new(0.0, 0.0, -1.0, 1.0).is_err());
//! # Ok::<(), orthant_shapes::ShapeError>(())
//! ```
//!
//! ## Features
//!
//! - `kurbo`: conversions to and from Kurbo points, rectangles, and circles, and
//!   `Area::to_path` for renderers. Requires `std` (default) or `libm`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod area;
pub mod error;
#[cfg(feature = "kurbo")]
mod interop;
pub mod scalar;
pub mod vector;
pub mod volume;

pub use area::{Area, Circle, Rectangle};
pub use error::ShapeError;
pub use scalar::Scalar;
pub use vector::{Entry, Position2, Position3, Vec2, Vec3, Vec4};
pub use volume::{Box3, Sphere, Volume};
