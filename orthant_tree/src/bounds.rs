// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds trait: what a region tree needs from the shape that bounds each node.

use core::fmt::Debug;

/// A node extent that can test points, prune queries, and split into children.
///
/// Implemented for [`Rectangle`](orthant_shapes::Rectangle) (quadtrees, see
/// [`crate::quadtree`]) and [`Box3`](orthant_shapes::Box3) (octrees, see [`crate::octree`]).
/// `P` is the stored point type.
pub trait Bounds<P>: Copy + Debug {
    /// Shape family accepted by queries against a tree bounded by `Self`.
    type Query: Debug;

    /// Children produced by [`Bounds::split`], in their fixed visiting order.
    type Split: IntoIterator<Item = Self>;

    /// Whether the point falls inside this extent.
    ///
    /// Implementations must be half-open so that [`Bounds::split`] results never both
    /// claim a point on a shared edge.
    fn contains(&self, point: &P) -> bool;

    /// Whether this extent overlaps the query shape. A `false` prunes the whole subtree.
    fn intersects(&self, query: &Self::Query) -> bool;

    /// Whether the query shape contains the point.
    fn query_contains(query: &Self::Query, point: &P) -> bool;

    /// This extent expressed as a query shape.
    fn to_query(&self) -> Self::Query;

    /// Halve every dimension, producing children that tile `self`.
    ///
    /// Every point `self` contains must be contained by some child. Children on the far
    /// side of a seam end on `self`'s own max edge, so they can be a rounding step wider
    /// than the near ones.
    fn split(&self) -> Self::Split;
}
