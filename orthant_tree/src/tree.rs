// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generic region tree: capacity-triggered subdivision and pruned range queries.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::bounds::Bounds;
use crate::error::{InsertError, TreeError};

/// Number of points a node holds before it subdivides, unless configured otherwise.
pub const DEFAULT_CAPACITY: usize = 10;

/// A node of a region tree, and the tree rooted at it.
///
/// Each node stores up to `capacity` points directly. The first insert that finds the node
/// full splits its bounds into children (four for a quadtree, eight for an octree); that
/// point and every later one that reaches this node goes to the first child that accepts
/// it. Points stored before the split stay where they are.
///
/// Use the [`Quadtree`](crate::Quadtree) and [`Octree`](crate::Octree) aliases rather than
/// naming `B` directly.
pub struct RegionTree<B, P> {
    bounds: B,
    capacity: usize,
    points: Vec<P>,
    children: Option<Box<[Self]>>,
}

impl<B, P> RegionTree<B, P>
where
    B: Bounds<P>,
{
    /// Create an empty tree over `bounds` with [`DEFAULT_CAPACITY`].
    pub fn new(bounds: B) -> Self {
        Self::leaf(bounds, DEFAULT_CAPACITY)
    }

    /// Create an empty tree over `bounds` whose nodes each hold up to `capacity` points.
    pub fn with_capacity(bounds: B, capacity: usize) -> Result<Self, TreeError> {
        if capacity == 0 {
            return Err(TreeError::ZeroCapacity);
        }
        Ok(Self::leaf(bounds, capacity))
    }

    fn leaf(bounds: B, capacity: usize) -> Self {
        Self {
            bounds,
            capacity,
            points: Vec::new(),
            children: None,
        }
    }

    /// Insert a point.
    ///
    /// `Ok(())` means the point is stored somewhere in this subtree. On error the point is
    /// returned inside the [`InsertError`]. [`InsertError::OutOfBounds`] means this node's
    /// bounds reject it. Children always reach their parent's edges, so a point these bounds
    /// accept is never [`InsertError::Unclaimed`] unless a [`Bounds::split`] leaves a gap.
    pub fn insert(&mut self, point: P) -> Result<(), InsertError<P>> {
        if !self.bounds.contains(&point) {
            return Err(InsertError::OutOfBounds(point));
        }
        if self.points.len() < self.capacity {
            self.points.push(point);
            return Ok(());
        }

        let (bounds, capacity) = (self.bounds, self.capacity);
        let children = self
            .children
            .get_or_insert_with(|| Self::subdivide(bounds, capacity));

        let mut point = point;
        for child in children.iter_mut() {
            match child.insert(point) {
                Ok(()) => return Ok(()),
                Err(rejected) => point = rejected.into_point(),
            }
        }
        log::warn!("no child of {bounds:?} claimed a point inside it");
        Err(InsertError::Unclaimed(point))
    }

    fn subdivide(bounds: B, capacity: usize) -> Box<[Self]> {
        log::trace!("subdividing {bounds:?} (capacity {capacity})");
        bounds
            .split()
            .into_iter()
            .map(|b| Self::leaf(b, capacity))
            .collect()
    }

    /// All stored points contained by `area`.
    ///
    /// Results are depth-first: a node's own points in insertion order, then each child
    /// in the fixed split order.
    pub fn query(&self, area: impl Into<B::Query>) -> Vec<&P> {
        let mut matched = Vec::new();
        self.query_into(&area.into(), &mut matched);
        matched
    }

    /// Like [`RegionTree::query`], appending into an existing accumulator.
    pub fn query_into<'a>(&'a self, area: &B::Query, matched: &mut Vec<&'a P>) {
        if !self.bounds.intersects(area) {
            return;
        }
        matched.extend(self.points.iter().filter(|p| B::query_contains(area, p)));
        for child in self.children() {
            child.query_into(area, matched);
        }
    }

    /// Every point in the tree, in query order.
    pub fn points(&self) -> Vec<&P> {
        let mut all = Vec::with_capacity(self.len());
        self.query_into(&self.bounds.to_query(), &mut all);
        all
    }

    /// A point chosen uniformly from [`RegionTree::points`], or `None` if the tree is empty.
    ///
    /// Every stored point is equally likely regardless of which node holds it.
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&P> {
        self.points().choose(rng).copied()
    }
}

impl<B, P> RegionTree<B, P> {
    /// The extent this node covers.
    pub fn bounds(&self) -> &B {
        &self.bounds
    }

    /// Points a node holds directly before it subdivides.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points stored directly in this node, in insertion order.
    pub fn local_points(&self) -> &[P] {
        &self.points
    }

    /// Whether this node has split into children.
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Child nodes in split order; empty until the node divides.
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        self.points.len() + self.children().iter().map(Self::len).sum::<usize>()
    }

    /// Whether the subtree stores no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.children().iter().all(Self::is_empty)
    }

    /// Number of levels below this node (0 for an undivided node).
    pub fn depth(&self) -> usize {
        self.children()
            .iter()
            .map(|c| c.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Visit this node and every descendant, pre-order, in split order.
    ///
    /// `visit` receives each node and its depth below `self`. This is the hook for drawing
    /// a tree: a renderer that strokes `bounds()` and plots `local_points()` as it goes
    /// reproduces the same draw order as the queries.
    pub fn walk<F: FnMut(&Self, usize)>(&self, mut visit: F) {
        self.walk_at(0, &mut visit);
    }

    fn walk_at<F: FnMut(&Self, usize)>(&self, depth: usize, visit: &mut F) {
        visit(self, depth);
        for child in self.children() {
            child.walk_at(depth + 1, visit);
        }
    }
}

impl<B: Debug, P> Debug for RegionTree<B, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionTree")
            .field("bounds", &self.bounds)
            .field("capacity", &self.capacity)
            .field("local_points", &self.points.len())
            .field("total_points", &self.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}
