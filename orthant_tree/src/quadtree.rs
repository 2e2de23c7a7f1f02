// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtrees: [`RegionTree`]s bounded by [`Rectangle`]s and queried with [`Area`]s.

use orthant_shapes::{Area, Position2, Rectangle, Scalar};

use crate::bounds::Bounds;
use crate::tree::RegionTree;

/// A region tree over 2D points, splitting each full node into four quadrants.
pub type Quadtree<T, P> = RegionTree<Rectangle<T>, P>;

/// One of the four children of a divided quadtree node.
///
/// The discriminant is the child's index in [`RegionTree::children`], which is also the
/// order inserts try them in. Y grows downward, so north is the lower-y half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Minimum x, minimum y.
    NorthWest = 0,
    /// Maximum x, minimum y.
    NorthEast = 1,
    /// Minimum x, maximum y.
    SouthWest = 2,
    /// Maximum x, maximum y.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in child order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this quadrant in a node's child list.
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl<T, P> Bounds<P> for Rectangle<T>
where
    T: Scalar,
    P: Position2<T>,
{
    type Query = Area<T>;
    type Split = [Self; 4];

    fn contains(&self, point: &P) -> bool {
        Self::contains(self, point)
    }

    fn intersects(&self, query: &Area<T>) -> bool {
        Self::intersects(self, query)
    }

    fn query_contains(query: &Area<T>, point: &P) -> bool {
        query.contains(point)
    }

    fn to_query(&self) -> Area<T> {
        Area::Rectangle(*self)
    }

    fn split(&self) -> [Self; 4] {
        let (half_w, half_h) = (T::half(self.width), T::half(self.height));
        let (mid_x, mid_y) = (self.x + half_w, self.y + half_h);
        // Far cells end exactly on the parent's max edge, not at `mid + half`.
        let (far_w, far_h) = (T::reach(mid_x, self.max_x()), T::reach(mid_y, self.max_y()));
        let cell = |x, y, width, height| Self {
            x,
            y,
            width,
            height,
        };
        [
            cell(self.x, self.y, half_w, half_h),
            cell(mid_x, self.y, far_w, half_h),
            cell(self.x, mid_y, half_w, far_h),
            cell(mid_x, mid_y, far_w, far_h),
        ]
    }
}

impl<T, P> RegionTree<Rectangle<T>, P> {
    /// The child covering `quadrant`, or `None` if this node has not divided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().get(quadrant.index())
    }
}
