// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Planar primitives: [`Rectangle`], [`Circle`], and the closed [`Area`] variant.

use crate::error::{ShapeError, check_coord, check_extent};
use crate::scalar::{Scalar, scaled_squares};
use crate::vector::{Position2, Vec2};

/// Axis-aligned rectangle anchored at its minimum corner.
///
/// Containment is half-open: `x ∈ [x, x + width)` and `y ∈ [y, y + height)`. Shared edges
/// between neighbouring rectangles therefore belong to exactly one of them, which is what
/// lets quadtree children partition their parent.
///
/// A rectangle with zero width or height is valid but contains no points at all, not even
/// its own origin. It still takes part in intersection tests.
///
/// ```
/// use orthant_shapes::Rectangle;
///
/// let line = Rectangle::new(2.0, 3.0, 0.0, 4.0)?;
/// assert!(!line.contains(&(2.0, 3.0)));
/// assert!(line.intersects_rect(&Rectangle::new(0.0, 0.0, 5.0, 5.0)?));
/// # Ok::<(), orthant_shapes::ShapeError>(())
/// ```
///
/// Fields are public so a rectangle can be re-bounded in place; call
/// [`Rectangle::validate`] afterwards if the new values are not known to be well formed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rectangle<T> {
    /// Minimum x (left).
    pub x: T,
    /// Minimum y (top).
    pub y: T,
    /// Extent along x.
    pub width: T,
    /// Extent along y.
    pub height: T,
}

impl<T: Scalar> Rectangle<T> {
    /// Create a rectangle from its minimum corner and size.
    pub fn new(x: T, y: T, width: T, height: T) -> Result<Self, ShapeError> {
        let rect = Self {
            x,
            y,
            width,
            height,
        };
        rect.validate()?;
        Ok(rect)
    }

    /// Create a rectangle from a corner vector and a size vector.
    pub fn from_origin_size(origin: Vec2<T>, size: Vec2<T>) -> Result<Self, ShapeError> {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Check that every field is finite and no extent is negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_coord("x", self.x)?;
        check_coord("y", self.y)?;
        check_extent("width", self.width)?;
        check_extent("height", self.height)
    }

    /// Minimum corner.
    pub fn origin(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Width and height.
    pub fn size(&self) -> Vec2<T> {
        Vec2::new(self.width, self.height)
    }

    /// Center point.
    pub fn center(&self) -> Vec2<T> {
        Vec2::new(self.x + T::half(self.width), self.y + T::half(self.height))
    }

    /// Exclusive maximum x.
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    /// Exclusive maximum y.
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    /// Whether the point lies in `[x, x + width) × [y, y + height)`.
    pub fn contains(&self, point: &impl Position2<T>) -> bool {
        let (px, py) = (point.x(), point.y());
        px >= self.x && px < self.max_x() && py >= self.y && py < self.max_y()
    }

    /// Separating-axis overlap test against another rectangle.
    ///
    /// Touching edges count as overlapping.
    pub fn intersects_rect(&self, other: &Self) -> bool {
        !(other.x > self.max_x()
            || other.max_x() < self.x
            || other.y > self.max_y()
            || other.max_y() < self.y)
    }

    /// Overlap test against a circle. See [`Circle::intersects_rect`].
    pub fn intersects_circle(&self, circle: &Circle<T>) -> bool {
        circle.intersects_rect(self)
    }

    /// Overlap test against either planar shape.
    pub fn intersects(&self, other: &Area<T>) -> bool {
        match other {
            Area::Rectangle(r) => self.intersects_rect(r),
            Area::Circle(c) => c.intersects_rect(self),
        }
    }
}

impl<T: Scalar> Default for Rectangle<T> {
    /// The unit square at the origin.
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            width: T::one(),
            height: T::one(),
        }
    }
}

/// Circle given by its center and radius.
///
/// Containment is closed: points at exactly `radius` from the center are inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle<T> {
    /// Center x.
    pub x: T,
    /// Center y.
    pub y: T,
    /// Radius.
    pub radius: T,
}

impl<T: Scalar> Circle<T> {
    /// Create a circle from its center and radius.
    pub fn new(x: T, y: T, radius: T) -> Result<Self, ShapeError> {
        let circle = Self { x, y, radius };
        circle.validate()?;
        Ok(circle)
    }

    /// Check that every field is finite and the radius is not negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_coord("x", self.x)?;
        check_coord("y", self.y)?;
        check_extent("radius", self.radius)
    }

    /// Center point.
    pub fn center(&self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Whether the point is within `radius` of the center (inclusive).
    ///
    /// Distances are compared squared, after rescaling by a power of two when the operands
    /// are large or small enough for their squares to overflow or underflow.
    pub fn contains(&self, point: &impl Position2<T>) -> bool {
        let d = point.xy() - self.center();
        let (dist, reach) = scaled_squares(&[d.x, d.y], self.radius);
        dist <= reach
    }

    /// Overlap test against another circle.
    ///
    /// Circles that only touch do not intersect.
    pub fn intersects_circle(&self, other: &Self) -> bool {
        let d = other.center() - self.center();
        let (dist, reach) = scaled_squares(&[d.x, d.y], self.radius + other.radius);
        dist < reach
    }

    /// Overlap test against a rectangle.
    ///
    /// Rejects when the center is too far from the rectangle on either axis, accepts when
    /// the center lies within the rectangle's half extent on either axis, and otherwise
    /// compares the distance to the nearest corner against the radius.
    pub fn intersects_rect(&self, rect: &Rectangle<T>) -> bool {
        let half_w = T::half(rect.width);
        let half_h = T::half(rect.height);
        let dx = T::abs(self.x - (rect.x + half_w));
        let dy = T::abs(self.y - (rect.y + half_h));

        if dx > half_w + self.radius || dy > half_h + self.radius {
            return false;
        }
        if dx <= half_w || dy <= half_h {
            return true;
        }
        let (dist, reach) = scaled_squares(&[dx - half_w, dy - half_h], self.radius);
        dist <= reach
    }

    /// Overlap test against either planar shape.
    pub fn intersects(&self, other: &Area<T>) -> bool {
        match other {
            Area::Rectangle(r) => self.intersects_rect(r),
            Area::Circle(c) => self.intersects_circle(c),
        }
    }
}

impl<T: Scalar> Default for Circle<T> {
    /// The unit circle at the origin.
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            radius: T::one(),
        }
    }
}

/// A planar query or bounding shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Area<T> {
    /// Axis-aligned rectangle.
    Rectangle(Rectangle<T>),
    /// Circle.
    Circle(Circle<T>),
}

impl<T: Scalar> Area<T> {
    /// Whether the shape contains the point.
    pub fn contains(&self, point: &impl Position2<T>) -> bool {
        match self {
            Self::Rectangle(r) => r.contains(point),
            Self::Circle(c) => c.contains(point),
        }
    }

    /// Whether the two shapes overlap.
    ///
    /// Symmetric for every pair of variants.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rectangle(a), Self::Rectangle(b)) => a.intersects_rect(b),
            (Self::Rectangle(r), Self::Circle(c)) | (Self::Circle(c), Self::Rectangle(r)) => {
                c.intersects_rect(r)
            }
            (Self::Circle(a), Self::Circle(b)) => a.intersects_circle(b),
        }
    }

    /// Check the wrapped shape's fields.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Self::Rectangle(r) => r.validate(),
            Self::Circle(c) => c.validate(),
        }
    }
}

impl<T> From<Rectangle<T>> for Area<T> {
    fn from(r: Rectangle<T>) -> Self {
        Self::Rectangle(r)
    }
}

impl<T> From<Circle<T>> for Area<T> {
    fn from(c: Circle<T>) -> Self {
        Self::Circle(c)
    }
}
