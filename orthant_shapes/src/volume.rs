// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Solid primitives: [`Box3`], [`Sphere`], and the closed [`Volume`] variant.
//!
//! These mirror the planar primitives one dimension up. Z grows away from the viewer.

use crate::error::{ShapeError, check_coord, check_extent};
use crate::scalar::{Scalar, scaled_squares};
use crate::vector::{Position3, Vec3};

/// Axis-aligned box anchored at its minimum corner.
///
/// Containment is half-open on every axis, like [`Rectangle`](crate::Rectangle). A box
/// with any zero extent is valid but contains no points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Box3<T> {
    /// Minimum x.
    pub x: T,
    /// Minimum y.
    pub y: T,
    /// Minimum z.
    pub z: T,
    /// Extent along x.
    pub width: T,
    /// Extent along y.
    pub height: T,
    /// Extent along z.
    pub depth: T,
}

impl<T: Scalar> Box3<T> {
    /// Create a box from its minimum corner and size.
    pub fn new(x: T, y: T, z: T, width: T, height: T, depth: T) -> Result<Self, ShapeError> {
        let b = Self {
            x,
            y,
            z,
            width,
            height,
            depth,
        };
        b.validate()?;
        Ok(b)
    }

    /// Create a box from a corner vector and a size vector.
    pub fn from_origin_size(origin: Vec3<T>, size: Vec3<T>) -> Result<Self, ShapeError> {
        Self::new(origin.x, origin.y, origin.z, size.x, size.y, size.z)
    }

    /// Check that every field is finite and no extent is negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_coord("x", self.x)?;
        check_coord("y", self.y)?;
        check_coord("z", self.z)?;
        check_extent("width", self.width)?;
        check_extent("height", self.height)?;
        check_extent("depth", self.depth)
    }

    /// Minimum corner.
    pub fn origin(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Width, height, and depth.
    pub fn size(&self) -> Vec3<T> {
        Vec3::new(self.width, self.height, self.depth)
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        self.origin() + self.half_extents()
    }

    /// Half of each extent.
    pub fn half_extents(&self) -> Vec3<T> {
        Vec3::new(T::half(self.width), T::half(self.height), T::half(self.depth))
    }

    /// Exclusive maximum x.
    pub fn max_x(&self) -> T {
        self.x + self.width
    }

    /// Exclusive maximum y.
    pub fn max_y(&self) -> T {
        self.y + self.height
    }

    /// Exclusive maximum z.
    pub fn max_z(&self) -> T {
        self.z + self.depth
    }

    /// Whether the point lies in the half-open box.
    pub fn contains(&self, point: &impl Position3<T>) -> bool {
        let p = point.xyz();
        p.x >= self.x
            && p.x < self.max_x()
            && p.y >= self.y
            && p.y < self.max_y()
            && p.z >= self.z
            && p.z < self.max_z()
    }

    /// Separating-axis overlap test against another box. Touching faces overlap.
    pub fn intersects_box(&self, other: &Self) -> bool {
        !(other.x > self.max_x()
            || other.max_x() < self.x
            || other.y > self.max_y()
            || other.max_y() < self.y
            || other.z > self.max_z()
            || other.max_z() < self.z)
    }

    /// Overlap test against a sphere. See [`Sphere::intersects_box`].
    pub fn intersects_sphere(&self, sphere: &Sphere<T>) -> bool {
        sphere.intersects_box(self)
    }

    /// Overlap test against either solid shape.
    pub fn intersects(&self, other: &Volume<T>) -> bool {
        match other {
            Volume::Box(b) => self.intersects_box(b),
            Volume::Sphere(s) => s.intersects_box(self),
        }
    }
}

impl<T: Scalar> Default for Box3<T> {
    /// The unit cube at the origin.
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            width: T::one(),
            height: T::one(),
            depth: T::one(),
        }
    }
}

/// Sphere given by its center and radius. Containment is closed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere<T> {
    /// Center x.
    pub x: T,
    /// Center y.
    pub y: T,
    /// Center z.
    pub z: T,
    /// Radius.
    pub radius: T,
}

impl<T: Scalar> Sphere<T> {
    /// Create a sphere from its center and radius.
    pub fn new(x: T, y: T, z: T, radius: T) -> Result<Self, ShapeError> {
        let s = Self { x, y, z, radius };
        s.validate()?;
        Ok(s)
    }

    /// Check that every field is finite and the radius is not negative.
    pub fn validate(&self) -> Result<(), ShapeError> {
        check_coord("x", self.x)?;
        check_coord("y", self.y)?;
        check_coord("z", self.z)?;
        check_extent("radius", self.radius)
    }

    /// Center point.
    pub fn center(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Whether the point is within `radius` of the center (inclusive).
    ///
    /// Like [`Circle::contains`](crate::Circle::contains), the squared comparison is
    /// rescaled for extreme magnitudes.
    pub fn contains(&self, point: &impl Position3<T>) -> bool {
        let d = point.xyz() - self.center();
        let (dist, reach) = scaled_squares(&[d.x, d.y, d.z], self.radius);
        dist <= reach
    }

    /// Overlap test against another sphere. Touching spheres do not intersect.
    pub fn intersects_sphere(&self, other: &Self) -> bool {
        let d = other.center() - self.center();
        let (dist, reach) = scaled_squares(&[d.x, d.y, d.z], self.radius + other.radius);
        dist < reach
    }

    /// Overlap test against a box.
    ///
    /// Same three tiers as the planar test: reject on any axis gap wider than the radius,
    /// accept when the center is within the half extent on any axis, otherwise compare
    /// the squared distance to the nearest corner.
    ///
    /// The middle tier only looks at one axis, so along box edges the answer is
    /// conservative: a sphere whose gaps on the other two axes are each within the radius
    /// counts as overlapping. Region-tree pruning only ever visits extra nodes because of
    /// this, it never skips one.
    pub fn intersects_box(&self, b: &Box3<T>) -> bool {
        let half = b.half_extents();
        let center = b.center();
        let dx = T::abs(self.x - center.x);
        let dy = T::abs(self.y - center.y);
        let dz = T::abs(self.z - center.z);

        if dx > half.x + self.radius || dy > half.y + self.radius || dz > half.z + self.radius {
            return false;
        }
        if dx <= half.x || dy <= half.y || dz <= half.z {
            return true;
        }
        let corner = [dx - half.x, dy - half.y, dz - half.z];
        let (dist, reach) = scaled_squares(&corner, self.radius);
        dist <= reach
    }

    /// Overlap test against either solid shape.
    pub fn intersects(&self, other: &Volume<T>) -> bool {
        match other {
            Volume::Box(b) => self.intersects_box(b),
            Volume::Sphere(s) => self.intersects_sphere(s),
        }
    }
}

impl<T: Scalar> Default for Sphere<T> {
    /// The unit sphere at the origin.
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
            radius: T::one(),
        }
    }
}

/// A solid query or bounding shape.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Volume<T> {
    /// Axis-aligned box.
    Box(Box3<T>),
    /// Sphere.
    Sphere(Sphere<T>),
}

impl<T: Scalar> Volume<T> {
    /// Whether the shape contains the point.
    pub fn contains(&self, point: &impl Position3<T>) -> bool {
        match self {
            Self::Box(b) => b.contains(point),
            Self::Sphere(s) => s.contains(point),
        }
    }

    /// Whether the two shapes overlap. Symmetric for every pair of variants.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Box(a), Self::Box(b)) => a.intersects_box(b),
            (Self::Box(b), Self::Sphere(s)) | (Self::Sphere(s), Self::Box(b)) => {
                s.intersects_box(b)
            }
            (Self::Sphere(a), Self::Sphere(b)) => a.intersects_sphere(b),
        }
    }

    /// Check the wrapped shape's fields.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Self::Box(b) => b.validate(),
            Self::Sphere(s) => s.validate(),
        }
    }
}

impl<T> From<Box3<T>> for Volume<T> {
    fn from(b: Box3<T>) -> Self {
        Self::Box(b)
    }
}

impl<T> From<Sphere<T>> for Volume<T> {
    fn from(s: Sphere<T>) -> Self {
        Self::Sphere(s)
    }
}
