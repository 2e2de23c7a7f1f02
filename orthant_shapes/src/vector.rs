// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate tuples and the position traits that trees index by.

use core::ops::{Add, Mul, Sub};

use crate::scalar::Scalar;

/// A 2D coordinate tuple, used both as a point and as a displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
}

/// A 3D coordinate tuple.
///
/// The Z axis points away from the viewer (left-handed), matching the octant order used
/// by octrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

/// A 4D coordinate tuple.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec4<T> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
    /// W component.
    pub w: T,
}

impl<T> Vec2<T> {
    /// Create a new vector.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Append a Z component.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T> Vec3<T> {
    /// Create a new vector.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Append a W component.
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// Drop the Z component.
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}

impl<T> Vec4<T> {
    /// Create a new vector.
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Drop the W component.
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl<T: Scalar> Vec2<T> {
    /// A vector with every component set to `v`.
    pub fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }
}

impl<T: Scalar> Vec3<T> {
    /// A vector with every component set to `v`.
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(self, other: Self) -> T {
        (other - self).length_squared()
    }
}

impl<T: Scalar> Vec4<T> {
    /// A vector with every component set to `v`.
    pub fn splat(v: T) -> Self {
        Self::new(v, v, v, v)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> T {
        self.dot(self)
    }
}

macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl<T: Scalar> Add for $ty<T> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Scalar> Sub for $ty<T> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Scalar> Mul<T> for $ty<T> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: T) -> Self {
                Self { $($field: self.$field * rhs),+ }
            }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });
impl_vector_ops!(Vec4 { x, y, z, w });

impl<T> From<(T, T)> for Vec2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Vec2<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Vec2<T>> for [T; 2] {
    fn from(v: Vec2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

impl<T> From<(T, T, T, T)> for Vec4<T> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T> From<[T; 4]> for Vec4<T> {
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

/// Anything with a 2D location.
///
/// Trees are agnostic to whatever else the value carries; implement this for your own
/// point type, or wrap a position and a payload in an [`Entry`].
pub trait Position2<T> {
    /// X coordinate.
    fn x(&self) -> T;

    /// Y coordinate.
    fn y(&self) -> T;

    /// Both coordinates as a vector.
    fn xy(&self) -> Vec2<T> {
        Vec2::new(self.x(), self.y())
    }
}

/// Anything with a 3D location.
pub trait Position3<T>: Position2<T> {
    /// Z coordinate.
    fn z(&self) -> T;

    /// All three coordinates as a vector.
    fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x(), self.y(), self.z())
    }
}

impl<T: Copy> Position2<T> for Vec2<T> {
    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: Copy> Position2<T> for Vec3<T> {
    fn x(&self) -> T {
        self.x
    }

    fn y(&self) -> T {
        self.y
    }
}

impl<T: Copy> Position3<T> for Vec3<T> {
    fn z(&self) -> T {
        self.z
    }
}

impl<T: Copy> Position2<T> for (T, T) {
    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

impl<T: Copy> Position2<T> for [T; 2] {
    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }
}

impl<T: Copy> Position2<T> for (T, T, T) {
    fn x(&self) -> T {
        self.0
    }

    fn y(&self) -> T {
        self.1
    }
}

impl<T: Copy> Position3<T> for (T, T, T) {
    fn z(&self) -> T {
        self.2
    }
}

impl<T: Copy> Position2<T> for [T; 3] {
    fn x(&self) -> T {
        self[0]
    }

    fn y(&self) -> T {
        self[1]
    }
}

impl<T: Copy> Position3<T> for [T; 3] {
    fn z(&self) -> T {
        self[2]
    }
}

impl<T, P: Position2<T> + ?Sized> Position2<T> for &P {
    fn x(&self) -> T {
        (**self).x()
    }

    fn y(&self) -> T {
        (**self).y()
    }
}

impl<T, P: Position3<T> + ?Sized> Position3<T> for &P {
    fn z(&self) -> T {
        (**self).z()
    }
}

/// A position paired with caller data.
///
/// Trees only look at `position`; `data` rides along and comes back out of queries.
///
/// ```
/// use orthant_shapes::{Entry, Position2, Vec2};
///
/// let e = Entry::new(Vec2::new(3.0, 4.0), "spawn");
/// assert_eq!(e.x(), 3.0);
/// assert_eq!(e.data, "spawn");
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Entry<V, D> {
    /// Where the entry lives.
    pub position: V,
    /// Payload carried alongside the position.
    pub data: D,
}

impl<V, D> Entry<V, D> {
    /// Pair a position with its payload.
    pub const fn new(position: V, data: D) -> Self {
        Self { position, data }
    }
}

impl<T, V: Position2<T>, D> Position2<T> for Entry<V, D> {
    fn x(&self) -> T {
        self.position.x()
    }

    fn y(&self) -> T {
        self.position.y()
    }
}

impl<T, V: Position3<T>, D> Position3<T> for Entry<V, D> {
    fn z(&self) -> T {
        self.position.z()
    }
}
