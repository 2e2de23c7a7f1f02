// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric scalar abstraction shared by vectors, shapes, and trees.

use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Sub};

/// Floating-point scalar that geometry is generic over.
///
/// This trait provides the minimal set of operations needed for containment and
/// intersection tests and for halving extents during subdivision. It is implemented for
/// `f32` and `f64`. Integer scalars are deliberately absent: halving an odd extent would
/// leave children that no longer tile their parent.
///
/// All methods are available without `std`.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// One value for the scalar type.
    fn one() -> Self;

    /// Half of the value (used to split extents and locate centers).
    fn half(v: Self) -> Self;

    /// Absolute value.
    fn abs(v: Self) -> Self;

    /// Whether the value is neither infinite nor NaN.
    fn is_finite(v: Self) -> bool;

    /// Square of the value.
    #[inline]
    fn squared(v: Self) -> Self {
        v * v
    }

    /// The next representable value above `v`.
    fn next_up(v: Self) -> Self;

    /// Power of two that brings `magnitude` into a range where squaring it, and summing a
    /// few such squares, neither overflows nor underflows. `1` for ordinary magnitudes.
    fn square_scale(magnitude: Self) -> Self;

    /// An extent `e` with `start + e >= end`, for `start <= end`.
    ///
    /// `end - start` can round so that adding it back to `start` falls short of `end`;
    /// this steps the extent up until it reaches.
    fn reach(start: Self, end: Self) -> Self {
        let mut extent = end - start;
        while start + extent < end {
            extent = Self::next_up(extent);
        }
        extent
    }
}

/// Squared norm of `parts` and squared `limit`, rescaled together by one power of two.
///
/// Only the ordering of the two results is meaningful. Within the ordinary range the scale
/// is `1`, so results are bit-identical to squaring directly.
pub(crate) fn scaled_squares<T: Scalar>(parts: &[T], limit: T) -> (T, T) {
    let mut largest = T::abs(limit);
    for &p in parts {
        let a = T::abs(p);
        if a > largest {
            largest = a;
        }
    }
    let scale = T::square_scale(largest);
    let mut sum = T::zero();
    for &p in parts {
        sum = sum + T::squared(p * scale);
    }
    (sum, T::squared(limit * scale))
}

impl Scalar for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2.0
    }

    #[inline]
    fn abs(v: Self) -> Self {
        if v < 0.0 { -v } else { v }
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn next_up(v: Self) -> Self {
        v.next_up()
    }

    fn square_scale(magnitude: Self) -> Self {
        // 2^60 and 2^-60 bound the safe range; 2^-70 and 2^90 pull values back into it.
        const HUGE: f32 = f32::from_bits((127 + 60) << 23);
        const TINY: f32 = f32::from_bits((127 - 60) << 23);
        const DOWN: f32 = f32::from_bits((127 - 70) << 23);
        const UP: f32 = f32::from_bits((127 + 90) << 23);
        if magnitude > HUGE {
            DOWN
        } else if magnitude < TINY && magnitude > 0.0 {
            UP
        } else {
            1.0
        }
    }
}

impl Scalar for f64 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn half(v: Self) -> Self {
        v / 2.0
    }

    #[inline]
    fn abs(v: Self) -> Self {
        if v < 0.0 { -v } else { v }
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }

    #[inline]
    fn next_up(v: Self) -> Self {
        v.next_up()
    }

    fn square_scale(magnitude: Self) -> Self {
        // 2^500 and 2^-500 bound the safe range; 2^-600 and 2^600 pull values back into it.
        const HUGE: f64 = f64::from_bits((1023 + 500) << 52);
        const TINY: f64 = f64::from_bits((1023 - 500) << 52);
        const DOWN: f64 = f64::from_bits((1023 - 600) << 52);
        const UP: f64 = f64::from_bits((1023 + 600) << 52);
        if magnitude > HUGE {
            DOWN
        } else if magnitude < TINY && magnitude > 0.0 {
            UP
        } else {
            1.0
        }
    }
}
