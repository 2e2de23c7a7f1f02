// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shape construction errors.

use crate::scalar::Scalar;

/// Reasons a shape is rejected at construction or validation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// An extent (width, height, depth, or radius) is below zero.
    #[error("{extent} must not be negative")]
    NegativeExtent {
        /// Name of the offending extent.
        extent: &'static str,
    },
    /// A coordinate or extent is infinite or NaN.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Check that an origin coordinate is finite.
pub(crate) fn check_coord<T: Scalar>(field: &'static str, v: T) -> Result<(), ShapeError> {
    if T::is_finite(v) {
        Ok(())
    } else {
        Err(ShapeError::NonFinite { field })
    }
}

/// Check that an extent is finite and not negative.
pub(crate) fn check_extent<T: Scalar>(extent: &'static str, v: T) -> Result<(), ShapeError> {
    check_coord(extent, v)?;
    if v < T::zero() {
        return Err(ShapeError::NegativeExtent { extent });
    }
    Ok(())
}
