// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree construction and insertion errors.

/// Invalid tree configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A node must be able to hold at least one point before it splits.
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}

/// A point the tree did not store. The point is handed back to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InsertError<P> {
    /// The point lies outside the node's bounds.
    #[error("point lies outside the tree bounds")]
    OutOfBounds(P),
    /// The node's bounds contain the point, but none of its children do.
    ///
    /// The built-in [`Bounds`](crate::Bounds) impls never produce this, since their children
    /// always reach the parent's edges. It is reported for a custom split that leaves a gap.
    #[error("no child region claimed the point")]
    Unclaimed(P),
}

impl<P> InsertError<P> {
    /// The rejected point.
    pub fn point(&self) -> &P {
        match self {
            Self::OutOfBounds(p) | Self::Unclaimed(p) => p,
        }
    }

    /// Take the rejected point back.
    pub fn into_point(self) -> P {
        match self {
            Self::OutOfBounds(p) | Self::Unclaimed(p) => p,
        }
    }
}
