// Copyright 2025 the Orthant Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Orthant and Kurbo geometry (feature `kurbo`).
//!
//! Kurbo is `f64`-only, so these impls are too. Conversions into Orthant shapes go through
//! the validating constructors and can fail.

use kurbo::{BezPath, Shape};

use crate::area::{Area, Circle, Rectangle};
use crate::error::ShapeError;
use crate::vector::{Position2, Vec2};

impl Position2<f64> for kurbo::Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl From<kurbo::Point> for Vec2<f64> {
    fn from(p: kurbo::Point) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Vec2<f64>> for kurbo::Point {
    fn from(v: Vec2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<kurbo::Vec2> for Vec2<f64> {
    fn from(v: kurbo::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2<f64>> for kurbo::Vec2 {
    fn from(v: Vec2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Rectangle<f64>> for kurbo::Rect {
    fn from(r: Rectangle<f64>) -> Self {
        Self::new(r.x, r.y, r.max_x(), r.max_y())
    }
}

impl TryFrom<kurbo::Rect> for Rectangle<f64> {
    type Error = ShapeError;

    /// Inverted Kurbo rectangles (`x1 < x0`) are rejected as negative extents.
    fn try_from(r: kurbo::Rect) -> Result<Self, Self::Error> {
        Self::new(r.x0, r.y0, r.width(), r.height())
    }
}

impl From<Circle<f64>> for kurbo::Circle {
    fn from(c: Circle<f64>) -> Self {
        Self::new((c.x, c.y), c.radius)
    }
}

impl TryFrom<kurbo::Circle> for Circle<f64> {
    type Error = ShapeError;

    fn try_from(c: kurbo::Circle) -> Result<Self, Self::Error> {
        Self::new(c.center.x, c.center.y, c.radius)
    }
}

impl Area<f64> {
    /// Outline of the shape as a Bézier path, for handing to a renderer.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Rectangle(r) => kurbo::Rect::from(*r).to_path(tolerance),
            Self::Circle(c) => kurbo::Circle::from(*c).to_path(tolerance),
        }
    }
}
