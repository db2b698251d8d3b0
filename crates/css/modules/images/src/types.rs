//! Geometry shared by the gradient model and its consumers.

use serde::Serialize;

/// A point in the coordinate space of the box-geometry source (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The gradient box of an element: `{x, y, width, height}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxBounds {
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Point {
        Point::new(
            self.width.mul_add(0.5, self.x),
            self.height.mul_add(0.5, self.y),
        )
    }

    /// Length of the box diagonal.
    pub fn diagonal(&self) -> f64 {
        self.width.hypot(self.height)
    }
}
