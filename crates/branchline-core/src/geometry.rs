//! Geometric primitives for timeline layout.
//!
//! - [`Point`] - A 2D coordinate in canvas space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned box given by its minimum and maximum corners
//!
//! # Coordinate System
//!
//! Branchline uses screen coordinates:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Node positions refer to the top-left corner of the node box.

use serde::Serialize;

/// A 2D point in canvas coordinate space.
///
/// # Examples
///
/// ```
/// # use branchline_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(30.0, 60.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 20.0);
/// assert_eq!(mid.y(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Creates a new point with the specified x-coordinate
    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    /// Creates a new point with the specified y-coordinate
    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

/// Axis-aligned rectangle described by its minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Midpoint of the top edge.
    pub fn top_center(self) -> Point {
        self.center().with_y(self.min_y)
    }

    /// Midpoint of the bottom edge.
    pub fn bottom_center(self) -> Point {
        self.center().with_y(self.max_y)
    }

    /// Midpoint of the left edge.
    pub fn left_center(self) -> Point {
        self.center().with_x(self.min_x)
    }

    /// Midpoint of the right edge.
    pub fn right_center(self) -> Point {
        self.center().with_x(self.max_x)
    }

    /// Merges two bounds into the smallest bounds containing both.
    ///
    /// # Examples
    ///
    /// ```
    /// # use branchline_core::geometry::{Bounds, Point, Size};
    /// let first = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let second = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = first.merge(&second);
    /// assert_eq!(combined.max_x(), 130.0);
    /// assert_eq!(combined.max_y(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (-1000.0f32..1000.0, -1000.0f32..1000.0, 0.0f32..500.0, 0.0f32..500.0)
            .prop_map(|(x, y, w, h)| Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h)))
    }

    /// The merged bounds contain both inputs.
    fn check_merge_contains_both(a: Bounds, b: Bounds) -> Result<(), TestCaseError> {
        let merged = a.merge(&b);
        for part in [a, b] {
            prop_assert!(merged.min_x() <= part.min_x());
            prop_assert!(merged.min_y() <= part.min_y());
            prop_assert!(merged.max_x() >= part.max_x());
            prop_assert!(merged.max_y() >= part.max_y());
        }
        Ok(())
    }

    /// Edge anchors lie on the boundary of the box.
    fn check_anchors_on_boundary(bounds: Bounds) -> Result<(), TestCaseError> {
        prop_assert_eq!(bounds.top_center().y(), bounds.min_y());
        prop_assert_eq!(bounds.bottom_center().y(), bounds.max_y());
        prop_assert_eq!(bounds.left_center().x(), bounds.min_x());
        prop_assert_eq!(bounds.right_center().x(), bounds.max_x());
        Ok(())
    }

    proptest! {
        #[test]
        fn merge_contains_both(a in bounds_strategy(), b in bounds_strategy()) {
            check_merge_contains_both(a, b)?;
        }

        #[test]
        fn anchors_on_boundary(bounds in bounds_strategy()) {
            check_anchors_on_boundary(bounds)?;
        }
    }
}
