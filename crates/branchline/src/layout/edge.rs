//! Connector paths between parent and child nodes.

use std::fmt;

use serde::{Serialize, Serializer};

use branchline_core::{
    geometry::{Bounds, Point},
    node::Orientation,
};

/// A cubic Bezier curve from `start` to `end`.
///
/// Formats as path data, `M x y C x1 y1, x2 y2, x y`.
///
/// # Examples
///
/// ```
/// use branchline::layout::CubicBezier;
/// use branchline::geometry::Point;
///
/// let curve = CubicBezier::new(
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 50.0),
///     Point::new(100.0, 50.0),
///     Point::new(100.0, 100.0),
/// );
/// assert_eq!(curve.to_string(), "M 0 0 C 0 50, 100 50, 100 100");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
}

impl CubicBezier {
    pub fn new(start: Point, control1: Point, control2: Point, end: Point) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn control1(&self) -> Point {
        self.control1
    }

    pub fn control2(&self) -> Point {
        self.control2
    }

    pub fn end(&self) -> Point {
        self.end
    }
}

impl fmt::Display for CubicBezier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x(),
            self.start.y(),
            self.control1.x(),
            self.control1.y(),
            self.control2.x(),
            self.control2.y(),
            self.end.x(),
            self.end.y()
        )
    }
}

impl Serialize for CubicBezier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// S-curve from the parent box to the child box.
///
/// Vertical flow runs bottom-center to top-center, horizontal flow runs
/// right-center to left-center. Both control points sit halfway along the
/// flow axis, one level with each endpoint.
pub(crate) fn connect(orientation: Orientation, parent: Bounds, child: Bounds) -> CubicBezier {
    match orientation {
        Orientation::Vertical => {
            let start = parent.bottom_center();
            let end = child.top_center();
            let mid_y = start.midpoint(end).y();
            CubicBezier::new(start, start.with_y(mid_y), end.with_y(mid_y), end)
        }
        Orientation::Horizontal => {
            let start = parent.right_center();
            let end = child.left_center();
            let mid_x = start.midpoint(end).x();
            CubicBezier::new(start, start.with_x(mid_x), end.with_x(mid_x), end)
        }
    }
}

#[cfg(test)]
mod tests {
    use branchline_core::geometry::Size;

    use super::*;

    fn node_box(x: f32, y: f32) -> Bounds {
        Bounds::new_from_top_left(Point::new(x, y), Size::new(100.0, 40.0))
    }

    #[test]
    fn test_vertical_connector() {
        let curve = connect(
            Orientation::Vertical,
            node_box(0.0, 0.0),
            node_box(200.0, 100.0),
        );

        assert_eq!(curve.start(), Point::new(50.0, 40.0));
        assert_eq!(curve.end(), Point::new(250.0, 100.0));
        assert_eq!(curve.control1(), Point::new(50.0, 70.0));
        assert_eq!(curve.control2(), Point::new(250.0, 70.0));
    }

    #[test]
    fn test_horizontal_connector() {
        let curve = connect(
            Orientation::Horizontal,
            node_box(0.0, 0.0),
            node_box(300.0, 80.0),
        );

        assert_eq!(curve.start(), Point::new(100.0, 20.0));
        assert_eq!(curve.end(), Point::new(300.0, 100.0));
        assert_eq!(curve.control1(), Point::new(200.0, 20.0));
        assert_eq!(curve.control2(), Point::new(200.0, 100.0));
    }

    #[test]
    fn test_same_lane_connector_is_straight() {
        let curve = connect(
            Orientation::Vertical,
            node_box(10.0, 0.0),
            node_box(10.0, 100.0),
        );

        let x = curve.start().x();
        assert!([curve.control1(), curve.control2(), curve.end()]
            .iter()
            .all(|point| point.x() == x));
    }

    #[test]
    fn test_path_data() {
        let curve = connect(
            Orientation::Vertical,
            node_box(0.0, 0.0),
            node_box(0.0, 100.0),
        );
        assert_eq!(curve.to_string(), "M 50 40 C 50 70, 50 70, 50 100");
    }
}
