//! Geometry value types in host pixel space.

use serde::{Deserialize, Serialize};

/// A point in host coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate compared against `edge`: `y` for horizontal edges
    /// (top/bottom), `x` for vertical ones (left/right).
    pub fn coordinate_for(&self, edge: Edge) -> i64 {
        match edge.axis() {
            Axis::Vertical => i64::from(self.y),
            Axis::Horizontal => i64::from(self.x),
        }
    }

    /// Offset this point up and to the left by half of `size`, so that a
    /// box of that size placed here is centered on the original point.
    pub fn centering(&self, size: ElementSize) -> Point {
        Point {
            x: self.x.saturating_sub_unsigned(size.width / 2),
            y: self.y.saturating_sub_unsigned(size.height / 2),
        }
    }
}

/// Width and height of a drawable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ElementSize {
    pub width: u32,
    pub height: u32,
}

impl ElementSize {
    pub const ZERO: ElementSize = ElementSize {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Divide both dimensions by `divisor`, flooring.
    pub fn div_floor(&self, divisor: u32) -> ElementSize {
        ElementSize {
            width: self.width / divisor,
            height: self.height / divisor,
        }
    }
}

/// Axis along which distance to an edge is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Measured along x (left/right edges).
    Horizontal,
    /// Measured along y (top/bottom edges).
    Vertical,
}

/// One of the four boundaries of a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in tie-break order.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn axis(&self) -> Axis {
        match self {
            Edge::Top | Edge::Bottom => Axis::Vertical,
            Edge::Left | Edge::Right => Axis::Horizontal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        }
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bounds of a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> i64 {
        i64::from(self.y)
    }

    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn left(&self) -> i64 {
        i64::from(self.x)
    }

    /// Coordinate of the given edge: a y value for top/bottom, an x value
    /// for left/right.
    pub fn edge_coordinate(&self, edge: Edge) -> i64 {
        match edge {
            Edge::Top => self.top(),
            Edge::Right => self.right(),
            Edge::Bottom => self.bottom(),
            Edge::Left => self.left(),
        }
    }

    /// Whether `point` lies within the bounds, edges inclusive.
    pub fn contains(&self, point: Point) -> bool {
        let (px, py) = (i64::from(point.x), i64::from(point.y));
        px >= self.left() && px <= self.right() && py >= self.top() && py <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10, 20, 300, 200);
        assert_eq!(rect.top(), 20);
        assert_eq!(rect.right(), 310);
        assert_eq!(rect.bottom(), 220);
        assert_eq!(rect.left(), 10);
        assert_eq!(rect.edge_coordinate(Edge::Right), 310);
    }

    #[test]
    fn test_rect_edges_do_not_overflow() {
        let rect = Rect::new(i32::MAX, i32::MAX, u32::MAX, u32::MAX);
        assert_eq!(rect.right(), i64::from(i32::MAX) + i64::from(u32::MAX));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::new(0, 0, 100, 50);
        assert!(rect.contains(Point::new(0, 0)));
        assert!(rect.contains(Point::new(100, 50)));
        assert!(!rect.contains(Point::new(101, 10)));
        assert!(!rect.contains(Point::new(-1, 10)));
    }

    #[test]
    fn test_coordinate_for_edge() {
        let p = Point::new(7, 9);
        assert_eq!(p.coordinate_for(Edge::Top), 9);
        assert_eq!(p.coordinate_for(Edge::Bottom), 9);
        assert_eq!(p.coordinate_for(Edge::Left), 7);
        assert_eq!(p.coordinate_for(Edge::Right), 7);
    }

    #[test]
    fn test_centering_floors_half_size() {
        let p = Point::new(50, 50);
        assert_eq!(p.centering(ElementSize::new(21, 10)), Point::new(40, 45));
        assert_eq!(
            Point::new(i32::MIN, 0).centering(ElementSize::new(10, 0)),
            Point::new(i32::MIN, 0)
        );
    }

    #[test]
    fn test_div_floor() {
        assert_eq!(
            ElementSize::new(201, 99).div_floor(2),
            ElementSize::new(100, 49)
        );
        assert_eq!(ElementSize::new(1, 1).div_floor(2), ElementSize::ZERO);
    }

    #[test]
    fn test_edge_serde_names() {
        assert_eq!(serde_json::to_string(&Edge::Bottom).unwrap(), "\"bottom\"");
        let edge: Edge = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(edge, Edge::Left);
        assert_eq!(Edge::Right.to_string(), "right");
    }
}
