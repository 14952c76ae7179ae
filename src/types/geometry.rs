//! Pixel-space geometry primitives for tile shapes.

use serde::{Deserialize, Serialize};

use super::StaggerAxis;

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge of the rectangle.
    pub const fn max_x(&self) -> i32 {
        self.x + self.width
    }

    /// Bottom edge of the rectangle.
    pub const fn max_y(&self) -> i32 {
        self.y + self.height
    }
}

/// A closed polygon in pixel space.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Create a polygon from a list of vertices.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Create a rectangular polygon (four vertices, clockwise from top-left).
    pub fn rect(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(vec![
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ])
    }

    /// Create a hexagon anchored at `(x, y)` (the top-left of its bounding
    /// box), laid out for the given stagger axis.
    ///
    /// `side` is the hex side length, `r` half the cross-axis tile extent,
    /// and `t` the flat inset `(tile extent - side) / 2` along the stagger
    /// axis. `StaggerAxis::X` produces a flat-top hexagon, `StaggerAxis::Y`
    /// a pointy-top one. An undefined axis yields a degenerate rectangle of
    /// the bounding box.
    pub fn hex(x: i32, y: i32, axis: StaggerAxis, side: i32, r: i32, t: i32) -> Self {
        match axis {
            StaggerAxis::X => Self::new(vec![
                Point::new(x + t, y),
                Point::new(x + t + side, y),
                Point::new(x + 2 * t + side, y + r),
                Point::new(x + t + side, y + 2 * r),
                Point::new(x + t, y + 2 * r),
                Point::new(x, y + r),
            ]),
            StaggerAxis::Y => Self::new(vec![
                Point::new(x + r, y),
                Point::new(x + 2 * r, y + t),
                Point::new(x + 2 * r, y + t + side),
                Point::new(x + r, y + 2 * t + side),
                Point::new(x, y + t + side),
                Point::new(x, y + t),
            ]),
            StaggerAxis::Undefined => Self::rect(x, y, 2 * t + side, 2 * r),
        }
    }

    /// The polygon's vertices.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Bounding box of the polygon, or `None` if it has no vertices.
    pub fn bounds(&self) -> Option<Rect> {
        let first = self.points.first()?;
        let mut min = *first;
        let mut max = *first;
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Rect::new(min.x, min.y, max.x - min.x, max.y - min.y))
    }
}
