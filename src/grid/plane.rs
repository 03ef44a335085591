//! Manhattan distance and axis-aligned neighbors on a `width x height` plane.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The points `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plane {
    width: usize,
    height: usize,
}

impl Plane {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `p` lies on the plane.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    /// Manhattan distance. Defined for any two points, on the plane or not.
    pub const fn distance(&self, p1: Point, p2: Point) -> usize {
        p1.x.abs_diff(p2.x) + p1.y.abs_diff(p2.y)
    }

    /// Axis-aligned neighbors of `p` that lie on the plane, in the order
    /// +x, -x, +y, -y. Empty if `p` itself is off the plane.
    pub fn neighbors(&self, p: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(4);
        if !self.contains(p) {
            return out;
        }
        if p.x + 1 < self.width {
            out.push(Point::new(p.x + 1, p.y));
        }
        if p.x > 0 {
            out.push(Point::new(p.x - 1, p.y));
        }
        if p.y + 1 < self.height {
            out.push(Point::new(p.x, p.y + 1));
        }
        if p.y > 0 {
            out.push(Point::new(p.x, p.y - 1));
        }
        out
    }
}
