//! Plain 2D geometry primitives shared by every frame operation.
//!
//! All coordinates are `f64`. Pixel-space values use a y-down convention
//! with the origin at the top-left corner of the image.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A location in a 2D coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Check whether this is exactly the origin.
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Physical size of one pixel along each axis, in micrometres.
///
/// Defaults to 1.0 x 1.0, which is what a frame falls back to when its
/// metadata carries no pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PixelSize {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl PixelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Image dimensions in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle with its origin at `(x, y)`.
///
/// A rectangle with zero or negative width or height is empty. Empty
/// rectangles are ordinary values meaning "no geometry", not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning `[0, 0]` to `size`.
    pub fn from_size(size: ImageSize) -> Self {
        Self::new(0.0, 0.0, size.width as f64, size.height as f64)
    }

    #[inline]
    pub fn x_max(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn y_max(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Area of the rectangle, 0.0 when empty.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// Axis-aligned intersection of two rectangles.
    ///
    /// Returns `Rect::default()` (empty) when the rectangles do not overlap
    /// or either input is empty. Rectangles that only share an edge do not
    /// overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        if self.is_empty() || other.is_empty() {
            return Rect::default();
        }

        let x_min = self.x.max(other.x);
        let y_min = self.y.max(other.y);
        let x_max = self.x_max().min(other.x_max());
        let y_max = self.y_max().min(other.y_max());

        if x_max <= x_min || y_max <= y_min {
            return Rect::default();
        }

        Rect::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }
}

/// Ordered list of vertices. Zero vertices is the empty polygon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Build a new polygon by mapping every vertex, preserving order.
    pub fn map_vertices<F>(&self, f: F) -> Polygon
    where
        F: FnMut(&Point) -> Point,
    {
        Polygon::new(self.vertices.iter().map(f).collect())
    }

    /// Smallest axis-aligned rectangle containing every vertex.
    ///
    /// Returns an empty rectangle for the empty polygon.
    pub fn bounding_rect(&self) -> Rect {
        let Some(first) = self.vertices.first() else {
            return Rect::default();
        };

        let (mut x_min, mut y_min, mut x_max, mut y_max) = (first.x, first.y, first.x, first.y);
        for p in &self.vertices[1..] {
            x_min = x_min.min(p.x);
            y_min = y_min.min(p.y);
            x_max = x_max.max(p.x);
            y_max = y_max.max(p.y);
        }

        Rect::new(x_min, y_min, x_max - x_min, y_max - y_min)
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
