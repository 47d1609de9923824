// src/geometry.rs

use std::ops::{Add, Mul, Sub};

use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Default)]
pub struct Point2 {
    pub x: f32,
    pub y: f32,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product of `self` and `other`.
    /// Positive when `other` turns counter-clockwise from `self`.
    pub fn cross(&self, other: &Point2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn length(&self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn lerp(&self, other: &Point2, t: f32) -> Point2 {
        Point2::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2 {
    type Output = Point2;

    fn mul(self, rhs: f32) -> Point2 {
        Point2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f32, f32)> for Point2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point2> for glam::Vec2 {
    fn from(p: Point2) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

impl From<glam::Vec2> for Point2 {
    fn from(v: glam::Vec2) -> Self {
        Point2::new(v.x, v.y)
    }
}

/// A directed line segment from `start` to `end`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable, PartialEq, Default)]
pub struct Segment {
    pub start: Point2,
    pub end: Point2,
}

impl Segment {
    pub const fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(sx: f32, sy: f32, ex: f32, ey: f32) -> Self {
        Self::new(Point2::new(sx, sy), Point2::new(ex, ey))
    }

    pub fn direction(&self) -> Point2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.direction().length()
    }

    /// Zero-length segments are valid input; clippers treat them as points.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Point at parameter `t`, where 0 is `start` and 1 is `end`.
    pub fn point_at(&self, t: f32) -> Point2 {
        self.start.lerp(&self.end, t)
    }

    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }
}

/// Flattens segments to `[sx, sy, ex, ey, ...]` without copying, for upload
/// as a line-list vertex stream.
pub fn segments_as_floats(segments: &[Segment]) -> &[f32] {
    bytemuck::cast_slice(segments)
}

/// Axis-aligned rectangle with `left <= right` and `bottom <= top` (y up).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
}

impl Rectangle {
    /// Builds the rectangle spanned by two opposite corners, in any order.
    pub fn from_corners(a: Point2, b: Point2) -> Self {
        Self {
            left: a.x.min(b.x),
            right: a.x.max(b.x),
            top: a.y.max(b.y),
            bottom: a.y.min(b.y),
        }
    }

    /// Like [`Rectangle::from_corners`], the bounds are reordered if swapped.
    pub fn from_bounds(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Self::from_corners(Point2::new(left, bottom), Point2::new(right, top))
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }

    /// Boundary points count as inside.
    pub fn contains(&self, p: &Point2) -> bool {
        self.contains_with_tolerance(p, 0.0)
    }

    pub fn contains_with_tolerance(&self, p: &Point2, tolerance: f32) -> bool {
        p.x >= self.left - tolerance
            && p.x <= self.right + tolerance
            && p.y >= self.bottom - tolerance
            && p.y <= self.top + tolerance
    }

    /// Corners in counter-clockwise order starting at bottom-left.
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.left, self.bottom),
            Point2::new(self.right, self.bottom),
            Point2::new(self.right, self.top),
            Point2::new(self.left, self.top),
        ]
    }
}

/// An ordered, cyclic list of vertices. Edge `i` runs from vertex `i` to
/// vertex `(i + 1) % count`. Convexity is not enforced here; see
/// [`crate::convexity`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ConvexPolygon {
    vertices: Vec<Point2>,
}

impl ConvexPolygon {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn from_points(points: &[Point2]) -> Self {
        Self {
            vertices: points.to_vec(),
        }
    }

    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    pub fn count(&self) -> usize {
        self.vertices.len()
    }

    pub fn push(&mut self, point: Point2) {
        self.vertices.push(point);
    }

    /// Vertex at `index` modulo the vertex count.
    ///
    /// # Panics
    /// Panics if the polygon is empty.
    pub fn vertex(&self, index: usize) -> Point2 {
        self.vertices[index % self.vertices.len()]
    }

    /// Iterates `(start, end)` over every edge, including the closing one.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Shoelace area, positive for counter-clockwise winding.
    pub fn signed_area(&self) -> f32 {
        if self.count() < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for (a, b) in self.edges() {
            area += a.x * b.y;
            area -= b.x * a.y;
        }
        area / 2.0
    }

    pub fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Vertex average. Lies strictly inside any non-degenerate convex polygon.
    pub fn centroid(&self) -> Point2 {
        if self.vertices.is_empty() {
            return Point2::ORIGIN;
        }
        let sum = self
            .vertices
            .iter()
            .fold(Point2::ORIGIN, |acc, &p| acc + p);
        sum * (1.0 / self.vertices.len() as f32)
    }
}

impl From<Rectangle> for ConvexPolygon {
    fn from(rect: Rectangle) -> Self {
        ConvexPolygon::from_points(&rect.corners())
    }
}
