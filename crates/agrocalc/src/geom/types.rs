use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::serde_xy;
use super::util::{bounding_box, shoelace_signed_area};

/// Closed ring of points in a local, lower-left anchored frame.
///
/// Built only by the generators in this crate, which always repeat the first point
/// at the end, even for zero-size shapes where every point coincides.
/// Serializes as `{"points": [{"x": .., "y": ..}, ..]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polygon2 {
    #[serde(with = "serde_xy::points")]
    pub points: Vec<Vector2<f64>>,
}

impl Polygon2 {
    /// Close an open vertex list by repeating its first point.
    #[inline]
    pub(crate) fn closed(mut points: Vec<Vector2<f64>>) -> Self {
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last point coincide within `eps`.
    pub fn is_closed(&self, eps: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) if self.points.len() > 1 => (a - b).norm() <= eps,
            _ => false,
        }
    }

    /// Number of distinct vertices (closing point not counted).
    pub fn vertex_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// X column, in ring order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Y column, in ring order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Shoelace area; positive for counterclockwise rings.
    pub fn signed_area(&self) -> f64 {
        shoelace_signed_area(&self.points)
    }

    /// Axis-aligned `(min, max)` corners, `None` for an empty ring.
    pub fn bounding_box(&self) -> Option<(Vector2<f64>, Vector2<f64>)> {
        bounding_box(&self.points)
    }
}

/// Open line segment `start → end`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment2 {
    #[serde(with = "serde_xy::point")]
    pub start: Vector2<f64>,
    #[serde(with = "serde_xy::point")]
    pub end: Vector2<f64>,
}

impl Segment2 {
    #[inline]
    pub fn new(start: Vector2<f64>, end: Vector2<f64>) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}
