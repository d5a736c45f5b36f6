//! Core geometric types: axis-aligned bounding boxes and y-up rectangles.

use crate::math::{Point3, Vector3};

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BBox3 {
    pub min: Point3,
    pub max: Point3,
}

impl BBox3 {
    pub fn new(min: Point3, max: Point3) -> Self { Self { min, max } }
    pub fn center(&self) -> Point3 { nalgebra::center(&self.min, &self.max) }
    pub fn size(&self) -> Vector3 { self.max - self.min }
    pub fn contains(&self, p: Point3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Component-wise intersection of two boxes.
    ///
    /// If the boxes are disjoint the result has `min > max` on at least one
    /// axis; callers must treat such a box as empty (not checked here).
    pub fn intersection(&self, other: &BBox3) -> BBox3 {
        BBox3 {
            min: Point3::new(
                self.min.x.max(other.min.x),
                self.min.y.max(other.min.y),
                self.min.z.max(other.min.z),
            ),
            max: Point3::new(
                self.max.x.min(other.max.x),
                self.max.y.min(other.max.y),
                self.max.z.min(other.max.z),
            ),
        }
    }

    /// Corner of the box by hull-vertex index.
    ///
    /// The numbering matches the silhouette lookup table in [`crate::visibility`]:
    /// index 0 is the min corner, 6 the max corner, indices 0-3 lie on the
    /// far (`min.z`) face and 4-7 on the near (`max.z`) face. Out-of-range
    /// indices fall back to the min corner.
    pub fn hull_vertex(&self, index: usize) -> Point3 {
        match index {
            0 => self.min,
            1 => Point3::new(self.max.x, self.min.y, self.min.z),
            2 => Point3::new(self.max.x, self.max.y, self.min.z),
            3 => Point3::new(self.min.x, self.max.y, self.min.z),
            4 => Point3::new(self.min.x, self.min.y, self.max.z),
            5 => Point3::new(self.max.x, self.min.y, self.max.z),
            6 => self.max,
            7 => Point3::new(self.min.x, self.max.y, self.max.z),
            _ => self.min,
        }
    }
}

/// Axis-aligned screen-space rectangle with y increasing upward.
///
/// Distinct from window-system rectangles, which usually put y downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Rect {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }
    pub fn width(&self) -> f64 { self.x_max - self.x_min }
    pub fn height(&self) -> f64 { self.y_max - self.y_min }
    pub fn area(&self) -> f64 { self.width() * self.height() }
}
