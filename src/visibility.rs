//! Silhouette lookup for projected bounding boxes.
//!
//! Follows Schmalstieg and Tobler's "Real-Time Bounding Box Area
//! Computation": six sign tests against the face planes of an axis-aligned
//! box place the viewpoint in one of 26 outside regions (plus inside),
//! encoded as a 6-bit integer. That code indexes a constant table whose rows
//! list, in contour order, the box corners forming the silhouette of the
//! projected box. Projecting those corners to 2D and running the contour
//! integral in [`crate::polygon`] yields the projected area without
//! rasterization.
//!
//! All-zero rows encode "viewpoint inside the box"; callers rely on
//! `number(code) == 0` as that signal. Codes of 43 and above do not name a
//! region at all and both accessors return 0 for them.

use crate::math::Point3;
use crate::types::BBox3;

/// Position of the viewpoint relative to one face slab of a box.
///
/// The discriminant is the bit index in the relative-position code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RelativePosition {
    Left = 0,
    Right = 1,
    Bottom = 2,
    Top = 3,
    Front = 4,
    Back = 5,
}

/// Hull vertex table.
///
/// Columns 0-5 hold the silhouette corner indices in contour order, column 6
/// the number of meaningful entries (4 or 6, 0 for inside-the-box rows).
#[rustfmt::skip]
static HULL_VERTEX_TABLE: [[u8; 7]; 43] = [
    [0, 0, 0, 0, 0, 0, 0], // 0:  inside box
    [0, 4, 7, 3, 0, 0, 4], // 1:  left
    [1, 2, 6, 5, 0, 0, 4], // 2:  right
    [0, 0, 0, 0, 0, 0, 0], // 3:  inside box
    [0, 1, 5, 4, 0, 0, 4], // 4:  bottom
    [0, 1, 5, 4, 7, 3, 6], // 5:  bottom left
    [0, 1, 2, 6, 5, 4, 6], // 6:  bottom right
    [0, 0, 0, 0, 0, 0, 0], // 7:  inside box
    [2, 3, 7, 6, 0, 0, 4], // 8:  top
    [4, 7, 6, 2, 3, 0, 6], // 9:  top left
    [2, 3, 7, 6, 5, 1, 6], // 10: top right
    [0, 0, 0, 0, 0, 0, 0], // 11: inside box
    [0, 0, 0, 0, 0, 0, 0], // 12: inside box
    [0, 0, 0, 0, 0, 0, 0], // 13: inside box
    [0, 0, 0, 0, 0, 0, 0], // 14: inside box
    [0, 0, 0, 0, 0, 0, 0], // 15: inside box
    [0, 3, 2, 1, 0, 0, 4], // 16: front
    [0, 4, 7, 3, 2, 1, 6], // 17: front left
    [0, 3, 2, 6, 5, 1, 6], // 18: front right
    [0, 0, 0, 0, 0, 0, 0], // 19: inside box
    [0, 3, 2, 1, 5, 4, 6], // 20: front bottom
    [2, 1, 5, 4, 7, 3, 6], // 21: front bottom left
    [0, 3, 2, 6, 5, 4, 6], // 22: front bottom right
    [0, 0, 0, 0, 0, 0, 0], // 23: inside box
    [0, 3, 7, 6, 2, 1, 6], // 24: front top
    [0, 4, 7, 6, 2, 1, 6], // 25: front top left
    [0, 3, 7, 6, 5, 1, 6], // 26: front top right
    [0, 0, 0, 0, 0, 0, 0], // 27: inside box
    [0, 0, 0, 0, 0, 0, 0], // 28: inside box
    [0, 0, 0, 0, 0, 0, 0], // 29: inside box
    [0, 0, 0, 0, 0, 0, 0], // 30: inside box
    [0, 0, 0, 0, 0, 0, 0], // 31: inside box
    [4, 5, 6, 7, 0, 0, 4], // 32: back
    [4, 5, 6, 7, 3, 0, 6], // 33: back left
    [1, 2, 6, 7, 4, 5, 6], // 34: back right
    [0, 0, 0, 0, 0, 0, 0], // 35: inside box
    [0, 1, 5, 6, 7, 4, 6], // 36: back bottom
    [0, 1, 5, 6, 7, 3, 6], // 37: back bottom left
    [0, 1, 2, 6, 7, 4, 6], // 38: back bottom right
    [0, 0, 0, 0, 0, 0, 0], // 39: inside box
    [2, 3, 7, 4, 5, 6, 6], // 40: back top
    [0, 4, 5, 6, 2, 3, 6], // 41: back top left
    [1, 2, 3, 7, 4, 5, 6], // 42: back top right
];

/// Number of silhouette vertices for a relative-position code.
///
/// Zero for inside-the-box codes and for any code outside the table.
pub fn number(code: usize) -> usize {
    if code >= 43 {
        return 0;
    }
    HULL_VERTEX_TABLE[code][6] as usize
}

/// Silhouette corner index at `index` (0-5) for a relative-position code.
///
/// Entries past `number(code)` are zero, as is anything for a code outside
/// the table.
pub fn vertex(index: usize, code: usize) -> usize {
    if code >= 43 {
        return 0;
    }
    HULL_VERTEX_TABLE[code][index] as usize
}

/// 6-bit relative-position code of a viewpoint with respect to a box.
///
/// Bit k is set iff the viewpoint lies on the outer side of face k, in
/// [`RelativePosition`] bit order. A viewpoint inside the box produces 0.
pub fn position_code(viewpoint: &Point3, bbox: &BBox3) -> usize {
    let mut code = 0;
    if viewpoint.x < bbox.min.x {
        code |= 1 << RelativePosition::Left as usize;
    }
    if viewpoint.x > bbox.max.x {
        code |= 1 << RelativePosition::Right as usize;
    }
    if viewpoint.y < bbox.min.y {
        code |= 1 << RelativePosition::Bottom as usize;
    }
    if viewpoint.y > bbox.max.y {
        code |= 1 << RelativePosition::Top as usize;
    }
    if viewpoint.z < bbox.min.z {
        code |= 1 << RelativePosition::Front as usize;
    }
    if viewpoint.z > bbox.max.z {
        code |= 1 << RelativePosition::Back as usize;
    }
    code
}

/// Ordered silhouette corners of a box for a relative-position code.
///
/// Consecutive points form the edges of the visible contour of the projected
/// box. Empty for inside-the-box and out-of-range codes. The caller projects
/// these to screen space before handing them to [`crate::polygon`].
pub fn hull_points(code: usize, bbox: &BBox3) -> Vec<Point3> {
    let n = number(code);
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        points.push(bbox.hull_vertex(vertex(i, code)));
    }
    points
}
