//! 2D convex-polygon area and rectangle clipping.
//!
//! Polygons are ordered point lists; the ordering carries the winding, and
//! the area routine assumes the clockwise convention used by the silhouette
//! table. Convexity is a caller obligation — non-convex input produces a
//! geometrically meaningless but non-crashing result.

use crate::math::Point2;
use crate::types::Rect;

/// Coordinate axis selector for half-plane clipping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    fn coord(self, p: &Point2) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Area of a convex 2D polygon with clockwise winding.
///
/// Contour integral (shoelace formula); the division and the sign flip for
/// the clockwise convention happen once at the end. O(n) in vertex count.
/// Degenerate input (fewer than 3 points) yields 0.
pub fn screen_area(poly: &[Point2]) -> f64 {
    let mut sum = 0.0;
    for i in 0..poly.len() {
        let j = (i + 1) % poly.len();
        sum += (poly[i].x - poly[j].x) * (poly[i].y + poly[j].y);
    }
    -sum * 0.5
}

/// Clips a polygon against a single axis-aligned half-plane.
///
/// With `clip_greater` set, the region with coordinates above `bound` along
/// `axis` is removed; otherwise the region below. Populates `out_poly` with
/// the surviving contour and returns `false`, or returns `true` when every
/// vertex is clipped — `out_poly` is left empty and must not be used.
pub fn clip_axis(
    bound: f64,
    clip_greater: bool,
    axis: Axis,
    in_poly: &[Point2],
    out_poly: &mut Vec<Point2>,
) -> bool {
    out_poly.clear();

    let negate = if clip_greater { -1.0 } else { 1.0 };
    let clipped = |p: &Point2| negate * axis.coord(p) < negate * bound;

    // Find a starting vertex that survives the clip.
    let start = match in_poly.iter().position(|p| !clipped(p)) {
        Some(i) => i,
        None => return true,
    };

    let mut pt1 = in_poly[start];
    out_poly.push(pt1);
    let mut c1 = false;

    // Walk the contour once from the starting vertex:
    //   surviving -> surviving: emit the earlier vertex
    //   surviving -> clipped:   emit the earlier vertex, then the crossing
    //   clipped   -> clipped:   emit nothing
    //   clipped   -> surviving: emit the crossing
    for i in 1..=in_poly.len() {
        let pt2 = in_poly[(i + start) % in_poly.len()];
        let c2 = clipped(&pt2);

        if c1 != c2 {
            if !c1 && i > 1 {
                // the first vertex was already emitted before the walk
                out_poly.push(pt1);
            }

            // exact crossing by linear interpolation along the edge
            let a1 = axis.coord(&pt1);
            let a2 = axis.coord(&pt2);
            let alpha = if a2 == a1 { 0.0 } else { (bound - a1) / (a2 - a1) };
            out_poly.push(pt1 + (pt2 - pt1) * alpha);
        } else if !c1 && i != 1 {
            out_poly.push(pt1);
        }

        pt1 = pt2;
        c1 = c2;
    }

    false
}

/// Clips a polygon to a rectangle.
///
/// Four half-plane clips in sequence; as soon as one stage reports total
/// rejection the remaining stages are skipped and `out_poly` is cleared.
pub fn clip(rect: &Rect, in_poly: &[Point2], out_poly: &mut Vec<Point2>) {
    let mut temp = Vec::with_capacity(10);

    let entirely_clipped = clip_axis(rect.x_min, false, Axis::X, in_poly, &mut temp)
        || clip_axis(rect.x_max, true, Axis::X, &temp, out_poly)
        || clip_axis(rect.y_min, false, Axis::Y, out_poly, &mut temp)
        || clip_axis(rect.y_max, true, Axis::Y, &temp, out_poly);

    if entirely_clipped {
        out_poly.clear();
    }
}
