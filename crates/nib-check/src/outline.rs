//! Boundary containment: is a sample point on (or inside) a path outline?

use nib_path::{Path, Point};

use crate::Mismatch;
use crate::flatten::flatten_path;

/// Chord tolerance used when flattening curves for containment checks.
pub const FLATNESS: f32 = 0.05;

/// Maximum distance from the flattened outline at which a point still counts
/// as "on" it. Covers the flattening error plus float noise.
pub const OUTLINE_TOLERANCE: f32 = 0.1;

/// True if `point` lies on the outline of `path` or inside the region the
/// outline encloses (even-odd rule).
pub fn contains_point(path: &Path, point: Point) -> bool {
    let polylines = flatten_path(path, FLATNESS);
    polylines_contain(&polylines, point)
}

/// Checks that every sample point satisfies [`contains_point`].
///
/// Reports the first failing point.
pub fn contains_points(path: &Path, points: &[Point]) -> Result<(), Mismatch> {
    let polylines = flatten_path(path, FLATNESS);
    for &point in points {
        if !polylines_contain(&polylines, point) {
            return Err(Mismatch::PointOffPath { point });
        }
    }
    Ok(())
}

fn polylines_contain(polylines: &[Vec<Point>], point: Point) -> bool {
    if on_outline(polylines, point, OUTLINE_TOLERANCE) {
        return true;
    }
    if encloses(polylines, point) {
        log::debug!("point {point} is enclosed by the path but not on its outline");
        return true;
    }
    false
}

/// Distance from `p` to the closed edge loop of each polyline.
fn on_outline(polylines: &[Vec<Point>], p: Point, tolerance: f32) -> bool {
    polylines.iter().any(|poly| {
        let n = poly.len();
        (0..n).any(|i| segment_distance(p, poly[i], poly[(i + 1) % n]) <= tolerance)
    })
}

/// Even-odd fill test: a horizontal ray toward +X, crossings counted across
/// every subpath loop.
fn encloses(polylines: &[Vec<Point>], p: Point) -> bool {
    let mut inside = false;
    for poly in polylines {
        let n = poly.len();
        for i in 0..n {
            let a = poly[i];
            let b = poly[(i + 1) % n];
            if (a.y > p.y) != (b.y > p.y) {
                let cross_x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < cross_x {
                    inside = !inside;
                }
            }
        }
    }
    inside
}

fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let ap = p - a;
    let t = ((ap.x * ab.x + ap.y * ab.y) / len_sq).clamp(0.0, 1.0);
    p.distance(a.lerp(b, t))
}
