//! Curve flattening for containment checks.

use nib_path::{Path, PathCmd, Point};

/// A cubic Bézier segment in 2D.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CubicSegment {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicSegment {
    fn subdivide(&self, t: f32) -> (Self, Self) {
        let q0 = self.p0.lerp(self.p1, t);
        let q1 = self.p1.lerp(self.p2, t);
        let q2 = self.p2.lerp(self.p3, t);
        let r0 = q0.lerp(q1, t);
        let r1 = q1.lerp(q2, t);
        let p = r0.lerp(r1, t);

        (
            Self {
                p0: self.p0,
                p1: q0,
                p2: r0,
                p3: p,
            },
            Self {
                p0: p,
                p1: r1,
                p2: q2,
                p3: self.p3,
            },
        )
    }

    fn is_flat(&self, tolerance: f32) -> bool {
        let t = tolerance * tolerance;
        ((self.p0 + self.p2) * 0.5 - self.p1).length_squared() <= t
            && ((self.p1 + self.p3) * 0.5 - self.p2).length_squared() <= t
    }

    /// Appends the polyline approximation of this segment, excluding `p0`
    /// (the caller has already placed the segment start).
    pub(crate) fn flatten_into(&self, points: &mut Vec<Point>, tolerance: f32) {
        if self.is_flat(tolerance) {
            points.push(self.p3);
        } else {
            let (a, b) = self.subdivide(0.5);
            a.flatten_into(points, tolerance);
            b.flatten_into(points, tolerance);
        }
    }
}

/// Flattens a path into one polyline per subpath.
///
/// Curves are subdivided until they deviate from their chord by at most
/// `tolerance`. Containment treats every polyline as a loop (last point
/// connects back to the first), matching how a fill reads both `Close`d and
/// unterminated subpaths. Degenerate subpaths with fewer than two points are
/// dropped.
pub(crate) fn flatten_path(path: &Path, tolerance: f32) -> Vec<Vec<Point>> {
    let mut polylines: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut cursor = Point::zero();

    let mut take = |current: &mut Vec<Point>| {
        if current.len() > 1 {
            polylines.push(std::mem::take(current));
        } else {
            current.clear();
        }
    };

    for cmd in path {
        match *cmd {
            PathCmd::MoveTo(p) => {
                take(&mut current);
                current.push(p);
                cursor = p;
            }
            PathCmd::LineTo(p) => {
                if current.is_empty() {
                    current.push(cursor);
                }
                current.push(p);
                cursor = p;
            }
            PathCmd::CurveTo { to, ctrl1, ctrl2 } => {
                if current.is_empty() {
                    current.push(cursor);
                }
                let seg = CubicSegment {
                    p0: cursor,
                    p1: ctrl1,
                    p2: ctrl2,
                    p3: to,
                };
                seg.flatten_into(&mut current, tolerance);
                cursor = to;
            }
            PathCmd::Close => {
                // The pen returns to the subpath start; drawing after a close
                // continues from there.
                if let Some(&first) = current.first() {
                    cursor = first;
                }
                take(&mut current);
            }
        }
    }
    take(&mut current);

    polylines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn polygonal_path_flattens_to_its_vertices() {
        let path = Path::from(vec![
            PathCmd::MoveTo(p(0.0, 0.0)),
            PathCmd::LineTo(p(10.0, 0.0)),
            PathCmd::LineTo(p(10.0, 10.0)),
            PathCmd::Close,
        ]);
        let polys = flatten_path(&path, 0.1);
        assert_eq!(polys, [vec![p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0)]]);
    }

    #[test]
    fn each_move_to_starts_a_new_subpath() {
        let path = Path::from(vec![
            PathCmd::MoveTo(p(0.0, 0.0)),
            PathCmd::LineTo(p(1.0, 0.0)),
            PathCmd::MoveTo(p(5.0, 5.0)),
            PathCmd::LineTo(p(6.0, 5.0)),
        ]);
        assert_eq!(flatten_path(&path, 0.1).len(), 2);
    }

    #[test]
    fn lone_move_to_is_dropped() {
        let path = Path::from(vec![PathCmd::MoveTo(p(3.0, 3.0))]);
        assert!(flatten_path(&path, 0.1).is_empty());
    }

    #[test]
    fn curve_flattening_preserves_the_endpoint() {
        let path = Path::from(vec![
            PathCmd::MoveTo(p(0.0, 0.0)),
            PathCmd::CurveTo {
                to: p(10.0, 0.0),
                ctrl1: p(0.0, 6.0),
                ctrl2: p(10.0, 6.0),
            },
        ]);
        let polys = flatten_path(&path, 0.05);
        let poly = &polys[0];
        assert_eq!(poly.first(), Some(&p(0.0, 0.0)));
        assert_eq!(poly.last(), Some(&p(10.0, 0.0)));
        assert!(poly.len() > 2, "a bowed curve must subdivide");
    }

    #[test]
    fn quarter_arc_stays_near_the_radius() {
        // Quarter circle of radius 10 about the origin, standard cubic
        // approximation.
        let k = 5.522_847_5;
        let path = Path::from(vec![
            PathCmd::MoveTo(p(10.0, 0.0)),
            PathCmd::CurveTo {
                to: p(0.0, 10.0),
                ctrl1: p(10.0, k),
                ctrl2: p(k, 10.0),
            },
        ]);
        let polys = flatten_path(&path, 0.01);
        for q in &polys[0] {
            let r = q.length();
            assert!((r - 10.0).abs() < 0.05, "point {q} at radius {r}");
        }
    }
}
