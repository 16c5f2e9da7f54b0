use crate::canvas::Canvas;
use crate::geom::Point;
use crate::path::PathSink;

use super::Shape;

/// Cubic-Bézier circle constant: control-point offset as a fraction of the
/// radius for a quarter arc, 4/3 · (√2 − 1).
const KAPPA: f32 = 0.552_284_75;

/// Axis-aligned ellipse: center plus full width and height (diameters).
///
/// Parameters follow Processing's default center mode — `ellipse(x, y, w, h)`
/// is centered on `(x, y)`, so its bounding box is
/// `[x − w/2, x + w/2] × [y − h/2, y + h/2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub center: Point,
    pub width: f32,
    pub height: f32,
}

impl Ellipse {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            center: Point::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.center.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Four cubic quarter arcs, clockwise from the right extremum (+Y down),
    /// then close. Each arc lands exactly on a bounding-box extremum, so
    /// those four points are on the path regardless of flattening.
    pub(crate) fn trace(&self, sink: &mut dyn PathSink) {
        let Point { x: cx, y: cy } = self.center;
        let rx = self.width / 2.0;
        let ry = self.height / 2.0;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let right = Point::new(cx + rx, cy);
        let bottom = Point::new(cx, cy + ry);
        let left = Point::new(cx - rx, cy);
        let top = Point::new(cx, cy - ry);

        sink.move_to(right);
        sink.curve_to(bottom, Point::new(cx + rx, cy + ky), Point::new(cx + kx, cy + ry));
        sink.curve_to(left, Point::new(cx - kx, cy + ry), Point::new(cx - rx, cy + ky));
        sink.curve_to(top, Point::new(cx - rx, cy - ky), Point::new(cx - kx, cy - ry));
        sink.curve_to(right, Point::new(cx + kx, cy - ry), Point::new(cx + rx, cy - ky));
        sink.close();
    }
}

impl Canvas {
    /// Records an ellipse centered on `(x, y)` with the given diameters.
    #[inline]
    pub fn ellipse(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(Shape::Ellipse(Ellipse::new(x, y, width, height)));
    }
}

#[cfg(test)]
mod tests {
    use crate::path::PathCmd;
    use crate::shapes::emit;

    use super::*;

    fn p(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    fn curve_endpoints(path: &[PathCmd]) -> Vec<Point> {
        path.iter()
            .filter_map(|cmd| match cmd {
                PathCmd::CurveTo { to, .. } => Some(*to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn four_quarter_arcs_then_close() {
        let path = emit(&Shape::Ellipse(Ellipse::new(100.0, 100.0, 100.0, 100.0)));
        assert_eq!(path.len(), 6);
        assert_eq!(path.commands()[0], PathCmd::MoveTo(p(150.0, 100.0)));
        assert_eq!(path.commands()[5], PathCmd::Close);
    }

    #[test]
    fn arcs_land_on_bounding_box_extrema() {
        let path = emit(&Shape::Ellipse(Ellipse::new(0.0, 0.0, 100.0, 100.0)));
        assert_eq!(
            curve_endpoints(path.commands()),
            [p(0.0, 50.0), p(-50.0, 0.0), p(0.0, -50.0), p(50.0, 0.0)]
        );
    }

    #[test]
    fn zero_size_collapses_to_the_center() {
        let path = emit(&Shape::Ellipse(Ellipse::new(10.0, 10.0, 0.0, 0.0)));
        assert_eq!(path.len(), 6);
        assert!(curve_endpoints(path.commands()).iter().all(|&e| e == p(10.0, 10.0)));
    }
}
