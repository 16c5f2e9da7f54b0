use crate::canvas::Canvas;
use crate::geom::Point;
use crate::path::PathSink;

use super::Shape;

/// Quadrilateral given by its four vertices.
///
/// Unlike [`Rect`](super::Rect), the vertices are free: the quad may be
/// non-axis-aligned or self-intersecting, and is emitted exactly as given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Quad {
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32) -> Self {
        Self {
            a: Point::new(x1, y1),
            b: Point::new(x2, y2),
            c: Point::new(x3, y3),
            d: Point::new(x4, y4),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.a.is_finite() && self.b.is_finite() && self.c.is_finite() && self.d.is_finite()
    }

    /// Closed polygon through the vertices in declaration order.
    pub(crate) fn trace(&self, sink: &mut dyn PathSink) {
        sink.move_to(self.a);
        sink.line_to(self.b);
        sink.line_to(self.c);
        sink.line_to(self.d);
        sink.close();
    }
}

impl Canvas {
    /// Records a quadrilateral through the four given vertices.
    #[inline]
    #[allow(clippy::too_many_arguments)]
    pub fn quad(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        x3: f32,
        y3: f32,
        x4: f32,
        y4: f32,
    ) {
        self.push(Shape::Quad(Quad::new(x1, y1, x2, y2, x3, y3, x4, y4)));
    }
}
