use crate::canvas::Canvas;
use crate::geom::Point;
use crate::path::PathSink;

use super::Shape;

/// Axis-aligned rectangle: top-left origin plus width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.width.is_finite() && self.height.is_finite()
    }

    /// Closed quadrilateral, clockwise from the origin corner (+Y down):
    /// origin, origin+w, origin+w+h, origin+h, close.
    ///
    /// Negative sizes keep the literal corner arithmetic; there is no
    /// normalization at this layer.
    pub(crate) fn trace(&self, sink: &mut dyn PathSink) {
        let Point { x, y } = self.origin;
        sink.move_to(Point::new(x, y));
        sink.line_to(Point::new(x + self.width, y));
        sink.line_to(Point::new(x + self.width, y + self.height));
        sink.line_to(Point::new(x, y + self.height));
        sink.close();
    }
}

impl Canvas {
    /// Records a rectangle with top-left corner `(x, y)`.
    #[inline]
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(Shape::Rect(Rect::new(x, y, width, height)));
    }
}
