use crate::geom::Point;

use super::{Path, PathCmd};

/// Sink capability for path-construction commands.
///
/// Anything that accepts move/line/curve/close in order can stand in as a
/// drawing context: the accumulating [`PathBuilder`], an adapter onto a
/// platform 2D context, or a test double.
pub trait PathSink {
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn curve_to(&mut self, to: Point, ctrl1: Point, ctrl2: Point);
    fn close(&mut self);
}

/// [`PathSink`] that records commands into a [`Path`].
///
/// One builder is scoped to one emission: record, then take the result with
/// [`finish`](PathBuilder::finish). The intermediate state is inspectable
/// through [`path`](PathBuilder::path).
#[derive(Debug, Default)]
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrows the path accumulated so far.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes the builder and returns the accumulated path.
    #[inline]
    pub fn finish(self) -> Path {
        self.path
    }

    /// Drops recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.path.clear();
    }
}

impl PathSink for PathBuilder {
    #[inline]
    fn move_to(&mut self, p: Point) {
        self.path.push(PathCmd::MoveTo(p));
    }

    #[inline]
    fn line_to(&mut self, p: Point) {
        self.path.push(PathCmd::LineTo(p));
    }

    #[inline]
    fn curve_to(&mut self, to: Point, ctrl1: Point, ctrl2: Point) {
        self.path.push(PathCmd::CurveTo { to, ctrl1, ctrl2 });
    }

    #[inline]
    fn close(&mut self) {
        self.path.push(PathCmd::Close);
    }
}
