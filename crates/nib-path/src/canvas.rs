//! Processing-style recording facade.

use crate::path::{Path, PathBuilder};
use crate::shapes::Shape;

/// Records successive shape primitives into one accumulated [`Path`].
///
/// Mirrors the immediate-mode surface of Processing-style APIs: each call
/// appends that shape's subpath to the canvas path. The per-shape helpers
/// (`line`, `rect`, `ellipse`, `triangle`, `quad`) live next to their
/// payload types under `shapes::*`.
///
/// ```
/// use nib_path::Canvas;
///
/// let mut canvas = Canvas::new();
/// canvas.rect(20.0, 20.0, 30.0, 50.0);
/// canvas.line(0.0, 0.0, 100.0, 100.0);
/// assert_eq!(canvas.path().len(), 7);
/// ```
#[derive(Debug, Default)]
pub struct Canvas {
    builder: PathBuilder,
}

impl Canvas {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records any shape descriptor.
    ///
    /// Emission accepts every input; non-finite coordinates are still
    /// recorded verbatim but noted at debug level, since they usually mean
    /// an upstream arithmetic bug.
    pub fn push(&mut self, shape: Shape) {
        if !shape.is_finite() {
            log::debug!("canvas: non-finite coordinates in {shape:?}");
        }
        shape.trace(&mut self.builder);
    }

    /// Borrows the accumulated path.
    #[inline]
    pub fn path(&self) -> &Path {
        self.builder.path()
    }

    /// Consumes the canvas and returns the accumulated path.
    #[inline]
    pub fn into_path(self) -> Path {
        self.builder.finish()
    }

    /// Drops recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.builder.clear();
    }
}
