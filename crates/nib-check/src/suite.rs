//! Named-case assertions and the suite runner.

use nib_path::{Path, Point};

use crate::{Mismatch, contains_points, match_exact};

/// Panics unless `actual` structurally equals `expected`.
///
/// `desc` names the case in the failure message.
pub fn assert_path_eq(desc: &str, actual: &Path, expected: &Path) {
    if let Err(m) = match_exact(actual, expected) {
        panic!("{desc}: {m}");
    }
}

/// Panics unless every point lies on or inside the outline of `path`.
pub fn assert_on_path(desc: &str, path: &Path, points: &[Point]) {
    if let Err(m) = contains_points(path, points) {
        panic!("{desc}: {m}");
    }
}

/// Collects failures across named cases and reports them together.
///
/// A failing case never hides its siblings: record every case, then call
/// [`finish`](Suite::finish) once.
///
/// ```
/// use nib_check::{Suite, match_exact};
/// use nib_path::shapes::Line;
/// use nib_path::{Shape, emit};
///
/// let mut suite = Suite::new();
/// let actual = emit(&Shape::Line(Line::new(0.0, 0.0, 1.0, 1.0)));
/// let expected = actual.clone();
/// suite.case("draw line(0, 0, 1, 1)", match_exact(&actual, &expected));
/// suite.finish();
/// ```
#[derive(Debug, Default)]
pub struct Suite {
    cases: usize,
    failures: Vec<String>,
}

impl Suite {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one named case.
    pub fn case(&mut self, desc: &str, outcome: Result<(), Mismatch>) {
        self.cases += 1;
        if let Err(m) = outcome {
            self.failures.push(format!("{desc}: {m}"));
        }
    }

    /// Failure messages recorded so far.
    #[inline]
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Panics with every recorded failure, if any case failed.
    pub fn finish(self) {
        if !self.failures.is_empty() {
            panic!(
                "{} of {} cases failed:\n  {}",
                self.failures.len(),
                self.cases,
                self.failures.join("\n  ")
            );
        }
    }
}
