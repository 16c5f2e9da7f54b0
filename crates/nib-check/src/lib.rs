//! Path-equivalence checks for `nib-path` emitted vector geometry.
//!
//! Two comparison modes with genuinely different semantics:
//!
//! - **structural** — [`match_exact`] compares command sequences
//!   element-wise. Right for polygonal shapes whose emission is fully
//!   pinned down.
//! - **geometric** — [`contains_points`] flattens curves and checks that
//!   sample points lie on (or inside) the outline. Right for curved shapes
//!   whose control points are an implementation detail.
//!
//! [`Suite`] runs named cases and reports every failure at once, so one bad
//! case never hides its siblings.
//!
//! # Quick start
//!
//! ```rust
//! use nib_check::assert_on_path;
//! use nib_path::shapes::Ellipse;
//! use nib_path::{Point, Shape, emit};
//!
//! let path = emit(&Shape::Ellipse(Ellipse::new(0.0, 0.0, 100.0, 100.0)));
//! assert_on_path(
//!     "draw ellipse(0, 0, 100, 100)",
//!     &path,
//!     &[Point::new(50.0, 0.0), Point::new(0.0, 50.0)],
//! );
//! ```

mod compare;
mod flatten;
mod mismatch;
mod outline;
mod suite;

pub use compare::match_exact;
pub use mismatch::Mismatch;
pub use outline::{FLATNESS, OUTLINE_TOLERANCE, contains_point, contains_points};
pub use suite::{Suite, assert_on_path, assert_path_eq};
