//! Geometry primitives shared by shape emission and path inspection.
//!
//! Canonical space:
//! - user-space units (no DPI awareness at this layer)
//! - origin top-left
//! - +X right, +Y down

mod point;

pub use point::Point;
