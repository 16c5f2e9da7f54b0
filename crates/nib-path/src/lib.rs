//! Shape-to-path emission core for the **nib** drawing facade.
//!
//! Translates Processing-style shape primitives (`line`, `rect`, `ellipse`,
//! `triangle`, `quad`) into renderer-agnostic vector path commands. There is
//! no rasterization and no windowing here: the output is a [`Path`] that a
//! platform 2D context, an exporter, or a test harness can consume.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`geom`] | `Point` |
//! | [`path`] | `PathCmd`, `Path`, `PathSink`, `PathBuilder` |
//! | [`shapes`] | `Shape`, per-shape payloads, `emit` |
//! | [`canvas`] | `Canvas` recording facade |
//! | [`logging`] | logger initialization |
//!
//! # Quick start
//!
//! ```rust
//! use nib_path::shapes::Line;
//! use nib_path::{emit, PathCmd, Point, Shape};
//!
//! let path = emit(&Shape::Line(Line::new(0.0, 0.0, 100.0, 100.0)));
//! assert_eq!(
//!     path.commands(),
//!     [
//!         PathCmd::MoveTo(Point::new(0.0, 0.0)),
//!         PathCmd::LineTo(Point::new(100.0, 100.0)),
//!     ]
//! );
//! ```

pub mod canvas;
pub mod geom;
pub mod logging;
pub mod path;
pub mod shapes;

pub use canvas::Canvas;
pub use geom::Point;
pub use path::{Path, PathBuilder, PathCmd, PathSink};
pub use shapes::{Shape, emit};
