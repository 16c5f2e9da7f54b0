//! Prints the path commands a shape emits, one per line.
//!
//! A quick way to eyeball emission without writing a test:
//!
//! ```text
//! $ nib-dump rect 20 20 30 50
//! move (20, 20)
//! line (50, 20)
//! line (50, 70)
//! line (20, 70)
//! close
//! ```

use anyhow::{Context, Result, bail};
use nib_path::logging::{LoggingConfig, init_logging};
use nib_path::shapes::{Ellipse, Line, Quad, Rect, Triangle};
use nib_path::{Shape, emit};

const USAGE: &str = "\
usage: nib-dump <shape> <params...>

shapes:
  line x1 y1 x2 y2
  rect x y w h
  ellipse x y w h              (x, y is the center; w, h are diameters)
  triangle x1 y1 x2 y2 x3 y3
  quad x1 y1 x2 y2 x3 y3 x4 y4";

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let shape = parse_shape(&args)?;
    log::debug!("emitting {shape:?}");

    let path = emit(&shape);
    for cmd in &path {
        println!("{cmd}");
    }
    Ok(())
}

fn parse_shape(args: &[String]) -> Result<Shape> {
    let Some((name, rest)) = args.split_first() else {
        bail!("missing shape name\n\n{USAGE}");
    };
    let p = parse_params(rest)?;

    let shape = match (name.as_str(), p.as_slice()) {
        ("line", &[x1, y1, x2, y2]) => Shape::Line(Line::new(x1, y1, x2, y2)),
        ("rect", &[x, y, w, h]) => Shape::Rect(Rect::new(x, y, w, h)),
        ("ellipse", &[x, y, w, h]) => Shape::Ellipse(Ellipse::new(x, y, w, h)),
        ("triangle", &[x1, y1, x2, y2, x3, y3]) => {
            Shape::Triangle(Triangle::new(x1, y1, x2, y2, x3, y3))
        }
        ("quad", &[x1, y1, x2, y2, x3, y3, x4, y4]) => {
            Shape::Quad(Quad::new(x1, y1, x2, y2, x3, y3, x4, y4))
        }
        ("line" | "rect" | "ellipse" | "triangle" | "quad", _) => {
            bail!("wrong parameter count for `{name}`\n\n{USAGE}")
        }
        _ => bail!("unknown shape `{name}`\n\n{USAGE}"),
    };
    Ok(shape)
}

fn parse_params(args: &[String]) -> Result<Vec<f32>> {
    args.iter()
        .map(|a| {
            a.parse::<f32>()
                .with_context(|| format!("invalid number `{a}`"))
        })
        .collect()
}
