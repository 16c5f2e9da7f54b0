//! Structural path comparison.

use nib_path::Path;

use crate::Mismatch;

/// Checks `actual` against `expected` command by command.
///
/// Coordinates compare with exact floating-point equality. That is the right
/// tool for polygonal emission checked against expectations built from the
/// same integral inputs; curved shapes should use point containment instead.
pub fn match_exact(actual: &Path, expected: &Path) -> Result<(), Mismatch> {
    if actual.len() != expected.len() {
        return Err(Mismatch::CommandCount {
            actual: actual.len(),
            expected: expected.len(),
        });
    }

    for (index, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if a != e {
            return Err(Mismatch::Command {
                index,
                actual: *a,
                expected: *e,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use nib_path::{PathCmd, Point};

    use super::*;

    fn line_path(x2: f32, y2: f32) -> Path {
        Path::from(vec![
            PathCmd::MoveTo(Point::new(0.0, 0.0)),
            PathCmd::LineTo(Point::new(x2, y2)),
        ])
    }

    #[test]
    fn equal_paths_match() {
        assert_eq!(match_exact(&line_path(1.0, 1.0), &line_path(1.0, 1.0)), Ok(()));
    }

    #[test]
    fn length_difference_is_reported_first() {
        let short = Path::from(vec![PathCmd::Close]);
        assert_eq!(
            match_exact(&short, &line_path(1.0, 1.0)),
            Err(Mismatch::CommandCount {
                actual: 1,
                expected: 2,
            })
        );
    }

    #[test]
    fn first_differing_command_is_reported_with_index() {
        let err = match_exact(&line_path(1.0, 1.0), &line_path(2.0, 1.0)).unwrap_err();
        assert_eq!(
            err,
            Mismatch::Command {
                index: 1,
                actual: PathCmd::LineTo(Point::new(1.0, 1.0)),
                expected: PathCmd::LineTo(Point::new(2.0, 1.0)),
            }
        );
    }

    #[test]
    fn empty_paths_match() {
        assert_eq!(match_exact(&Path::new(), &Path::new()), Ok(()));
    }
}
