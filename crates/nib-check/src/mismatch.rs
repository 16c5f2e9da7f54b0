use std::fmt;

use nib_path::{PathCmd, Point};

/// A failed path-equivalence check.
#[derive(Debug, Clone, PartialEq)]
pub enum Mismatch {
    /// The paths hold different numbers of commands.
    CommandCount { actual: usize, expected: usize },
    /// The commands at `index` differ by kind or coordinates.
    Command {
        index: usize,
        actual: PathCmd,
        expected: PathCmd,
    },
    /// A sample point is neither on nor enclosed by the outline.
    PointOffPath { point: Point },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::CommandCount { actual, expected } => {
                write!(f, "path has {actual} commands, expected {expected}")
            }
            Mismatch::Command {
                index,
                actual,
                expected,
            } => {
                write!(f, "command {index} is `{actual}`, expected `{expected}`")
            }
            Mismatch::PointOffPath { point } => {
                write!(f, "point {point} is not on the path outline")
            }
        }
    }
}

impl std::error::Error for Mismatch {}
