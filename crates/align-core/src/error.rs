// File: crates/align-core/src/error.rs
// Summary: Domain error for comparison input validation.

use thiserror::Error;

/// Which of the two compared shapes an input belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Design,
    Actual,
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shape::Design => f.write_str("design"),
            Shape::Actual => f.write_str("actual"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CompareError {
    /// A quadrilateral was supplied with a point count other than 4.
    #[error("{which} shape must have exactly 4 points (got {found})")]
    InvalidInputLength { which: Shape, found: usize },
}
