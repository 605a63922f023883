//! Errors surfaced by the triangle engine.

use std::fmt;

use thiserror::Error;

use crate::tri::Label;

/// Why a triangle was rejected as degenerate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegenerateReason {
    /// Two (or all three) vertices coincide.
    CoincidentPoints,
    /// The vertices lie on one line.
    Collinear,
    /// A law-of-cosines argument left [-1, 1] beyond rounding slack.
    CosineOutOfRange,
}

impl fmt::Display for DegenerateReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegenerateReason::CoincidentPoints => write!(f, "coincident points"),
            DegenerateReason::Collinear => write!(f, "collinear points"),
            DegenerateReason::CosineOutOfRange => write!(f, "cosine outside [-1, 1]"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The three points do not span a triangle.
    #[error("degenerate triangle: {reason}")]
    Degenerate { reason: DegenerateReason },

    /// A coordinate is NaN or infinite.
    #[error("vertex {label} has a non-finite coordinate")]
    NonFinite { label: Label },

    /// The target drawing box leaves no room after margins.
    #[error("invalid viewport {width}x{height} with margin {margin}")]
    InvalidViewport { width: f64, height: f64, margin: f64 },
}

impl GeometryError {
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, GeometryError::Degenerate { .. })
    }
}

pub type Result<T> = std::result::Result<T, GeometryError>;
