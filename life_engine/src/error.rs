// error.rs - Error conditions reported by the engine

use std::error::Error;
use std::fmt;

/// Errors reported by [`GameOfLife`](crate::GameOfLife).
///
/// Every engine operation either fully succeeds or fails with one of these
/// without mutating the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifeError {
    /// A grid was requested with a zero width or height.
    InvalidDimensions { width: usize, height: usize },
    /// A cell access landed outside `[0, width) x [0, height)`.
    OutOfRange { x: usize, y: usize },
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
            LifeError::OutOfRange { x, y } => {
                write!(f, "cell ({}, {}) is outside the grid", x, y)
            }
        }
    }
}

impl Error for LifeError {}
