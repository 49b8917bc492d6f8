//! Errors raised while building a [`Grid`](crate::Grid).

use std::fmt;

use crate::cell::Cell;

/// Errors that can occur when constructing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The same coordinates were supplied more than once.
    DuplicateCell(Cell),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCell(c) => write!(f, "grid: duplicate cell at {c}"),
        }
    }
}

impl std::error::Error for GridError {}
