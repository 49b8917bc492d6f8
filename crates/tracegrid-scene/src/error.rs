//! Errors raised while assembling a [`Scene`](crate::Scene).

use std::fmt;

use tracegrid_core::GridError;

use crate::layout::LayoutError;

/// Errors that can occur when building a scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The layout text could not be parsed.
    Layout(LayoutError),
    /// The cell set could not form a grid.
    Grid(GridError),
    /// The configured cell size is zero, negative or not finite.
    InvalidCellSize(f32),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(e) => write!(f, "scene: {e}"),
            Self::Grid(e) => write!(f, "scene: {e}"),
            Self::InvalidCellSize(s) => write!(f, "scene: invalid cell size {s}"),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Layout(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::InvalidCellSize(_) => None,
        }
    }
}

impl From<LayoutError> for SceneError {
    fn from(e: LayoutError) -> Self {
        Self::Layout(e)
    }
}

impl From<GridError> for SceneError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
