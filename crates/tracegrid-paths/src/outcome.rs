use tracegrid_core::{Cell, Grid};

use crate::traits::BlockingPolicy;

/// Outcome of a path search.
///
/// When `reachable` is `false`, `path` is always empty and `cost` is zero:
/// no partial route is ever reported. A reachable search whose start equals
/// its target also has an empty path, meaning "already there".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub reachable: bool,
    /// Cells from start to target, both inclusive.
    pub path: Vec<Cell>,
    /// Sum of step costs along `path`.
    pub cost: f64,
}

impl PathResult {
    /// The negative outcome.
    #[inline]
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Start and target coincide.
    #[inline]
    pub fn arrived() -> Self {
        Self {
            reachable: true,
            path: Vec::new(),
            cost: 0.0,
        }
    }

    #[inline]
    pub(crate) fn found(path: Vec<Cell>, cost: f64) -> Self {
        Self {
            reachable: true,
            path,
            cost,
        }
    }

    /// Split into the `(reachable, path)` pair.
    #[inline]
    pub fn into_parts(self) -> (bool, Vec<Cell>) {
        (self.reachable, self.path)
    }

    /// Number of moves along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The cell to move to next, if any.
    #[inline]
    pub fn next_step(&self) -> Option<Cell> {
        self.path.get(1).copied()
    }

    /// Whether the path is a walkable route on `grid`: every consecutive
    /// pair is linked and no cell is blocked.
    ///
    /// Empty paths are trivially valid.
    pub fn is_walkable<B: BlockingPolicy + ?Sized>(&self, grid: &Grid, blocked: &B) -> bool {
        let cells_open = self
            .path
            .iter()
            .all(|&c| grid.contains(c) && !blocked.is_blocked(c));
        cells_open && self.path.windows(2).all(|w| grid.are_linked(w[0], w[1]))
    }
}
