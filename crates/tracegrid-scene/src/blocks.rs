//! Live blocked state.
//!
//! A [`BlockMap`] is the mutable half of a scene: the grid never changes,
//! but cells get blocked and unblocked between ticks. Searches read it
//! through [`BlockingPolicy`] and never keep anything from it.

use std::collections::HashSet;

use tracegrid_core::Cell;
use tracegrid_paths::BlockingPolicy;

use crate::layout::CellDescriptor;

/// The set of currently blocked cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockMap {
    blocked: HashSet<Cell>,
}

impl BlockMap {
    /// Create an empty map: nothing blocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the map from the initial flags of `descriptors`.
    pub fn from_descriptors<'a>(descriptors: impl IntoIterator<Item = &'a CellDescriptor>) -> Self {
        descriptors
            .into_iter()
            .filter(|d| d.blocked)
            .map(|d| d.cell)
            .collect()
    }

    /// Whether `cell` is currently blocked.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.blocked.contains(&cell)
    }

    /// Block `cell`. Returns `true` if it was open before.
    pub fn block(&mut self, cell: Cell) -> bool {
        self.blocked.insert(cell)
    }

    /// Unblock `cell`. Returns `true` if it was blocked before.
    pub fn unblock(&mut self, cell: Cell) -> bool {
        self.blocked.remove(&cell)
    }

    /// Set the blocked flag of `cell`.
    pub fn set(&mut self, cell: Cell, blocked: bool) {
        if blocked {
            self.blocked.insert(cell);
        } else {
            self.blocked.remove(&cell);
        }
    }

    /// Flip the blocked flag of `cell`, returning the new state.
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.blocked.remove(&cell) {
            false
        } else {
            self.blocked.insert(cell);
            true
        }
    }

    /// Number of blocked cells.
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    /// Whether nothing is blocked.
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Unblock everything.
    pub fn clear(&mut self) {
        self.blocked.clear();
    }

    /// Blocked cells, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().copied()
    }
}

impl BlockingPolicy for BlockMap {
    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        BlockMap::is_blocked(self, cell)
    }
}

impl FromIterator<Cell> for BlockMap {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            blocked: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for BlockMap {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.blocked.extend(iter);
    }
}
