use tracegrid_core::{Cell, Grid};

use crate::PathResult;

/// Per-call capability marking cells impassable.
///
/// Implementations are queried once per neighbor examined, on every search;
/// searches never cache answers between calls, so the blocked state may
/// change freely between them.
pub trait BlockingPolicy {
    /// Whether `cell` cannot be entered.
    fn is_blocked(&self, cell: Cell) -> bool;
}

impl<F> BlockingPolicy for F
where
    F: Fn(Cell) -> bool + ?Sized,
{
    #[inline]
    fn is_blocked(&self, cell: Cell) -> bool {
        self(cell)
    }
}

/// Policy under which every cell is passable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoneBlocked;

impl BlockingPolicy for NoneBlocked {
    #[inline]
    fn is_blocked(&self, _cell: Cell) -> bool {
        false
    }
}

/// A path search between two cells of a grid.
pub trait PathSearch {
    /// Search from `start` to `target`, treating cells for which `blocked`
    /// answers `true` as impassable.
    fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult;
}
