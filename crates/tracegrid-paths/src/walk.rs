//! Greedy best-first walk.
//!
//! The walk grows a single path from the start. At each step it looks at the
//! unclosed, unblocked neighbors of the last cell and appends the one with
//! the lowest `g + step + h`, where `h` is the straight-line distance to the
//! target. The cell it leaves is closed and never reconsidered. There is no
//! open set and no backtracking: when every neighbor is closed or blocked,
//! the walk stops and the search fails, even if a route exists elsewhere.

use tracegrid_core::{Cell, CellId, Grid};

use crate::outcome::PathResult;
use crate::traits::{BlockingPolicy, PathSearch};

/// Single-pass greedy best-first walker.
///
/// The walker owns a generation-stamped closed table that is reused between
/// searches, so repeated queries allocate only the returned path. Searches
/// are otherwise independent: nothing learned in one call affects the next.
/// Give each agent its own walker; the [`Grid`] itself can be shared.
#[derive(Debug, Clone, Default)]
pub struct GreedyWalk {
    closed: Vec<u32>,
    generation: u32,
    max_steps: Option<usize>,
}

impl GreedyWalk {
    /// Create an unbounded walker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a walker that gives up after appending `max_steps` cells.
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            ..Self::default()
        }
    }

    /// The step bound, if any.
    #[inline]
    pub fn max_steps(&self) -> Option<usize> {
        self.max_steps
    }

    /// Walk from `start` towards `target`.
    ///
    /// Fails, with an empty path, when either endpoint is outside `grid` or
    /// blocked, when the walk gets stuck, or when the step bound is hit.
    /// `start == target` succeeds with an empty path.
    pub fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult {
        let (Some(start_id), Some(target_id)) = (grid.id(start), grid.id(target)) else {
            log::debug!("greedy walk {start} -> {target}: endpoint outside grid");
            return PathResult::unreachable();
        };
        if blocked.is_blocked(start) || blocked.is_blocked(target) {
            log::debug!("greedy walk {start} -> {target}: endpoint blocked");
            return PathResult::unreachable();
        }
        if start_id == target_id {
            return PathResult::arrived();
        }

        let cur_gen = self.begin(grid.len());
        let mut path: Vec<CellId> = vec![start_id];
        let mut g = 0.0;
        let mut i = 0;

        while i < path.len() {
            let ci = path[i];
            i += 1;

            if self.closed[ci.index()] == cur_gen {
                continue;
            }
            if ci == target_id {
                break;
            }
            if let Some(limit) = self.max_steps {
                if path.len() > limit {
                    log::warn!("greedy walk {start} -> {target}: gave up after {limit} steps");
                    break;
                }
            }

            let current = grid.cell(ci);
            let mut best: Option<(CellId, f64)> = None;
            for &ni in grid.neighbors(ci) {
                if self.closed[ni.index()] == cur_gen {
                    continue;
                }
                let n = grid.cell(ni);
                if blocked.is_blocked(n) {
                    continue;
                }
                if ni == target_id {
                    // Arrival ends the search; no step cost to compare.
                    best = Some((ni, g));
                    break;
                }
                let f = g + current.step_cost_to(n) + n.distance_to(target);
                if best.is_none_or(|(_, best_f)| f < best_f) {
                    best = Some((ni, f));
                }
            }

            self.closed[ci.index()] = cur_gen;
            match best {
                Some((ni, _)) => {
                    g += current.step_cost_to(grid.cell(ni));
                    path.push(ni);
                    log::trace!("greedy walk: {} -> {} (g = {g:.1})", current, grid.cell(ni));
                }
                None => log::trace!("greedy walk: stuck at {current}"),
            }
        }

        if path.last() != Some(&target_id) {
            log::debug!(
                "greedy walk {start} -> {target}: no route after {} cells",
                path.len()
            );
            return PathResult::unreachable();
        }
        let cells = path.into_iter().map(|id| grid.cell(id)).collect();
        PathResult::found(cells, g)
    }

    /// Size the closed table for `len` cells and open a new generation.
    fn begin(&mut self, len: usize) -> u32 {
        if self.closed.len() < len {
            self.closed.resize(len, 0);
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps from 2^32 searches ago would alias; start over.
            self.closed.fill(0);
            self.generation = 1;
        }
        self.generation
    }
}

impl PathSearch for GreedyWalk {
    fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult {
        GreedyWalk::search(self, grid, start, target, blocked)
    }
}

/// One-shot greedy walk from `start` to `target`.
///
/// Returns whether the target was reached and the path taken (empty when
/// unreachable, or when `start == target`).
pub fn search<B: BlockingPolicy + ?Sized>(
    grid: &Grid,
    start: Cell,
    target: Cell,
    blocked: &B,
) -> (bool, Vec<Cell>) {
    GreedyWalk::new()
        .search(grid, start, target, blocked)
        .into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoneBlocked;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;
    use tracegrid_core::{Connectivity, Range};

    fn square(n: i32, connectivity: Connectivity) -> Grid {
        Grid::rect(Range::new(0, 0, n, n), connectivity)
    }

    fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
        list.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn open_square_four_connected() {
        let g = square(3, Connectivity::Four);
        let (reachable, path) = search(&g, Cell::new(0, 0), Cell::new(2, 2), &NoneBlocked);
        assert!(reachable);
        // Equal scores keep the first neighbor in insertion (row-major) order.
        assert_eq!(path, cells(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2)]));
        assert!(path.windows(2).all(|w| g.are_linked(w[0], w[1])));
    }

    #[test]
    fn routes_around_blocked_centre() {
        let g = square(3, Connectivity::Four);
        let centre = Cell::new(1, 1);
        let blocked = |c: Cell| c == centre;
        let (start, target) = (Cell::new(0, 0), Cell::new(2, 2));
        let r = GreedyWalk::new().search(&g, start, target, &blocked);
        assert!(r.reachable);
        assert_eq!(r.path, cells(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert!(!r.path.contains(&centre));
        assert_eq!(r.cost, 4.0);
    }

    #[test]
    fn diagonal_steps_cost_one_point_four() {
        let g = square(3, Connectivity::Eight);
        let (start, target) = (Cell::new(0, 0), Cell::new(2, 2));
        let r = GreedyWalk::new().search(&g, start, target, &NoneBlocked);
        assert!(r.reachable);
        assert_eq!(r.path, cells(&[(0, 0), (1, 1), (2, 2)]));
        assert!((r.cost - 2.8).abs() < 1e-9);
    }

    #[test]
    fn same_cell_is_trivially_reachable() {
        let g = square(3, Connectivity::Four);
        for &c in g.cells() {
            assert_eq!(search(&g, c, c, &NoneBlocked), (true, Vec::new()));
        }
    }

    #[test]
    fn endpoints_outside_grid_are_unreachable() {
        let g = square(3, Connectivity::Four);
        let outside = Cell::new(7, 7);
        let inside = Cell::new(0, 0);
        let none = (false, Vec::new());
        assert_eq!(search(&g, outside, inside, &NoneBlocked), none);
        assert_eq!(search(&g, inside, outside, &NoneBlocked), none);
        assert_eq!(search(&g, outside, outside, &NoneBlocked), none);
    }

    #[test]
    fn blocked_endpoints_are_unreachable() {
        let g = square(3, Connectivity::Eight);
        let a = Cell::new(0, 0);
        let b = Cell::new(2, 2);
        assert_eq!(search(&g, a, b, &|c: Cell| c == a), (false, Vec::new()));
        assert_eq!(search(&g, a, b, &|c: Cell| c == b), (false, Vec::new()));
        // Blocked start equal to target is still unreachable.
        assert_eq!(search(&g, a, a, &|c: Cell| c == a), (false, Vec::new()));
    }

    #[test]
    fn walled_off_target_is_unreachable() {
        let g = square(3, Connectivity::Four);
        let wall: HashSet<Cell> = cells(&[(1, 2), (2, 1)]).into_iter().collect();
        let blocked = |c: Cell| wall.contains(&c);
        let r = search(&g, Cell::new(0, 0), Cell::new(2, 2), &blocked);
        assert_eq!(r, (false, Vec::new()));
    }

    #[test]
    fn dead_end_is_not_escaped() {
        // . . . . .
        // . # # # .
        // S . . # T
        let g = Grid::rect(Range::new(0, 0, 5, 3), Connectivity::Four);
        let wall: HashSet<Cell> = [(1, 1), (2, 1), (3, 1), (3, 2)].map(Cell::from).into();
        let blocked = |c: Cell| wall.contains(&c);
        // A route exists over the top row, but the walk commits to the
        // bottom corridor and cannot back out of it.
        let (start, target) = (Cell::new(0, 2), Cell::new(4, 2));
        let r = GreedyWalk::new().search(&g, start, target, &blocked);
        assert!(!r.reachable);
        assert!(r.path.is_empty());
        assert_eq!(r.cost, 0.0);
    }

    #[test]
    fn tie_break_follows_insertion_order() {
        let mut order: Vec<Cell> = Range::new(0, 0, 3, 3).iter().collect();
        order.reverse();
        let g = Grid::new(order, Connectivity::Four).unwrap();
        let (_, path) = search(&g, Cell::new(0, 0), Cell::new(2, 2), &NoneBlocked);
        assert_eq!(path[1], Cell::new(0, 1));
    }

    #[test]
    fn step_bound_fails_long_walks() {
        let g = square(3, Connectivity::Four);
        let mut short = GreedyWalk::with_max_steps(3);
        let (start, target) = (Cell::new(0, 0), Cell::new(2, 2));
        assert!(!short.search(&g, start, target, &NoneBlocked).reachable);
        let mut exact = GreedyWalk::with_max_steps(4);
        assert_eq!(exact.max_steps(), Some(4));
        assert!(exact.search(&g, start, target, &NoneBlocked).reachable);
    }

    #[test]
    fn walker_reuse_sees_fresh_policy() {
        let g = square(3, Connectivity::Four);
        let mut walker = GreedyWalk::new();
        let first = walker.search(&g, Cell::new(0, 0), Cell::new(2, 2), &NoneBlocked);
        assert_eq!(first.next_step(), Some(Cell::new(1, 0)));

        let blocked = |c: Cell| c == Cell::new(1, 0);
        let second = walker.search(&g, Cell::new(0, 0), Cell::new(2, 2), &blocked);
        assert!(second.reachable);
        assert_eq!(second.next_step(), Some(Cell::new(0, 1)));

        let third = walker.search(&g, Cell::new(0, 0), Cell::new(2, 2), &NoneBlocked);
        assert_eq!(third, first);
    }

    #[test]
    fn policy_is_queried_per_call() {
        let g = square(3, Connectivity::Four);
        let calls = std::cell::Cell::new(0usize);
        let counting = |_: Cell| {
            calls.set(calls.get() + 1);
            false
        };
        let mut walker = GreedyWalk::new();
        walker.search(&g, Cell::new(0, 0), Cell::new(2, 2), &counting);
        let once = calls.get();
        assert!(once > 2);
        walker.search(&g, Cell::new(0, 0), Cell::new(2, 2), &counting);
        assert_eq!(calls.get(), once * 2);
    }

    #[test]
    fn random_grids_yield_walkable_paths() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut walker = GreedyWalk::new();
        for round in 0..200 {
            let connectivity = Connectivity::from_diagonal(round % 2 == 1);
            let g = Grid::rect(Range::new(0, 0, 8, 8), connectivity);
            let wall: HashSet<Cell> = g
                .cells()
                .iter()
                .copied()
                .filter(|_| rng.random_bool(0.25))
                .collect();
            let blocked = |c: Cell| wall.contains(&c);
            let start = Cell::new(rng.random_range(0..8), rng.random_range(0..8));
            let target = Cell::new(rng.random_range(0..8), rng.random_range(0..8));
            let r = walker.search(&g, start, target, &blocked);
            if !r.reachable {
                assert!(r.path.is_empty());
                continue;
            }
            if start == target {
                assert!(r.path.is_empty());
                continue;
            }
            assert!(r.path.len() >= 2);
            assert_eq!(r.path.first(), Some(&start));
            assert_eq!(r.path.last(), Some(&target));
            assert!(r.is_walkable(&g, &blocked), "round {round}: {:?}", r.path);
            let unique: HashSet<_> = r.path.iter().collect();
            assert_eq!(unique.len(), r.path.len(), "a cell was visited twice");
        }
    }
}
