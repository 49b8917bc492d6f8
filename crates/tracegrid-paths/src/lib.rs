//! Path searches over [`tracegrid_core::Grid`].
//!
//! - **Greedy best-first walk** ([`GreedyWalk`]): a cheap single-pass walk
//!   that always steps to the neighbor with the lowest `g + step + h` and
//!   never backtracks. It can miss paths that require stepping away from a
//!   locally good choice, and its paths are not guaranteed shortest.
//! - **A\*** ([`AStar`]): a classical open-set search, kept as a reference
//!   to compare the walk against.
//!
//! Both searches take a [`BlockingPolicy`] per call and report through
//! [`PathResult`]. Every failure (endpoint outside the grid, blocked
//! endpoint, no route) collapses to an unreachable result with an empty
//! path.
//!
//! # Quick start
//!
//! ```
//! use tracegrid_core::{Cell, Connectivity, Grid, Range};
//! use tracegrid_paths::{search, NoneBlocked};
//!
//! let grid = Grid::rect(Range::new(0, 0, 3, 3), Connectivity::Four);
//! let (reachable, path) = search(&grid, Cell::new(0, 0), Cell::new(2, 2), &NoneBlocked);
//! assert!(reachable);
//! assert_eq!(path.first(), Some(&Cell::new(0, 0)));
//! assert_eq!(path.last(), Some(&Cell::new(2, 2)));
//! ```

mod astar;
mod outcome;
mod planner;
mod traits;
mod walk;

pub use astar::AStar;
pub use outcome::PathResult;
pub use planner::{Planner, Strategy};
pub use traits::{BlockingPolicy, NoneBlocked, PathSearch};
pub use walk::{GreedyWalk, search};
