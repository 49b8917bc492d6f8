//! Lattice cells and immutable neighbor grids.
//!
//! This crate provides the data model the path searches in
//! `tracegrid-paths` operate on: the [`Cell`] lattice point with its
//! distance metrics and adjacency tests, the bounding [`Range`], and the
//! [`Grid`] arena whose neighbor lists are resolved once at construction.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, DIAGONAL_STEP, ORTHOGONAL_STEP};
pub use error::GridError;
pub use geom::{Range, RangeIter};
pub use grid::{CellId, Connectivity, Grid};
