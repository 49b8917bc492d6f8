//! The [`Cell`] type: a point of the integer lattice.
//!
//! A cell's identity is its coordinate pair: two cells are equal iff their
//! `x` and `y` match. Cells carry no adjacency of their own; neighbor lists
//! live in the [`Grid`](crate::Grid) that owns them.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Cost of a step to one of the four orthogonal neighbors.
pub const ORTHOGONAL_STEP: f64 = 1.0;

/// Cost of a diagonal step.
///
/// Exactly `1.4`, not √2. Path costs are compared against this value.
pub const DIAGONAL_STEP: f64 = 1.4;

/// A 2D lattice point. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Absolute coordinate differences to `other`, widened so that cells at
    /// opposite ends of the `i32` range do not overflow.
    #[inline]
    fn deltas(self, other: Cell) -> (i64, i64) {
        (
            (i64::from(self.x) - i64::from(other.x)).abs(),
            (i64::from(self.y) - i64::from(other.y)).abs(),
        )
    }

    /// Straight-line (Euclidean) distance to `other`.
    ///
    /// This is the heuristic estimate used by the greedy walk.
    #[inline]
    pub fn distance_to(self, other: Cell) -> f64 {
        let (dx, dy) = self.deltas(other);
        let (dx, dy) = (dx as f64, dy as f64);
        (dx * dx + dy * dy).sqrt()
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Cell) -> i64 {
        let (dx, dy) = self.deltas(other);
        dx + dy
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Cell) -> i64 {
        let (dx, dy) = self.deltas(other);
        dx.max(dy)
    }

    /// Octile distance to `other`: the cost of the cheapest unobstructed
    /// 8-way route, with diagonal steps priced at [`DIAGONAL_STEP`].
    #[inline]
    pub fn octile(self, other: Cell) -> f64 {
        let (dx, dy) = self.deltas(other);
        let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
        (hi - lo) as f64 * ORTHOGONAL_STEP + lo as f64 * DIAGONAL_STEP
    }

    /// Whether `other` is one of the eight lattice-adjacent cells.
    ///
    /// A cell is never its own neighbor.
    #[inline]
    pub fn is_neighbor(self, other: Cell) -> bool {
        self != other && self.chebyshev(other) == 1
    }

    /// Whether `other` is a neighbor differing in both coordinates.
    #[inline]
    pub fn is_diagonal_from(self, other: Cell) -> bool {
        self.is_neighbor(other) && self.x != other.x && self.y != other.y
    }

    /// Cost of stepping from `self` to the adjacent `other`.
    ///
    /// The result is meaningless when `other` is not a neighbor.
    #[inline]
    pub fn step_cost_to(self, other: Cell) -> f64 {
        if self.is_diagonal_from(other) {
            DIAGONAL_STEP
        } else {
            ORTHOGONAL_STEP
        }
    }
}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x.hash(state);
        self.y.hash(state);
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
