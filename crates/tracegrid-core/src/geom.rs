//! Half-open lattice rectangles: [`Range`] and its row-major iterator.
//!
//! A grid's cell set is arbitrary, so a `Range` is only ever a bounding box:
//! it answers "which rows and columns could hold a cell", never "is this a
//! cell". Renderers and the rectangular grid constructor use it.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::cell::Cell;

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
///
/// All empty ranges are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Cell,
    pub max: Cell,
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Range {}

impl Hash for Range {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            Cell::ZERO.hash(state);
            Cell::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Range {
    /// Create a new range from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Cell::new(x0.min(x1), y0.min(y1)),
            max: Cell::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Smallest range containing every cell of `cells`.
    ///
    /// Returns the empty range for an empty input. The exclusive bound
    /// saturates at `i32::MAX`, so a cell on that row or column lies just
    /// outside the result.
    pub fn enclosing<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Self {
        let mut iter = cells.into_iter();
        let Some(&first) = iter.next() else {
            return Self::default();
        };
        let (mut lo, mut hi) = (first, first);
        for c in iter {
            lo = Cell::new(lo.x.min(c.x), lo.y.min(c.y));
            hi = Cell::new(hi.x.max(c.x), hi.y.max(c.y));
        }
        Self {
            min: lo,
            max: Cell::new(hi.x.saturating_add(1), hi.y.saturating_add(1)),
        }
    }

    /// Width of the range.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Height of the range.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// Total number of lattice points in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = i64::from(self.max.x) - i64::from(self.min.x);
        let h = i64::from(self.max.y) - i64::from(self.min.y);
        (w as usize).saturating_mul(h as usize)
    }

    /// Whether the range has zero or negative area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `c` is inside the half-open range.
    #[inline]
    pub fn contains(self, c: Cell) -> bool {
        c.x >= self.min.x && c.x < self.max.x && c.y >= self.min.y && c.y < self.max.y
    }

    /// Row-major iterator over every lattice point in the range.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Cell;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the lattice points of a [`Range`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    cur: Cell,
}

impl Iterator for RangeIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.cur.y >= self.range.max.y || self.range.is_empty() {
            return None;
        }
        let c = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.range.max.x {
            self.cur.x = self.range.min.x;
            self.cur.y += 1;
        }
        Some(c)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.cur.y >= self.range.max.y {
            return (0, Some(0));
        }
        let (min, max) = (self.range.min, self.range.max);
        let w = i64::from(max.x) - i64::from(min.x);
        let in_row = i64::from(max.x) - i64::from(self.cur.x);
        let rows = i64::from(max.y) - i64::from(self.cur.y) - 1;
        let rest = (rows as usize).saturating_mul(w as usize);
        let total = (in_row as usize).saturating_add(rest);
        (total, Some(total))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn range_basics() {
        let r = Range::new(0, 0, 3, 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Cell::new(0, 0)));
        assert!(r.contains(Cell::new(2, 1)));
        assert!(!r.contains(Cell::new(3, 0)));
        assert!(!r.contains(Cell::new(0, 2)));
    }

    #[test]
    fn range_auto_canonicalize() {
        let r = Range::new(3, 2, 0, 0);
        assert_eq!(r.min, Cell::new(0, 0));
        assert_eq!(r.max, Cell::new(3, 2));
    }

    #[test]
    fn range_iter_row_major() {
        let r = Range::new(0, 0, 3, 2);
        let cells: Vec<_> = r.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(r.iter().len(), 6);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
        assert_eq!(cells[5], Cell::new(2, 1));
    }

    #[test]
    fn empty_range_iter() {
        let r = Range::new(0, 0, 0, 0);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn enclosing_covers_scattered_cells() {
        let cells = [Cell::new(2, 5), Cell::new(-1, 3), Cell::new(4, 4)];
        let r = Range::enclosing(&cells);
        assert_eq!(r, Range::new(-1, 3, 5, 6));
        assert!(cells.iter().all(|c| r.contains(*c)));
        assert!(Range::enclosing(&[] as &[Cell]).is_empty());
    }

    #[test]
    fn enclosing_saturates_at_extreme_coordinates() {
        let cells = [Cell::new(i32::MIN, 0), Cell::new(i32::MAX, 0)];
        let r = Range::enclosing(&cells);
        assert_eq!(r.min, Cell::new(i32::MIN, 0));
        assert_eq!(r.max, Cell::new(i32::MAX, 1));
        assert_eq!(r.width(), i32::MAX);
        assert_eq!(r.len(), u32::MAX as usize);
        assert!(r.contains(Cell::new(i32::MIN, 0)));
        assert!(!r.contains(Cell::new(i32::MAX, 0)));

        let corner = Range::enclosing(&[Cell::new(i32::MAX, i32::MAX)]);
        assert!(corner.is_empty());
        assert_eq!(corner.iter().len(), 0);
    }

    #[test]
    fn iter_len_tracks_progress() {
        let mut it = Range::new(-2, -1, 1, 1).iter();
        assert_eq!(it.len(), 6);
        it.next();
        it.next();
        it.next();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next(), Some(Cell::new(-2, 0)));
    }

    #[test]
    fn empty_ranges_compare_and_hash_equal() {
        let a = Range::default();
        let b = Range {
            min: Cell::new(5, 5),
            max: Cell::new(5, 5),
        };
        assert_eq!(a, b);
        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert_ne!(a, Range::new(0, 0, 1, 1));
    }
}
