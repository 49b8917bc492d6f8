//! The [`Grid`] type: an immutable arena of [`Cell`]s with resolved adjacency.
//!
//! Cells are stored in insertion order and addressed by [`CellId`]. Neighbor
//! discovery runs exactly once, in [`Grid::new`], as an all-pairs scan; the
//! resulting adjacency table is never modified afterwards, so a `Grid` can be
//! shared freely between concurrent searches.
//!
//! Neighbor lists follow the insertion order of the cells. Searches that
//! break ties by scan order therefore depend on the order in which cells
//! were supplied, and that order is part of a grid's observable behavior.

use std::collections::HashMap;

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::Range;

/// Index of a cell within a [`Grid`].
///
/// Ids are dense: a grid of `n` cells uses ids `0..n`, in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    /// The arena index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Which lattice neighbors are linked at construction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// Orthogonal neighbors only.
    #[default]
    Four,
    /// Orthogonal and diagonal neighbors.
    Eight,
}

impl Connectivity {
    /// `Eight` when diagonals are allowed, `Four` otherwise.
    #[inline]
    pub const fn from_diagonal(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            Self::Eight
        } else {
            Self::Four
        }
    }

    /// Whether diagonal steps are linked.
    #[inline]
    pub const fn allows_diagonal(self) -> bool {
        matches!(self, Self::Eight)
    }

    /// Whether `a` and `b` are linked under this connectivity.
    #[inline]
    pub fn links(self, a: Cell, b: Cell) -> bool {
        a.is_neighbor(b) && (self.allows_diagonal() || !a.is_diagonal_from(b))
    }
}

/// An immutable collection of cells with precomputed neighbor lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    index: HashMap<Cell, CellId>,
    adjacency: Vec<Vec<CellId>>,
    connectivity: Connectivity,
    bounds: Range,
}

impl Grid {
    /// Build a grid from `cells`, linking neighbors according to
    /// `connectivity`.
    ///
    /// For every ordered pair `(cell, candidate)` of distinct cells, the
    /// candidate is appended to the cell's neighbor list when the two are
    /// linked. This is O(n²) in the number of cells and runs once.
    ///
    /// Returns [`GridError::DuplicateCell`] if two cells share coordinates.
    pub fn new(
        cells: impl IntoIterator<Item = Cell>,
        connectivity: Connectivity,
    ) -> Result<Self, GridError> {
        let cells: Vec<Cell> = cells.into_iter().collect();
        let mut index = HashMap::with_capacity(cells.len());
        for (i, &c) in cells.iter().enumerate() {
            if index.insert(c, CellId(i)).is_some() {
                return Err(GridError::DuplicateCell(c));
            }
        }
        Ok(Self::link(cells, index, connectivity))
    }

    /// Build a grid holding every lattice point of `range`, in row-major order.
    pub fn rect(range: Range, connectivity: Connectivity) -> Self {
        let cells: Vec<Cell> = range.iter().collect();
        let index = cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, CellId(i)))
            .collect();
        Self::link(cells, index, connectivity)
    }

    /// All-pairs neighbor discovery over cells already known to be unique.
    fn link(cells: Vec<Cell>, index: HashMap<Cell, CellId>, connectivity: Connectivity) -> Self {
        let mut adjacency = vec![Vec::new(); cells.len()];
        let mut links = 0usize;
        for (i, &cell) in cells.iter().enumerate() {
            for (j, &candidate) in cells.iter().enumerate() {
                if i == j {
                    continue;
                }
                if connectivity.links(cell, candidate) {
                    adjacency[i].push(CellId(j));
                    links += 1;
                }
            }
        }

        let bounds = Range::enclosing(&cells);
        log::debug!(
            "grid: linked {} cells within {} ({} directed links, {:?})",
            cells.len(),
            bounds,
            links,
            connectivity
        );

        Self {
            cells,
            index,
            adjacency,
            connectivity,
            bounds,
        }
    }

    /// Build a grid from `cells`, linking diagonals when `allow_diagonal`.
    pub fn with_diagonals(
        cells: impl IntoIterator<Item = Cell>,
        allow_diagonal: bool,
    ) -> Result<Self, GridError> {
        Self::new(cells, Connectivity::from_diagonal(allow_diagonal))
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The connectivity the grid was built with.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Bounding range of all cells.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// All cells, in insertion order (indexable by [`CellId::index`]).
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The id of `cell`, or `None` if it is not part of the grid.
    #[inline]
    pub fn id(&self, cell: Cell) -> Option<CellId> {
        self.index.get(&cell).copied()
    }

    /// The cell stored under `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this grid.
    #[inline]
    pub fn cell(&self, id: CellId) -> Cell {
        self.cells[id.0]
    }

    /// Whether `cell` is a member of the grid.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        self.index.contains_key(&cell)
    }

    /// The member cell at integer coordinates `(x, y)`, if any.
    #[inline]
    pub fn find_cell_at_point(&self, x: i32, y: i32) -> Option<Cell> {
        let c = Cell::new(x, y);
        self.contains(c).then_some(c)
    }

    /// Neighbor ids of `id`, in insertion order.
    #[inline]
    pub fn neighbors(&self, id: CellId) -> &[CellId] {
        &self.adjacency[id.0]
    }

    /// Neighbor cells of `cell`, in insertion order.
    ///
    /// Yields nothing if `cell` is not a member.
    pub fn neighbor_cells(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.id(cell)
            .map(|id| self.neighbors(id))
            .unwrap_or(&[])
            .iter()
            .map(|&n| self.cells[n.0])
    }

    /// Whether `b` appears in `a`'s neighbor list.
    pub fn are_linked(&self, a: Cell, b: Cell) -> bool {
        match (self.id(a), self.id(b)) {
            (Some(ia), Some(ib)) => self.adjacency[ia.0].contains(&ib),
            _ => false,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize)]
struct GridRef<'a> {
    cells: &'a [Cell],
    connectivity: Connectivity,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    cells: Vec<Cell>,
    connectivity: Connectivity,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRef {
            cells: &self.cells,
            connectivity: self.connectivity,
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = GridRepr::deserialize(deserializer)?;
        Grid::new(repr.cells, repr.connectivity)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(n: i32, connectivity: Connectivity) -> Grid {
        Grid::rect(Range::new(0, 0, n, n), connectivity)
    }

    #[test]
    fn four_connected_links_orthogonal_only() {
        let g = square(3, Connectivity::Four);
        let centre: Vec<_> = g.neighbor_cells(Cell::new(1, 1)).collect();
        // Insertion (row-major) order.
        let expected = [(1, 0), (0, 1), (2, 1), (1, 2)].map(Cell::from);
        assert_eq!(centre, expected);
        assert_eq!(g.neighbor_cells(Cell::new(0, 0)).count(), 2);
        assert!(!g.are_linked(Cell::new(0, 0), Cell::new(1, 1)));
    }

    #[test]
    fn eight_connected_links_diagonals() {
        let g = square(3, Connectivity::Eight);
        assert_eq!(g.neighbor_cells(Cell::new(1, 1)).count(), 8);
        assert_eq!(g.neighbor_cells(Cell::new(0, 0)).count(), 3);
        assert!(g.are_linked(Cell::new(0, 0), Cell::new(1, 1)));
    }

    #[test]
    fn neighbor_lists_exclude_self_and_foreign_cells() {
        let g = square(4, Connectivity::Eight);
        for &c in g.cells() {
            for n in g.neighbor_cells(c) {
                assert_ne!(n, c);
                assert!(g.contains(n));
                assert!(g.are_linked(n, c), "links must be mutual");
            }
        }
    }

    #[test]
    fn construction_is_idempotent() {
        let cells = vec![
            Cell::new(3, 3),
            Cell::new(0, 0),
            Cell::new(1, 0),
            Cell::new(1, 1),
            Cell::new(2, 1),
        ];
        for allow in [false, true] {
            let a = Grid::with_diagonals(cells.clone(), allow).unwrap();
            let b = Grid::with_diagonals(cells.clone(), allow).unwrap();
            assert_eq!(a, b);
            for &c in &cells {
                let na: Vec<_> = a.neighbor_cells(c).collect();
                let nb: Vec<_> = b.neighbor_cells(c).collect();
                assert_eq!(na, nb);
            }
        }
    }

    #[test]
    fn neighbor_order_follows_insertion_order() {
        let cells = [Cell::new(1, 1), Cell::new(2, 1), Cell::new(0, 1)];
        let g = Grid::new(cells, Connectivity::Four).unwrap();
        let order: Vec<_> = g.neighbor_cells(Cell::new(1, 1)).collect();
        assert_eq!(order, vec![Cell::new(2, 1), Cell::new(0, 1)]);
    }

    #[test]
    fn isolated_cell_has_no_neighbors() {
        let cells = [Cell::new(0, 0), Cell::new(5, 5)];
        let g = Grid::new(cells, Connectivity::Eight).unwrap();
        assert_eq!(g.neighbor_cells(Cell::new(5, 5)).count(), 0);
        assert_eq!(g.neighbor_cells(Cell::new(9, 9)).count(), 0);
    }

    #[test]
    fn duplicate_cells_rejected() {
        let cells = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 0)];
        let err = Grid::new(cells, Connectivity::Four).unwrap_err();
        assert_eq!(err, GridError::DuplicateCell(Cell::new(0, 0)));
        assert_eq!(err.to_string(), "grid: duplicate cell at (0, 0)");
    }

    #[test]
    fn lookup_and_membership() {
        let cells = [Cell::new(4, 2), Cell::new(-1, 7)];
        let g = Grid::new(cells, Connectivity::Four).unwrap();
        assert_eq!(g.len(), 2);
        assert_eq!(g.find_cell_at_point(-1, 7), Some(Cell::new(-1, 7)));
        assert_eq!(g.find_cell_at_point(0, 0), None);
        assert!(g.contains(Cell::new(4, 2)));
        assert!(!g.contains(Cell::new(4, 3)));
        let id = g.id(Cell::new(-1, 7)).unwrap();
        assert_eq!(id.index(), 1);
        assert_eq!(g.cell(id), Cell::new(-1, 7));
        assert_eq!(g.bounds(), Range::new(-1, 2, 5, 8));
    }

    #[test]
    fn extreme_coordinates_build_and_link() {
        let far = Grid::new(
            [Cell::new(i32::MIN, 0), Cell::new(i32::MAX, 0)],
            Connectivity::Four,
        )
        .unwrap();
        assert_eq!(far.len(), 2);
        assert_eq!(far.neighbor_cells(Cell::new(i32::MIN, 0)).count(), 0);
        assert_eq!(far.bounds().min, Cell::new(i32::MIN, 0));

        let cells = [Cell::new(i32::MAX, 0)];
        let single = Grid::new(cells, Connectivity::Eight).unwrap();
        assert!(single.contains(Cell::new(i32::MAX, 0)));

        let m = i32::MAX;
        let corner = [
            Cell::new(m - 1, m - 1),
            Cell::new(m, m - 1),
            Cell::new(m - 1, m),
            Cell::new(m, m),
        ];
        let g = Grid::new(corner, Connectivity::Eight).unwrap();
        for c in corner {
            assert_eq!(g.neighbor_cells(c).count(), 3, "{c}");
        }
        assert!(g.are_linked(Cell::new(m, m), Cell::new(m - 1, m - 1)));
        assert_eq!(g.find_cell_at_point(m, m), Some(Cell::new(m, m)));
    }

    #[test]
    fn empty_grid() {
        let g = Grid::new(Vec::new(), Connectivity::Eight).unwrap();
        assert!(g.is_empty());
        assert!(g.bounds().is_empty());
        assert_eq!(g.find_cell_at_point(0, 0), None);
    }

    #[test]
    fn grid_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Grid>();
    }

    #[test]
    fn connectivity_from_flag() {
        assert_eq!(Connectivity::from_diagonal(true), Connectivity::Eight);
        assert_eq!(Connectivity::from_diagonal(false), Connectivity::Four);
        assert_eq!(Connectivity::default(), Connectivity::Four);
    }
}
