//! Scene layouts built from text.
//!
//! A [`Layout`] parses ASCII art into [`CellDescriptor`]s: the coordinates of
//! every cell plus its initial blocked flag. Lines may differ in width, and
//! spaces are holes, so layouts can describe any cell set.
//!
//! | Rune | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | blocked cell |
//! | `S` | open cell, start marker |
//! | `T` | open cell, target marker |
//! | ` ` | no cell |

use std::fmt;

use tracegrid_core::Cell;

/// A cell together with its initial blocked flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellDescriptor {
    pub cell: Cell,
    pub blocked: bool,
}

impl CellDescriptor {
    /// An open cell.
    pub const fn open(cell: Cell) -> Self {
        Self {
            cell,
            blocked: false,
        }
    }

    /// A blocked cell.
    pub const fn blocked(cell: Cell) -> Self {
        Self {
            cell,
            blocked: true,
        }
    }
}

/// A parsed scene layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    descriptors: Vec<CellDescriptor>,
    start: Option<Cell>,
    target: Option<Cell>,
}

impl Layout {
    /// Characters accepted by [`parse`](Self::parse).
    pub const RUNES: &'static str = ".#ST ";

    /// Parse a layout.
    ///
    /// Blank lines before the first and after the last row are ignored.
    /// Row `y` of the text becomes lattice row `y`, and column `x` becomes
    /// lattice column `x`. Descriptors come out in row-major order, which is
    /// also the neighbor order of a grid built from them.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim_matches(|c| c == '\n' || c == '\r');
        let mut descriptors = Vec::new();
        let mut start = None;
        let mut target = None;

        for (y, line) in s.lines().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let cell = Cell::new(x as i32, y as i32);
                let marker = match ch {
                    ' ' => continue,
                    '.' => None,
                    '#' => {
                        descriptors.push(CellDescriptor::blocked(cell));
                        continue;
                    }
                    'S' => Some(&mut start),
                    'T' => Some(&mut target),
                    _ => {
                        return Err(LayoutError::InvalidRune {
                            ch,
                            pos: cell,
                            line: line.to_string(),
                        });
                    }
                };
                if let Some(slot) = marker {
                    if let Some(first) = *slot {
                        return Err(LayoutError::DuplicateMarker {
                            ch,
                            first,
                            second: cell,
                        });
                    }
                    *slot = Some(cell);
                }
                descriptors.push(CellDescriptor::open(cell));
            }
        }

        if descriptors.is_empty() {
            return Err(LayoutError::Empty);
        }
        Ok(Self {
            descriptors,
            start,
            target,
        })
    }

    /// All cell descriptors, row-major.
    pub fn descriptors(&self) -> &[CellDescriptor] {
        &self.descriptors
    }

    /// Cells of the layout, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.descriptors.iter().map(|d| d.cell)
    }

    /// Cells initially blocked.
    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.descriptors
            .iter()
            .filter(|d| d.blocked)
            .map(|d| d.cell)
    }

    /// The `S` marker, if present.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The `T` marker, if present.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A character outside [`Layout::RUNES`] was found.
    InvalidRune { ch: char, pos: Cell, line: String },
    /// A marker rune appeared twice.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
    /// The layout describes no cells.
    Empty,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRune { ch, pos, line } => {
                write!(
                    f,
                    "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}:\n{line}"
                )
            }
            Self::DuplicateMarker { ch, first, second } => {
                write!(f, "layout: marker {ch} at both {first} and {second}")
            }
            Self::Empty => write!(f, "layout: no cells"),
        }
    }
}

impl std::error::Error for LayoutError {}
