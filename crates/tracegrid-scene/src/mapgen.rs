//! Random obstacle placement.

use rand::Rng;
use tracegrid_core::{Cell, Grid};

use crate::blocks::BlockMap;

/// Block each open cell of `grid` with probability `density`, skipping the
/// cells in `keep`.
///
/// `density` is clamped to `0.0..=1.0`. Cells are visited in grid insertion
/// order, so a seeded `rng` gives reproducible maps. Returns the number of
/// newly blocked cells.
pub fn scatter_blocks<R: Rng>(
    grid: &Grid,
    blocks: &mut BlockMap,
    rng: &mut R,
    density: f64,
    keep: &[Cell],
) -> usize {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut placed = 0;
    for &c in grid.cells() {
        if keep.contains(&c) || blocks.is_blocked(c) {
            continue;
        }
        if rng.random_bool(density) {
            blocks.block(c);
            placed += 1;
        }
    }
    log::debug!("scatter: blocked {placed} of {} cells", grid.len());
    placed
}
