//! A grid, its live block map and the configuration that built them.

use std::collections::HashSet;

use rand::Rng;
use tracegrid_core::{Cell, Grid};
use tracegrid_paths::{PathResult, PathSearch};

use crate::blocks::BlockMap;
use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::layout::{CellDescriptor, Layout};
use crate::mapgen::scatter_blocks;
use crate::navigator::Navigator;

/// A scene: immutable grid plus mutable blocked state.
#[derive(Debug, Clone)]
pub struct Scene {
    grid: Grid,
    blocks: BlockMap,
    config: SceneConfig,
    start: Option<Cell>,
    target: Option<Cell>,
}

impl Scene {
    /// Build a scene from cell descriptors.
    ///
    /// Descriptor order is kept as the grid's insertion order.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = CellDescriptor>,
        config: SceneConfig,
    ) -> Result<Self, SceneError> {
        if !config.has_valid_cell_size() {
            return Err(SceneError::InvalidCellSize(config.cell_size));
        }
        let descriptors: Vec<CellDescriptor> = descriptors.into_iter().collect();
        let cells = descriptors.iter().map(|d| d.cell);
        let grid = Grid::new(cells, config.connectivity)?;
        let blocks = BlockMap::from_descriptors(&descriptors);
        log::debug!(
            "scene: {} cells, {} blocked, {:?}",
            grid.len(),
            blocks.len(),
            config.strategy
        );
        Ok(Self {
            grid,
            blocks,
            config,
            start: None,
            target: None,
        })
    }

    /// Build a scene from a parsed layout, keeping its markers.
    pub fn from_layout(layout: &Layout, config: SceneConfig) -> Result<Self, SceneError> {
        let descriptors = layout.descriptors().iter().copied();
        let mut scene = Self::from_descriptors(descriptors, config)?;
        scene.start = layout.start();
        scene.target = layout.target();
        Ok(scene)
    }

    /// Parse layout text and build a scene from it.
    pub fn parse(text: &str, config: SceneConfig) -> Result<Self, SceneError> {
        let layout = Layout::parse(text)?;
        Self::from_layout(&layout, config)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn blocks(&self) -> &BlockMap {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> &mut BlockMap {
        &mut self.blocks
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The layout's start marker, if it had one.
    pub fn start(&self) -> Option<Cell> {
        self.start
    }

    /// The layout's target marker, if it had one.
    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// The grid cell under world position `(x, y)`, if any.
    pub fn cell_at_position(&self, x: f32, y: f32) -> Option<Cell> {
        let c = self.config.to_lattice(x, y)?;
        self.grid.find_cell_at_point(c.x, c.y)
    }

    /// One-shot search from `start` to `target` against the current blocks.
    pub fn plan(&self, start: Cell, target: Cell) -> PathResult {
        self.config
            .planner()
            .search(&self.grid, start, target, &self.blocks)
    }

    /// Scatter random blocks over the scene, leaving its start and target
    /// markers and `keep` open. See [`scatter_blocks`].
    pub fn scatter<R: Rng>(&mut self, rng: &mut R, density: f64, keep: &[Cell]) -> usize {
        let mut keep = keep.to_vec();
        keep.extend(self.start);
        keep.extend(self.target);
        scatter_blocks(&self.grid, &mut self.blocks, rng, density, &keep)
    }

    /// A navigator heading for `target`, with its own planner.
    pub fn navigator(&self, target: Cell) -> Navigator {
        Navigator::new(self.config.planner(), target)
    }

    /// Draw the scene as text, overlaying `path`.
    ///
    /// The first path cell is drawn `S`, the last `T`, the rest `*`; other
    /// cells use the layout runes. Trailing holes are trimmed from each row.
    pub fn render(&self, path: &[Cell]) -> String {
        let bounds = self.grid.bounds();
        let on_path: HashSet<Cell> = path.iter().copied().collect();
        let mut out = String::new();
        for y in bounds.min.y..bounds.max.y {
            let mut line = String::new();
            for x in bounds.min.x..bounds.max.x {
                let c = Cell::new(x, y);
                let ch = if !self.grid.contains(c) {
                    ' '
                } else if path.first() == Some(&c) {
                    'S'
                } else if path.last() == Some(&c) {
                    'T'
                } else if on_path.contains(&c) {
                    '*'
                } else if self.blocks.is_blocked(c) {
                    '#'
                } else {
                    '.'
                };
                line.push(ch);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out
    }
}
