//! Scene configuration.

use tracegrid_core::{Cell, Connectivity};
use tracegrid_paths::{Planner, Strategy};

/// How a scaled world coordinate is turned into a lattice coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round towards negative infinity: cell `n` covers `[n, n + 1)`.
    #[default]
    Floor,
    /// Round to the nearest integer: cell `n` is centred on `n`.
    Nearest,
    /// Round towards zero.
    Truncate,
}

impl Rounding {
    /// Apply the rounding to `v`. Returns `None` for non-finite input.
    pub fn apply(self, v: f32) -> Option<i32> {
        if !v.is_finite() {
            return None;
        }
        let r = match self {
            Self::Floor => v.floor(),
            Self::Nearest => v.round(),
            Self::Truncate => v.trunc(),
        };
        Some(r as i32)
    }
}

/// Configuration for building a [`Scene`](crate::Scene).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SceneConfig {
    /// Whether diagonal neighbors are linked.
    pub connectivity: Connectivity,
    /// World units per cell along each axis. Must be positive and finite.
    pub cell_size: f32,
    /// How scaled positions map onto lattice coordinates.
    pub rounding: Rounding,
    /// Search run by planners built from this scene.
    pub strategy: Strategy,
    /// Optional bound passed to each planner.
    pub max_steps: Option<usize>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            cell_size: 1.0,
            rounding: Rounding::Floor,
            strategy: Strategy::Greedy,
            max_steps: None,
        }
    }
}

impl SceneConfig {
    /// Whether `cell_size` is usable.
    pub fn has_valid_cell_size(&self) -> bool {
        self.cell_size.is_finite() && self.cell_size > 0.0
    }

    /// Map a world position onto lattice coordinates.
    ///
    /// The result is not checked against any grid.
    pub fn to_lattice(&self, x: f32, y: f32) -> Option<Cell> {
        let cx = self.rounding.apply(x / self.cell_size)?;
        let cy = self.rounding.apply(y / self.cell_size)?;
        Some(Cell::new(cx, cy))
    }

    /// A fresh planner for one agent.
    pub fn planner(&self) -> Planner {
        Planner::new(self.strategy, self.max_steps)
    }
}
