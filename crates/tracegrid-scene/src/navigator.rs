//! Per-agent re-planning driven by world positions.
//!
//! The driving loop calls [`Navigator::tick`] once per frame with the
//! subject's position. A new search runs only when the subject has entered
//! a different cell, or after [`invalidate`](Navigator::invalidate) /
//! [`set_target`](Navigator::set_target); otherwise the last result stands.

use tracegrid_core::Cell;
use tracegrid_paths::{PathResult, PathSearch, Planner};

use crate::scene::Scene;

/// What a [`Navigator::tick`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum NavUpdate {
    /// The position is not over any grid cell; no search ran.
    OffGrid,
    /// Same cell as last tick and nothing invalidated; no search ran.
    Unchanged,
    /// The subject stands on the target.
    Arrived,
    /// A new search ran. The result may be unreachable.
    Replanned(PathResult),
}

/// Re-plans a single agent's route as it moves.
#[derive(Debug, Clone)]
pub struct Navigator {
    planner: Planner,
    target: Cell,
    current: Option<Cell>,
    stale: bool,
    last: PathResult,
}

impl Navigator {
    /// Create a navigator heading for `target`.
    pub fn new(planner: Planner, target: Cell) -> Self {
        Self {
            planner,
            target,
            current: None,
            stale: true,
            last: PathResult::unreachable(),
        }
    }

    pub fn target(&self) -> Cell {
        self.target
    }

    /// The cell the subject occupied at the last tick.
    pub fn current_cell(&self) -> Option<Cell> {
        self.current
    }

    /// The most recent search result.
    pub fn last_result(&self) -> &PathResult {
        &self.last
    }

    /// Head for a new target; the next tick re-plans.
    pub fn set_target(&mut self, target: Cell) {
        if target != self.target {
            self.target = target;
            self.stale = true;
        }
    }

    /// Force the next tick to re-plan, e.g. after the block map changed.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Observe the subject at world position `(x, y)`.
    pub fn tick(&mut self, scene: &Scene, x: f32, y: f32) -> NavUpdate {
        let Some(cell) = scene.cell_at_position(x, y) else {
            if self.current.take().is_some() {
                log::debug!("navigator: subject left the grid");
            }
            self.stale = true;
            return NavUpdate::OffGrid;
        };
        if self.current == Some(cell) && !self.stale {
            return NavUpdate::Unchanged;
        }
        self.current = Some(cell);
        self.stale = false;

        let result = self
            .planner
            .search(scene.grid(), cell, self.target, scene.blocks());
        self.last = result.clone();
        if result.reachable && result.path.is_empty() {
            log::debug!("navigator: arrived at {}", self.target);
            return NavUpdate::Arrived;
        }
        if result.reachable {
            log::debug!("navigator: {cell} -> {}: route found", self.target);
        } else {
            log::debug!("navigator: {cell} -> {}: unreachable", self.target);
        }
        NavUpdate::Replanned(result)
    }
}
