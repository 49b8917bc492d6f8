//! Reference A* over a [`Grid`].
//!
//! Unlike [`GreedyWalk`](crate::GreedyWalk), this keeps an open set and
//! reopens cells when a cheaper route to them turns up, so it finds a
//! cheapest path whenever one exists. It exists to compare against the walk,
//! not to replace it.

use std::collections::BinaryHeap;

use tracegrid_core::{Cell, CellId, Connectivity, Grid};

use crate::outcome::PathResult;
use crate::traits::{BlockingPolicy, PathSearch};

#[derive(Clone, Debug)]
struct Node {
    g: f64,
    parent: Option<CellId>,
    generation: u32,
    open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0.0,
            parent: None,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` then insertion for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
struct NodeRef {
    id: CellId,
    f: f64,
    seq: u64,
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for NodeRef {}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then the
        // earliest pushed among equals.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Classical A* searcher with reusable node caches.
///
/// The heuristic is Manhattan distance on 4-connected grids and octile
/// distance (diagonals at 1.4) on 8-connected ones; both never overestimate
/// the step costs used by the walk.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    nodes: Vec<Node>,
    generation: u32,
    max_expansions: Option<usize>,
}

impl AStar {
    /// Create an unbounded searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a searcher that gives up after expanding `max_expansions` cells.
    pub fn with_max_expansions(max_expansions: usize) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    fn estimate(connectivity: Connectivity, from: Cell, to: Cell) -> f64 {
        match connectivity {
            Connectivity::Four => from.manhattan(to) as f64,
            Connectivity::Eight => from.octile(to),
        }
    }

    /// Compute a cheapest path from `start` to `target`.
    ///
    /// The endpoint contract matches the greedy walk: endpoints outside the
    /// grid or blocked are unreachable, and `start == target` succeeds with
    /// an empty path.
    pub fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult {
        let (Some(start_id), Some(target_id)) = (grid.id(start), grid.id(target)) else {
            log::debug!("astar {start} -> {target}: endpoint outside grid");
            return PathResult::unreachable();
        };
        if blocked.is_blocked(start) || blocked.is_blocked(target) {
            log::debug!("astar {start} -> {target}: endpoint blocked");
            return PathResult::unreachable();
        }
        if start_id == target_id {
            return PathResult::arrived();
        }

        let connectivity = grid.connectivity();
        let cur_gen = self.begin(grid.len());

        {
            let node = &mut self.nodes[start_id.index()];
            node.g = 0.0;
            node.parent = None;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut seq = 0u64;
        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            id: start_id,
            f: Self::estimate(connectivity, start, target),
            seq,
        });

        let mut expansions = 0usize;
        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };
            let cid = current.id;
            let ci = cid.index();

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }
            if cid == target_id {
                break 'search true;
            }
            if let Some(limit) = self.max_expansions {
                if expansions >= limit {
                    log::warn!("astar {start} -> {target}: gave up after {limit} expansions");
                    break 'search false;
                }
            }
            expansions += 1;

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_cell = grid.cell(cid);

            for &nid in grid.neighbors(cid) {
                let n_cell = grid.cell(nid);
                if blocked.is_blocked(n_cell) {
                    continue;
                }
                let tentative_g = current_g + current_cell.step_cost_to(n_cell);

                let n = &mut self.nodes[nid.index()];
                if n.generation == cur_gen {
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                }

                n.g = tentative_g;
                n.parent = Some(cid);
                n.open = true;

                seq += 1;
                open.push(NodeRef {
                    id: nid,
                    f: tentative_g + Self::estimate(connectivity, n_cell, target),
                    seq,
                });
            }
        };

        if !found {
            log::debug!("astar {start} -> {target}: no route after {expansions} expansions");
            return PathResult::unreachable();
        }

        // Reconstruct path.
        let cost = self.nodes[target_id.index()].g;
        let mut path = Vec::new();
        let mut cursor = Some(target_id);
        while let Some(id) = cursor {
            path.push(grid.cell(id));
            cursor = self.nodes[id.index()].parent;
        }
        path.reverse();
        PathResult::found(path, cost)
    }

    /// Size the node cache for `len` cells and open a new generation.
    fn begin(&mut self, len: usize) -> u32 {
        if self.nodes.len() < len {
            self.nodes.resize(len, Node::default());
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            for n in &mut self.nodes {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }
}

impl PathSearch for AStar {
    fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult {
        AStar::search(self, grid, start, target, blocked)
    }
}
