use tracegrid_core::{Cell, Grid};

use crate::astar::AStar;
use crate::outcome::PathResult;
use crate::traits::{BlockingPolicy, PathSearch};
use crate::walk::GreedyWalk;

/// Which search a [`Planner`] runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// [`GreedyWalk`]: cheap, may fail or detour where a route exists.
    #[default]
    Greedy,
    /// [`AStar`]: cheapest path whenever one exists.
    AStar,
}

/// A searcher chosen at runtime from a [`Strategy`].
#[derive(Debug, Clone)]
pub enum Planner {
    Greedy(GreedyWalk),
    AStar(AStar),
}

impl Planner {
    /// Build the searcher for `strategy`, optionally bounded.
    ///
    /// For the greedy walk the bound counts appended cells; for A* it counts
    /// expanded cells.
    pub fn new(strategy: Strategy, max_steps: Option<usize>) -> Self {
        match (strategy, max_steps) {
            (Strategy::Greedy, None) => Self::Greedy(GreedyWalk::new()),
            (Strategy::Greedy, Some(n)) => Self::Greedy(GreedyWalk::with_max_steps(n)),
            (Strategy::AStar, None) => Self::AStar(AStar::new()),
            (Strategy::AStar, Some(n)) => Self::AStar(AStar::with_max_expansions(n)),
        }
    }

    /// The strategy this planner runs.
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Greedy(_) => Strategy::Greedy,
            Self::AStar(_) => Strategy::AStar,
        }
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new(Strategy::default(), None)
    }
}

impl PathSearch for Planner {
    fn search<B: BlockingPolicy + ?Sized>(
        &mut self,
        grid: &Grid,
        start: Cell,
        target: Cell,
        blocked: &B,
    ) -> PathResult {
        match self {
            Self::Greedy(walk) => walk.search(grid, start, target, blocked),
            Self::AStar(astar) => astar.search(grid, start, target, blocked),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoneBlocked;
    use tracegrid_core::{Connectivity, Range};

    #[test]
    fn strategy_round_trips_through_planner() {
        assert_eq!(Planner::default().strategy(), Strategy::Greedy);
        let bounded = Planner::new(Strategy::AStar, Some(5));
        assert_eq!(bounded.strategy(), Strategy::AStar);
        match Planner::new(Strategy::Greedy, Some(5)) {
            Planner::Greedy(w) => assert_eq!(w.max_steps(), Some(5)),
            Planner::AStar(_) => panic!("expected greedy walk"),
        }
    }

    #[test]
    fn dispatches_to_selected_search() {
        let g = Grid::rect(Range::new(0, 0, 3, 3), Connectivity::Four);
        let (a, b) = (Cell::new(0, 0), Cell::new(2, 2));
        let mut greedy = Planner::new(Strategy::Greedy, None);
        let mut astar = Planner::new(Strategy::AStar, None);
        assert_eq!(
            greedy.search(&g, a, b, &NoneBlocked),
            GreedyWalk::new().search(&g, a, b, &NoneBlocked)
        );
        assert_eq!(
            astar.search(&g, a, b, &NoneBlocked),
            AStar::new().search(&g, a, b, &NoneBlocked)
        );
    }
}
