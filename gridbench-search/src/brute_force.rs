//! Exhaustive depth-first search with backtracking.
//!
//! Enumerates every simple path leaving the start cell and keeps the shortest
//! one that ends at the goal. The only pruning is the visited set, which stops
//! a path from re-entering a cell it already holds; the cost therefore grows
//! with the number of simple paths, exponentially in the worst case. This is
//! the naive baseline the breadth-first searcher is measured against.

use gridbench_core::{Coordinate, Grid, SearchRequest};

use crate::path::PathLength;
use crate::searcher::Searcher;
use crate::visited::VisitedSet;

/// Exhaustive depth-first searcher.
///
/// Recursion depth is bounded by the number of free cells, so keep grids
/// small when using it.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl Searcher for BruteForce {
    fn name(&self) -> &'static str {
        "brute"
    }

    fn shortest_path(&self, request: &SearchRequest<'_>) -> PathLength {
        if request.start() == request.goal() {
            return PathLength::Steps(0);
        }
        let mut walk = Walk {
            grid: request.grid(),
            goal: request.goal(),
            visited: VisitedSet::for_grid(request.grid()),
            best: PathLength::Unreachable,
        };
        walk.explore(request.start(), 0);
        walk.best
    }
}

/// State of one exhaustive search; dropped when the search returns.
struct Walk<'g> {
    grid: &'g Grid,
    goal: Coordinate,
    visited: VisitedSet,
    best: PathLength,
}

impl Walk<'_> {
    fn explore(&mut self, at: Coordinate, length: usize) {
        if at == self.goal {
            self.best = self.best.min(PathLength::Steps(length));
            return;
        }

        self.visited.insert(at);
        let grid = self.grid;
        for next in grid.neighbors(at) {
            if !self.visited.contains(next) {
                self.explore(next, length + 1);
            }
        }
        // Release the cell so other branches may route through it.
        self.visited.remove(at);
    }
}
