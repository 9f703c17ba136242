//! Level-order search.

use std::collections::VecDeque;

use gridbench_core::SearchRequest;

use crate::path::PathLength;
use crate::searcher::Searcher;
use crate::visited::VisitedSet;

/// Breadth-first searcher.
///
/// Cells leave the FIFO frontier in order of distance from the start, so the
/// first time the goal is dequeued its distance is minimal. Cells are marked
/// visited when enqueued, which keeps each cell in the frontier at most once.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl Searcher for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn shortest_path(&self, request: &SearchRequest<'_>) -> PathLength {
        let grid = request.grid();
        let goal = request.goal();

        let mut visited = VisitedSet::for_grid(grid);
        visited.insert(request.start());
        let mut frontier = VecDeque::from([(request.start(), 0_usize)]);

        while let Some((at, distance)) = frontier.pop_front() {
            if at == goal {
                return PathLength::Steps(distance);
            }
            for next in grid.neighbors(at) {
                if visited.insert(next) {
                    frontier.push_back((next, distance + 1));
                }
            }
        }
        PathLength::Unreachable
    }
}
