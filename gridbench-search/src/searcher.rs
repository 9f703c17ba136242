//! Search strategy abstraction.
//!
//! Lets the harness time any strategy the same way without knowing how it
//! explores the grid.

use std::time::Instant;

use gridbench_core::SearchRequest;

use crate::path::{PathLength, SearchResult};

/// A shortest-path strategy over an unweighted obstacle grid.
///
/// Implementations keep all per-search state local to one call, so a single
/// searcher may serve concurrent requests without locking.
pub trait Searcher: Send + Sync {
    /// Identifier reported alongside this searcher's timings.
    fn name(&self) -> &'static str;

    /// Length of the shortest path from the request's start to its goal.
    fn shortest_path(&self, request: &SearchRequest<'_>) -> PathLength;

    /// Runs [`Searcher::shortest_path`] once and records its wall-clock cost.
    fn search(&self, request: &SearchRequest<'_>) -> SearchResult {
        let started = Instant::now();
        let path_length = self.shortest_path(request);
        SearchResult::new(path_length, started.elapsed())
    }
}
