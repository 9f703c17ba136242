//! Repeated, timed execution of searchers over one request.
//!
//! A single search on the sample grid finishes in microseconds, well inside
//! timer noise, so each algorithm runs `repetitions` times and the summed
//! wall-clock time is averaged.

use std::time::Duration;

use chrono::Utc;
use gridbench_core::{BenchmarkConfig, SearchRequest};
use tracing::{debug, error};

use crate::bfs::BreadthFirst;
use crate::brute_force::BruteForce;
use crate::error::SearchError;
use crate::path::PathLength;
use crate::report::{BenchmarkEntry, BenchmarkReport};
use crate::searcher::Searcher;

/// Runs each searcher a fixed number of times and averages the cost.
///
/// Every repetition is an independent call, so per-search state such as the
/// visited set is rebuilt from scratch each time.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkHarness {
    repetitions: usize,
}

impl BenchmarkHarness {
    /// Creates a harness using the configured repetition count.
    #[must_use]
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self { repetitions: config.repetitions() }
    }

    /// Repetitions per algorithm.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }

    /// Times `searcher` over `repetitions` runs of `request`.
    ///
    /// # Errors
    /// Returns [`SearchError::InconsistentLength`] if any repetition reports a
    /// different length from the first.
    pub fn measure(
        &self,
        searcher: &dyn Searcher,
        request: &SearchRequest<'_>,
    ) -> Result<BenchmarkEntry, SearchError> {
        let mut total = Duration::ZERO;
        let mut first = None;
        for repetition in 0..self.repetitions {
            let result = searcher.search(request);
            total += result.elapsed;
            let expected = *first.get_or_insert(result.path_length);
            if result.path_length != expected {
                error!(
                    algorithm = searcher.name(),
                    repetition,
                    first = %expected,
                    found = %result.path_length,
                    "searcher changed its answer between repetitions"
                );
                return Err(SearchError::InconsistentLength {
                    algorithm: searcher.name(),
                    repetition,
                    first: expected,
                    found: result.path_length,
                });
            }
        }
        let path_length = first.unwrap_or(PathLength::Unreachable);

        let entry = BenchmarkEntry::new(searcher.name(), path_length, average(total, self.repetitions));
        debug!(
            algorithm = entry.algorithm,
            %path_length,
            average_ms = entry.average_elapsed_millis(),
            repetitions = self.repetitions,
            "searcher measured"
        );
        Ok(entry)
    }

    /// Times each searcher in turn, keeping their order in the report.
    ///
    /// Every searcher must report the same length as the first one.
    ///
    /// # Errors
    /// Returns [`SearchError::InconsistentLength`] from [`Self::measure`], or
    /// [`SearchError::LengthMismatch`] naming the first searcher that
    /// disagrees with the first searcher in `searchers`.
    pub fn run_with(
        &self,
        request: &SearchRequest<'_>,
        searchers: &[&dyn Searcher],
    ) -> Result<BenchmarkReport, SearchError> {
        let started_at = Utc::now();
        let entries = searchers
            .iter()
            .map(|s| self.measure(*s, request))
            .collect::<Result<Vec<_>, _>>()?;

        if let Some((reference, rest)) = entries.split_first() {
            if let Some(odd) = rest.iter().find(|e| e.path_length != reference.path_length) {
                error!(
                    start = %request.start(),
                    goal = %request.goal(),
                    reference = reference.algorithm,
                    reference_length = %reference.path_length,
                    algorithm = odd.algorithm,
                    found = %odd.path_length,
                    "searchers disagree on path length"
                );
                return Err(SearchError::LengthMismatch {
                    start: request.start(),
                    goal: request.goal(),
                    reference: reference.algorithm,
                    reference_length: reference.path_length,
                    algorithm: odd.algorithm,
                    found: odd.path_length,
                });
            }
        }

        Ok(BenchmarkReport::new(started_at, self.repetitions, entries))
    }

    /// Benchmarks brute force, then breadth-first search.
    ///
    /// # Errors
    /// Returns [`SearchError::LengthMismatch`] if the two searchers disagree
    /// on the path length, or [`SearchError::InconsistentLength`] if either
    /// changes its answer between repetitions.
    pub fn run(&self, request: &SearchRequest<'_>) -> Result<BenchmarkReport, SearchError> {
        self.run_with(request, &[&BruteForce, &BreadthFirst])
    }
}

/// Parses `start` and `goal` against the configured grid and benchmarks them.
///
/// # Errors
/// Returns [`SearchError::Core`] if either coordinate is rejected, before any
/// search runs, or any error from [`BenchmarkHarness::run`].
pub fn benchmark(config: &BenchmarkConfig, start: &str, goal: &str) -> Result<BenchmarkReport, SearchError> {
    let request = SearchRequest::parse(config.grid(), start, goal)?;
    BenchmarkHarness::new(config).run(&request)
}

fn average(total: Duration, repetitions: usize) -> Duration {
    let nanos = total.as_nanos() / repetitions.max(1) as u128;
    Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
}
