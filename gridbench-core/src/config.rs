//! Benchmark configuration.

use crate::error::CoreError;
use crate::grid::Grid;
use crate::sample::sample_grid;

/// Repetitions per algorithm when none is configured.
///
/// Keeps the exhaustive search to well under a second on the 8x8 sample grid.
pub const DEFAULT_REPETITIONS: usize = 1000;

/// The grid to search and how many times to run each algorithm on it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BenchmarkConfig {
    grid: Grid,
    repetitions: usize,
}

impl BenchmarkConfig {
    /// Creates a configuration.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] if `repetitions` is zero.
    pub fn new(grid: Grid, repetitions: usize) -> Result<Self, CoreError> {
        Ok(Self { grid, repetitions: check_repetitions(repetitions)? })
    }

    /// Replaces the grid.
    #[must_use]
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self
    }

    /// Replaces the repetition count.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidConfig`] if `repetitions` is zero.
    pub fn with_repetitions(mut self, repetitions: usize) -> Result<Self, CoreError> {
        self.repetitions = check_repetitions(repetitions)?;
        Ok(self)
    }

    /// The grid every request is validated against and searched on.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Runs per algorithm; always at least 1.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { grid: sample_grid(), repetitions: DEFAULT_REPETITIONS }
    }
}

fn check_repetitions(repetitions: usize) -> Result<usize, CoreError> {
    if repetitions == 0 {
        return Err(CoreError::InvalidConfig {
            field: "repetitions".to_owned(),
            reason: "must be a positive integer".to_owned(),
        });
    }
    Ok(repetitions)
}
