//! Validated search input.

use crate::coord::{parse_coordinate, Coordinate, Endpoint, RawCoordinate};
use crate::error::CoreError;
use crate::grid::Grid;

/// A start/goal pair checked against a grid.
///
/// Both endpoints are in bounds and free; no search ever sees a request that
/// violates this. The grid is borrowed, so a request is as cheap to build as
/// the two coordinates it validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchRequest<'g> {
    grid: &'g Grid,
    start: Coordinate,
    goal: Coordinate,
}

impl<'g> SearchRequest<'g> {
    /// Validates `start` and `goal` against `grid`.
    ///
    /// # Errors
    /// Returns [`CoreError::OutOfBounds`] or [`CoreError::BlockedCell`] for the
    /// first endpoint that fails, start before goal.
    pub fn new(grid: &'g Grid, start: Coordinate, goal: Coordinate) -> Result<Self, CoreError> {
        Self::from_raw(grid, start.into(), goal.into())
    }

    /// Parses `"row,col"` strings for both endpoints and validates them.
    ///
    /// Both strings are parsed before either is checked against the grid, so
    /// syntax errors always win over bounds or obstacle errors.
    ///
    /// # Errors
    /// Returns [`CoreError::MalformedCoordinate`], [`CoreError::OutOfBounds`]
    /// or [`CoreError::BlockedCell`].
    pub fn parse(grid: &'g Grid, start: &str, goal: &str) -> Result<Self, CoreError> {
        let start = parse_coordinate(Endpoint::Start, start)?;
        let goal = parse_coordinate(Endpoint::Goal, goal)?;
        Self::from_raw(grid, start, goal)
    }

    fn from_raw(grid: &'g Grid, start: RawCoordinate, goal: RawCoordinate) -> Result<Self, CoreError> {
        let start = grid.resolve(Endpoint::Start, start)?;
        let goal = grid.resolve(Endpoint::Goal, goal)?;
        Ok(Self { grid, start, goal })
    }

    /// The grid being searched.
    #[must_use]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Where the search begins.
    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.start
    }

    /// Where the search must arrive.
    #[must_use]
    pub fn goal(&self) -> Coordinate {
        self.goal
    }

    /// The same request with start and goal swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self { grid: self.grid, start: self.goal, goal: self.start }
    }
}
