//! Grid coordinates and the `row,col` text form accepted from callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which end of a search a coordinate belongs to.
///
/// Carried by every coordinate error so the caller can tell which input to fix.
/// Displays as the query parameter the coordinate arrives in: `start` or `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    /// Where the search begins.
    #[serde(rename = "start")]
    Start,
    /// Where the search must arrive.
    #[serde(rename = "end")]
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("end"),
        }
    }
}

/// A validated, 0-indexed `(row, col)` position.
///
/// Only produced by [`Grid::resolve`](crate::Grid::resolve) or constructed
/// directly by code that already knows the position is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coordinate {
    /// Creates a `Coordinate`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A parsed but not yet bounds-checked coordinate.
///
/// Components are signed so that negative input survives parsing and is
/// reported as out of bounds instead of malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RawCoordinate {
    /// Row component as supplied.
    pub row: i64,
    /// Column component as supplied.
    pub col: i64,
}

impl RawCoordinate {
    /// Creates a `RawCoordinate`.
    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(coord: Coordinate) -> Self {
        Self {
            row: i64::try_from(coord.row).unwrap_or(i64::MAX),
            col: i64::try_from(coord.col).unwrap_or(i64::MAX),
        }
    }
}

/// Parses `"row,col"` into a [`RawCoordinate`].
///
/// Components are parsed exactly as given; whitespace is not trimmed.
///
/// # Errors
/// Returns [`CoreError::MalformedCoordinate`] if the input does not contain
/// exactly two comma-separated components, or if either is not an integer.
pub fn parse_coordinate(endpoint: Endpoint, input: &str) -> Result<RawCoordinate, CoreError> {
    let malformed = |reason: String| CoreError::MalformedCoordinate {
        endpoint,
        input: input.to_owned(),
        reason,
    };

    let parts: Vec<&str> = input.split(',').collect();
    let [row, col] = parts.as_slice() else {
        return Err(malformed(format!(
            "expected two comma-separated integers, found {} component(s)",
            parts.len()
        )));
    };

    let row = row
        .parse::<i64>()
        .map_err(|e| malformed(format!("row is not an integer: {e}")))?;
    let col = col
        .parse::<i64>()
        .map_err(|e| malformed(format!("column is not an integer: {e}")))?;

    Ok(RawCoordinate { row, col })
}
