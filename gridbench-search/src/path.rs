//! Search outcomes.

use std::fmt;
use std::time::Duration;

use serde::{Serialize, Serializer};

/// Wire value standing in for [`PathLength::Unreachable`].
pub const UNREACHABLE_WIRE: i64 = -1;

/// Number of edges on the shortest path found, or no path at all.
///
/// Ordered so that every reachable length sorts before `Unreachable`, which
/// lets searchers keep a running minimum with `min`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathLength {
    /// A path exists and has this many steps; start == goal gives 0.
    Steps(usize),
    /// No path of free cells connects start and goal.
    Unreachable,
}

impl PathLength {
    /// Step count, if reachable.
    #[must_use]
    pub fn steps(self) -> Option<usize> {
        match self {
            Self::Steps(n) => Some(n),
            Self::Unreachable => None,
        }
    }

    /// `true` unless this is [`PathLength::Unreachable`].
    #[must_use]
    pub fn is_reachable(self) -> bool {
        matches!(self, Self::Steps(_))
    }

    /// Integer form used on the wire: the step count, or [`UNREACHABLE_WIRE`].
    #[must_use]
    pub fn to_wire(self) -> i64 {
        match self {
            Self::Steps(n) => i64::try_from(n).unwrap_or(i64::MAX),
            Self::Unreachable => UNREACHABLE_WIRE,
        }
    }
}

impl From<Option<usize>> for PathLength {
    fn from(steps: Option<usize>) -> Self {
        steps.map_or(Self::Unreachable, Self::Steps)
    }
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Steps(n) => write!(f, "{n}"),
            Self::Unreachable => f.write_str("unreachable"),
        }
    }
}

impl Serialize for PathLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.to_wire())
    }
}

/// One timed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct SearchResult {
    /// Length the searcher reported.
    pub path_length: PathLength,
    /// Wall-clock time the search took.
    pub elapsed: Duration,
}

impl SearchResult {
    /// Creates a `SearchResult`.
    #[must_use]
    pub fn new(path_length: PathLength, elapsed: Duration) -> Self {
        Self { path_length, elapsed }
    }

    /// Elapsed time in nanoseconds.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u128 {
        self.elapsed.as_nanos()
    }
}
