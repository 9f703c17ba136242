//! Error types for the search crate.

use gridbench_core::{Coordinate, CoreError};

use crate::path::PathLength;

/// Errors that can occur while benchmarking searchers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The request or configuration was rejected before any search ran.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Two searchers reported different lengths for the same request.
    ///
    /// Every searcher works on the same unweighted grid, so this is always a
    /// defect in one of them and never a valid outcome.
    #[error(
        "searchers disagree on {start} -> {goal}: {reference} found {reference_length}, \
         {algorithm} found {found}"
    )]
    LengthMismatch {
        start: Coordinate,
        goal: Coordinate,
        reference: &'static str,
        reference_length: PathLength,
        algorithm: &'static str,
        found: PathLength,
    },

    /// A searcher answered differently on a later repetition of the same request.
    #[error("{algorithm} found {first} on the first repetition but {found} on repetition {repetition}")]
    InconsistentLength {
        algorithm: &'static str,
        repetition: usize,
        first: PathLength,
        found: PathLength,
    },
}
