use crate::coord::Endpoint;

/// Errors produced by the `gridbench-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// The obstacle matrix is empty, ragged, or contains a value other than 0/1.
    #[error("invalid grid: {reason}")]
    InvalidGrid { reason: String },

    /// A coordinate string did not parse into two integers.
    #[error("malformed {endpoint} coordinate '{input}': {reason}")]
    MalformedCoordinate {
        endpoint: Endpoint,
        input: String,
        reason: String,
    },

    /// A coordinate lies outside the grid.
    #[error("{endpoint} coordinate ({row},{col}) is out of bounds for a {rows}x{cols} grid")]
    OutOfBounds {
        endpoint: Endpoint,
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },

    /// A coordinate refers to an obstacle cell.
    #[error("{endpoint} coordinate ({row},{col}) cannot be on an obstacle")]
    BlockedCell {
        endpoint: Endpoint,
        row: usize,
        col: usize,
    },

    /// A benchmark or gateway setting failed validation.
    #[error("invalid configuration for '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl CoreError {
    /// Returns `true` for errors caused by caller input rather than configuration.
    #[must_use]
    pub fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedCoordinate { .. } | Self::OutOfBounds { .. } | Self::BlockedCell { .. }
        )
    }
}
