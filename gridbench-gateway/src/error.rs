//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gridbench_core::CoreError;
use gridbench_search::SearchError;
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// One or more required query parameters were absent or empty.
    #[error("missing required params: {0}")]
    MissingParams(String),

    /// An error propagated from validation or the benchmark harness.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// The blocking benchmark task panicked or was cancelled.
    #[error("benchmark task failed: {0}")]
    TaskFailed(String),
}

impl From<CoreError> for GatewayError {
    fn from(err: CoreError) -> Self {
        Self::Search(SearchError::Core(err))
    }
}

impl GatewayError {
    /// HTTP status for this error: caller mistakes are 400, everything else 500.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::MissingParams(_) => StatusCode::BAD_REQUEST,
            GatewayError::Search(SearchError::Core(e)) if e.is_request_error() => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"error": self.to_string()}))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use gridbench_core::{Coordinate, Endpoint};
    use gridbench_search::PathLength;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let missing = GatewayError::MissingParams("start, end".to_owned());
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);

        let blocked = GatewayError::from(CoreError::BlockedCell { endpoint: Endpoint::Goal, row: 0, col: 2 });
        assert_eq!(blocked.into_response().status(), StatusCode::BAD_REQUEST);

        let malformed = GatewayError::from(CoreError::MalformedCoordinate {
            endpoint: Endpoint::Start,
            input: "a,b".to_owned(),
            reason: "row is not an integer".to_owned(),
        });
        assert_eq!(malformed.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn gateway_error_configuration_and_defects_return_500() {
        let bad_grid = GatewayError::from(CoreError::InvalidGrid { reason: "ragged".to_owned() });
        assert_eq!(bad_grid.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let mismatch = GatewayError::Search(SearchError::LengthMismatch {
            start: Coordinate::new(0, 0),
            goal: Coordinate::new(1, 1),
            reference: "brute",
            reference_length: PathLength::Steps(4),
            algorithm: "bfs",
            found: PathLength::Steps(2),
        });
        assert_eq!(mismatch.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let drift = GatewayError::Search(SearchError::InconsistentLength {
            algorithm: "bfs",
            repetition: 3,
            first: PathLength::Steps(2),
            found: PathLength::Steps(3),
        });
        assert_eq!(
            drift.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "an unstable searcher must map to 500"
        );

        let task = GatewayError::TaskFailed("panicked".to_owned());
        assert_eq!(task.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn gateway_error_display_includes_message() {
        let err = GatewayError::from(CoreError::OutOfBounds {
            endpoint: Endpoint::Start,
            row: 9,
            col: 0,
            rows: 8,
            cols: 8,
        });
        let msg = err.to_string();
        assert!(msg.contains("out of bounds"), "Display must include the cause: {msg}");
        assert!(msg.starts_with("start"), "Display must name the endpoint: {msg}");
    }
}
