//! Axum route handlers for the gridbench gateway API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use gridbench_core::BenchmarkConfig;
use gridbench_search::benchmark;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, warn};

use crate::error::GatewayError;

// ── Shared state ─────────────────────────────────────────────────────────────

type Shared = Arc<BenchmarkConfig>;

/// Response header carrying the id of the benchmark that produced the body.
pub const BENCHMARK_ID_HEADER: &str = "x-benchmark-id";

// ── Request types ─────────────────────────────────────────────────────────────

/// Query string of `GET /pathfinder`: `start=row,col&end=row,col`.
#[derive(Debug, Deserialize)]
pub struct PathfinderQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router serving benchmarks from `config`.
pub fn create_router(config: Shared) -> Router {
    Router::new()
        .route("/pathfinder", get(pathfinder))
        .route("/health", get(health))
        .with_state(config)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness check.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /pathfinder?start=r,c&end=r,c`: benchmark brute force against BFS.
///
/// Responds with a JSON array, brute force first:
/// `[{"algorithm":"brute","path_length":14,"execution_time_ms":0.05}, ...]`.
/// A `path_length` of `-1` means the goal is unreachable.
///
/// # Errors
/// Returns [`GatewayError::MissingParams`] if `start` or `end` is absent,
/// [`GatewayError::Search`] if a coordinate is rejected or the searchers
/// disagree, and [`GatewayError::TaskFailed`] if the benchmark task dies.
pub async fn pathfinder(
    State(config): State<Shared>,
    Query(query): Query<PathfinderQuery>,
) -> Result<impl IntoResponse, GatewayError> {
    let start = query.start.filter(|s| !s.is_empty());
    let end = query.end.filter(|s| !s.is_empty());
    let (Some(start), Some(end)) = (start, end) else {
        return Err(GatewayError::MissingParams("start, end".to_owned()));
    };

    // The exhaustive search is CPU-bound; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || benchmark(&config, &start, &end))
        .await
        .map_err(|e| GatewayError::TaskFailed(e.to_string()))?
        .inspect_err(|e| warn!(error = %e, "pathfinder request rejected"))?;

    info!(
        id = %report.id,
        repetitions = report.repetitions,
        path_length = %report.entries().first().map(|e| e.path_length.to_string()).unwrap_or_default(),
        "benchmark complete"
    );
    debug!("\n{}", report.to_markdown());

    let id = report.id.to_string();
    Ok(([(BENCHMARK_ID_HEADER, id)], Json(report.into_entries())))
}
