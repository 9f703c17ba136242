//! Benchmark report model.

use std::fmt::{self, Write as _};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::path::PathLength;

/// Unique identifier for one benchmark run, used to correlate logs and responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BenchmarkId(pub Uuid);

impl BenchmarkId {
    /// Creates a new random `BenchmarkId`.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BenchmarkId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BenchmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timing of one algorithm, averaged over every repetition.
///
/// Serialises to the wire record
/// `{"algorithm": .., "path_length": .., "execution_time_ms": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct BenchmarkEntry {
    /// Searcher name, e.g. `"brute"` or `"bfs"`.
    pub algorithm: &'static str,
    /// Length the searcher reported; identical on every repetition.
    pub path_length: PathLength,
    /// Total wall-clock time divided by the repetition count.
    #[serde(rename = "execution_time_ms", serialize_with = "serialize_millis")]
    pub average: Duration,
}

impl BenchmarkEntry {
    /// Creates a `BenchmarkEntry`.
    #[must_use]
    pub fn new(algorithm: &'static str, path_length: PathLength, average: Duration) -> Self {
        Self { algorithm, path_length, average }
    }

    /// Average cost of one search in fractional milliseconds.
    #[must_use]
    pub fn average_elapsed_millis(&self) -> f64 {
        self.average.as_secs_f64() * 1000.0
    }
}

fn serialize_millis<S: Serializer>(average: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(average.as_secs_f64() * 1000.0)
}

/// Outcome of benchmarking a request, one entry per algorithm in the order
/// the algorithms ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct BenchmarkReport {
    /// Identifier for this run.
    pub id: BenchmarkId,
    /// When the first repetition began.
    pub started_at: DateTime<Utc>,
    /// Repetitions per algorithm.
    pub repetitions: usize,
    entries: Vec<BenchmarkEntry>,
}

impl BenchmarkReport {
    /// Creates a report with a fresh id.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>, repetitions: usize, entries: Vec<BenchmarkEntry>) -> Self {
        Self { id: BenchmarkId::new(), started_at, repetitions, entries }
    }

    /// Entries in invocation order.
    #[must_use]
    pub fn entries(&self) -> &[BenchmarkEntry] {
        &self.entries
    }

    /// The entry for `algorithm`, if it ran.
    #[must_use]
    pub fn entry(&self, algorithm: &str) -> Option<&BenchmarkEntry> {
        self.entries.iter().find(|e| e.algorithm == algorithm)
    }

    /// Consumes the report, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<BenchmarkEntry> {
        self.entries
    }

    /// Renders the entries as a Markdown table.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = format!(
            "## Benchmark {}\n\n{} repetitions per algorithm, started {}\n\n",
            self.id,
            self.repetitions,
            self.started_at.to_rfc3339()
        );
        out.push_str("| Algorithm | Path length | Average (ms) |\n");
        out.push_str("|-----------|-------------|--------------|\n");
        for entry in &self.entries {
            // Writing to a String cannot fail.
            let _ = writeln!(
                out,
                "| {} | {} | {:.6} |",
                entry.algorithm,
                entry.path_length,
                entry.average_elapsed_millis()
            );
        }
        out
    }
}
