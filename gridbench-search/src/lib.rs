//! Shortest-path searchers and the benchmark harness that compares them.
//!
//! Two strategies answer the same question, "how many steps from start to
//! goal?": an exhaustive depth-first [`BruteForce`] baseline and an optimal
//! [`BreadthFirst`] search. [`BenchmarkHarness`] times both over many
//! repetitions and reports the averages in invocation order.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod bfs;
pub mod brute_force;
pub mod error;
pub mod harness;
pub mod path;
pub mod report;
pub mod searcher;
mod visited;

pub use bfs::BreadthFirst;
pub use brute_force::BruteForce;
pub use error::SearchError;
pub use harness::{benchmark, BenchmarkHarness};
pub use path::{PathLength, SearchResult, UNREACHABLE_WIRE};
pub use report::{BenchmarkEntry, BenchmarkId, BenchmarkReport};
pub use searcher::Searcher;
