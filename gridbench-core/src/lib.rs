//! Core types for the gridbench pathfinding benchmark.
//!
//! Defines the obstacle grid, coordinates and their text form, validated
//! search requests, and the benchmark configuration shared by the search
//! engine and the HTTP gateway.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod request;
pub mod sample;

pub use config::{BenchmarkConfig, DEFAULT_REPETITIONS};
pub use coord::{parse_coordinate, Coordinate, Endpoint, RawCoordinate};
pub use error::CoreError;
pub use grid::{Cell, Grid};
pub use request::SearchRequest;
pub use sample::{sample_grid, SAMPLE_GRID};
