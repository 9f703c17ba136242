//! HTTP API gateway for the gridbench pathfinding benchmark.
//!
//! Exposes `GET /pathfinder`, which validates a start/goal pair against the
//! sample grid and returns brute-force and breadth-first timings, plus a
//! `GET /health` liveness check.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
