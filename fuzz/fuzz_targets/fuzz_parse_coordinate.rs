//! Fuzz target: coordinate parsing and validation against the sample grid.
//!
//! Arbitrary `start` / `end` strings must either produce a request whose
//! endpoints are free cells or fail with a typed error. Never a panic.

#![no_main]

use gridbench_core::{sample_grid, SearchRequest};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let (start, end) = text.split_once('&').unwrap_or((text, ""));

    let grid = sample_grid();
    if let Ok(request) = SearchRequest::parse(&grid, start, end) {
        assert!(grid.validate(request.start()), "accepted start must be free");
        assert!(grid.validate(request.goal()), "accepted goal must be free");
    }
});
