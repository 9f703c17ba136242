//! Fuzz target: both searchers on arbitrary small grids.
//!
//! The first byte picks the width (1..=4); remaining bytes become cells.
//! Brute force and BFS must agree on every start/goal pair.

#![no_main]

use gridbench_core::{Grid, SearchRequest};
use gridbench_search::{BreadthFirst, BruteForce, Searcher};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, cells)) = data.split_first() else {
        return;
    };
    let cols = usize::from(width % 4) + 1;
    let rows: Vec<Vec<u8>> = cells
        .chunks_exact(cols)
        .take(4)
        .map(|row| row.iter().map(|b| b % 3 / 2).collect())
        .collect();
    let Ok(grid) = Grid::from_rows(rows.as_slice()) else {
        return;
    };

    let free: Vec<_> = grid.free_cells().collect();
    for &start in &free {
        for &goal in &free {
            let request = SearchRequest::new(&grid, start, goal).expect("free cells are valid endpoints");
            assert_eq!(BruteForce.shortest_path(&request), BreadthFirst.shortest_path(&request));
        }
    }
});
