//! Integration tests: both searchers and the harness on the fixed 8x8 grid.

use gridbench_core::{sample_grid, BenchmarkConfig, Coordinate, Grid, SearchRequest};
use gridbench_search::{benchmark, BenchmarkHarness, BreadthFirst, BruteForce, PathLength, Searcher};

fn config(repetitions: usize) -> BenchmarkConfig {
    BenchmarkConfig::default()
        .with_repetitions(repetitions)
        .unwrap_or_else(|e| panic!("invalid repetitions {repetitions}: {e}"))
}

/// Corner to corner on the sample grid: both searchers agree on 14 steps,
/// brute force is listed first and every timing is non-negative.
#[test]
fn corner_to_corner_report_lists_brute_force_then_bfs() {
    let report = benchmark(&config(50), "0,0", "7,7").unwrap_or_else(|e| panic!("benchmark failed: {e}"));

    let entries = report.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].algorithm, "brute");
    assert_eq!(entries[1].algorithm, "bfs");
    assert_eq!(entries[0].path_length, PathLength::Steps(14));
    assert_eq!(entries[0].path_length, entries[1].path_length);
    for entry in entries {
        assert!(entry.average_elapsed_millis() >= 0.0, "{} timing must be non-negative", entry.algorithm);
    }
}

/// Repetition count changes timing only, never the reported lengths.
#[test]
fn repetition_count_does_not_change_path_lengths() {
    let once = benchmark(&config(1), "0,0", "7,7").unwrap_or_else(|e| panic!("N=1 failed: {e}"));
    let many = benchmark(&config(1000), "0,0", "7,7").unwrap_or_else(|e| panic!("N=1000 failed: {e}"));

    assert_eq!(once.repetitions, 1);
    assert_eq!(many.repetitions, 1000);
    for (a, b) in once.entries().iter().zip(many.entries()) {
        assert_eq!(a.algorithm, b.algorithm);
        assert_eq!(a.path_length, b.path_length, "{} length depends on N", a.algorithm);
    }
}

/// Every pair of free cells on the sample grid: equal lengths, symmetric,
/// zero on the diagonal.
#[test]
fn all_pairs_on_sample_grid_agree_and_are_symmetric() {
    let grid = sample_grid();
    let free: Vec<Coordinate> = grid.free_cells().collect();

    for &start in &free {
        for &goal in &free {
            let request = SearchRequest::new(&grid, start, goal)
                .unwrap_or_else(|e| panic!("request {start} -> {goal} rejected: {e}"));
            let brute = BruteForce.shortest_path(&request);
            let bfs = BreadthFirst.shortest_path(&request);

            assert_eq!(brute, bfs, "searchers disagree on {start} -> {goal}");
            assert!(brute.is_reachable(), "sample grid is connected, {start} -> {goal}");
            assert_eq!(bfs, BreadthFirst.shortest_path(&request.reversed()), "bfs asymmetric {start} -> {goal}");
            assert_eq!(brute, BruteForce.shortest_path(&request.reversed()), "brute asymmetric {start} -> {goal}");
            if start == goal {
                assert_eq!(brute, PathLength::Steps(0));
            }
        }
    }
}

/// Two free regions separated by a wall: every cross-wall pair is unreachable
/// for both searchers.
#[test]
fn separated_regions_are_unreachable_for_both_searchers() {
    let grid = Grid::from_rows(&[
        [0u8, 0, 1, 0],
        [0, 0, 1, 0],
        [0, 0, 1, 0],
    ])
    .unwrap_or_else(|e| panic!("grid rejected: {e}"));
    let left = [Coordinate::new(0, 0), Coordinate::new(2, 1)];
    let right = [Coordinate::new(0, 3), Coordinate::new(2, 3)];

    for &start in &left {
        for &goal in &right {
            let request = SearchRequest::new(&grid, start, goal)
                .unwrap_or_else(|e| panic!("request rejected: {e}"));
            assert_eq!(BruteForce.shortest_path(&request), PathLength::Unreachable);
            assert_eq!(BreadthFirst.shortest_path(&request), PathLength::Unreachable);
        }
    }

    let config = BenchmarkConfig::new(grid, 3).unwrap_or_else(|e| panic!("config rejected: {e}"));
    let report = benchmark(&config, "0,0", "2,3").unwrap_or_else(|e| panic!("benchmark failed: {e}"));
    let wire: Vec<i64> = report.entries().iter().map(|e| e.path_length.to_wire()).collect();
    assert_eq!(wire, vec![-1, -1]);
}

/// Concurrent benchmarks over one shared configuration run independently.
#[test]
fn concurrent_benchmarks_do_not_interfere() {
    let config = std::sync::Arc::new(config(20));
    let handles: Vec<_> = [("0,0", "7,7", 14), ("7,0", "0,7", 14), ("0,0", "0,3", 5)]
        .into_iter()
        .map(|(start, goal, expected)| {
            let config = std::sync::Arc::clone(&config);
            std::thread::spawn(move || {
                let grid = config.grid();
                let request = SearchRequest::parse(grid, start, goal)
                    .unwrap_or_else(|e| panic!("request rejected: {e}"));
                let report = BenchmarkHarness::new(&config)
                    .run(&request)
                    .unwrap_or_else(|e| panic!("benchmark failed: {e}"));
                (report.entries()[1].path_length, expected)
            })
        })
        .collect();

    for handle in handles {
        let (length, expected) = handle.join().unwrap_or_else(|_| panic!("benchmark thread panicked"));
        assert_eq!(length, PathLength::Steps(expected));
    }
}
