//! Grid-sized visited markers.

use gridbench_core::{Coordinate, Grid};

/// A bitset with one bit per grid cell.
///
/// Each search allocates its own, so concurrent searches over a shared grid
/// never touch the same markers.
#[derive(Debug, Clone)]
pub(crate) struct VisitedSet {
    rows: usize,
    cols: usize,
    words: Vec<u64>,
}

impl VisitedSet {
    /// An empty set covering every cell of `grid`.
    pub(crate) fn for_grid(grid: &Grid) -> Self {
        let (rows, cols) = grid.dimensions();
        Self { rows, cols, words: vec![0; grid.len().div_ceil(64)] }
    }

    /// Marks `coord`; returns `true` if it was not already marked.
    pub(crate) fn insert(&mut self, coord: Coordinate) -> bool {
        let (word, mask) = self.slot(coord);
        let fresh = self.words[word] & mask == 0;
        self.words[word] |= mask;
        fresh
    }

    /// Clears the mark on `coord`.
    pub(crate) fn remove(&mut self, coord: Coordinate) {
        let (word, mask) = self.slot(coord);
        self.words[word] &= !mask;
    }

    /// `true` if `coord` is marked.
    pub(crate) fn contains(&self, coord: Coordinate) -> bool {
        let (word, mask) = self.slot(coord);
        self.words[word] & mask != 0
    }

    // A column past the edge would alias a cell on the next row.
    fn slot(&self, coord: Coordinate) -> (usize, u64) {
        debug_assert!(
            coord.row < self.rows && coord.col < self.cols,
            "coordinate {coord} outside the {}x{} grid this set was sized for",
            self.rows,
            self.cols
        );
        let index = coord.row * self.cols + coord.col;
        (index / 64, 1 << (index % 64))
    }
}
