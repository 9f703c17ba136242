//! The fixed sample grid served by the gateway.

use crate::grid::Grid;

/// 8x8 obstacle matrix, `0` free and `1` blocked.
pub const SAMPLE_GRID: [[u8; 8]; 8] = [
    [0, 0, 1, 0, 0, 0, 0, 0],
    [1, 0, 0, 0, 1, 0, 1, 0],
    [0, 0, 1, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 0, 1, 1, 1, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 0, 1, 0, 1, 0, 0],
];

/// Builds a [`Grid`] from [`SAMPLE_GRID`].
///
/// # Panics
/// Never panics: the literal is rectangular and holds only 0/1.
#[must_use]
#[expect(clippy::unwrap_used, reason = "SAMPLE_GRID is a valid 8x8 0/1 matrix")]
pub fn sample_grid() -> Grid {
    Grid::from_rows(&SAMPLE_GRID).unwrap()
}
