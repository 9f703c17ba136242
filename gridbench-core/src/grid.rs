//! Immutable binary obstacle map.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::coord::{Coordinate, Endpoint, RawCoordinate};
use crate::error::CoreError;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    /// Search may step onto this cell.
    Free,
    /// Obstacle; search never enters it.
    Blocked,
}

impl TryFrom<u8> for Cell {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Free),
            1 => Ok(Self::Blocked),
            other => Err(CoreError::InvalidGrid {
                reason: format!("cell value {other} is not 0 (free) or 1 (blocked)"),
            }),
        }
    }
}

/// Axis-aligned moves in the order searchers try them: up, down, left, right.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A rectangular `rows x cols` obstacle map, both dimensions at least 1.
///
/// Cells are stored row-major so a [`Coordinate`] maps to a single index,
/// which searchers reuse for their visited bitsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from a matrix of cells.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGrid`] if the matrix is empty, has an empty
    /// first row, or is ragged.
    pub fn new(matrix: Vec<Vec<Cell>>) -> Result<Self, CoreError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(CoreError::InvalidGrid {
                reason: format!("grid must be at least 1x1, got {rows}x{cols}"),
            });
        }
        if let Some((index, row)) = matrix.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(CoreError::InvalidGrid {
                reason: format!("row {index} has {} cells, expected {cols}", row.len()),
            });
        }
        Ok(Self { rows, cols, cells: matrix.into_iter().flatten().collect() })
    }

    /// Builds a grid from a 0/1 literal matrix (`0` free, `1` blocked).
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidGrid`] on an empty or ragged matrix, or on
    /// any value other than 0 or 1.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, CoreError> {
        let matrix = rows
            .iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|&v| Cell::try_from(v))
                    .collect::<Result<Vec<Cell>, CoreError>>()
            })
            .collect::<Result<Vec<Vec<Cell>>, CoreError>>()?;
        Self::new(matrix)
    }

    /// Returns `(rows, cols)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a constructed grid has at least one cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns the cell at `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Row-major index of `coord`, or `None` when out of bounds.
    #[must_use]
    pub fn index(&self, coord: Coordinate) -> Option<usize> {
        (coord.row < self.rows && coord.col < self.cols).then(|| coord.row * self.cols + coord.col)
    }

    /// `true` iff `coord` is in bounds and the cell is free.
    #[must_use]
    pub fn validate(&self, coord: Coordinate) -> bool {
        self.cell(coord) == Some(Cell::Free)
    }

    /// Free, in-bounds neighbours of `coord` in up, down, left, right order.
    pub fn neighbors(&self, coord: Coordinate) -> impl Iterator<Item = Coordinate> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let next = Coordinate::new(
                coord.row.checked_add_signed(dr)?,
                coord.col.checked_add_signed(dc)?,
            );
            self.validate(next).then_some(next)
        })
    }

    /// Iterates every free cell in row-major order.
    pub fn free_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Free)
            .map(|(i, _)| Coordinate::new(i / self.cols, i % self.cols))
    }

    /// Checks a caller-supplied coordinate against the grid.
    ///
    /// Bounds are checked before obstacles, so a coordinate that is both
    /// out of bounds and (hypothetically) blocked reports `OutOfBounds`.
    ///
    /// # Errors
    /// Returns [`CoreError::OutOfBounds`] if either component is negative or
    /// not less than the matching dimension, and [`CoreError::BlockedCell`]
    /// if the cell is an obstacle.
    pub fn resolve(&self, endpoint: Endpoint, raw: RawCoordinate) -> Result<Coordinate, CoreError> {
        let out_of_bounds = || CoreError::OutOfBounds {
            endpoint,
            row: raw.row,
            col: raw.col,
            rows: self.rows,
            cols: self.cols,
        };
        let row = usize::try_from(raw.row).map_err(|_| out_of_bounds())?;
        let col = usize::try_from(raw.col).map_err(|_| out_of_bounds())?;
        let coord = Coordinate::new(row, col);

        match self.cell(coord) {
            None => Err(out_of_bounds()),
            Some(Cell::Blocked) => Err(CoreError::BlockedCell { endpoint, row, col }),
            Some(Cell::Free) => Ok(coord),
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                f.write_str(match cell {
                    Cell::Free => ".",
                    Cell::Blocked => "#",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&[u8]]) -> Grid {
        match Grid::from_rows(rows) {
            Ok(g) => g,
            Err(e) => panic!("test grid rejected: {e}"),
        }
    }

    #[test]
    fn new_rejects_empty_matrix() {
        assert!(matches!(Grid::new(vec![]), Err(CoreError::InvalidGrid { .. })));
        assert!(matches!(Grid::new(vec![vec![]]), Err(CoreError::InvalidGrid { .. })));
    }

    #[test]
    fn new_rejects_ragged_matrix() {
        let ragged = vec![vec![Cell::Free, Cell::Free], vec![Cell::Free]];
        match Grid::new(ragged) {
            Err(CoreError::InvalidGrid { reason }) => {
                assert!(reason.contains("row 1"), "reason must name the ragged row: {reason}");
            }
            other => panic!("expected InvalidGrid, got {other:?}"),
        }
    }

    #[test]
    fn from_rows_rejects_values_other_than_zero_or_one() {
        let rows: &[&[u8]] = &[&[0, 2]];
        assert!(matches!(Grid::from_rows(rows), Err(CoreError::InvalidGrid { .. })));
    }

    #[test]
    fn dimensions_reports_rows_then_cols() {
        let g = grid(&[&[0, 0, 0], &[0, 1, 0]]);
        assert_eq!(g.dimensions(), (2, 3));
        assert_eq!(g.len(), 6);
        assert!(!g.is_empty());
    }

    #[test]
    fn validate_checks_bounds_and_obstacles() {
        let g = grid(&[&[0, 1], &[0, 0]]);
        assert!(g.validate(Coordinate::new(0, 0)));
        assert!(!g.validate(Coordinate::new(0, 1)), "blocked cell is not valid");
        assert!(!g.validate(Coordinate::new(2, 0)), "row out of bounds");
        assert!(!g.validate(Coordinate::new(0, 2)), "col out of bounds");
    }

    #[test]
    fn neighbors_skip_edges_and_obstacles_in_fixed_order() {
        let g = grid(&[&[0, 0, 0], &[0, 0, 1], &[0, 0, 0]]);
        let centre: Vec<_> = g.neighbors(Coordinate::new(1, 1)).collect();
        assert_eq!(
            centre,
            vec![Coordinate::new(0, 1), Coordinate::new(2, 1), Coordinate::new(1, 0)],
            "right neighbour is blocked; order is up, down, left"
        );
        let corner: Vec<_> = g.neighbors(Coordinate::new(0, 0)).collect();
        assert_eq!(corner, vec![Coordinate::new(1, 0), Coordinate::new(0, 1)]);
    }

    #[test]
    fn free_cells_lists_only_free_positions() {
        let g = grid(&[&[0, 1], &[1, 0]]);
        let free: Vec<_> = g.free_cells().collect();
        assert_eq!(free, vec![Coordinate::new(0, 0), Coordinate::new(1, 1)]);
    }

    #[test]
    fn resolve_rejects_negative_and_oversized_components() {
        let g = grid(&[&[0, 0], &[0, 0]]);
        for raw in [
            RawCoordinate::new(-1, 0),
            RawCoordinate::new(0, -1),
            RawCoordinate::new(2, 0),
            RawCoordinate::new(0, 2),
        ] {
            match g.resolve(Endpoint::Goal, raw) {
                Err(CoreError::OutOfBounds { endpoint, rows, cols, .. }) => {
                    assert_eq!(endpoint, Endpoint::Goal);
                    assert_eq!((rows, cols), (2, 2));
                }
                other => panic!("expected OutOfBounds for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn resolve_rejects_blocked_cell() {
        let g = grid(&[&[0, 1]]);
        assert_eq!(
            g.resolve(Endpoint::Start, RawCoordinate::new(0, 1)),
            Err(CoreError::BlockedCell { endpoint: Endpoint::Start, row: 0, col: 1 })
        );
    }

    #[test]
    fn resolve_accepts_free_cell() {
        let g = grid(&[&[0, 1]]);
        assert_eq!(g.resolve(Endpoint::Start, RawCoordinate::new(0, 0)), Ok(Coordinate::new(0, 0)));
    }

    #[test]
    fn display_renders_obstacles_as_hashes() {
        let g = grid(&[&[0, 1], &[1, 0]]);
        assert_eq!(g.to_string(), ".#\n#.\n");
    }
}
