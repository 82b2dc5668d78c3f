//! Grid addressing helpers for the flattened 20x20 board.

use crate::types::{GridIndex, GRID_CELLS, GRID_HEIGHT, GRID_WIDTH};

/// True if `index` addresses a cell on the board.
#[inline]
pub fn in_bounds(index: GridIndex) -> bool {
    (0..GRID_CELLS).contains(&index)
}

#[inline]
pub fn row_of(index: GridIndex) -> GridIndex {
    index / GRID_WIDTH
}

#[inline]
pub fn col_of(index: GridIndex) -> GridIndex {
    index % GRID_WIDTH
}

/// Linear index for `(row, col)`, or `None` when outside the board.
pub fn index_of(row: GridIndex, col: GridIndex) -> Option<GridIndex> {
    if (0..GRID_HEIGHT).contains(&row) && (0..GRID_WIDTH).contains(&col) {
        Some(row * GRID_WIDTH + col)
    } else {
        None
    }
}
