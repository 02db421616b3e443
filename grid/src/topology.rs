//! Pure neighbor and containing-block queries over a square grid.
//!
//! Both queries clip to the grid boundary and promise nothing about their
//! iteration order beyond determinism; randomized exploration is applied by
//! the callers.

use maze_carve_core::CellCoord;

/// Axis-aligned neighbors of `cell` inside a `size` x `size` grid.
///
/// Yields 2 cells for a corner, 3 for an edge cell, and 4 for an interior
/// cell, in a fixed clockwise order starting above the cell.
pub fn neighbors(size: u32, cell: CellCoord) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    if let Some(row) = cell.row().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(cell.column(), row));
        count += 1;
    }

    if let Some(column) = cell.column().checked_add(1) {
        if column < size {
            candidates[count] = Some(CellCoord::new(column, cell.row()));
            count += 1;
        }
    }

    if let Some(row) = cell.row().checked_add(1) {
        if row < size {
            candidates[count] = Some(CellCoord::new(cell.column(), row));
            count += 1;
        }
    }

    if let Some(column) = cell.column().checked_sub(1) {
        candidates[count] = Some(CellCoord::new(column, cell.row()));
        count += 1;
    }

    candidates.into_iter().take(count).flatten()
}

/// Top-left origins of every in-bounds 2x2 block that contains `cell`.
///
/// An interior cell belongs to 4 blocks, an edge cell to 2, and a corner
/// cell to 1. If `(k, l)` is yielded then `cell` is one of `(k, l)`,
/// `(k + 1, l)`, `(k, l + 1)`, `(k + 1, l + 1)`.
pub fn containing_blocks(size: u32, cell: CellCoord) -> impl Iterator<Item = CellCoord> {
    let mut candidates = [None; 4];
    let mut count = 0;

    let limit = size.saturating_sub(1);
    let row_origins = [cell.row().checked_sub(1), Some(cell.row())];
    let column_origins = [cell.column().checked_sub(1), Some(cell.column())];

    for row in row_origins.into_iter().flatten() {
        for column in column_origins.into_iter().flatten() {
            if row < limit && column < limit {
                candidates[count] = Some(CellCoord::new(column, row));
                count += 1;
            }
        }
    }

    candidates.into_iter().take(count).flatten()
}
