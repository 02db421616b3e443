//! Structural invariant queries over a maze grid.
//!
//! The generation system uses the dead-end scan as its fixpoint driver;
//! the block and component queries back the generator's postconditions and
//! the test suites.

use std::collections::{HashSet, VecDeque};

use maze_carve_core::CellCoord;

use crate::MazeGrid;

/// Origin of the first fully open 2x2 block, scanning row-major.
///
/// A valid generated maze yields `None`.
#[must_use]
pub fn open_block_origin(grid: &MazeGrid) -> Option<CellCoord> {
    let limit = grid.size().saturating_sub(1);
    for row in 0..limit {
        for column in 0..limit {
            let fully_open = [(0, 0), (1, 0), (0, 1), (1, 1)]
                .iter()
                .all(|&(dc, dr)| grid.is_open(CellCoord::new(column + dc, row + dr)));
            if fully_open {
                return Some(CellCoord::new(column, row));
            }
        }
    }
    None
}

/// First open cell with fewer than two open neighbors, scanning row-major.
///
/// A valid generated maze yields `None`.
#[must_use]
pub fn dead_end_cell(grid: &MazeGrid) -> Option<CellCoord> {
    grid.cells()
        .find(|&cell| grid.is_open(cell) && grid.open_neighbors(cell).count() < 2)
}

/// Number of connected components formed by the open cells.
///
/// Components are joined through 4-connectivity. A fully closed grid has
/// zero components; a valid generated maze has exactly one.
#[must_use]
pub fn open_component_count(grid: &MazeGrid) -> usize {
    let mut visited = HashSet::new();
    let mut components = 0;

    for start in grid.open_cells() {
        if visited.contains(&start) {
            continue;
        }
        components += 1;

        let mut queue = VecDeque::new();
        queue.push_back(start);
        let _ = visited.insert(start);

        while let Some(cell) = queue.pop_front() {
            for neighbor in grid.open_neighbors(cell) {
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
    }

    components
}
