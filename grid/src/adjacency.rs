//! Open-neighbor adjacency derived from a finished maze.

use std::collections::HashMap;

use maze_carve_core::CellCoord;

use crate::MazeGrid;

/// Mapping from every cell of a maze to the ordered list of its open
/// neighbors.
///
/// Built once per maze and consumed read-only by the blob sampler. Walls are
/// included as keys with whatever open neighbors they touch, so the map can
/// answer queries for any in-range cell; unknown cells yield an empty slice.
#[derive(Clone, Debug)]
pub struct NeighborMap {
    neighbors: HashMap<CellCoord, Vec<CellCoord>>,
}

impl NeighborMap {
    /// Captures the open-neighbor lists of every cell in the grid.
    #[must_use]
    pub fn from_grid(grid: &MazeGrid) -> Self {
        let mut neighbors = HashMap::new();
        for cell in grid.cells() {
            let open: Vec<CellCoord> = grid.open_neighbors(cell).collect();
            let _ = neighbors.insert(cell, open);
        }
        Self { neighbors }
    }

    /// Open neighbors recorded for the provided cell.
    #[must_use]
    pub fn open_neighbors(&self, cell: CellCoord) -> &[CellCoord] {
        match self.neighbors.get(&cell) {
            Some(list) => list,
            None => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::NeighborMap;
    use crate::MazeGrid;
    use maze_carve_core::CellCoord;

    #[test]
    fn map_lists_only_open_neighbors() {
        let grid = MazeGrid::from_rows(&[&[0, 0, 1], &[0, 1, 1], &[1, 1, 1]])
            .expect("square fixture");
        let map = NeighborMap::from_grid(&grid);

        assert_eq!(
            map.open_neighbors(CellCoord::new(0, 0)),
            &[CellCoord::new(1, 0), CellCoord::new(0, 1)],
        );
        assert_eq!(map.open_neighbors(CellCoord::new(1, 0)), &[CellCoord::new(0, 0)]);
    }

    #[test]
    fn walls_are_queryable_and_surrounded_cells_are_empty() {
        let grid = MazeGrid::from_rows(&[&[0, 0, 1], &[0, 1, 1], &[1, 1, 1]])
            .expect("square fixture");
        let map = NeighborMap::from_grid(&grid);

        assert_eq!(
            map.open_neighbors(CellCoord::new(1, 1)),
            &[CellCoord::new(1, 0), CellCoord::new(0, 1)],
            "wall cells still record the open cells they touch",
        );
        assert!(map.open_neighbors(CellCoord::new(2, 2)).is_empty());
    }

    #[test]
    fn unknown_cells_yield_an_empty_slice() {
        let grid = MazeGrid::closed(2);
        let map = NeighborMap::from_grid(&grid);
        assert!(map.open_neighbors(CellCoord::new(9, 9)).is_empty());
    }
}
