#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative maze occupancy grid for the maze-carve engine.
//!
//! A [`MazeGrid`] is a square buffer of open and wall cells, created fully
//! closed and progressively opened by the generation system. The grid owns
//! its buffer exclusively; systems mutate it through methods and hand it to
//! callers as an immutable result. Out-of-range queries are answered rather
//! than panicking: everything outside the grid reads as wall.

use std::ops::RangeInclusive;

use maze_carve_core::CellCoord;
use rand::seq::SliceRandom;
use rand::Rng;

pub mod adjacency;
pub mod topology;
pub mod validate;

/// Occupancy state of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CellState {
    Open,
    Wall,
}

/// Square binary occupancy grid with row-major cell storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    size: u32,
    cells: Vec<CellState>,
}

impl MazeGrid {
    /// Creates a fully closed grid of the provided side length.
    #[must_use]
    pub fn closed(size: u32) -> Self {
        let side = size as usize;
        Self {
            size,
            cells: vec![CellState::Wall; side * side],
        }
    }

    /// Builds a grid from binary rows where `0` is open and `1` is wall.
    ///
    /// Returns `None` when the rows do not form a square matrix.
    #[must_use]
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let size = u32::try_from(rows.len()).ok()?;
        let mut cells = Vec::with_capacity(rows.len() * rows.len());
        for row in rows {
            if row.len() != rows.len() {
                return None;
            }
            for &value in *row {
                cells.push(if value == 0 {
                    CellState::Open
                } else {
                    CellState::Wall
                });
            }
        }
        Some(Self { size, cells })
    }

    /// Converts the grid to binary rows where `0` is open and `1` is wall.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size)
            .map(|row| {
                (0..self.size)
                    .map(|column| u8::from(!self.is_open(CellCoord::new(column, row))))
                    .collect()
            })
            .collect()
    }

    /// Side length of the grid in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reports whether the provided cell is open.
    ///
    /// Out-of-range coordinates read as closed.
    #[must_use]
    pub fn is_open(&self, cell: CellCoord) -> bool {
        self.index(cell)
            .map_or(false, |index| self.cells[index] == CellState::Open)
    }

    /// Reports whether the provided cell is a wall.
    ///
    /// Everything outside the grid reads as wall.
    #[must_use]
    pub fn is_wall(&self, cell: CellCoord) -> bool {
        !self.is_open(cell)
    }

    /// Opens the provided cell. Out-of-range coordinates are ignored.
    pub fn open(&mut self, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = CellState::Open;
        }
    }

    /// Closes the provided cell. Out-of-range coordinates are ignored.
    pub fn close(&mut self, cell: CellCoord) {
        if let Some(index) = self.index(cell) {
            self.cells[index] = CellState::Wall;
        }
    }

    /// Iterator over every cell coordinate in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellCoord> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |column| CellCoord::new(column, row)))
    }

    /// Iterator over the open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells().filter(move |&cell| self.is_open(cell))
    }

    /// Number of open cells in the grid.
    #[must_use]
    pub fn open_cell_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&state| state == CellState::Open)
            .count()
    }

    /// Iterator over the open neighbors of the provided cell.
    pub fn open_neighbors(&self, cell: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        topology::neighbors(self.size, cell).filter(move |&neighbor| self.is_open(neighbor))
    }

    /// Embeds the grid into the centered interior of a larger closed grid.
    ///
    /// The returned buffer is fresh and independent of `self`. An
    /// `ambient_size` no larger than the grid adds no border and yields an
    /// identical copy.
    #[must_use]
    pub fn with_border(&self, ambient_size: u32) -> Self {
        if ambient_size <= self.size {
            return self.clone();
        }
        let offset = (ambient_size - self.size) / 2;
        let mut bordered = Self::closed(ambient_size);
        for cell in self.open_cells() {
            bordered.open(CellCoord::new(cell.column() + offset, cell.row() + offset));
        }
        bordered
    }

    /// Samples a uniformly random open cell, or `None` on a closed grid.
    pub fn sample_open_cell<R: Rng>(&self, rng: &mut R) -> Option<CellCoord> {
        let open: Vec<CellCoord> = self.open_cells().collect();
        if open.is_empty() {
            return None;
        }
        Some(open[rng.gen_range(0..open.len())])
    }

    /// Samples `count` distinct open cells without replacement.
    ///
    /// Returns `None` when the grid holds fewer than `count` open cells.
    pub fn sample_distinct_open_cells<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Option<Vec<CellCoord>> {
        let open: Vec<CellCoord> = self.open_cells().collect();
        if open.len() < count {
            return None;
        }
        Some(open.choose_multiple(rng, count).copied().collect())
    }

    /// Closes every cell in the provided rectangular region.
    pub fn add_wall(&mut self, columns: RangeInclusive<u32>, rows: RangeInclusive<u32>) {
        for row in rows {
            for column in columns.clone() {
                self.close(CellCoord::new(column, row));
            }
        }
    }

    /// Closes the four border rows and columns of the grid.
    ///
    /// Warning: this can break an already generated maze's structural
    /// guarantees, for example by turning interior cells into dead ends.
    pub fn add_outer_walls(&mut self) {
        if self.size == 0 {
            return;
        }
        let last = self.size - 1;
        self.add_wall(0..=last, 0..=0);
        self.add_wall(0..=last, last..=last);
        self.add_wall(0..=0, 0..=last);
        self.add_wall(last..=last, 0..=last);
    }

    fn index(&self, cell: CellCoord) -> Option<usize> {
        if cell.column() < self.size && cell.row() < self.size {
            let row = usize::try_from(cell.row()).ok()?;
            let column = usize::try_from(cell.column()).ok()?;
            let side = usize::try_from(self.size).ok()?;
            Some(row * side + column)
        } else {
            None
        }
    }
}

/// Same-size binary mask marking the cells selected by the blob sampler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlobMask {
    size: u32,
    selected: Vec<bool>,
}

impl BlobMask {
    /// Builds a mask of the provided side length with the given cells set.
    ///
    /// Out-of-range cells are ignored.
    #[must_use]
    pub fn from_cells(size: u32, cells: &[CellCoord]) -> Self {
        let side = size as usize;
        let mut selected = vec![false; side * side];
        for cell in cells {
            if cell.column() < size && cell.row() < size {
                let index = cell.row() as usize * side + cell.column() as usize;
                selected[index] = true;
            }
        }
        Self { size, selected }
    }

    /// Side length of the mask in cells.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Reports whether the provided cell is part of the blob.
    #[must_use]
    pub fn is_selected(&self, cell: CellCoord) -> bool {
        if cell.column() < self.size && cell.row() < self.size {
            let side = self.size as usize;
            self.selected[cell.row() as usize * side + cell.column() as usize]
        } else {
            false
        }
    }

    /// Number of cells selected by the mask.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|&&set| set).count()
    }

    /// Iterator over the selected cells in row-major order.
    pub fn selected_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let size = self.size;
        (0..size)
            .flat_map(move |row| (0..size).map(move |column| CellCoord::new(column, row)))
            .filter(move |&cell| self.is_selected(cell))
    }
}

#[cfg(test)]
mod tests {
    use super::{BlobMask, MazeGrid};
    use maze_carve_core::CellCoord;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn ring() -> MazeGrid {
        MazeGrid::from_rows(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]]).expect("square fixture")
    }

    #[test]
    fn closed_grid_has_no_open_cells() {
        let grid = MazeGrid::closed(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.open_cell_count(), 0);
        assert!(grid.is_wall(CellCoord::new(1, 1)));
    }

    #[test]
    fn open_and_close_mutate_only_in_range_cells() {
        let mut grid = MazeGrid::closed(3);
        grid.open(CellCoord::new(1, 2));
        assert!(grid.is_open(CellCoord::new(1, 2)));

        grid.open(CellCoord::new(3, 0));
        assert_eq!(grid.open_cell_count(), 1, "out-of-range open is a no-op");

        grid.close(CellCoord::new(1, 2));
        assert_eq!(grid.open_cell_count(), 0);
    }

    #[test]
    fn out_of_range_cells_read_as_walls() {
        let grid = ring();
        assert!(!grid.is_open(CellCoord::new(3, 0)));
        assert!(grid.is_wall(CellCoord::new(0, 3)));
    }

    #[test]
    fn rows_round_trip_preserves_the_occupancy_convention() {
        let grid = ring();
        let rows = grid.to_rows();
        assert_eq!(rows, vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]);
        let rebuilt =
            MazeGrid::from_rows(&[&rows[0], &rows[1], &rows[2]]).expect("rows stay square");
        assert_eq!(rebuilt, grid);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert!(MazeGrid::from_rows(&[&[0, 1], &[0]]).is_none());
    }

    #[test]
    fn open_neighbors_skips_walls() {
        let grid = ring();
        let neighbors: Vec<CellCoord> = grid.open_neighbors(CellCoord::new(0, 0)).collect();
        assert_eq!(
            neighbors,
            vec![CellCoord::new(1, 0), CellCoord::new(0, 1)],
            "the closed center must not appear among open neighbors",
        );
    }

    #[test]
    fn with_border_centers_the_maze_in_a_closed_ambient_grid() {
        let grid = ring();
        let bordered = grid.with_border(7);

        assert_eq!(bordered.size(), 7);
        assert_eq!(bordered.open_cell_count(), grid.open_cell_count());
        for cell in grid.open_cells() {
            let shifted = CellCoord::new(cell.column() + 2, cell.row() + 2);
            assert!(bordered.is_open(shifted));
        }
        for column in 0..7 {
            assert!(bordered.is_wall(CellCoord::new(column, 0)));
            assert!(bordered.is_wall(CellCoord::new(column, 6)));
        }
    }

    #[test]
    fn with_border_without_extra_room_returns_an_identical_copy() {
        let grid = ring();
        assert_eq!(grid.with_border(3), grid);
        assert_eq!(grid.with_border(2), grid);
    }

    #[test]
    fn sampling_is_deterministic_for_a_fixed_seed() {
        let grid = ring();
        let mut first = ChaCha8Rng::seed_from_u64(11);
        let mut second = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(
            grid.sample_open_cell(&mut first),
            grid.sample_open_cell(&mut second),
        );
    }

    #[test]
    fn sampling_a_closed_grid_yields_none() {
        let grid = MazeGrid::closed(3);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(grid.sample_open_cell(&mut rng).is_none());
        assert!(grid.sample_distinct_open_cells(1, &mut rng).is_none());
    }

    #[test]
    fn distinct_sampling_returns_unique_open_cells() {
        let grid = ring();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cells = grid
            .sample_distinct_open_cells(5, &mut rng)
            .expect("ring has eight open cells");

        assert_eq!(cells.len(), 5);
        for (index, cell) in cells.iter().enumerate() {
            assert!(grid.is_open(*cell));
            assert!(
                !cells[index + 1..].contains(cell),
                "sampled cells must be distinct",
            );
        }
        assert!(
            grid.sample_distinct_open_cells(9, &mut rng).is_none(),
            "requesting more cells than are open must fail",
        );
    }

    #[test]
    fn add_wall_closes_the_requested_region() {
        let mut grid = ring();
        grid.add_wall(0..=1, 0..=0);
        assert!(grid.is_wall(CellCoord::new(0, 0)));
        assert!(grid.is_wall(CellCoord::new(1, 0)));
        assert!(grid.is_open(CellCoord::new(2, 0)));
    }

    #[test]
    fn add_outer_walls_closes_the_perimeter() {
        let mut grid = ring();
        grid.add_outer_walls();
        assert_eq!(grid.open_cell_count(), 0, "the ring lies on the perimeter");
    }

    #[test]
    fn blob_mask_tracks_selected_cells() {
        let cells = [CellCoord::new(0, 0), CellCoord::new(1, 0)];
        let mask = BlobMask::from_cells(3, &cells);

        assert_eq!(mask.size(), 3);
        assert_eq!(mask.selected_count(), 2);
        assert!(mask.is_selected(CellCoord::new(1, 0)));
        assert!(!mask.is_selected(CellCoord::new(2, 2)));
        assert!(!mask.is_selected(CellCoord::new(3, 3)));
        assert_eq!(mask.selected_cells().collect::<Vec<_>>(), cells.to_vec());
    }
}
