#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Randomized maze generation system.
//!
//! [`generate`] grows a single connected open region by frontier expansion,
//! rejecting any opening that would leave a 2x2 block fully open, then closes
//! dead ends until a fixpoint is reached. Degenerate rounds that collapse to
//! a fully closed grid are discarded and regrown inside a bounded retry
//! loop. Every random draw comes from the caller-injected source, so a fixed
//! seed reproduces the grid bit for bit.

use maze_carve_core::{CellCoord, GenerationError, MAX_ATTEMPTS};
use maze_carve_grid::{topology, validate, MazeGrid};
use rand::seq::SliceRandom;
use rand::Rng;

/// Corner offsets of a 2x2 block relative to its top-left origin.
const BLOCK_OFFSETS: [(u32, u32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

/// Generates a random maze of side length `size`.
///
/// The returned grid has at least one open cell, contains no fully open 2x2
/// block, has no open cell with fewer than two open neighbors, and its open
/// cells form exactly one connected component. With `ambient_size` larger
/// than `size`, the maze is embedded into the centered interior of a fresh
/// all-closed `ambient_size` grid; an `ambient_size` equal to `size` adds no
/// border.
///
/// # Errors
///
/// - [`GenerationError::SizeTooSmall`] for `size < 2`, which can never host
///   a dead-end-free maze.
/// - [`GenerationError::AmbientSizeTooSmall`] when `ambient_size < size`.
/// - [`GenerationError::AttemptsExhausted`] when every round inside the
///   shared retry budget collapsed to a fully closed grid.
pub fn generate<R: Rng>(
    size: u32,
    ambient_size: Option<u32>,
    rng: &mut R,
) -> Result<MazeGrid, GenerationError> {
    if size < 2 {
        return Err(GenerationError::SizeTooSmall { size });
    }
    if let Some(ambient) = ambient_size {
        if ambient < size {
            return Err(GenerationError::AmbientSizeTooSmall {
                ambient_size: ambient,
                size,
            });
        }
    }

    for _ in 0..MAX_ATTEMPTS {
        let mut grid = RegionGrower::seed(size, rng).grow(rng);
        close_dead_ends(&mut grid);

        if grid.open_cell_count() == 0 {
            // Growth and dead-end removal collapsed entirely; regrow.
            continue;
        }

        debug_assert_eq!(validate::open_block_origin(&grid), None);
        debug_assert_eq!(validate::dead_end_cell(&grid), None);
        debug_assert_eq!(validate::open_component_count(&grid), 1);

        return Ok(match ambient_size {
            Some(ambient) => grid.with_border(ambient),
            None => grid,
        });
    }

    Err(GenerationError::AttemptsExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Frontier-expansion state machine that carves one connected open region.
///
/// The grower owns the grid buffer and the frontier collection outright and
/// moves through three phases: seeding a single random open cell, repeatedly
/// opening frontier candidates that keep the open-block invariant, and
/// terminating once no frontier cell can be opened.
struct RegionGrower {
    grid: MazeGrid,
    frontier: Vec<CellCoord>,
}

impl RegionGrower {
    /// Opens one uniformly random cell and seeds the frontier around it.
    fn seed<R: Rng>(size: u32, rng: &mut R) -> Self {
        let mut grower = Self {
            grid: MazeGrid::closed(size),
            frontier: Vec::new(),
        };
        let start = CellCoord::new(rng.gen_range(0..size), rng.gen_range(0..size));
        grower.open_cell(start);
        grower
    }

    /// Runs growth steps until no frontier candidate can be opened.
    fn grow<R: Rng>(mut self, rng: &mut R) -> MazeGrid {
        while self.grow_step(rng) {}
        self.grid
    }

    /// Shuffles the frontier and opens the first admissible candidate.
    ///
    /// Returns `false` once no still-closed frontier cell can be opened
    /// without completing a 2x2 open block, which terminates growth.
    fn grow_step<R: Rng>(&mut self, rng: &mut R) -> bool {
        self.frontier.shuffle(rng);
        let candidate = self
            .frontier
            .iter()
            .copied()
            .find(|&cell| self.grid.is_wall(cell) && !self.would_complete_block(cell));
        match candidate {
            Some(cell) => {
                self.open_cell(cell);
                true
            }
            None => false,
        }
    }

    /// Opens a cell and appends its untracked closed neighbors to the
    /// frontier.
    ///
    /// Opened cells are never removed from the frontier; the growth scan
    /// skips them, mirroring how the frontier only ever accumulates.
    fn open_cell(&mut self, cell: CellCoord) {
        for neighbor in topology::neighbors(self.grid.size(), cell) {
            if self.grid.is_wall(neighbor) && !self.frontier.contains(&neighbor) {
                self.frontier.push(neighbor);
            }
        }
        self.grid.open(cell);
    }

    /// Checks whether opening `cell` would leave any containing 2x2 block
    /// without a single wall.
    ///
    /// The candidate itself is still closed when this runs, so a block whose
    /// wall count is already down to one consists of three open cells plus
    /// the candidate.
    fn would_complete_block(&self, cell: CellCoord) -> bool {
        topology::containing_blocks(self.grid.size(), cell).any(|origin| {
            let walls = BLOCK_OFFSETS
                .iter()
                .filter(|&&(dc, dr)| {
                    self.grid
                        .is_wall(CellCoord::new(origin.column() + dc, origin.row() + dr))
                })
                .count();
            walls <= 1
        })
    }
}

/// Closes dead ends until no open cell has fewer than two open neighbors.
///
/// Every closure restarts the row-major scan from the beginning, because
/// removing a dead end can turn one of its former neighbors into a new dead
/// end. Each mutation strictly shrinks the open set, so the fixpoint always
/// terminates; the loop may legitimately end on a fully closed grid.
fn close_dead_ends(grid: &mut MazeGrid) {
    while let Some(cell) = validate::dead_end_cell(grid) {
        grid.close(cell);
    }
}
