#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Connected blob sampling over a finished maze.
//!
//! [`sample_blob`] selects exactly `num_points` open cells that form a
//! connected subgraph under open-neighbor adjacency, for placing spatially
//! clustered groups of objects. Growth is a randomized walk over the blob's
//! neighborhood with a bounded per-step budget; a stuck attempt is abandoned
//! and reseeded from a fresh random open cell, and only exhausting the outer
//! budget surfaces to the caller. The maze is borrowed immutably and every
//! draw comes from the injected random source.

use maze_carve_core::{CellCoord, GenerationError, MAX_ATTEMPTS};
use maze_carve_grid::{adjacency::NeighborMap, BlobMask, MazeGrid};
use rand::Rng;

/// Samples a connected blob of exactly `num_points` open cells.
///
/// The returned mask has the maze's shape with exactly `num_points` selected
/// cells, each open in the maze and pairwise connected through open-neighbor
/// adjacency. The blob is a connected subgraph, not necessarily a simple
/// path.
///
/// # Errors
///
/// - [`GenerationError::EmptyBlobRequest`] for `num_points == 0`.
/// - [`GenerationError::NoOpenCells`] when the maze is fully closed.
/// - [`GenerationError::AttemptsExhausted`] when the outer retry budget runs
///   out, which is also how impossible requests (more points than reachable
///   open cells) terminate.
pub fn sample_blob<R: Rng>(
    maze: &MazeGrid,
    num_points: usize,
    rng: &mut R,
) -> Result<BlobMask, GenerationError> {
    if num_points == 0 {
        return Err(GenerationError::EmptyBlobRequest);
    }
    if maze.open_cell_count() == 0 {
        return Err(GenerationError::NoOpenCells);
    }

    let neighbors = NeighborMap::from_grid(maze);

    for _ in 0..MAX_ATTEMPTS {
        if let Some(blob) = grow_blob(maze, &neighbors, num_points, rng) {
            return Ok(BlobMask::from_cells(maze.size(), &blob));
        }
    }

    Err(GenerationError::AttemptsExhausted {
        attempts: MAX_ATTEMPTS,
    })
}

/// Attempts one seeded blob growth, or `None` when a growth step stalls.
fn grow_blob<R: Rng>(
    maze: &MazeGrid,
    neighbors: &NeighborMap,
    num_points: usize,
    rng: &mut R,
) -> Option<Vec<CellCoord>> {
    let seed = maze.sample_open_cell(rng)?;
    let mut blob = vec![seed];

    for _ in 1..num_points {
        let next = next_blob_cell(&blob, neighbors, rng)?;
        blob.push(next);
    }

    Some(blob)
}

/// Draws candidate cells until one extends the blob, bounded by the shared
/// attempt budget.
///
/// Each draw picks a uniformly random blob member and then a uniformly
/// random open neighbor of it; members without open neighbors and candidates
/// already in the blob are skipped and count against the budget.
fn next_blob_cell<R: Rng>(
    blob: &[CellCoord],
    neighbors: &NeighborMap,
    rng: &mut R,
) -> Option<CellCoord> {
    for _ in 0..MAX_ATTEMPTS {
        let member = blob[rng.gen_range(0..blob.len())];
        let adjacent = neighbors.open_neighbors(member);
        if adjacent.is_empty() {
            continue;
        }
        let candidate = adjacent[rng.gen_range(0..adjacent.len())];
        if !blob.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}
