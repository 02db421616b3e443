#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the maze-carve engine.
//!
//! This crate defines the coordinate newtype, the shared retry budget, and
//! the error taxonomy that connect the grid crate, the pure generation
//! systems, and the command-line adapter. Systems receive an injected random
//! source, operate on exclusively owned grid buffers, and report failures
//! exclusively through [`GenerationError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shared ceiling for every bounded randomized search in the engine.
///
/// The maze generator retries degenerate (fully closed) results up to this
/// many rounds, and the blob sampler applies it both to individual growth
/// steps and to whole sampling attempts. Exhausting a budget is a terminal
/// [`GenerationError::AttemptsExhausted`], never a silent truncation.
pub const MAX_ATTEMPTS: usize = 1_000;

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Failures surfaced by the maze generator and the blob sampler.
///
/// Invalid arguments are rejected immediately without consuming any retry
/// budget. Randomized-search failures are absorbed locally and only budget
/// exhaustion reaches the caller; there is no partial or best-effort result.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationError {
    /// The requested maze side length cannot host a valid maze.
    #[error("maze size must be at least 2, got {size}")]
    SizeTooSmall {
        /// Side length that was requested.
        size: u32,
    },
    /// A border was requested with an ambient grid smaller than the maze.
    #[error("ambient size {ambient_size} must be at least the maze size {size}")]
    AmbientSizeTooSmall {
        /// Side length of the requested ambient grid.
        ambient_size: u32,
        /// Side length of the maze to embed.
        size: u32,
    },
    /// A blob of zero cells was requested.
    #[error("blob must request at least one cell")]
    EmptyBlobRequest,
    /// The maze handed to the blob sampler contains no open cells.
    #[error("maze has no open cells to sample")]
    NoOpenCells,
    /// A bounded randomized search ran out of retries.
    #[error("retry budget of {attempts} attempts exhausted")]
    AttemptsExhausted {
        /// Number of attempts that were permitted before giving up.
        attempts: usize,
    },
}
