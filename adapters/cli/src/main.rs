#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that generates a maze and prints it as ASCII.
//!
//! Walls render as `#`, open cells as `.`, and blob cells as `o`. This is
//! the only I/O surface; the generation and sampling crates stay pure.

use anyhow::Result;
use clap::Parser;
use maze_carve_core::CellCoord;
use maze_carve_grid::BlobMask;
use maze_carve_system_blob::sample_blob;
use maze_carve_system_generation::generate;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generates a random maze with no dead ends and no open 2x2 blocks.
#[derive(Debug, Parser)]
#[command(name = "maze-carve")]
struct Args {
    /// Side length of the maze in cells.
    #[arg(long, default_value_t = 12)]
    size: u32,

    /// Side length of a larger closed grid to center the maze in.
    #[arg(long)]
    ambient_size: Option<u32>,

    /// Seed for the random source; omit for an entropy-seeded run.
    #[arg(long)]
    seed: Option<u64>,

    /// Overlay a connected blob of this many open cells.
    #[arg(long)]
    blob: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let maze = generate(args.size, args.ambient_size, &mut rng)?;
    let blob = match args.blob {
        Some(num_points) => Some(sample_blob(&maze, num_points, &mut rng)?),
        None => None,
    };

    for row in 0..maze.size() {
        let line: String = (0..maze.size())
            .map(|column| glyph(&maze, blob.as_ref(), CellCoord::new(column, row)))
            .collect();
        println!("{line}");
    }

    Ok(())
}

fn glyph(maze: &maze_carve_grid::MazeGrid, blob: Option<&BlobMask>, cell: CellCoord) -> char {
    if blob.map_or(false, |mask| mask.is_selected(cell)) {
        'o'
    } else if maze.is_open(cell) {
        '.'
    } else {
        '#'
    }
}
