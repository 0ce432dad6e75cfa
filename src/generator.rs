//! Puzzle generation.
//!
//! A full solution comes from solving the empty grid with a randomized
//! search. Hints are then dug out at random. Uniqueness is checked
//! probabilistically: a batch of differently seeded solves must all
//! arrive at the original solution, otherwise the digging is redone.

use crate::board::{Cell, Grid};
use crate::search::solve_grid_seeded;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// How many seeded re-solves have to agree before a puzzle passes as
/// uniquely solvable.
const UNIQUENESS_CHECKS: usize = 20;

/// A puzzle and the solution it was dug out of.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneratedPuzzle {
    /// The puzzle, with 25 to 35 hints left.
    pub puzzle: Grid,
    /// Its solution.
    pub solution: Grid,
}

/// Generates a random puzzle with a unique solution.
pub fn generate() -> GeneratedPuzzle {
    generate_seeded(rand::random())
}

/// Like [`generate`], but deterministic in `seed`.
pub fn generate_seeded(seed: u64) -> GeneratedPuzzle {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let solution = loop {
        // an unlucky search can exhaust its budget, just try again
        if let Ok(grid) = solve_grid_seeded(&Grid::EMPTY, rng.gen()) {
            break grid;
        }
    };

    let hints = 25 + rng.gen_range(0..=10);
    let mut cells: Vec<Cell> = Cell::all().collect();
    loop {
        cells.shuffle(&mut rng);
        let mut puzzle = solution;
        for &cell in &cells[..81 - hints] {
            puzzle = puzzle.cleared(cell);
        }
        if is_unique(&puzzle, &solution, &mut rng) {
            return GeneratedPuzzle { puzzle, solution };
        }
        debug!("{} hints did not pin down the solution, digging again", hints);
    }
}

fn is_unique(puzzle: &Grid, solution: &Grid, rng: &mut ChaCha8Rng) -> bool {
    (0..UNIQUENESS_CHECKS).all(|_| solve_grid_seeded(puzzle, rng.gen()) == Ok(*solution))
}
