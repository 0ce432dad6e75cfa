//! Grading and instrumentation on top of [`Search`].

use crate::board::{Board, Grid};
use crate::errors::SolveError;
use crate::search::{Search, Step};
use std::time::{Duration, Instant};

/// A whole solve boiled down to numbers.
///
/// The difficulty score is the sum of the [`Strategy`](crate::Strategy)
/// weights over all strategy moves the search needed. Guesses carry no
/// weight of their own but show up in `guesses` and `backtracks`, which
/// is usually the more damning verdict.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Analysis {
    /// Whether a solution was found.
    pub solved: bool,
    /// The solution, if one was found.
    pub solution: Option<Grid>,
    /// How many steps the search emitted.
    pub steps: usize,
    /// How often the search had to guess.
    pub guesses: usize,
    /// How often a guess was proven wrong.
    pub backtracks: usize,
    /// Summed difficulty weights of all strategy moves.
    pub difficulty: u32,
    /// Wall clock time of the whole solve.
    pub time: Duration,
    /// Why no solution was found, if none was.
    pub error: Option<SolveError>,
}

/// Solves `grid` and tallies what the search did along the way.
pub fn analyze(grid: &Grid) -> Analysis {
    analyze_seeded(grid, rand::random())
}

/// Like [`analyze`], but deterministic in `seed`.
pub fn analyze_seeded(grid: &Grid, seed: u64) -> Analysis {
    let start = Instant::now();
    let mut analysis = Analysis {
        solved: false,
        solution: None,
        steps: 0,
        guesses: 0,
        backtracks: 0,
        difficulty: 0,
        time: Duration::default(),
        error: None,
    };

    for step in Search::seeded(Board::new(*grid), seed) {
        analysis.steps += 1;
        match step {
            Step::Propagating(_, mov) => analysis.difficulty += mov.difficulty(),
            Step::Guessing(..) => analysis.guesses += 1,
            Step::Contradiction(..) => analysis.backtracks += 1,
            Step::Solved(board) => {
                analysis.solved = true;
                analysis.solution = Some(board.grid());
            }
            Step::GivingUp => analysis.error = Some(SolveError::BudgetExceeded),
        }
    }
    if !analysis.solved && analysis.error.is_none() {
        analysis.error = Some(SolveError::NoSolution);
    }
    analysis.time = start.elapsed();
    analysis
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn a_single_vacancy_takes_two_steps() {
        let puzzle: Grid =
            "12.456789456789123789123456234567891567891234891234567345678912678912345912345678"
                .parse()
                .unwrap();
        let analysis = analyze_seeded(&puzzle, 0);
        assert!(analysis.solved);
        assert_eq!(analysis.steps, 2);
        assert_eq!(analysis.guesses, 0);
        assert_eq!(analysis.backtracks, 0);
        // a naked single weighs nothing
        assert_eq!(analysis.difficulty, 0);
        assert_eq!(analysis.error, None);
        assert_eq!(
            analysis.solution.map(|grid| grid.to_line_string()),
            Some(
                "123456789456789123789123456234567891567891234891234567345678912678912345912345678"
                    .to_owned()
            )
        );
    }

    #[test]
    fn unsolvable_grids_report_no_solution() {
        let line = format!("{}{}{}", ".12345678", "9........", ".".repeat(63));
        let grid: Grid = line.parse().unwrap();
        let analysis = analyze_seeded(&grid, 0);
        assert!(!analysis.solved);
        assert_eq!(analysis.solution, None);
        assert_eq!(analysis.error, Some(SolveError::NoSolution));
        assert!(analysis.backtracks > 0);
    }
}
