//! Backtracking search over [`Board`]s, exposed step by step.
//!
//! The search alternates between two phases. While the strategies find
//! moves, it applies them one per step. When they run dry, it picks an
//! open cell with as few candidates as possible and guesses its digits
//! in random order, keeping the alternatives on an explicit stack. A
//! cell that runs out of candidates proves the last guess wrong and the
//! search backtracks.

use crate::board::{Board, Candidate, Cell, Digit, Grid};
use crate::errors::SolveError;
use crate::strategy::{find_next_move, Move};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// How many steps a search takes before giving up.
///
/// Valid puzzles finish orders of magnitude below this. The budget is a
/// safety net against boards crafted to make the search thrash.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

/// One step of a [`Search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A strategy found a move. Carries the board after applying it.
    Propagating(Board, Move),
    /// No strategy applied, so a candidate is tried. Carries the board
    /// before the guess.
    Guessing(Board, Candidate),
    /// The cell ran out of candidates and the search backtracked.
    Contradiction(Board, Cell),
    /// The board is full. The search ends here.
    Solved(Board),
    /// The step budget ran out before the search came to an answer.
    GivingUp,
}

struct Frame {
    board: Board,
    cell: Cell,
    remaining: Vec<Digit>,
}

/// A lazy backtracking solver. Advancing the iterator advances the
/// search, so callers can watch, count or abort it mid-flight.
pub struct Search {
    current: Option<Board>,
    stack: Vec<Frame>,
    rng: ChaCha8Rng,
    steps: usize,
    budget: usize,
    done: bool,
}

impl Search {
    /// Starts a search from `board` with a random seed.
    pub fn new(board: Board) -> Search {
        Search::seeded(board, rand::random())
    }

    /// Starts a search from `board` with a fixed seed. Equal seeds give
    /// equal step sequences.
    pub fn seeded(board: Board, seed: u64) -> Search {
        Search {
            current: Some(board),
            stack: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            steps: 0,
            budget: DEFAULT_STEP_BUDGET,
            done: false,
        }
    }

    /// Replaces the default step budget.
    pub fn with_budget(mut self, budget: usize) -> Search {
        self.budget = budget;
        self
    }

    /// Drives the search to its conclusion.
    pub fn run(self) -> Result<Grid, SolveError> {
        for step in self {
            match step {
                Step::Solved(board) => return Ok(board.grid()),
                Step::GivingUp => return Err(SolveError::BudgetExceeded),
                _ => {}
            }
        }
        Err(SolveError::NoSolution)
    }

    fn advance(&mut self) -> Option<Step> {
        if let Some(board) = self.current.take() {
            if board.is_solved() {
                self.done = true;
                return Some(Step::Solved(board));
            }
            if let Some(mov) = find_next_move(&board) {
                let after = board.apply(&mov);
                self.current = Some(after);
                return Some(Step::Propagating(after, mov));
            }
            self.push_frame(board);
        }

        let frame = self.stack.last_mut()?;
        match frame.remaining.pop() {
            Some(digit) => {
                let candidate = Candidate { cell: frame.cell, digit };
                let before = frame.board;
                self.current = Some(before.assign(candidate.cell, candidate.digit));
                Some(Step::Guessing(before, candidate))
            }
            None => {
                // every digit of this guess failed, backtrack
                let frame = self.stack.pop()?;
                Some(Step::Contradiction(frame.board, frame.cell))
            }
        }
    }

    fn push_frame(&mut self, board: Board) {
        let mut cells: Vec<Cell> = board.unsolved_cells().collect();
        cells.shuffle(&mut self.rng);
        // the board is not solved, so a cell is always left.
        // ties keep the shuffle order
        let mut cell = cells[0];
        for &other in &cells[1..] {
            if board.candidates(other).len() < board.candidates(cell).len() {
                cell = other;
            }
        }

        let mut remaining: Vec<Digit> = board.candidates(cell).into_iter().collect();
        remaining.shuffle(&mut self.rng);
        // digits are popped from the back
        remaining.reverse();
        self.stack.push(Frame { board, cell, remaining });
    }
}

impl Iterator for Search {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.done {
            return None;
        }
        if self.steps >= self.budget {
            debug!("giving up after {} steps", self.steps);
            self.done = true;
            return Some(Step::GivingUp);
        }
        self.steps += 1;

        let step = self.advance();
        if step.is_none() {
            self.done = true;
        }
        step
    }
}

/// Solves the grid by strategies plus backtracking.
///
/// Fails with [`SolveError::NoSolution`] if the search space is
/// exhausted and with [`SolveError::BudgetExceeded`] if the search gives
/// up first.
pub fn solve_grid(grid: &Grid) -> Result<Grid, SolveError> {
    Search::new(Board::new(*grid)).run()
}

/// Like [`solve_grid`], but deterministic in `seed`.
pub fn solve_grid_seeded(grid: &Grid, seed: u64) -> Result<Grid, SolveError> {
    Search::seeded(Board::new(*grid), seed).run()
}

#[cfg(test)]
mod test {
    use super::*;

    const SHIFTED_SOLUTION: &str =
        "123456789456789123789123456234567891567891234891234567345678912678912345912345678";

    #[test]
    fn a_solved_board_finishes_in_one_step() {
        let solution: Grid = SHIFTED_SOLUTION.parse().unwrap();
        let steps: Vec<Step> = Search::seeded(Board::new(solution), 0).collect();
        assert_eq!(steps, vec![Step::Solved(Board::new(solution))]);
    }

    #[test]
    fn solve_grid_fills_the_vacancy() {
        let puzzle: Grid =
            "12.456789456789123789123456234567891567891234891234567345678912678912345912345678"
                .parse()
                .unwrap();
        let solution: Grid = SHIFTED_SOLUTION.parse().unwrap();
        assert_eq!(solve_grid(&puzzle), Ok(solution));
    }

    #[test]
    fn a_cell_without_candidates_forces_a_contradiction() {
        // cell 0 sees the digits 1 through 8 in its row and a 9 in its
        // column, leaving it nothing
        let line = format!("{}{}{}", ".12345678", "9........", ".".repeat(63));
        let grid: Grid = line.parse().unwrap();
        let steps: Vec<Step> = Search::seeded(Board::new(grid), 0).collect();
        assert!(steps
            .iter()
            .any(|step| matches!(step, Step::Contradiction(..))));
        assert!(!steps.iter().any(|step| matches!(step, Step::Solved(_))));
    }

    #[test]
    fn the_budget_cuts_the_search_short() {
        let mut search = Search::seeded(Board::new(Grid::EMPTY), 0).with_budget(1);
        assert!(matches!(search.next(), Some(Step::Guessing(..))));
        assert_eq!(search.next(), Some(Step::GivingUp));
        assert_eq!(search.next(), None);
    }

    #[test]
    fn seeded_searches_repeat_themselves() {
        let a: Vec<Step> = Search::seeded(Board::new(Grid::EMPTY), 42).collect();
        let b: Vec<Step> = Search::seeded(Board::new(Grid::EMPTY), 42).collect();
        assert_eq!(a, b);
    }
}
