//! The sudoku grid and the candidate state a solver works on.

mod candidate;
mod cell;
mod digit;
mod grid;

pub use self::candidate::Candidate;
pub use self::cell::{Cell, House, Position};
pub use self::digit::Digit;
pub use self::grid::Grid;

use crate::bitset::Set;
use crate::helper::CellArray;
use crate::strategy::{Move, MoveKind};
use crunchy::unroll;

/// A [`Grid`] together with the candidate set of every cell.
///
/// Candidates follow the grid: a filled cell's candidate set is exactly its
/// entry, an empty cell's set holds every digit not placed among its peers.
/// Strategies refine empty cells' sets further through [`eliminate`],
/// and [`assign`] re-derives the whole candidate state from the new grid.
///
/// A cell may end up with no candidates at all. That is not an error, just a
/// board that cannot be completed, and the search recognizes it when the cell
/// offers nothing to guess.
///
/// All updates return a new board and leave the original untouched.
///
/// [`eliminate`]: Board::eliminate
/// [`assign`]: Board::assign
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Board {
    grid: Grid,
    candidates: CellArray<Set<Digit>>,
}

impl Board {
    /// Builds the board for a grid, deriving every cell's candidates.
    pub fn new(grid: Grid) -> Board {
        let mut candidates = CellArray([Set::NONE; 81]);
        for cell in Cell::all() {
            candidates[cell] = derive_candidates(&grid, cell);
        }
        Board { grid, candidates }
    }

    /// Builds a board from explicit candidate sets. Cells with a single
    /// candidate become grid entries.
    pub fn from_candidates(candidates: [Set<Digit>; 81]) -> Board {
        let mut grid = Grid::EMPTY;
        for cell in Cell::all() {
            if let Some(digit) = candidates[cell.as_index()].unique() {
                grid = grid.with(cell, digit);
            }
        }
        Board {
            grid,
            candidates: CellArray(candidates),
        }
    }

    /// The underlying value grid.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// The candidate set of the given cell.
    #[inline]
    pub fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// The entry of the given cell, if it is filled.
    #[inline]
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.grid.get(cell)
    }

    /// Checks whether every cell is filled.
    pub fn is_solved(&self) -> bool {
        self.grid.iter().all(|digit| digit.is_some())
    }

    /// Returns an iterator over the empty cells in ascending order.
    pub fn unsolved_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.digit(cell).is_none())
    }

    /// Returns an iterator over the empty cells with exactly `n` candidates.
    pub fn cells_with_candidate_count(&self, n: u8) -> impl Iterator<Item = Cell> + '_ {
        self.unsolved_cells()
            .filter(move |&cell| self.candidates(cell).len() == n)
    }

    /// Checks whether the cell's candidate set contains the digit.
    #[inline]
    pub fn has_candidate(&self, cell: Cell, digit: Digit) -> bool {
        self.candidates[cell].contains(digit)
    }

    /// Checks whether the cell's candidates form a non-empty subset of `set`.
    pub fn candidates_confined_to(&self, cell: Cell, set: Set<Digit>) -> bool {
        let candidates = self.candidates[cell];
        !candidates.is_empty() && set.contains(candidates)
    }

    /// Returns the board with the entry placed and ALL candidates re-derived
    /// from the resulting grid. Refinements made by earlier eliminations are
    /// forgotten; the strategies simply find them again.
    pub fn assign(&self, cell: Cell, digit: Digit) -> Board {
        Board::new(self.grid.with(cell, digit))
    }

    /// Returns the board with exactly the listed candidates struck. The grid
    /// is unchanged.
    pub fn eliminate(&self, removals: &[Candidate]) -> Board {
        let mut board = *self;
        for candidate in removals {
            board.candidates[candidate.cell].remove(candidate.digit.as_set());
        }
        board
    }

    /// Applies a move: a solving move assigns its candidate, an eliminating
    /// move strikes its removals.
    pub fn apply(&self, mov: &Move) -> Board {
        match &mov.kind {
            MoveKind::Solve { candidate, .. } => self.assign(candidate.cell, candidate.digit),
            MoveKind::Eliminate { removals, .. } => self.eliminate(removals),
        }
    }
}

fn derive_candidates(grid: &Grid, cell: Cell) -> Set<Digit> {
    if let Some(digit) = grid.get(cell) {
        return digit.as_set();
    }
    let peers = cell.peers();
    let mut excluded = Set::NONE;
    unroll! {
        for i in 0..20 {
            if let Some(digit) = grid.get(peers[i]) {
                excluded |= digit;
            }
        }
    }
    Set::ALL.without(excluded)
}

#[cfg(test)]
impl Board {
    /// Builds a board from one whitespace-separated token per cell, each
    /// token listing the cell's candidate digits (`.` for none). The grid
    /// stays empty, single candidates included.
    pub(crate) fn from_candidate_line(line: &str) -> Board {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(tokens.len(), 81, "expected 81 cell tokens");
        let mut candidates = CellArray([Set::NONE; 81]);
        for (i, token) in tokens.iter().enumerate() {
            if *token == "." {
                continue;
            }
            let mut set = Set::NONE;
            for ch in token.chars() {
                let digit = ch.to_digit(10).expect("tokens are digits or `.`");
                set |= Digit::new(digit as u8);
            }
            candidates.0[i] = set;
        }
        Board {
            grid: Grid::EMPTY,
            candidates,
        }
    }
}
