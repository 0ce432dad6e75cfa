#![warn(missing_docs)]

//! Sudoku solving, grading and generation.
//!
//! ## Overview
//!
//! The crate works on two representations. A [`Grid`] is just the 81
//! cell entries. A [`Board`] pairs a grid with candidate sets for the
//! empty cells and is what the solving machinery operates on.
//!
//! Solving is split the way a human would split it. [`find_next_move`]
//! applies the simplest [`Strategy`] that makes progress and explains
//! itself, which serves hints and difficulty grading. [`Search`] wraps
//! the strategies in randomized backtracking and exposes every step of
//! the hunt as an iterator, with [`solve_grid`] as the plain shortcut.
//! [`analyze`] condenses a whole search into statistics and
//! [`generate`] digs new puzzles with unique solutions out of random
//! solved grids.
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::{find_next_move, solve_grid, Board, Grid};
//!
//! let grid: Grid = "
//!     3 . 5  4 2 .  8 1 .
//!     4 8 7  9 . 1  5 . 6
//!     . 2 9  . 5 6  3 7 4
//!     8 5 .  7 9 3  . 4 1
//!     6 1 3  2 . 8  9 5 7
//!     . 7 4  . 6 5  2 8 .
//!     2 4 1  3 . 9  . 6 5
//!     5 . 8  6 7 .  1 9 2
//!     . 9 6  5 1 2  4 . 8
//! ".parse().unwrap();
//!
//! // a single hint
//! let hint = find_next_move(&Board::new(grid)).unwrap();
//! println!("look for a {}", hint.strategy);
//!
//! // or the full solution
//! let solution = solve_grid(&grid).unwrap();
//! assert!(solution.is_solved());
//! ```

mod analyze;
pub mod bitset;
pub mod board;
pub mod errors;
mod generator;
mod helper;
mod search;
pub mod strategy;

pub use crate::analyze::{analyze, analyze_seeded, Analysis};
pub use crate::bitset::Set;
pub use crate::board::{Board, Candidate, Cell, Digit, Grid, House, Position};
pub use crate::generator::{generate, generate_seeded, GeneratedPuzzle};
pub use crate::search::{solve_grid, solve_grid_seeded, Search, Step, DEFAULT_STEP_BUDGET};
pub use crate::strategy::{find_next_move, Move, MoveKind, Strategy};
