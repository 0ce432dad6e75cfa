//! Human-style solving. The [`Strategy`] enum catalogues the supported
//! deduction techniques and [`find_next_move`] applies the simplest one
//! that fits, which is what a hint button or a difficulty grader wants.
//!
//! Strategies never guess. Boards beyond their reach are the business of
//! the backtracking [`Search`](crate::Search).

mod moves;
mod strategies;

pub use self::moves::{find_next_move, Move, MoveKind};
pub use self::strategies::Strategy;
