use crate::board::{Board, Candidate};
use crate::strategy::Strategy;
use std::slice;

/// A single deduction, together with the strategy that produced it.
///
/// Apply it with [`Board::apply`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Move {
    /// The strategy that found this move.
    pub strategy: Strategy,
    /// What the move does to the board.
    pub kind: MoveKind,
}

/// The effect of a [`Move`] on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MoveKind {
    /// A digit can be placed.
    Solve {
        /// The entry to place.
        candidate: Candidate,
        /// Peer candidates of the same digit that the placement strikes.
        removals: Vec<Candidate>,
    },
    /// Candidates can be struck without placing a digit.
    Eliminate {
        /// The candidates the strategy's pattern is built from.
        matches: Vec<Candidate>,
        /// The candidates proven impossible.
        removals: Vec<Candidate>,
    },
}

impl Move {
    /// The difficulty weight of the strategy behind this move.
    pub fn difficulty(&self) -> u32 {
        self.strategy.difficulty()
    }

    /// The entry this move places, if it places one.
    pub fn solves(&self) -> Option<Candidate> {
        match self.kind {
            MoveKind::Solve { candidate, .. } => Some(candidate),
            MoveKind::Eliminate { .. } => None,
        }
    }

    /// The candidates the move's pattern is built from. For a solving move
    /// that is the placed entry itself.
    pub fn matches(&self) -> &[Candidate] {
        match &self.kind {
            MoveKind::Solve { candidate, .. } => slice::from_ref(candidate),
            MoveKind::Eliminate { matches, .. } => matches,
        }
    }

    /// The candidates this move strikes.
    pub fn removals(&self) -> &[Candidate] {
        match &self.kind {
            MoveKind::Solve { removals, .. } | MoveKind::Eliminate { removals, .. } => removals,
        }
    }
}

/// Finds the simplest move on the board, if any strategy applies.
///
/// Strategies are tried in [`Strategy::ALL`] order and the first one
/// that produces a move wins.
///
/// # Panics
/// Panics if the board is already solved.
pub fn find_next_move(board: &Board) -> Option<Move> {
    assert!(!board.is_solved(), "the board is already solved");
    Strategy::ALL.iter().find_map(|&strategy| {
        strategy
            .deduce(board)
            .map(|kind| Move { strategy, kind })
    })
}
