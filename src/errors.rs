//! Typed errors for grid construction and solving.
//!
//! Logical contradictions encountered while solving are NOT errors. They are
//! recovered by backtracking and only ever surface, summarized, as
//! [`SolveError::NoSolution`].

#[cfg(doc)]
use crate::{Grid, Search};

/// Error for [`Grid::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("byte array contains entries >9")]
pub struct FromBytesError(pub(crate) ());

/// Error for [`Grid::from_bytes_slice`]
#[derive(Debug, thiserror::Error)]
pub enum FromBytesSliceError {
    /// Slice is not 81 long
    #[error("byte slice should have length 81, found {0}")]
    WrongLength(usize),
    /// Slice contains invalid entries
    #[error(transparent)]
    FromBytesError(FromBytesError),
}

/// Error for parsing a [`Grid`] from text.
///
/// Whitespace never counts towards the cell count. Every other character is a
/// cell, digits `1`-`9` as entries and anything else as an empty cell.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("grid text should contain 81 cell characters, found {0}")]
pub struct GridParseError(pub usize);

/// Terminal failure of a [`Search`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SolveError {
    /// Every branch of the search ended in a contradiction.
    #[error("the puzzle has no solution")]
    NoSolution,
    /// The step budget ran out before the search came to an answer.
    #[error("the step budget was exhausted before the search came to an answer")]
    BudgetExceeded,
}
