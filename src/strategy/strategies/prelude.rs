// Reexports of everything the strategy implementations need
pub(crate) use crate::bitset::{Iter as SetIter, Set};
pub(crate) use crate::board::{Board, Candidate, Cell, Digit, House, Position};
pub(crate) use crate::helper::DigitArray;
pub(crate) use crate::strategy::moves::MoveKind;
