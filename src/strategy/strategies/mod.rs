mod box_line_reduction;
mod hidden_subsets;
mod locked_candidates;
mod naked_singles;
mod naked_subsets;
mod prelude;

use crate::board::Board;
use crate::strategy::moves::MoveKind;
use std::fmt;

/// The deduction techniques used to find moves, grade difficulty and
/// solve without guessing.
///
/// [`find_next_move`](crate::find_next_move) tries them in [`Strategy::ALL`]
/// order, so a returned move always carries the simplest applicable strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[allow(missing_docs)]
pub enum Strategy {
    NakedSingles,
    HiddenSingles,
    LockedCandidates,
    NakedPairs,
    BoxLineReduction,
    NakedTriples,
    NakedQuads,
    HiddenPairs,
    HiddenTriples,
    HiddenQuads,
}

impl Strategy {
    /// All strategies, ordered from simplest to hardest.
    pub const ALL: [Strategy; 10] = [
        Strategy::NakedSingles,     // 0
        Strategy::HiddenSingles,    // 5
        Strategy::LockedCandidates, // 15
        Strategy::NakedPairs,       // 20
        Strategy::BoxLineReduction, // 20
        Strategy::NakedTriples,     // 30
        Strategy::NakedQuads,       // 40
        Strategy::HiddenPairs,      // 40
        Strategy::HiddenTriples,    // 50
        Strategy::HiddenQuads,      // 60
    ];

    /// The weight this strategy adds to a puzzle's difficulty score
    /// each time it is needed.
    pub fn difficulty(self) -> u32 {
        use self::Strategy::*;
        match self {
            NakedSingles => 0,
            HiddenSingles => 5,
            LockedCandidates => 15,
            NakedPairs => 20,
            BoxLineReduction => 20,
            NakedTriples => 30,
            NakedQuads => 40,
            HiddenPairs => 40,
            HiddenTriples => 50,
            HiddenQuads => 60,
        }
    }

    pub(crate) fn deduce(self, board: &Board) -> Option<MoveKind> {
        use self::Strategy::*;
        match self {
            NakedSingles => naked_singles::find(board),
            HiddenSingles => hidden_subsets::find(board, 1),
            LockedCandidates => locked_candidates::find(board),
            NakedPairs => naked_subsets::find(board, 2),
            BoxLineReduction => box_line_reduction::find(board),
            NakedTriples => naked_subsets::find(board, 3),
            NakedQuads => naked_subsets::find(board, 4),
            HiddenPairs => hidden_subsets::find(board, 2),
            HiddenTriples => hidden_subsets::find(board, 3),
            HiddenQuads => hidden_subsets::find(board, 4),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use self::Strategy::*;
        f.write_str(match self {
            NakedSingles => "naked single",
            HiddenSingles => "hidden single",
            LockedCandidates => "locked candidates",
            NakedPairs => "naked pair",
            BoxLineReduction => "box line reduction",
            NakedTriples => "naked triple",
            NakedQuads => "naked quad",
            HiddenPairs => "hidden pair",
            HiddenTriples => "hidden triple",
            HiddenQuads => "hidden quad",
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn strategies_are_tried_in_difficulty_order() {
        let difficulties: Vec<u32> = Strategy::ALL.iter().map(|s| s.difficulty()).collect();
        assert!(difficulties.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
