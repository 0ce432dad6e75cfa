use super::prelude::*;

pub(crate) fn find(board: &Board) -> Option<MoveKind> {
    let cell = board.cells_with_candidate_count(1).next()?;
    let digit = board.candidates(cell).unique()?;
    let removals = cell
        .peers()
        .iter()
        .filter(|&&peer| board.digit(peer).is_none() && board.has_candidate(peer, digit))
        .map(|&peer| Candidate { cell: peer, digit })
        .collect();
    Some(MoveKind::Solve {
        candidate: Candidate { cell, digit },
        removals,
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_the_first_cell_with_a_single_candidate() {
        let board = Board::from_candidate_line(
            "2  123 13 . . . . . .
             24 .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .
             .  .   .  . . . . . .",
        );
        assert_eq!(
            find(&board),
            Some(MoveKind::Solve {
                candidate: Candidate::new(0, 2),
                removals: vec![Candidate::new(1, 2), Candidate::new(9, 2)],
            })
        );
    }

    #[test]
    fn ignores_cells_with_more_or_fewer_candidates() {
        let board = Board::from_candidate_line(
            "12 12 . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .
             .  .  . . . . . . .",
        );
        assert_eq!(find(&board), None);
    }
}
