use super::prelude::*;

pub(crate) fn find(board: &Board) -> Option<MoveKind> {
    for digit in Digit::all() {
        for block in House::blocks() {
            let cells: Vec<Cell> = block
                .cells()
                .iter()
                .copied()
                .filter(|&cell| board.digit(cell).is_none() && board.has_candidate(cell, digit))
                .collect();
            // a single occurrence is a single, not a pointing tuple
            if cells.len() < 2 || cells.len() > 3 {
                continue;
            }

            let line = if cells.iter().all(|cell| cell.row() == cells[0].row()) {
                House::row(cells[0].row())
            } else if cells.iter().all(|cell| cell.col() == cells[0].col()) {
                House::col(cells[0].col())
            } else {
                continue;
            };

            let pointing_block = cells[0].block();
            let removals: Vec<Candidate> = line
                .cells()
                .iter()
                .filter(|&&cell| {
                    cell.block() != pointing_block
                        && board.digit(cell).is_none()
                        && board.has_candidate(cell, digit)
                })
                .map(|&cell| Candidate { cell, digit })
                .collect();
            if removals.is_empty() {
                continue;
            }

            let matches = cells
                .into_iter()
                .map(|cell| Candidate { cell, digit })
                .collect();
            return Some(MoveKind::Eliminate { matches, removals });
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_candidates_locked_onto_a_column() {
        let board = Board::from_candidate_line(
            "2 2 2 . . . . . .
             2 2 2 . . . . . .
             2 2 2 . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . 2 . . . . . . .
             . 2 . . . . . . .
             . 2 . . . . . . .",
        );
        assert_eq!(
            find(&board),
            Some(MoveKind::Eliminate {
                matches: vec![
                    Candidate::new(55, 2),
                    Candidate::new(64, 2),
                    Candidate::new(73, 2),
                ],
                removals: vec![
                    Candidate::new(1, 2),
                    Candidate::new(10, 2),
                    Candidate::new(19, 2),
                ],
            })
        );
    }

    #[test]
    fn finds_candidates_locked_onto_a_row() {
        let board = Board::from_candidate_line(
            "2 2 2 . . . . . .
             2 2 2 . . . 2 2 2
             2 2 2 . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .",
        );
        assert_eq!(
            find(&board),
            Some(MoveKind::Eliminate {
                matches: vec![
                    Candidate::new(15, 2),
                    Candidate::new(16, 2),
                    Candidate::new(17, 2),
                ],
                removals: vec![
                    Candidate::new(9, 2),
                    Candidate::new(10, 2),
                    Candidate::new(11, 2),
                ],
            })
        );
    }

    #[test]
    fn skips_locked_candidates_without_removals() {
        let board = Board::from_candidate_line(
            "3 3 3 . . . . . .
             . . . . . . 3 3 3
             3 3 3 . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .
             . . . . . . . . .",
        );
        assert_eq!(find(&board), None);
    }
}
