use super::prelude::*;

pub(crate) fn find(board: &Board) -> Option<MoveKind> {
    for digit in Digit::all() {
        for line in House::rows().chain(House::cols()) {
            let cells: Vec<Cell> = line
                .cells()
                .iter()
                .copied()
                .filter(|&cell| board.digit(cell).is_none() && board.has_candidate(cell, digit))
                .collect();
            if cells.len() < 2 || cells.len() > 3 {
                continue;
            }
            if cells.iter().any(|cell| cell.block() != cells[0].block()) {
                continue;
            }

            let block = House::block(cells[0].block());
            let removals: Vec<Candidate> = block
                .cells()
                .iter()
                .filter(|&&cell| {
                    !line.cells().contains(&cell)
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
