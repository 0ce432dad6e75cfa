use super::prelude::*;

pub(crate) fn find(board: &Board, subset_size: u8) -> Option<MoveKind> {
    // subsets of 5 and more digits always have complementary subsets
    // of 9 - subset_size
    fn walk_combinations(
        board: &Board,
        pooled_digits: Set<Digit>,
        positions: SetIter<Position>,
        house: House,
        position_set: Set<Position>,
        subset_size: u8,
        on_subset: &mut impl FnMut(Set<Position>, Set<Digit>) -> bool,
    ) -> bool {
        if position_set.len() > subset_size {
            return false;
        }
        if position_set.len() == subset_size
            && pooled_digits.len() == position_set.len()
            && on_subset(position_set, pooled_digits)
        {
            // found a subset
            return true;
        }

        let mut positions = positions;
        while let Some(position) = positions.next() {
            let cell = house.cell_at(position);
            let candidates = board.candidates(cell);
            // solved or impossible cell
            if board.digit(cell).is_some() || candidates.is_empty() {
                continue;
            }
            let new_position_set = position_set | position.as_set();
            let new_pooled_digits = pooled_digits | candidates;

            if walk_combinations(
                board,
                new_pooled_digits,
                positions.clone(),
                house,
                new_position_set,
                subset_size,
                on_subset,
            ) {
                return true;
            }
        }
        false
    }

    let mut found = None;
    for house in House::all() {
        let stop = walk_combinations(
            board,
            Set::NONE,
            Set::ALL.into_iter(),
            house,
            Set::NONE,
            subset_size,
            &mut |position_set, digits| {
                // a bigger subset contains smaller ones; only exact hits count
                let confined = house
                    .cells()
                    .iter()
                    .filter(|&&cell| {
                        board.digit(cell).is_none() && board.candidates_confined_to(cell, digits)
                    })
                    .count();
                if confined != subset_size as usize {
                    return false;
                }

                let mut matches = Vec::new();
                let mut removals = Vec::new();
                for position in Set::<Position>::ALL {
                    let cell = house.cell_at(position);
                    let shared = board.candidates(cell) & digits;
                    if position_set.contains(position) {
                        matches.extend(shared.into_iter().map(|digit| Candidate { cell, digit }));
                    } else if board.digit(cell).is_none() {
                        removals.extend(shared.into_iter().map(|digit| Candidate { cell, digit }));
                    }
                }
                if removals.is_empty() {
                    return false;
                }
                found = Some(MoveKind::Eliminate { matches, removals });
                true
            },
        );
        if stop {
            break;
        }
    }
    found
}
