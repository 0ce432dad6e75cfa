use super::prelude::*;

pub(crate) fn find(board: &Board, subset_size: u8) -> Option<MoveKind> {
    fn walk_combinations(
        possible_positions: &DigitArray<Set<Position>>,
        pooled_positions: Set<Position>,
        digits: SetIter<Digit>,
        subset_size: u8,
        digit_set: Set<Digit>,
        on_subset: &mut impl FnMut(Set<Digit>, Set<Position>) -> bool,
    ) -> bool {
        if digit_set.len() > subset_size {
            return false;
        }
        if digit_set.len() == subset_size
            && pooled_positions.len() == subset_size
            && on_subset(digit_set, pooled_positions)
        {
            return true;
        }

        let mut digits = digits;
        while let Some(digit) = digits.next() {
            let positions = possible_positions[digit];
            // placed digit
            if positions.is_empty() {
                continue;
            }
            let new_digit_set = digit_set | digit.as_set();
            let new_pooled_positions = pooled_positions | positions;
            if walk_combinations(
                possible_positions,
                new_pooled_positions,
                digits.clone(),
                subset_size,
                new_digit_set,
                on_subset,
            ) {
                return true;
            }
        }
        false
    }

    let mut found = None;
    for house in House::all() {
        let possible_positions = possible_positions(board, house);
        let stop = walk_combinations(
            &possible_positions,
            Set::NONE,
            Set::ALL.into_iter(),
            subset_size,
            Set::NONE,
            &mut |digit_set, position_set| {
                // only count digits pinned to exactly these cells
                let pinned = Digit::all()
                    .filter(|&digit| {
                        let positions = possible_positions[digit];
                        !positions.is_empty() && position_set.contains(positions)
                    })
                    .count();
                if pinned != subset_size as usize {
                    return false;
                }

                let mut matches = Vec::new();
                let mut removals = Vec::new();
                for position in position_set {
                    let cell = house.cell_at(position);
                    let candidates = board.candidates(cell);
                    matches.extend(
                        (candidates & digit_set)
                            .into_iter()
                            .map(|digit| Candidate { cell, digit }),
                    );
                    removals.extend(
                        candidates
                            .without(digit_set)
                            .into_iter()
                            .map(|digit| Candidate { cell, digit }),
                    );
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

/// For each digit, the positions in `house` where it can still go.
/// Solved cells contribute nothing, so a placed digit ends up with no
/// positions at all.
fn possible_positions(board: &Board, house: House) -> DigitArray<Set<Position>> {
    let mut possible = DigitArray([Set::NONE; 9]);
    for (i, &cell) in house.cells().iter().enumerate() {
        if board.digit(cell).is_some() {
            continue;
        }
        for digit in board.candidates(cell) {
            possible[digit] |= Position::new(i as u8).as_set();
        }
    }
    possible
}
