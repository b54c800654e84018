//! Perfect play for the misère variant.
//!
//! As long as at least two columns hold more than one token, the winning
//! strategy is the same as in normal Nim: leave a position with a nim-sum of
//! zero. Once at most one such column is left, the move is chosen so that an
//! odd number of single-token columns remains for the opponent.

use crate::Move;

/// The XOR of all column heights.
pub fn nim_sum(columns: &[u32]) -> u32 {
    columns.iter().fold(0, |sum, &height| sum ^ height)
}

/// The number of columns with more than one token.
pub fn free_columns(columns: &[u32]) -> usize {
    columns.iter().filter(|&&height| height > 1).count()
}

/// Finds the best move for the player to move.
///
/// Returns `None` only if all columns are empty.
pub fn best_move(columns: &[u32]) -> Option<Move> {
    if free_columns(columns) < 2 {
        endgame_move(columns)
    } else {
        Some(strategic_move(columns))
    }
}

fn endgame_move(columns: &[u32]) -> Option<Move> {
    let tallest = columns.iter().copied().max().filter(|&height| height > 0)?;
    let column = columns.iter().position(|&height| height == tallest)?;
    let non_empty = columns.iter().filter(|&&height| height > 0).count();

    let take = if non_empty % 2 == 0 {
        // Take the whole column, an odd number of single tokens remains
        tallest
    } else if tallest > 1 {
        // Leave one token behind, which keeps the number of single tokens odd
        tallest - 1
    } else {
        // Only single tokens are left and their number is odd. If this is the
        // last token there is no choice, otherwise no move can save the game.
        1
    };
    Some(Move { column, take })
}

fn strategic_move(columns: &[u32]) -> Move {
    let sum = nim_sum(columns);
    match columns
        .iter()
        .position(|&height| (height ^ sum) < height)
    {
        Some(column) => Move {
            column,
            take: columns[column] - (columns[column] ^ sum),
        },
        None => {
            // Already a zero nim-sum, so every move loses. Play for time.
            let column = columns
                .iter()
                .position(|&height| height > 0)
                .unwrap_or_default();
            Move { column, take: 1 }
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::{quickcheck, TestResult};

    use super::*;
    use crate::arbitrary::Columns;

    quickcheck! {
        fn best_move_is_legal(columns: Columns) -> TestResult {
            let columns = columns.0;
            if columns.iter().all(|&height| height == 0) {
                return TestResult::from_bool(best_move(&columns).is_none());
            }
            match best_move(&columns) {
                Some(Move { column, take }) => TestResult::from_bool(
                    column < columns.len() && take >= 1 && take <= columns[column],
                ),
                None => TestResult::failed(),
            }
        }

        fn strategic_move_zeroes_nim_sum(columns: Columns) -> TestResult {
            let mut columns = columns.0;
            if free_columns(&columns) < 2 || nim_sum(&columns) == 0 {
                return TestResult::discard();
            }
            let Some(Move { column, take }) = best_move(&columns) else {
                return TestResult::failed();
            };
            columns[column] -= take;
            TestResult::from_bool(nim_sum(&columns) == 0)
        }
    }

    #[test]
    fn strategic_branch() {
        assert_eq!(nim_sum(&[3, 4, 5]), 2);
        assert_eq!(best_move(&[3, 4, 5]), Some(Move { column: 0, take: 2 }));
    }

    #[test]
    fn endgame_takes_whole_column_with_even_count() {
        assert_eq!(free_columns(&[0, 1, 2]), 1);
        assert_eq!(best_move(&[0, 1, 2]), Some(Move { column: 2, take: 2 }));
    }

    #[test]
    fn endgame_leaves_one_with_odd_count() {
        assert_eq!(best_move(&[1, 5, 1]), Some(Move { column: 1, take: 4 }));
    }

    #[test]
    fn endgame_single_tokens() {
        // Two single tokens: take one and leave the last one to the opponent.
        assert_eq!(best_move(&[1, 0, 1]), Some(Move { column: 0, take: 1 }));
        // The very last token has to be taken.
        assert_eq!(best_move(&[0, 0, 1]), Some(Move { column: 2, take: 1 }));
    }

    #[test]
    fn zero_nim_sum_falls_back_to_single_token() {
        assert_eq!(best_move(&[0, 2, 2]), Some(Move { column: 1, take: 1 }));
        assert_eq!(best_move(&[0, 0, 0]), None);
        assert_eq!(best_move(&[]), None);
    }
}
