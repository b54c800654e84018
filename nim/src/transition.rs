use crate::{is_game_over, Action, GameState};

/// Computes the state after an action.
///
/// Actions that make no sense in the given state (taking from an empty or
/// nonexistent column, switching columns mid-turn, ending a turn without
/// having moved, anything after the game is over) leave the state unchanged.
///
/// [`Action::Reset`] is also returned unchanged here: only the
/// [`Session`](crate::Session) knows which board to go back to.
pub fn transition(state: &GameState, action: &Action) -> GameState {
    match *action {
        Action::Remove { column } => remove(state, column),
        Action::Next => next(state),
        Action::Highlight { column } => {
            if column >= state.columns.len() {
                return state.clone();
            }
            GameState {
                active_column: Some(column),
                ..state.clone()
            }
        }
        Action::MarkComputerTurn => GameState {
            computer_move: true,
            ..state.clone()
        },
        Action::Reset => state.clone(),
    }
}

fn remove(state: &GameState, column: usize) -> GameState {
    if state.game_over {
        return state.clone();
    }
    // Tokens may only be taken from one column per turn.
    if state.active_column.is_some_and(|active| active != column) {
        return state.clone();
    }
    let Some(&height) = state.columns.get(column) else {
        return state.clone();
    };
    if height == 0 {
        return state.clone();
    }

    let mut columns = state.columns.clone();
    columns[column] = height - 1;
    let game_over = is_game_over(&columns);
    GameState {
        columns,
        active_column: Some(column),
        game_over,
        ..state.clone()
    }
}

fn next(state: &GameState) -> GameState {
    if state.game_over || state.active_column.is_none() {
        return state.clone();
    }
    GameState {
        active_column: None,
        player: state.player.other(),
        computer_move: false,
        ..state.clone()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::Player;

    quickcheck! {
        fn remove_is_ignored_after_game_over(state: GameState, column: usize) -> bool {
            let state = GameState { game_over: true, ..state };
            transition(&state, &Action::Remove { column: column % (state.columns.len() + 2) }) == state
        }

        fn next_switches_player_only_with_active_column(state: GameState) -> bool {
            let after = transition(&state, &Action::Next);
            if state.active_column.is_some() && !state.game_over {
                after.player == state.player.other() && after.active_column.is_none() && !after.computer_move
            } else {
                after == state
            }
        }

        fn highlight_never_changes_the_game(state: GameState, column: usize) -> bool {
            let after = transition(&state, &Action::Highlight { column: column % (state.columns.len() + 2) });
            after.columns == state.columns && after.player == state.player && after.game_over == state.game_over
        }

        fn remove_takes_at_most_one_token(state: GameState, column: usize) -> bool {
            let after = transition(&state, &Action::Remove { column: column % (state.columns.len() + 2) });
            let diff = state.total_tokens() - after.total_tokens();
            (diff == 1 && after.game_over == is_game_over(&after.columns)) || after == state
        }
    }

    #[test]
    fn remove_locks_the_column() {
        let state = GameState::new(7, vec![2, 2]);
        let after = transition(&state, &Action::Remove { column: 0 });
        assert_eq!(after.columns, vec![1, 2]);
        assert_eq!(after.active_column, Some(0));
        assert!(!after.game_over);

        // Switching columns is not allowed mid-turn...
        assert_eq!(transition(&after, &Action::Remove { column: 1 }), after);
        // ...but taking more from the same column is.
        let again = transition(&after, &Action::Remove { column: 0 });
        assert_eq!(again.columns, vec![0, 2]);
    }

    #[test]
    fn last_but_one_token_ends_the_game() {
        let state = GameState {
            active_column: Some(0),
            ..GameState::new(7, vec![2, 0])
        };
        let after = transition(&state, &Action::Remove { column: 0 });
        assert_eq!(after.columns, vec![1, 0]);
        assert!(after.game_over);
        assert_eq!(transition(&after, &Action::Next), after);
    }

    #[test]
    fn out_of_range_columns_are_ignored() {
        let state = GameState::new(7, vec![3, 4, 5]);
        assert_eq!(transition(&state, &Action::Remove { column: 3 }), state);
        assert_eq!(transition(&state, &Action::Highlight { column: 17 }), state);
    }

    #[test]
    fn empty_column_is_ignored() {
        let state = GameState::new(7, vec![0, 4]);
        assert_eq!(transition(&state, &Action::Remove { column: 0 }), state);
    }

    #[test]
    fn next_hands_over_and_clears_computer_flag() {
        let state = GameState::new(7, vec![3, 4]);
        assert_eq!(transition(&state, &Action::Next), state);

        let state = transition(&state, &Action::MarkComputerTurn);
        assert!(state.computer_move);
        let state = transition(&state, &Action::Remove { column: 1 });
        let state = transition(&state, &Action::Next);
        assert_eq!(state.player, Player::Second);
        assert_eq!(state.active_column, None);
        assert!(!state.computer_move);
    }

    #[test]
    fn highlight_moves_the_cursor_only() {
        let state = GameState::new(7, vec![3, 4, 5]);
        let after = transition(&state, &Action::Highlight { column: 2 });
        assert_eq!(after.active_column, Some(2));
        assert_eq!(after.columns, state.columns);
    }
}
