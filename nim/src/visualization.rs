use crate::GameState;

/// Draws the board as rows of lights, with the tallest row on top.
///
/// The column numbers below the board are 1-based, and the active column is
/// marked with a `^`.
pub fn visualize_columns(state: &GameState) -> String {
    let mut result = String::new();
    for row in (0..state.row_capacity).rev() {
        result += "│";
        for &height in &state.columns {
            result += if row < height { " ●" } else { " ○" };
        }
        result += " │\n";
    }

    result += "╰";
    for _ in &state.columns {
        result += "──";
    }
    result += "─╯\n ";
    for column in 0..state.columns.len() {
        result += &format!("{:>2}", column + 1);
    }
    if let Some(active) = state.active_column {
        result += "\n ";
        for column in 0..state.columns.len() {
            result += if column == active { " ^" } else { "  " };
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_lights_and_cursor() {
        let state = GameState {
            active_column: Some(1),
            ..GameState::new(3, vec![1, 3, 0])
        };
        let expected = "\
│ ○ ● ○ │
│ ○ ● ○ │
│ ● ● ○ │
╰───────╯
  1 2 3
    ^  ";
        assert_eq!(visualize_columns(&state), expected);
    }

    #[test]
    fn no_cursor_line_between_turns() {
        let state = GameState::new(1, vec![1]);
        assert_eq!(visualize_columns(&state), "│ ● │\n╰───╯\n  1");
    }
}
