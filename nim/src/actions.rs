use serde::{Deserialize, Serialize};

/// A request to change the game state.
///
/// Human input and the automated turn both produce these, and both go
/// through the same [`transition()`](crate::transition).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Take a single token from a column.
    ///
    /// Only the column that was first touched this turn may be used.
    Remove { column: usize },
    /// End the current turn.
    Next,
    /// Go back to the start of the game.
    Reset,
    /// Move the cursor to a column without taking anything.
    Highlight { column: usize },
    /// Lock out human input while the computer plays its turn.
    MarkComputerTurn,
}

/// Which of the two players is to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    #[default]
    First,
    Second,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.index() as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Player::First),
            1 => Ok(Player::Second),
            _ => Err(format!("Player must be 0 or 1, got {}", value)),
        }
    }
}

/// A complete move: how many tokens to take from which column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub column: usize,
    pub take: u32,
}
