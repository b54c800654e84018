use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{nim_sum, BoardParseError, InvalidSettings, Player};

pub const DEFAULT_ROWS: u32 = 7;
pub const DEFAULT_COLUMNS: usize = 4;
/// Upper bound for rows, column heights and the number of columns.
///
/// Keeps the board drawable, with two-digit column numbers.
pub const MAX_BOARD_SIZE: u32 = 99;

/// A snapshot of the game.
///
/// Snapshots are never modified. Every [`Action`](crate::Action) produces a
/// new one through [`transition()`](crate::transition).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// How many tokens fit in a column. Only relevant for display.
    pub row_capacity: u32,
    /// The number of tokens in each column.
    ///
    /// The number of columns never changes during a game.
    pub columns: Vec<u32>,
    /// The column the current player is taking tokens from, or the
    /// cursor position while the computer is thinking.
    pub active_column: Option<usize>,
    pub player: Player,
    /// Set while the computer plays its turn.
    pub computer_move: bool,
    /// Set once a single token is left.
    pub game_over: bool,
}

impl GameState {
    /// Creates the state at the start of a game, with the first player to move.
    pub fn new(row_capacity: u32, columns: Vec<u32>) -> Self {
        let game_over = is_game_over(&columns);
        Self {
            row_capacity,
            columns,
            active_column: None,
            player: Player::First,
            computer_move: false,
            game_over,
        }
    }

    /// Creates the initial state for a new session.
    ///
    /// An explicit board in the settings takes precedence over a random one.
    /// If it cannot be parsed, a random board is used instead and the problem
    /// is only logged.
    pub fn from_settings<R: Rng + ?Sized>(
        settings: &BoardSettings,
        rng: &mut R,
    ) -> Result<Self, InvalidSettings> {
        settings.validate()?;

        let explicit_columns = settings.board.as_deref().and_then(|text| {
            parse_board(text)
                .map_err(|err| debug!(%err, board = text, "Ignoring explicit board"))
                .ok()
        });
        let columns = match explicit_columns {
            Some(columns) => columns,
            None => random_columns(rng, settings.columns, settings.max_height()),
        };

        Ok(Self::with_rows(settings.rows, columns))
    }

    /// Creates the state at the start of a game, with room for at least
    /// `rows` tokens and for the tallest column.
    pub fn with_rows(rows: u32, columns: Vec<u32>) -> Self {
        let tallest = columns.iter().copied().max().unwrap_or(0);
        Self::new(rows.max(tallest), columns)
    }

    pub fn total_tokens(&self) -> u64 {
        self.columns.iter().map(|&height| u64::from(height)).sum()
    }
}

/// The game ends as soon as exactly one token is left, since the player
/// facing it is forced to take the last token.
pub fn is_game_over(columns: &[u32]) -> bool {
    columns.iter().map(|&height| u64::from(height)).sum::<u64>() == 1
}

/// Generates a random board that is a win for the first player.
///
/// Every column gets between 1 and `max_height` tokens. The columns are
/// sorted in ascending order.
pub fn random_columns<R: Rng + ?Sized>(
    rng: &mut R,
    column_count: usize,
    max_height: u32,
) -> Vec<u32> {
    debug_assert!(max_height >= 1);
    let mut columns: Vec<u32> = (0..column_count)
        .map(|_| rng.gen_range(1..=max_height))
        .collect();
    columns.sort_unstable();

    // A zero nim-sum would hand the win to the second player.
    if nim_sum(&columns) == 0 {
        if let Some(tallest) = columns.last_mut() {
            *tallest -= 1;
        }
        columns.sort_unstable();
    }
    columns
}

/// Parses a board given as whitespace-separated column heights, e.g. `"3 4 5"`.
pub fn parse_board(text: &str) -> Result<Vec<u32>, BoardParseError> {
    let columns = text
        .split_whitespace()
        .enumerate()
        .map(|(token_idx, token)| -> Result<u32, BoardParseError> {
            let height = token
                .parse::<u32>()
                .map_err(|_| BoardParseError::InvalidToken {
                    token_idx,
                    token: String::from(token),
                })?;
            if height > MAX_BOARD_SIZE {
                return Err(BoardParseError::ColumnTooTall { token_idx, height });
            }
            Ok(height)
        })
        .collect::<Result<Vec<u32>, BoardParseError>>()?;
    if columns.is_empty() {
        return Err(BoardParseError::Empty);
    }
    if columns.len() > MAX_BOARD_SIZE as usize {
        return Err(BoardParseError::TooManyColumns {
            column_count: columns.len(),
        });
    }
    Ok(columns)
}

/// What the `reset` action does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetPolicy {
    /// Go back to the board the session started with.
    #[default]
    RestoreOriginal,
    /// Deal a new random board with the same dimensions.
    Reshuffle,
}

/// Everything needed to set up a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub rows: u32,
    pub columns: usize,
    /// Defaults to `rows`.
    pub max_height: Option<u32>,
    /// Explicit column heights, overriding the random board.
    pub board: Option<String>,
    pub reset_policy: ResetPolicy,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            max_height: None,
            board: None,
            reset_policy: ResetPolicy::default(),
        }
    }
}

impl BoardSettings {
    pub fn max_height(&self) -> u32 {
        self.max_height.unwrap_or(self.rows)
    }

    pub fn validate(&self) -> Result<(), InvalidSettings> {
        if self.rows == 0 {
            return Err(InvalidSettings::ZeroRows);
        }
        if self.columns == 0 {
            return Err(InvalidSettings::ZeroColumns);
        }
        if self.max_height() == 0 {
            return Err(InvalidSettings::ZeroMaxHeight);
        }
        if self.rows > MAX_BOARD_SIZE {
            return Err(InvalidSettings::TooManyRows { rows: self.rows });
        }
        if self.columns > MAX_BOARD_SIZE as usize {
            return Err(InvalidSettings::TooManyColumns {
                columns: self.columns,
            });
        }
        if self.max_height() > MAX_BOARD_SIZE {
            return Err(InvalidSettings::MaxHeightTooLarge {
                max_height: self.max_height(),
            });
        }
        Ok(())
    }
}
