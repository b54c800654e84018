use crate::MAX_BOARD_SIZE;

/// The error type for [`parse_board()`](crate::parse_board).
#[derive(Debug, PartialEq, Eq)]
pub enum BoardParseError {
    Empty,
    InvalidToken { token_idx: usize, token: String },
    ColumnTooTall { token_idx: usize, height: u32 },
    TooManyColumns { column_count: usize },
}

impl std::error::Error for BoardParseError {}

impl std::fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardParseError::Empty => write!(f, "The board does not contain any columns"),
            BoardParseError::InvalidToken { token_idx, token } => write!(
                f,
                "Column {} of the board is '{}', which is not a non-negative integer",
                token_idx + 1,
                token
            ),
            BoardParseError::ColumnTooTall { token_idx, height } => write!(
                f,
                "Column {} of the board has {} tokens, at most {} are allowed",
                token_idx + 1,
                height,
                MAX_BOARD_SIZE
            ),
            BoardParseError::TooManyColumns { column_count } => write!(
                f,
                "The board has {} columns, at most {} are allowed",
                column_count, MAX_BOARD_SIZE
            ),
        }
    }
}

/// The error type for [`BoardSettings::validate()`](crate::BoardSettings::validate).
#[derive(Debug, PartialEq, Eq)]
pub enum InvalidSettings {
    ZeroRows,
    ZeroColumns,
    ZeroMaxHeight,
    TooManyRows { rows: u32 },
    TooManyColumns { columns: usize },
    MaxHeightTooLarge { max_height: u32 },
}

impl std::error::Error for InvalidSettings {}

impl std::fmt::Display for InvalidSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidSettings::ZeroRows => write!(f, "The board needs at least one row"),
            InvalidSettings::ZeroColumns => write!(f, "The board needs at least one column"),
            InvalidSettings::ZeroMaxHeight => {
                write!(f, "The maximum column height must be at least one")
            }
            InvalidSettings::TooManyRows { rows } => {
                write!(f, "{} rows requested, at most {} are allowed", rows, MAX_BOARD_SIZE)
            }
            InvalidSettings::TooManyColumns { columns } => write!(
                f,
                "{} columns requested, at most {} are allowed",
                columns, MAX_BOARD_SIZE
            ),
            InvalidSettings::MaxHeightTooLarge { max_height } => write!(
                f,
                "A maximum column height of {} was requested, at most {} is allowed",
                max_height, MAX_BOARD_SIZE
            ),
        }
    }
}
