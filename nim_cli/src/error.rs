#[derive(Debug, PartialEq, Eq)]
/// Error type for one line of console input.
pub enum CommandError {
    Empty,
    UnknownCommand { command: String },
    InvalidColumn { text: String },
    ColumnOutOfRange { column: usize, column_count: usize },
}

impl std::error::Error for CommandError {}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Empty => write!(f, "Type a command, or 'h' for help"),
            CommandError::UnknownCommand { command } => {
                write!(f, "Unknown command '{}', type 'h' for help", command)
            }
            CommandError::InvalidColumn { text } => {
                write!(f, "'{}' is not a column number", text)
            }
            CommandError::ColumnOutOfRange {
                column,
                column_count,
            } => write!(
                f,
                "There is no column {}, columns are numbered 1 to {}",
                column, column_count
            ),
        }
    }
}
