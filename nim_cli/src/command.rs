use nim::Action;

use crate::error::CommandError;

pub const HELP: &str = "\
Commands:
  <column>, r <column>  take one token from a column (numbered from 1)
  n                     end your turn
  reset                 start over
  h                     show this help
  q                     quit";

/// One line of console input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Play(Action),
    Help,
    Quit,
}

/// Parses a line of input. Column numbers are 1-based on the console.
pub fn parse_command(line: &str, column_count: usize) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err(CommandError::Empty);
    };
    let command = match first.to_ascii_lowercase().as_str() {
        "n" | "next" => Command::Play(Action::Next),
        "reset" => Command::Play(Action::Reset),
        "h" | "help" | "?" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        "r" | "remove" => {
            let text = words.next().unwrap_or_default();
            Command::Play(Action::Remove {
                column: parse_column(text, column_count)?,
            })
        }
        _ if first.starts_with(|c: char| c.is_ascii_digit()) => Command::Play(Action::Remove {
            column: parse_column(first, column_count)?,
        }),
        _ => {
            return Err(CommandError::UnknownCommand {
                command: String::from(first),
            })
        }
    };
    Ok(command)
}

fn parse_column(text: &str, column_count: usize) -> Result<usize, CommandError> {
    let column: usize = text.parse().map_err(|_| CommandError::InvalidColumn {
        text: String::from(text),
    })?;
    if column == 0 || column > column_count {
        return Err(CommandError::ColumnOutOfRange {
            column,
            column_count,
        });
    }
    Ok(column - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_one_based() {
        assert_eq!(
            parse_command("2", 3),
            Ok(Command::Play(Action::Remove { column: 1 }))
        );
        assert_eq!(
            parse_command("  r 3 ", 3),
            Ok(Command::Play(Action::Remove { column: 2 }))
        );
    }

    #[test]
    fn words() {
        assert_eq!(parse_command("N", 3), Ok(Command::Play(Action::Next)));
        assert_eq!(parse_command("reset", 3), Ok(Command::Play(Action::Reset)));
        assert_eq!(parse_command("q", 3), Ok(Command::Quit));
        assert_eq!(parse_command("help", 3), Ok(Command::Help));
    }

    #[test]
    fn bad_input() {
        assert_eq!(parse_command("", 3), Err(CommandError::Empty));
        assert_eq!(
            parse_command("4", 3),
            Err(CommandError::ColumnOutOfRange {
                column: 4,
                column_count: 3
            })
        );
        assert_eq!(
            parse_command("0", 3).unwrap_err().to_string(),
            "There is no column 0, columns are numbered 1 to 3"
        );
        assert_eq!(
            parse_command("r x", 3),
            Err(CommandError::InvalidColumn {
                text: String::from("x")
            })
        );
        assert_eq!(
            parse_command("take", 3),
            Err(CommandError::UnknownCommand {
                command: String::from("take")
            })
        );
    }
}
