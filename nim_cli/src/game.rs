use std::io::{BufRead, Write};

use nim::{
    run_computer_turn, visualize_columns, Action, Dispatch, GameState, Session, ThreadSleep,
};
use tracing::{debug, info, warn};

use crate::command::{parse_command, Command, HELP};
use crate::Config;

/// Plays on the console until the input ends or the player quits.
///
/// Returns the final state. Returns an error only on I/O failure or invalid
/// settings, never for moves that are not allowed.
pub fn play_game<R: BufRead, W: Write>(
    config: Config,
    input: R,
    output: &mut W,
) -> anyhow::Result<GameState> {
    let Config {
        rng,
        settings,
        player_names,
        computer,
        timing,
    } = config;
    let mut session = Session::from_settings(&settings, rng)?;
    show_state(output, session.state(), &player_names)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line, session.state().columns.len()) {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Console input");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Play(Action::Next) if computer => {
                let state = session.state().clone();
                if state.game_over || state.computer_move || state.active_column.is_none() {
                    explain_rejection(output, &state)?;
                    continue;
                }
                info!(columns = ?state.columns, "Computer's turn");
                let mut animation = Animation {
                    session: &mut session,
                    output: &mut *output,
                    player_names: &player_names,
                    error: None,
                };
                run_computer_turn(&state, &mut animation, &mut ThreadSleep, &timing);
                if let Some(err) = animation.error {
                    return Err(err.into());
                }
            }
            Command::Play(action) => {
                if session.play(action) {
                    show_state(output, session.state(), &player_names)?;
                } else {
                    explain_rejection(output, session.state())?;
                }
            }
        }
    }
    Ok(session.state().clone())
}

fn show_state<W: Write>(
    output: &mut W,
    state: &GameState,
    player_names: &[String; 2],
) -> std::io::Result<()> {
    writeln!(output, "{}", visualize_columns(state))?;
    let name = &player_names[state.player.index()];
    if state.game_over {
        writeln!(output, "Game over! The winner is {}", name)
    } else {
        writeln!(output, "{} to move", name)
    }
}

fn explain_rejection<W: Write>(output: &mut W, state: &GameState) -> std::io::Result<()> {
    if state.game_over {
        writeln!(output, "The game is over, type 'reset' to play again")
    } else if state.computer_move {
        writeln!(output, "Wait for the computer to finish its turn")
    } else if state.active_column.is_none() {
        writeln!(output, "Take at least one token before ending your turn")
    } else {
        writeln!(output, "You can only take tokens from the highlighted column")
    }
}

/// Shows every step of the computer's turn as it is applied.
struct Animation<'a, W: Write> {
    session: &'a mut Session,
    output: &'a mut W,
    player_names: &'a [String; 2],
    /// The first failure to write, reported once the turn is over.
    error: Option<std::io::Error>,
}

impl<W: Write> Dispatch for Animation<'_, W> {
    fn dispatch(&mut self, action: Action) {
        self.session.dispatch(action);
        if self.error.is_some() {
            return;
        }
        let result = show_state(self.output, self.session.state(), self.player_names)
            .and_then(|()| self.output.flush());
        if let Err(err) = result {
            warn!(%err, "Could not show the computer's turn");
            self.error = Some(err);
        }
    }
}
