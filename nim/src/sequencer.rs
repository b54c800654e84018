//! The computer's turn, played out step by step.
//!
//! Before committing to its move, the computer sweeps the cursor back and
//! forth across the board, pauses on the chosen column, and then takes the
//! tokens one at a time. Every step is an ordinary [`Action`] sent to a
//! [`Dispatch`] sink, so observers see the same transitions as for a human.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{best_move, Action, GameState, Move};

/// Receives actions and applies them.
pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

/// Records actions instead of applying them.
impl Dispatch for Vec<Action> {
    fn dispatch(&mut self, action: Action) {
        self.push(action);
    }
}

/// Suspends the turn between two steps.
pub trait Pause {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Delays between the steps of the computer's turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    /// After each cursor position of the sweep.
    pub sweep: Duration,
    /// After the cursor lands on the chosen column.
    pub dwell: Duration,
    /// After each removed token.
    pub removal: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            sweep: Duration::from_millis(50),
            dwell: Duration::from_millis(1500),
            removal: Duration::from_millis(600),
        }
    }
}

impl Timing {
    pub fn instant() -> Self {
        Self {
            sweep: Duration::ZERO,
            dwell: Duration::ZERO,
            removal: Duration::ZERO,
        }
    }
}

/// One action of the script, and how long to wait after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub action: Action,
    pub pause: Duration,
}

/// The cursor position at a given step of the sweep.
///
/// The cursor runs from the first column to the last and back, over and over.
fn sweep_cursor(step: usize, column_count: usize) -> usize {
    let cursor = step % (2 * column_count);
    if cursor >= column_count {
        2 * column_count - cursor - 1
    } else {
        cursor
    }
}

/// Plans the computer's turn for the given state.
///
/// The script is empty if the game is already over.
pub fn computer_turn_script(state: &GameState, timing: &Timing) -> Vec<Step> {
    if state.game_over {
        return Vec::new();
    }
    let Some(Move { column, take }) = best_move(&state.columns) else {
        return Vec::new();
    };
    debug!(column, take, "Computer chose its move");

    let column_count = state.columns.len();
    let mut script = vec![
        Step {
            action: Action::Next,
            pause: Duration::ZERO,
        },
        Step {
            action: Action::MarkComputerTurn,
            pause: Duration::ZERO,
        },
    ];
    script.extend((0..2 * column_count + column).map(|step| Step {
        action: Action::Highlight {
            column: sweep_cursor(step, column_count),
        },
        pause: timing.sweep,
    }));
    script.push(Step {
        action: Action::Highlight { column },
        pause: timing.dwell,
    });
    script.extend((0..take).map(|_| Step {
        action: Action::Remove { column },
        pause: timing.removal,
    }));
    script.push(Step {
        action: Action::Next,
        pause: Duration::ZERO,
    });
    script
}

/// Plays the computer's turn.
///
/// `state` is the state at the moment the human ended their turn. The human's
/// `Next` is part of the script, so it must not be dispatched separately.
///
/// The sink is borrowed for the whole turn, so no other action can be
/// interleaved with the script.
pub fn run_computer_turn<D, P>(state: &GameState, sink: &mut D, pause: &mut P, timing: &Timing)
where
    D: Dispatch + ?Sized,
    P: Pause + ?Sized,
{
    for Step {
        action,
        pause: duration,
    } in computer_turn_script(state, timing)
    {
        trace!(?action, "Computer dispatches");
        sink.dispatch(action);
        if !duration.is_zero() {
            pause.pause(duration);
        }
    }
}
