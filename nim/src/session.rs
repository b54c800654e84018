use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::{
    random_columns, transition, Action, BoardSettings, Dispatch, GameState, InvalidSettings,
    ResetPolicy,
};

/// A running game.
///
/// This is the single place where the current state is replaced. Human input
/// goes through [`Self::play()`], the computer's turn goes through the
/// [`Dispatch`] impl.
pub struct Session {
    state: GameState,
    /// The state the session started with, for [`Action::Reset`].
    original: GameState,
    /// Deals fresh boards on reset. Without one, reset restores `original`.
    dealer: Option<Dealer>,
}

/// Deals a random board of the original size for [`ResetPolicy::Reshuffle`].
struct Dealer {
    rows: u32,
    max_height: u32,
    rng: StdRng,
}

impl Dealer {
    fn deal(&mut self, column_count: usize) -> GameState {
        let columns = random_columns(&mut self.rng, column_count, self.max_height);
        info!(?columns, "Dealing a new board");
        GameState::with_rows(self.rows, columns)
    }
}

impl Session {
    /// Starts a session from a known state. Resetting returns to it.
    pub fn new(state: GameState) -> Self {
        Self {
            original: state.clone(),
            state,
            dealer: None,
        }
    }

    pub fn from_settings(
        settings: &BoardSettings,
        mut rng: StdRng,
    ) -> Result<Self, InvalidSettings> {
        let state = GameState::from_settings(settings, &mut rng)?;
        info!(columns = ?state.columns, "Starting a new game");
        let dealer = match settings.reset_policy {
            ResetPolicy::RestoreOriginal => None,
            ResetPolicy::Reshuffle => Some(Dealer {
                rows: settings.rows,
                max_height: settings.max_height(),
                rng,
            }),
        };
        Ok(Self {
            original: state.clone(),
            state,
            dealer,
        })
    }

    /// The current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The snapshot the session started with.
    pub fn original(&self) -> &GameState {
        &self.original
    }

    /// Applies an action requested by a human.
    ///
    /// Nothing is accepted while the computer is playing its turn. A game the
    /// computer has just won can still be reset. Returns whether the state
    /// changed.
    pub fn play(&mut self, action: Action) -> bool {
        if self.state.computer_move && !self.state.game_over {
            debug!(?action, "Ignoring input during the computer's turn");
            return false;
        }
        let before = self.state.clone();
        self.apply(action);
        self.state != before
    }

    fn apply(&mut self, action: Action) {
        self.state = match action {
            Action::Reset => self.reset(),
            _ => transition(&self.state, &action),
        };
    }

    fn reset(&mut self) -> GameState {
        match &mut self.dealer {
            Some(dealer) => dealer.deal(self.original.columns.len()),
            None => self.original.clone(),
        }
    }
}

impl Dispatch for Session {
    fn dispatch(&mut self, action: Action) {
        self.apply(action);
    }
}
