mod command;
mod error;
mod game;
mod settings;
pub use command::*;
pub use error::*;
pub use game::*;
pub use settings::*;

pub struct Config {
    pub rng: rand::rngs::StdRng,
    pub settings: nim::BoardSettings,
    /// Indexed by [`nim::Player::index()`].
    pub player_names: [String; 2],
    /// Whether the second player is the computer.
    pub computer: bool,
    pub timing: nim::Timing,
}
