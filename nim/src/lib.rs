pub use actions::*;
pub use errors::*;
pub use sequencer::*;
pub use session::*;
pub use solver::*;
pub use state::*;
pub use transition::*;
pub use visualization::*;

mod actions;
#[cfg(test)]
mod arbitrary;
mod errors;
mod sequencer;
mod session;
mod solver;
mod state;
mod transition;
mod visualization;
