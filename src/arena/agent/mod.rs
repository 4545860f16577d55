//! `Agent`s are the automatic players at a simulated table. Each one gets
//! its own worker task and decides on the blocking pool, so an agent is
//! free to take its time; the table moves on without it once the turn
//! timeout passes.
//!
//! Some basic agents are provided as baselines and for testing.
mod calling;
mod folding;
mod random;

use crate::holdem::{Decision, LegalAction, State};

/// Implement this to play at a `TableSimulation`.
///
/// `act` is only called when the agent's seat is the current player, with
/// the legal actions for that state. The returned `Decision` has to carry
/// the id of the state it was made for, `Decision::new` takes care of
/// that.
pub trait Agent: Send {
    fn act(&mut self, state: &State, legal: &[LegalAction]) -> Decision;
}

pub use calling::CallingAgent;
pub use folding::FoldingAgent;
pub use random::RandomAgent;
