use thiserror::Error;

use crate::holdem::GameError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("A simulation needs agents to play")]
    NeedPlayers,
    #[error("Got {agents} agents for {names} player names")]
    AgentCountMismatch { agents: usize, names: usize },
    #[error("The agent in seat {0} stopped responding")]
    AgentDisconnected(usize),
    #[error(transparent)]
    Game(#[from] GameError),
}
