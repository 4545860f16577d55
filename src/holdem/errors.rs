use thiserror::Error;

use crate::core::PokerError;

use super::{Action, Chips};

/// Everything that can go wrong while driving a play. Every variant is
/// local to the offending call: the `State` it was called on is left
/// untouched and can be used again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A table needs between 2 and 8 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("Seat {0} is not part of the starting players")]
    UnknownPlayer(usize),
    #[error("At least two players need chips to continue")]
    InsufficientActivePlayers,
    #[error("{0} is not a legal action right now")]
    IllegalAction(Action),
    #[error("Bet of {amount} is outside the legal range {min}..={max}")]
    OutOfRangeBet { amount: Chips, min: Chips, max: Chips },
    #[error("A bet or raise needs an amount")]
    MissingBetAmount,
    #[error("The play is over, no more actions are accepted")]
    HandOver,
    #[error("The previous play hasn't been settled yet")]
    HandNotFinished,
    #[error("Decision was made for state {got} but the table is at state {expected}")]
    StaleDecision { expected: u64, got: u64 },
    #[error("A starting stack of {0} can't cover the big blind")]
    InvalidStartingStack(Chips),
    #[error("There is no blind level {0}")]
    InvalidBlindLevel(usize),
    #[error("Dealing failed: {0}")]
    Deck(#[from] PokerError),
}
