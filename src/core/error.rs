use thiserror::Error;

use super::Card;

/// This is the core error type for the cards, decks and hands.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Hash, Clone, PartialEq, Eq)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card already added to hand {0}")]
    DuplicateCard(Card),
    #[error("A hole hand is exactly two cards, got {0}")]
    InvalidHoleSize(usize),
    #[error("Holdem hands should never have more than 7 cards in them.")]
    HoldemHandSize,
    #[error("The deck has no cards left to deal")]
    EmptyDeck,
    #[error("A full deck has 52 cards, got {0}")]
    IncompleteDeck(usize),
}
