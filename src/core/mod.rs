//! This is the core module. It exports the non-holdem
//! related code: cards, decks, hands and hand ranking.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Errors from parsing and dealing.
mod error;
pub use self::error::PokerError;

/// Code related to cards in hands.
mod hand;
/// Everything in there should be public.
pub use self::hand::*;

/// Deck is the normal 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::{BOARD_SIZE, DECK_SIZE, Deck};

/// Best five card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{BestHand, HandComparison, HandRank, Rankable, evaluate};

/// Small set of seat indexes.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, PlayerBitSet};
