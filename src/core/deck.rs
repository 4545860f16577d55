use std::collections::{HashSet, VecDeque};
use std::collections::vec_deque::Iter;

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Card, Hole, PokerError, Suit, Value};

/// The most community cards a board ever holds.
pub const BOARD_SIZE: usize = 5;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Ordered deck of cards that is consumed front to back.
///
/// A fresh deck holds all 52 cards sorted by value then suit. Cards that
/// are dealt leave the deck, so the deck and every dealt card always
/// partition the full 52 card set.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    /// Card storage. The front is the top of the deck.
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create the default 52 card deck in sorted order.
    ///
    /// ```
    /// use holdem_play::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let cards = Value::values()
            .into_iter()
            .flat_map(|value| Suit::suits().into_iter().map(move |suit| Card { value, suit }))
            .collect();
        Self { cards }
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }
    /// How many cards are there in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    /// Have all of the cards been dealt from this deck?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    /// Iterate from the top of the deck down.
    pub fn iter(&self) -> Iter<'_, Card> {
        self.cards.iter()
    }

    /// Check that nothing has been dealt from this deck: it holds each of
    /// the 52 cards exactly once.
    pub fn check_full(&self) -> Result<(), PokerError> {
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in &self.cards {
            if !seen.insert(*card) {
                return Err(PokerError::DuplicateCard(*card));
            }
        }
        if self.cards.len() != DECK_SIZE {
            return Err(PokerError::IncompleteDeck(self.cards.len()));
        }
        Ok(())
    }

    /// Uniformly shuffle the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.make_contiguous().shuffle(rng);
    }

    /// Deal the top card if there is one there to deal.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Deal the two cards of a starting hand.
    pub fn deal_hole(&mut self) -> Result<Hole, PokerError> {
        let first = self.deal().ok_or(PokerError::EmptyDeck)?;
        let second = self.deal().ok_or(PokerError::EmptyDeck)?;
        Ok(Hole::new(first, second))
    }

    /// Deal the next street onto the board: three cards for the flop when
    /// the board is empty, one card otherwise. A full board is left alone.
    pub fn deal_community(&mut self, board: &mut Vec<Card>) -> Result<(), PokerError> {
        let num_cards = match board.len() {
            0 => 3,
            n if n < BOARD_SIZE => 1,
            _ => 0,
        };
        for _ in 0..num_cards {
            board.push(self.deal().ok_or(PokerError::EmptyDeck)?);
        }
        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// A deck stacked in exactly this order, top card first. Used to replay a
/// play deterministically, so it has to be a complete deck.
///
/// ```
/// use holdem_play::core::{Card, Deck, PokerError};
///
/// let mut cards: Vec<Card> = Deck::new().into_iter().collect();
/// cards.reverse();
/// let deck = Deck::try_from(cards).unwrap();
/// assert_eq!("As", deck.iter().next().unwrap().to_string());
///
/// assert_eq!(Err(PokerError::IncompleteDeck(0)), Deck::try_from(vec![]));
/// ```
impl TryFrom<Vec<Card>> for Deck {
    type Error = PokerError;

    fn try_from(value: Vec<Card>) -> Result<Self, Self::Error> {
        let deck = Self {
            cards: value.into(),
        };
        deck.check_full()?;
        Ok(deck)
    }
}

/// Turn a deck into an iterator
impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::collections::vec_deque::IntoIter<Card>;
    /// Consume this deck and create a new iterator.
    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_contains_all() {
        let d = Deck::new();
        let unique: HashSet<Card> = d.iter().copied().collect();
        assert_eq!(52, unique.len());
        assert!(d.contains(&Card::new(Value::Eight, Suit::Heart)));
    }

    #[test]
    fn test_sorted_order() {
        let d = Deck::new();
        let cards: Vec<Card> = d.iter().copied().collect();
        assert_eq!(Card::new(Value::Two, Suit::Club), cards[0]);
        assert_eq!(Card::new(Value::Two, Suit::Diamond), cards[1]);
        assert_eq!(Card::new(Value::Ace, Suit::Spade), cards[51]);
        assert!(cards.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_deal_front_to_back() {
        let mut d = Deck::new();
        let c = d.deal().unwrap();
        assert_eq!(Card::new(Value::Two, Suit::Club), c);
        assert!(!d.contains(&c));
        assert_eq!(51, d.len());
    }

    #[test]
    fn test_shuffle_rng() {
        let mut one = Deck::new();
        let mut two = Deck::new();

        let mut rng_one = StdRng::seed_from_u64(420);
        let mut rng_two = StdRng::seed_from_u64(420);

        one.shuffle(&mut rng_one);
        two.shuffle(&mut rng_two);

        assert_eq!(one, two);
        assert_ne!(Deck::new(), one);
        assert_eq!(52, one.len());
    }

    #[test]
    fn test_deal_community_streets() {
        let mut d = Deck::new();
        let mut board = vec![];

        d.deal_community(&mut board).unwrap();
        assert_eq!(3, board.len());
        d.deal_community(&mut board).unwrap();
        assert_eq!(4, board.len());
        d.deal_community(&mut board).unwrap();
        assert_eq!(5, board.len());
        d.deal_community(&mut board).unwrap();
        assert_eq!(5, board.len());
        assert_eq!(47, d.len());
    }

    #[test]
    fn test_empty_deck() {
        let mut d = Deck::new();
        for _ in 0..51 {
            d.deal().unwrap();
        }
        assert_eq!(Err(PokerError::EmptyDeck), d.deal_hole());
        assert!(d.is_empty());
    }

    #[test]
    fn test_stacked_deck_keeps_order() {
        let mut cards: Vec<Card> = Deck::new().into_iter().collect();
        cards.swap(0, 51);
        let mut d = Deck::try_from(cards).unwrap();
        assert_eq!(Some(Card::new(Value::Ace, Suit::Spade)), d.deal());
    }

    #[test]
    fn test_stacked_deck_rejects_duplicates() {
        let mut cards: Vec<Card> = Deck::new().into_iter().collect();
        cards[1] = cards[0];
        assert_eq!(
            Err(PokerError::DuplicateCard(Card::new(Value::Two, Suit::Club))),
            Deck::try_from(cards)
        );
    }

    #[test]
    fn test_stacked_deck_rejects_short_deck() {
        let cards: Vec<Card> = Deck::new().into_iter().take(20).collect();
        assert_eq!(Err(PokerError::IncompleteDeck(20)), Deck::try_from(cards));

        let mut dealt = Deck::new();
        dealt.deal();
        assert_eq!(Err(PokerError::IncompleteDeck(51)), dealt.check_full());
    }
}
