use std::fmt;

use super::{Card, PokerError};

/// The two private cards dealt to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hole([Card; 2]);

impl Hole {
    pub fn new(first: Card, second: Card) -> Self {
        Self([first, second])
    }

    pub fn cards(&self) -> &[Card; 2] {
        &self.0
    }

    /// Parse a hole hand like `"AsKd"`.
    ///
    /// ```
    /// use holdem_play::core::Hole;
    ///
    /// let hole = Hole::new_from_str("AsKd").unwrap();
    /// assert_eq!("As", hole.cards()[0].to_string());
    /// ```
    pub fn new_from_str(hand_string: &str) -> Result<Self, PokerError> {
        match parse_cards(hand_string)?.as_slice() {
            [first, second] => Ok(Self::new(*first, *second)),
            other => Err(PokerError::InvalidHoleSize(other.len())),
        }
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

/// Parse a run of two character card codes. Whitespace between cards is
/// ignored, duplicated cards are rejected.
///
/// ```
/// use holdem_play::core::parse_cards;
///
/// let board = parse_cards("2h 3h 4h").unwrap();
/// assert_eq!(3, board.len());
/// assert!(parse_cards("2h2h").is_err());
/// ```
pub fn parse_cards(cards_string: &str) -> Result<Vec<Card>, PokerError> {
    let mut chars = cards_string.chars().filter(|c| !c.is_whitespace());
    let mut cards: Vec<Card> = Vec::new();

    // Keep looping until we explicitly break
    loop {
        let Some(vc) = chars.next() else {
            break;
        };
        let sc = chars.next().ok_or(PokerError::TooFewChars)?;
        let card: Card = [vc, sc].iter().collect::<String>().parse()?;
        if cards.contains(&card) {
            return Err(PokerError::DuplicateCard(card));
        }
        cards.push(card);
    }

    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_parse_hole() {
        let hole = Hole::new_from_str("Ac 2c").unwrap();
        assert_eq!(
            &[
                Card::new(Value::Ace, Suit::Club),
                Card::new(Value::Two, Suit::Club)
            ],
            hole.cards()
        );
        assert_eq!("Ac2c", hole.to_string());
    }

    #[test]
    fn test_parse_hole_wrong_size() {
        assert_eq!(
            Err(PokerError::InvalidHoleSize(3)),
            Hole::new_from_str("AcKcQc")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Err(PokerError::TooFewChars), parse_cards("AcK"));
        assert_eq!(
            Err(PokerError::DuplicateCard(Card::new(Value::Ace, Suit::Club))),
            parse_cards("AcAc")
        );
        assert_eq!(Ok(vec![]), parse_cards(""));
    }
}
