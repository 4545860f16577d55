use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::PokerError;

/// Card rank or value.
/// The discriminant is the face value - 2, so `Ace` is the highest.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value. Anything past the ace
    /// is `None`.
    pub fn from_u8(v: u8) -> Option<Value> {
        VALUES.get(usize::from(v)).copied()
    }

    /// Get all of the `Value`'s that are possible, lowest first.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// The poker rank of this value, `2..=14` with the ace high.
    ///
    /// ```
    /// use holdem_play::core::Value;
    ///
    /// assert_eq!(14, Value::Ace.rank());
    /// assert_eq!(2, Value::Two.rank());
    /// ```
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }
}

/// Enum for the four different suits.
/// The ordering only exists to give the deck a stable order. It never
/// decides hand strength.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            'h' => Some(Suit::Heart),
            's' => Some(Suit::Spade),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Cards order by value first and suit second. That order is for
/// sorting a deck; use `compare_by_rank` for poker strength.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Compare two cards the way a showdown does: the suit doesn't count.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use holdem_play::core::{Card, Suit, Value};
    ///
    /// let a = Card::new(Value::King, Suit::Club);
    /// let b = Card::new(Value::King, Suit::Spade);
    /// assert_eq!(Ordering::Equal, a.compare_by_rank(&b));
    /// ```
    pub fn compare_by_rank(&self, other: &Card) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = PokerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let value = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .map(Value::from_char)?
            .ok_or(PokerError::UnexpectedValueChar)?;
        let suit = chars
            .next()
            .ok_or(PokerError::TooFewChars)
            .map(Suit::from_char)?
            .ok_or(PokerError::UnexpectedSuitChar)?;
        if chars.next().is_some() {
            return Err(PokerError::UnparsedCharsRemaining);
        }
        Ok(Card { value, suit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_constructor() {
        let c = Card {
            value: Value::Three,
            suit: Suit::Spade,
        };
        assert_eq!(Suit::Spade, c.suit);
        assert_eq!(Value::Three, c.value);
    }

    #[test]
    fn test_compare() {
        let c1 = Card::new(Value::Three, Suit::Spade);
        let c2 = Card::new(Value::Four, Suit::Club);
        let c3 = Card::new(Value::Four, Suit::Spade);

        assert!(c1 == c1);
        // Value is the primary key
        assert!(c1 < c2);
        assert!(c2 > c1);
        // Suit breaks ties for deck ordering
        assert!(c3 > c2);
        // But never for strength
        assert_eq!(Ordering::Equal, c2.compare_by_rank(&c3));
        assert_eq!(Ordering::Less, c1.compare_by_rank(&c3));
    }

    #[test]
    fn test_value_cmp() {
        assert!(Value::Two < Value::Ace);
        assert!(Value::King < Value::Ace);
        assert_eq!(Value::Two, Value::Two);
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(Some(Value::Two), Value::from_u8(0));
        assert_eq!(Some(Value::Ace), Value::from_u8(12));
        assert_eq!(None, Value::from_u8(13));
    }

    #[test]
    fn test_rank() {
        for (i, v) in Value::values().iter().enumerate() {
            assert_eq!(i as u8 + 2, v.rank());
        }
    }

    #[test]
    fn test_parse_and_display() {
        let c: Card = "Td".parse().unwrap();
        assert_eq!(Card::new(Value::Ten, Suit::Diamond), c);
        assert_eq!("Td", c.to_string());

        assert_eq!(Err(PokerError::UnexpectedValueChar), "1d".parse::<Card>());
        assert_eq!(Err(PokerError::UnexpectedSuitChar), "Tx".parse::<Card>());
        assert_eq!(Err(PokerError::TooFewChars), "T".parse::<Card>());
        assert_eq!(Err(PokerError::UnparsedCharsRemaining), "Tdd".parse::<Card>());
    }

    #[test]
    fn test_size() {
        // Card should be really small. Hopefully just two u8's
        assert!(mem::size_of::<Card>() <= 4);
    }
}
