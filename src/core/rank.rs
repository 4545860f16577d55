use std::cmp::Ordering;
use std::fmt;

use super::{Card, Hole, PokerError, Suit, Value};

/// All the different possible hand ranks, weakest first so that the
/// derived ordering matches hand strength.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandRank {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two diffent pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all fo the same suit.
    StraightFlush,
}

/// Hand ranks in the order they are checked: strongest first.
const RANKS_BY_PRIORITY: [HandRank; 9] = [
    HandRank::StraightFlush,
    HandRank::FourOfAKind,
    HandRank::FullHouse,
    HandRank::Flush,
    HandRank::Straight,
    HandRank::ThreeOfAKind,
    HandRank::TwoPair,
    HandRank::OnePair,
    HandRank::HighCard,
];

impl HandRank {
    /// Every rank, strongest first.
    pub fn by_priority() -> [HandRank; 9] {
        RANKS_BY_PRIORITY
    }

    /// Look for this rank in `cards`, which must be sorted strongest
    /// first. Returns the best five cards for the rank ordered most
    /// significant card first: grouped cards before kickers.
    pub fn check(self, cards: &[Card]) -> Option<Vec<Card>> {
        match self {
            HandRank::StraightFlush => check_straight_flush(cards),
            HandRank::FourOfAKind => check_four_of_a_kind(cards),
            HandRank::FullHouse => check_full_house(cards),
            HandRank::Flush => check_flush(cards),
            HandRank::Straight => find_straight(cards),
            HandRank::ThreeOfAKind => check_three_of_a_kind(cards),
            HandRank::TwoPair => check_two_pair(cards),
            HandRank::OnePair => check_one_pair(cards),
            HandRank::HighCard => Some(cards.iter().take(5).copied().collect()),
        }
    }
}

/// The result of comparing one hand against another.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandComparison {
    Lose,
    Draw,
    Win,
}

impl From<Ordering> for HandComparison {
    fn from(value: Ordering) -> Self {
        match value {
            Ordering::Less => HandComparison::Lose,
            Ordering::Equal => HandComparison::Draw,
            Ordering::Greater => HandComparison::Win,
        }
    }
}

/// The best five card hand that could be made from some cards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BestHand {
    rank: HandRank,
    /// Most significant first. Fewer than five only when fewer than five
    /// cards were available.
    cards: Vec<Card>,
}

impl BestHand {
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The cards that define the rank group: the top card, plus the
    /// pair of a full house or the low pair of two pair.
    pub fn high_cards(&self) -> Vec<Card> {
        let second = match self.rank {
            HandRank::FullHouse => self.cards.get(3),
            HandRank::TwoPair => self.cards.get(2),
            _ => None,
        };
        self.cards.first().into_iter().chain(second).copied().collect()
    }

    /// The cards left over once the rank group is taken out.
    pub fn kickers(&self) -> &[Card] {
        let grouped = match self.rank {
            HandRank::FourOfAKind | HandRank::TwoPair => 4,
            HandRank::ThreeOfAKind => 3,
            HandRank::OnePair => 2,
            HandRank::HighCard => 1,
            HandRank::StraightFlush
            | HandRank::FullHouse
            | HandRank::Flush
            | HandRank::Straight => self.cards.len(),
        };
        &self.cards[grouped.min(self.cards.len())..]
    }

    /// Compare two hands for a showdown. Suits never matter.
    ///
    /// ```
    /// use holdem_play::core::{HandComparison, Rankable, parse_cards};
    ///
    /// let aces = parse_cards("AsAd7c5h2s").unwrap().best_hand();
    /// let kings = parse_cards("KsKd7c5h2s").unwrap().best_hand();
    /// assert_eq!(HandComparison::Win, aces.compare_to(&kings));
    /// ```
    pub fn compare_to(&self, other: &BestHand) -> HandComparison {
        let ordering = self
            .rank
            .cmp(&other.rank)
            .then_with(|| compare_positionally(&self.high_cards(), &other.high_cards()))
            .then_with(|| {
                if self.rank == HandRank::Flush {
                    compare_positionally(&self.cards, &other.cards)
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| compare_positionally(self.kickers(), other.kickers()));
        ordering.into()
    }
}

impl fmt::Display for BestHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}(", self.rank)?;
        for c in &self.cards {
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

fn compare_positionally(ours: &[Card], theirs: &[Card]) -> Ordering {
    ours.iter()
        .zip(theirs)
        .map(|(a, b)| a.compare_by_rank(b))
        .find(|o| *o != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}

/// Can this turn into a best hand?
pub trait Rankable {
    /// Find the best hand available, checking ranks strongest first and
    /// taking the first one that matches.
    fn best_hand(&self) -> BestHand;
}

impl Rankable for [Card] {
    fn best_hand(&self) -> BestHand {
        let mut sorted = self.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));
        sorted.dedup();

        HandRank::by_priority()
            .into_iter()
            .find_map(|rank| rank.check(&sorted).map(|cards| BestHand { rank, cards }))
            .unwrap_or_else(|| BestHand {
                rank: HandRank::HighCard,
                cards: sorted.into_iter().take(5).collect(),
            })
    }
}

/// Evaluate a hole hand together with the community cards dealt so far.
pub fn evaluate(hole: &Hole, community: &[Card]) -> Result<BestHand, PokerError> {
    if community.len() > 5 {
        return Err(PokerError::HoldemHandSize);
    }
    let mut cards: Vec<Card> = hole.cards().to_vec();
    for c in community {
        if cards.contains(c) {
            return Err(PokerError::DuplicateCard(*c));
        }
        cards.push(*c);
    }
    Ok(cards.best_hand())
}

/// Split sorted cards into runs of equal value, highest value first.
fn groups(cards: &[Card]) -> Vec<&[Card]> {
    cards.chunk_by(|a, b| a.value == b.value).collect()
}

/// The highest `n` cards that aren't already part of `used`.
fn kickers(cards: &[Card], used: &[Card], n: usize) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !used.contains(c))
        .take(n)
        .copied()
        .collect()
}

fn find_straight(cards: &[Card]) -> Option<Vec<Card>> {
    let mut distinct: Vec<Card> = Vec::with_capacity(cards.len());
    for c in cards {
        if distinct.last().is_none_or(|last| last.value != c.value) {
            distinct.push(*c);
        }
    }

    // Values are strictly descending, so five of them are consecutive
    // exactly when the ends are four apart.
    if let Some(run) = distinct
        .windows(5)
        .find(|w| w[0].value.rank() == w[4].value.rank() + 4)
    {
        return Some(run.to_vec());
    }

    // The wheel: the ace plays below the two.
    let ace = distinct.first().filter(|c| c.value == Value::Ace)?;
    let mut wheel = [Value::Five, Value::Four, Value::Three, Value::Two]
        .iter()
        .map(|v| distinct.iter().find(|c| c.value == *v).copied())
        .collect::<Option<Vec<Card>>>()?;
    wheel.push(*ace);
    Some(wheel)
}

fn suited(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().filter(|c| c.suit == suit).copied().collect()
}

fn check_straight_flush(cards: &[Card]) -> Option<Vec<Card>> {
    Suit::suits()
        .into_iter()
        .filter_map(|suit| {
            let same_suit = suited(cards, suit);
            if same_suit.len() >= 5 {
                find_straight(&same_suit)
            } else {
                None
            }
        })
        .max_by(|a, b| a[0].compare_by_rank(&b[0]))
}

fn check_four_of_a_kind(cards: &[Card]) -> Option<Vec<Card>> {
    let quads = groups(cards).into_iter().find(|g| g.len() == 4)?;
    let mut hand = quads.to_vec();
    hand.extend(kickers(cards, quads, 1));
    Some(hand)
}

fn check_full_house(cards: &[Card]) -> Option<Vec<Card>> {
    let groups = groups(cards);
    let trips = groups.iter().find(|g| g.len() >= 3)?;
    // A second set of trips can fill in as the pair.
    let pair = groups
        .iter()
        .find(|g| g.len() >= 2 && g[0].value != trips[0].value)?;
    let mut hand = trips[..3].to_vec();
    hand.extend_from_slice(&pair[..2]);
    Some(hand)
}

fn check_flush(cards: &[Card]) -> Option<Vec<Card>> {
    Suit::suits()
        .into_iter()
        .map(|suit| suited(cards, suit))
        .filter(|same_suit| same_suit.len() >= 5)
        .map(|same_suit| same_suit[..5].to_vec())
        .max_by(|a, b| compare_positionally(a, b))
}

fn check_three_of_a_kind(cards: &[Card]) -> Option<Vec<Card>> {
    let trips = groups(cards).into_iter().find(|g| g.len() >= 3)?;
    let mut hand = trips[..3].to_vec();
    hand.extend(kickers(cards, &trips[..3], 2));
    Some(hand)
}

fn check_two_pair(cards: &[Card]) -> Option<Vec<Card>> {
    let mut pairs = groups(cards).into_iter().filter(|g| g.len() >= 2);
    let high = pairs.next()?;
    let low = pairs.next()?;
    let mut hand = high[..2].to_vec();
    hand.extend_from_slice(&low[..2]);
    let used = hand.clone();
    hand.extend(kickers(cards, &used, 1));
    Some(hand)
}

fn check_one_pair(cards: &[Card]) -> Option<Vec<Card>> {
    let pair = groups(cards).into_iter().find(|g| g.len() >= 2)?;
    let mut hand = pair[..2].to_vec();
    hand.extend(kickers(cards, &pair[..2], 3));
    Some(hand)
}
