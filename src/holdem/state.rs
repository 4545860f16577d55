use crate::core::{Card, Deck, Hole, PlayerBitSet};

use super::{Chips, Player, RemainderPolicy, Seating};

/// The betting rounds of a play, plus the terminal `End` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Round {
    PreFlop,
    Flop,
    Turn,
    River,
    End,
}

impl Round {
    pub fn advance(&self) -> Self {
        match *self {
            Round::PreFlop => Round::Flop,
            Round::Flop => Round::Turn,
            Round::Turn => Round::River,
            Round::River => Round::End,
            Round::End => Round::End,
        }
    }
}

/// One immutable snapshot of a play, taken at a decision point.
///
/// Nothing here is ever changed in place once handed out. Every action
/// produces a brand new `State`, so keeping an old one around for undo,
/// history or "what if" exploration is just a clone. The only thing shared
/// between snapshots is the starting seat order.
///
/// Per seat values are stored in vectors indexed by seat. Seats that left
/// the game keep their slot with zeroes in it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub(crate) id: u64,
    pub(crate) seating: Seating,
    pub(crate) deck: Deck,
    pub(crate) round: Round,
    pub(crate) current_player: Option<usize>,
    /// Stacks as they were before the blinds went in.
    pub(crate) starting_chips: Vec<Chips>,
    pub(crate) round_bets: Vec<Chips>,
    pub(crate) total_bets: Vec<Chips>,
    pub(crate) holes: Vec<Option<Hole>>,
    pub(crate) community: Vec<Card>,
    pub(crate) folded: PlayerBitSet,
    /// Last seat to act this round when nobody raises.
    pub(crate) round_last_player: usize,
    /// Seat that opened or last raised this round.
    pub(crate) round_last_better: Option<usize>,
    pub(crate) min_raise: Chips,
    pub(crate) dealer: usize,
    pub(crate) small_blind_player: usize,
    pub(crate) big_blind_player: usize,
    pub(crate) blinds_level: usize,
    pub(crate) big_blind: Chips,
    pub(crate) remainder_policy: RemainderPolicy,
    pub(crate) is_initial: bool,
    pub(crate) is_final: bool,
    pub(crate) winners: PlayerBitSet,
    pub(crate) winnings: Vec<Chips>,
}

impl State {
    /// Grows by one with every transition, across plays too.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    /// Every player that sat down at the start of the game.
    pub fn players(&self) -> &[Player] {
        self.seating.starting()
    }

    /// The players still holding chips.
    pub fn active_players(&self) -> Vec<&Player> {
        self.players()
            .iter()
            .filter(|p| self.seating.is_active(p.seat))
            .collect()
    }

    pub fn round(&self) -> Round {
        self.round
    }

    /// The remaining, undealt cards.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Chips the seat still has behind.
    pub fn chips(&self, seat: usize) -> Chips {
        let starting = self.starting_chips.get(seat).copied().unwrap_or_default();
        starting - self.total_bet(seat)
    }

    pub fn starting_chips(&self, seat: usize) -> Chips {
        self.starting_chips.get(seat).copied().unwrap_or_default()
    }

    /// Chips put in during the current round.
    pub fn round_bet(&self, seat: usize) -> Chips {
        self.round_bets.get(seat).copied().unwrap_or_default()
    }

    /// Chips put in during the whole play.
    pub fn total_bet(&self, seat: usize) -> Chips {
        self.total_bets.get(seat).copied().unwrap_or_default()
    }

    pub fn hole(&self, seat: usize) -> Option<&Hole> {
        self.holes.get(seat).and_then(Option::as_ref)
    }

    pub fn community(&self) -> &[Card] {
        &self.community
    }

    pub fn folded(&self) -> PlayerBitSet {
        self.folded
    }

    pub fn dealer(&self) -> usize {
        self.dealer
    }

    pub fn small_blind_player(&self) -> usize {
        self.small_blind_player
    }

    pub fn big_blind_player(&self) -> usize {
        self.big_blind_player
    }

    pub fn blinds_level(&self) -> usize {
        self.blinds_level
    }

    /// The seat that has to act next. `None` once the play is settled.
    pub fn current_player(&self) -> Option<usize> {
        self.current_player
    }

    /// Smallest legal raise increment right now.
    pub fn min_raise(&self) -> Chips {
        self.min_raise
    }

    /// Everything bet so far this play.
    pub fn pot(&self) -> Chips {
        self.total_bets.iter().sum()
    }

    /// The bet everyone has to match this round.
    pub fn highest_bet(&self) -> Chips {
        self.round_bets.iter().copied().max().unwrap_or_default()
    }

    /// Filled in at settlement.
    pub fn winners(&self) -> PlayerBitSet {
        self.winners
    }

    /// Chips awarded to the seat at settlement.
    pub fn winnings(&self, seat: usize) -> Chips {
        self.winnings.get(seat).copied().unwrap_or_default()
    }

    pub fn is_initial(&self) -> bool {
        self.is_initial
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// The play is over and fewer than two players have chips, so no
    /// further play can start.
    pub fn is_endgame(&self) -> bool {
        self.is_final && self.seating.num_active() < 2
    }

    /// In the play, not folded, and with chips left to bet.
    pub(crate) fn can_act(&self, seat: usize) -> bool {
        self.seating.is_active(seat) && !self.folded.get(seat) && self.chips(seat) > 0
    }

    /// Seats dealt into the play that haven't folded.
    pub(crate) fn contenders(&self) -> impl Iterator<Item = usize> + '_ {
        self.seating
            .active_seats()
            .filter(|seat| !self.folded.get(*seat))
    }

    /// Move chips from the seat's stack into the pot.
    pub(crate) fn put_in(&mut self, seat: usize, amount: Chips) {
        self.round_bets[seat] += amount;
        self.total_bets[seat] += amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_advance() {
        assert_eq!(Round::Flop, Round::PreFlop.advance());
        assert_eq!(Round::End, Round::River.advance());
        assert_eq!(Round::End, Round::End.advance());
        assert!(Round::PreFlop < Round::End);
    }
}
