use std::sync::Arc;

use crate::core::PlayerBitSet;

use super::{Chips, GameError};

/// The most players that can sit at a table.
pub const MAX_PLAYERS: usize = 8;
/// The fewest players needed to start a game.
pub const MIN_PLAYERS: usize = 2;

/// A player sitting at the table. Identity only: stacks and bets live in
/// the `State` keyed by seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub seat: usize,
}

/// Fixed seating order for a whole game plus the seats that still have
/// chips.
///
/// The starting order is shared between every snapshot; only the active
/// set is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seating {
    starting: Arc<[Player]>,
    active: PlayerBitSet,
}

impl Seating {
    /// Seat the players in the order given. Everyone starts active.
    ///
    /// ```
    /// use holdem_play::holdem::Seating;
    ///
    /// let seating = Seating::new(vec!["ana", "bo", "cy"]).unwrap();
    /// assert_eq!(1, seating.next_to(0).unwrap());
    /// assert_eq!(0, seating.next_to(2).unwrap());
    /// ```
    pub fn new<S: Into<String>>(names: Vec<S>) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }
        let starting: Arc<[Player]> = names
            .into_iter()
            .enumerate()
            .map(|(seat, name)| Player {
                name: name.into(),
                seat,
            })
            .collect();
        let active = PlayerBitSet::new(starting.len());
        Ok(Self { starting, active })
    }

    pub fn starting(&self) -> &[Player] {
        &self.starting
    }

    pub fn player(&self, seat: usize) -> Result<&Player, GameError> {
        self.starting.get(seat).ok_or(GameError::UnknownPlayer(seat))
    }

    pub fn active(&self) -> PlayerBitSet {
        self.active
    }

    /// Active seats in seating order.
    pub fn active_seats(&self) -> impl Iterator<Item = usize> + '_ {
        self.active.ones()
    }

    pub fn is_active(&self, seat: usize) -> bool {
        self.active.get(seat)
    }

    pub fn num_starting(&self) -> usize {
        self.starting.len()
    }

    pub fn num_active(&self) -> usize {
        self.active.count()
    }

    /// Take every seat whose stack is empty out of the game.
    pub fn remove_losers(&mut self, chips: &[Chips]) {
        for seat in self.active.ones() {
            if chips.get(seat).copied().unwrap_or_default() == 0 {
                self.active.disable(seat);
            }
        }
    }

    /// The next active seat after `seat`, going around the table.
    ///
    /// `seat` itself doesn't have to be active, which is how the dealer
    /// button moves past a player that just lost.
    pub fn next_to(&self, seat: usize) -> Result<usize, GameError> {
        self.walk(seat, |s| (s + 1) % self.num_starting())
    }

    /// The first active seat before `seat`, going around the table.
    pub fn previous_than(&self, seat: usize) -> Result<usize, GameError> {
        let n = self.num_starting();
        self.walk(seat, |s| (s + n - 1) % n)
    }

    /// `seat` when it's active, otherwise the next active seat.
    pub fn first_active_from(&self, seat: usize) -> Result<usize, GameError> {
        self.player(seat)?;
        if self.is_active(seat) {
            Ok(seat)
        } else {
            self.next_to(seat)
        }
    }

    /// `seat` when it's active, otherwise the previous active seat.
    pub fn first_active_from_backwards(&self, seat: usize) -> Result<usize, GameError> {
        self.player(seat)?;
        if self.is_active(seat) {
            Ok(seat)
        } else {
            self.previous_than(seat)
        }
    }

    fn walk(&self, seat: usize, step: impl Fn(usize) -> usize) -> Result<usize, GameError> {
        self.player(seat)?;
        if self.num_active() < MIN_PLAYERS {
            return Err(GameError::InsufficientActivePlayers);
        }
        let mut idx = seat;
        for _ in 1..self.num_starting() {
            idx = step(idx);
            if self.is_active(idx) {
                return Ok(idx);
            }
        }
        // Only reachable when `seat` is the sole active seat, which the
        // count check above rules out.
        Err(GameError::InsufficientActivePlayers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seating(n: usize) -> Seating {
        Seating::new((0..n).map(|i| format!("p{i}")).collect()).unwrap()
    }

    #[test]
    fn test_player_count() {
        assert_eq!(
            Err(GameError::InvalidPlayerCount(1)),
            Seating::new(vec!["solo"])
        );
        assert_eq!(
            Err(GameError::InvalidPlayerCount(9)),
            Seating::new((0..9).map(|i| i.to_string()).collect())
        );
        assert_eq!(8, seating(8).num_active());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let s = seating(4);
        assert_eq!(Ok(1), s.next_to(0));
        assert_eq!(Ok(0), s.next_to(3));
        assert_eq!(Ok(3), s.previous_than(0));
        assert_eq!(Ok(2), s.previous_than(3));
    }

    #[test]
    fn test_skips_inactive() {
        let mut s = seating(5);
        s.remove_losers(&[100, 0, 0, 100, 100]);
        assert_eq!(3, s.num_active());
        assert_eq!(Ok(3), s.next_to(0));
        assert_eq!(Ok(0), s.previous_than(3));
        // An eliminated seat can still be asked about.
        assert_eq!(Ok(3), s.next_to(1));
        assert_eq!(Ok(0), s.previous_than(2));
        assert_eq!(Ok(3), s.first_active_from(2));
        assert_eq!(Ok(0), s.first_active_from_backwards(2));
        assert_eq!(Ok(4), s.first_active_from(4));
    }

    #[test]
    fn test_round_robin() {
        let mut s = seating(6);
        s.remove_losers(&[10, 0, 10, 10, 0, 10]);
        for seat in s.active_seats() {
            assert_eq!(Ok(seat), s.next_to(s.previous_than(seat).unwrap()));
            assert_eq!(Ok(seat), s.previous_than(s.next_to(seat).unwrap()));
        }
    }

    #[test]
    fn test_errors() {
        let mut s = seating(3);
        assert_eq!(Err(GameError::UnknownPlayer(3)), s.next_to(3));

        s.remove_losers(&[10, 0, 0]);
        assert_eq!(Err(GameError::InsufficientActivePlayers), s.next_to(0));
        assert_eq!(Err(GameError::InsufficientActivePlayers), s.previous_than(1));
    }

    #[test]
    fn test_snapshots_share_seating_order() {
        let s = seating(3);
        let mut copy = s.clone();
        copy.remove_losers(&[0, 10, 10]);
        assert!(s.is_active(0));
        assert!(!copy.is_active(0));
        assert!(Arc::ptr_eq(&s.starting, &copy.starting));
    }
}
