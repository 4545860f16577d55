use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{Level, event, instrument};

use crate::core::{BOARD_SIZE, Deck, PlayerBitSet};

use super::settlement::settle;
use super::{
    Action, Chips, GameError, LegalAction, Round, Seating, State, TableConfig, Transition,
};

/// A game at one table: the seating, the settings and the random source
/// that shuffles and picks the first dealer.
///
/// `Game` only starts plays. Everything after that is a pure function of
/// the `State` it returns.
///
/// ```
/// use holdem_play::holdem::{Action, Game, TableConfig};
///
/// let mut game = Game::new(vec!["ana", "bo"], TableConfig::default()).unwrap();
/// let mut state = game.initial_state(None).unwrap();
/// while !state.is_final() {
///     state = state.result(Action::Fold, None).unwrap();
/// }
/// assert_eq!(4_000, state.players().iter().map(|p| state.chips(p.seat)).sum::<u32>());
/// ```
#[derive(Debug, Clone)]
pub struct Game<R: Rng = StdRng> {
    seating: Seating,
    config: TableConfig,
    rng: R,
}

impl Game<StdRng> {
    /// Start a game seeded from the operating system.
    pub fn new<S: Into<String>>(names: Vec<S>, config: TableConfig) -> Result<Self, GameError> {
        Self::with_rng(names, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng<S: Into<String>>(
        names: Vec<S>,
        config: TableConfig,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let seating = Seating::new(names)?;
        if let Some(dealer) = config.first_dealer {
            seating.player(dealer)?;
        }
        Ok(Self {
            seating,
            config,
            rng,
        })
    }

    pub fn seating(&self) -> &Seating {
        &self.seating
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Start a play with a freshly shuffled deck.
    ///
    /// Without a prior state this is the first play of the game and
    /// everyone gets the starting stack. Otherwise `prior` has to be the
    /// final state of the last play: its stacks carry over, its busted
    /// players stay out and the dealer button moves one seat.
    pub fn initial_state(&mut self, prior: Option<&State>) -> Result<State, GameError> {
        let mut deck = Deck::new();
        deck.shuffle(&mut self.rng);
        self.initial_state_with_deck(prior, deck)
    }

    /// Start a play dealing from `deck` as given, top card first. The deck
    /// has to be complete, anything already dealt from it is an error.
    #[instrument(level = "trace", skip(self, prior, deck))]
    pub fn initial_state_with_deck(
        &mut self,
        prior: Option<&State>,
        deck: Deck,
    ) -> Result<State, GameError> {
        deck.check_full()?;
        let blinds = self.config.blinds()?;
        let num_seats = self.seating.num_starting();

        let (id, seating, dealer, starting_chips) = match prior {
            None => {
                let dealer = match self.config.first_dealer {
                    Some(seat) => seat,
                    None => self.rng.random_range(0..num_seats),
                };
                let stacks = vec![self.config.starting_stack; num_seats];
                (0, self.seating.clone(), dealer, stacks)
            }
            Some(prior) => {
                if !prior.is_final {
                    return Err(GameError::HandNotFinished);
                }
                let dealer = prior.seating.next_to(prior.dealer)?;
                (
                    prior.id + 1,
                    prior.seating.clone(),
                    dealer,
                    prior.starting_chips.clone(),
                )
            }
        };
        if seating.num_active() < 2 {
            return Err(GameError::InsufficientActivePlayers);
        }
        let small_blind_player = seating.next_to(dealer)?;
        let big_blind_player = seating.next_to(small_blind_player)?;

        let mut state = State {
            id,
            seating,
            deck,
            round: Round::PreFlop,
            current_player: None,
            starting_chips,
            round_bets: vec![0; num_seats],
            total_bets: vec![0; num_seats],
            holes: vec![None; num_seats],
            community: Vec::with_capacity(BOARD_SIZE),
            folded: PlayerBitSet::default(),
            round_last_player: big_blind_player,
            round_last_better: None,
            min_raise: blinds.big,
            dealer,
            small_blind_player,
            big_blind_player,
            blinds_level: self.config.blinds_level,
            big_blind: blinds.big,
            remainder_policy: self.config.remainder_policy,
            is_initial: true,
            is_final: false,
            winners: PlayerBitSet::default(),
            winnings: vec![0; num_seats],
        };

        let mut seat = small_blind_player;
        for _ in 0..state.seating.num_active() {
            state.holes[seat] = Some(state.deck.deal_hole()?);
            seat = state.seating.next_to(seat)?;
        }

        // A short stack posts what it has and is all in.
        let small = blinds.small.min(state.chips(small_blind_player));
        state.put_in(small_blind_player, small);
        let big = blinds.big.min(state.chips(big_blind_player));
        state.put_in(big_blind_player, big);

        event!(
            Level::DEBUG,
            id,
            dealer,
            small_blind_player,
            big_blind_player,
            small,
            big,
            "play started"
        );

        if state.betting_is_moot() {
            return state.run_out();
        }
        state.current_player = state.next_eligible(big_blind_player);
        Ok(state)
    }
}

/// The legal actions for the player to act. See [`State::actions`].
pub fn actions(state: &State) -> Vec<LegalAction> {
    state.actions()
}

/// Apply an action to a state. See [`State::result`].
pub fn result(state: &State, action: Action, amount: Option<Chips>) -> Result<State, GameError> {
    state.result(action, amount)
}

pub fn is_initial(state: &State) -> bool {
    state.is_initial()
}

pub fn is_final(state: &State) -> bool {
    state.is_final()
}

impl State {
    /// The actions the current player may take.
    ///
    /// Check when the player has matched the highest bet, otherwise fold
    /// or call. A call for more than the stack is allowed and puts the
    /// player all in. A bet or raise is offered whenever the stack covers
    /// more than the call, and going all in is always a legal size even
    /// below the minimum raise.
    pub fn actions(&self) -> Vec<LegalAction> {
        let Some(seat) = self.current_player.filter(|_| !self.is_final) else {
            return Vec::new();
        };
        let to_call = self.highest_bet().saturating_sub(self.round_bet(seat));
        let chips = self.chips(seat);

        let mut legal = if to_call == 0 {
            vec![LegalAction::Check]
        } else {
            vec![LegalAction::Fold, LegalAction::Call]
        };
        if chips > to_call {
            let max = chips - to_call;
            legal.push(LegalAction::BetOrRaise {
                min: self.min_raise.min(max),
                max,
            });
        }
        legal
    }

    /// Apply `action` for the current player and return the next state.
    ///
    /// `amount` is only read for a bet or raise, where it's the chips put
    /// in on top of the call. A rejected action leaves `self` as it was.
    pub fn result(&self, action: Action, amount: Option<Chips>) -> Result<State, GameError> {
        if self.is_final {
            return Err(GameError::HandOver);
        }
        let seat = self.current_player.ok_or(GameError::HandOver)?;
        let legal = self
            .actions()
            .into_iter()
            .find(|l| l.action() == action)
            .ok_or(GameError::IllegalAction(action))?;
        let raise = match legal {
            LegalAction::BetOrRaise { min, max } => {
                let amount = amount.ok_or(GameError::MissingBetAmount)?;
                if amount < min || amount > max {
                    return Err(GameError::OutOfRangeBet { amount, min, max });
                }
                Some(amount)
            }
            _ => None,
        };

        let mut next = self.clone();
        next.id += 1;
        next.is_initial = false;
        match action {
            Action::Fold => next.folded.enable(seat),
            Action::Check => {}
            Action::Call | Action::BetOrRaise => {
                let to_call = self.highest_bet().saturating_sub(self.round_bet(seat));
                next.put_in(seat, to_call.min(self.chips(seat)));
                if let Some(raise) = raise {
                    next.put_in(seat, raise);
                    next.round_last_better = Some(seat);
                    next.min_raise = raise;
                }
            }
        }
        event!(
            Level::DEBUG,
            seat,
            %action,
            amount = ?raise,
            round = ?self.round,
            "action applied"
        );

        next.pass_turn(seat)
    }

    /// Apply a transition, refusing one that was meant for another state.
    pub fn apply(&self, transition: Transition) -> Result<State, GameError> {
        if transition.state_id() != self.id {
            return Err(GameError::StaleDecision {
                expected: self.id,
                got: transition.state_id(),
            });
        }
        match transition {
            Transition::Act(decision) => self.result(decision.action, decision.amount),
            Transition::TurnExpired { .. } => {
                let action = self.timeout_action();
                event!(Level::DEBUG, seat = ?self.current_player, %action, "turn expired");
                self.result(action, None)
            }
        }
    }

    /// What the current player does when they run out of time.
    pub fn timeout_action(&self) -> Action {
        if self.actions().contains(&LegalAction::Check) {
            Action::Check
        } else {
            Action::Fold
        }
    }

    /// Find who acts after `acting` or close the round.
    fn pass_turn(mut self, acting: usize) -> Result<State, GameError> {
        let num_seats = self.seating.num_starting();
        let mut skipped = PlayerBitSet::default();
        let mut landing = None;
        for step in 1..num_seats {
            let seat = (acting + step) % num_seats;
            if self.can_act(seat) {
                landing = Some(seat);
                break;
            }
            skipped.enable(seat);
        }
        // A seat that can no longer act is passed over, which counts the
        // same as action reaching it.
        let reached = |seat: usize| landing == Some(seat) || skipped.get(seat);

        let everyone_checked_or_called = self.round_last_better.is_none()
            && (acting == self.round_last_player || skipped.get(self.round_last_player));
        let raise_answered = self
            .round_last_better
            .is_some_and(|better| better != acting && reached(better));
        let one_left = self.contenders().count() <= 1;

        if !(everyone_checked_or_called || raise_answered || one_left || landing.is_none()) {
            self.current_player = landing;
            return Ok(self);
        }

        if one_left || self.betting_is_moot() {
            return self.run_out();
        }
        self.next_round()
    }

    fn next_round(mut self) -> Result<State, GameError> {
        self.round = self.round.advance();
        if self.round == Round::End {
            return settle(self);
        }
        self.deck.deal_community(&mut self.community)?;
        self.round_bets.iter_mut().for_each(|b| *b = 0);
        self.min_raise = self.big_blind;
        self.round_last_better = None;

        let (Some(first), Some(last)) = (
            self.next_eligible(self.dealer),
            self.last_eligible_from(self.dealer),
        ) else {
            return self.run_out();
        };
        self.current_player = Some(first);
        self.round_last_player = last;

        event!(
            Level::DEBUG,
            round = ?self.round,
            community = ?self.community,
            first,
            last,
            "round advanced"
        );
        Ok(self)
    }

    /// No more betting can happen. Deal the rest of the board and settle.
    fn run_out(mut self) -> Result<State, GameError> {
        event!(
            Level::DEBUG,
            round = ?self.round,
            contenders = self.contenders().count(),
            "betting closed, dealing out the board"
        );
        while self.community.len() < BOARD_SIZE {
            self.deck.deal_community(&mut self.community)?;
        }
        settle(self)
    }

    /// At most one contender can still bet and they have nothing to call.
    fn betting_is_moot(&self) -> bool {
        let mut eligible = self.seating.active_seats().filter(|&s| self.can_act(s));
        match (eligible.next(), eligible.next()) {
            (None, _) => true,
            (Some(seat), None) => self.round_bet(seat) >= self.highest_bet(),
            _ => false,
        }
    }

    /// First seat after `seat` that can act, coming back around to `seat`
    /// itself last.
    fn next_eligible(&self, seat: usize) -> Option<usize> {
        let num_seats = self.seating.num_starting();
        (1..=num_seats)
            .map(|step| (seat + step) % num_seats)
            .find(|&s| self.can_act(s))
    }

    /// `seat` when it can act, otherwise the closest seat before it that can.
    fn last_eligible_from(&self, seat: usize) -> Option<usize> {
        let num_seats = self.seating.num_starting();
        (0..num_seats)
            .map(|step| (seat + num_seats - step) % num_seats)
            .find(|&s| self.can_act(s))
    }
}
