//! A single play of No-Limit Texas Hold'em, from blinds to settlement.
//!
//! A play is a chain of immutable [`State`] snapshots. [`Game`] creates the
//! first one and every action turns the current snapshot into the next:
//!
//! ```
//! use holdem_play::holdem::{Game, LegalAction, TableConfig};
//!
//! let mut game = Game::new(vec!["ana", "bo", "cy"], TableConfig::default()).unwrap();
//! let mut state = game.initial_state(None).unwrap();
//! while !state.is_final() {
//!     let action = match state.actions()[0] {
//!         LegalAction::Check => LegalAction::Check.action(),
//!         _ => LegalAction::Call.action(),
//!     };
//!     state = state.result(action, None).unwrap();
//! }
//! assert!(!state.winners().empty());
//! ```

/// Chip counts. Stacks, bets and pots are never negative.
pub type Chips = u32;

/// Seats and the circular walk around them.
mod player;
pub use self::player::{MAX_PLAYERS, MIN_PLAYERS, Player, Seating};

/// The static blind schedule.
mod blinds;
pub use self::blinds::{BLINDS_TABLE, BlindLevel, blind_level};

/// Table settings.
mod config;
pub use self::config::{
    DEFAULT_STARTING_STACK, DEFAULT_TURN_TIMEOUT_MS, RemainderPolicy, TableConfig,
};

/// Actions, decisions and transitions.
mod action;
pub use self::action::{Action, Decision, LegalAction, Transition};

/// The snapshot type and its read only views.
mod state;
pub use self::state::{Round, State};

/// Starting plays and moving from one state to the next.
mod game;
pub use self::game::{Game, actions, is_final, is_initial, result};

/// Finding the best hands at showdown.
mod showdown;
pub use self::showdown::get_winners;

/// Side pots and payouts.
mod settlement;

mod errors;
pub use self::errors::GameError;
