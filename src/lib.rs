//! # holdem_play
//!
//! One play of No-Limit Texas Hold'em for 2 to 8 players: shuffling and
//! dealing, blinds, four betting rounds, showdown hand evaluation and side
//! pot settlement.
//!
//! A play is driven through immutable snapshots. The caller asks a
//! [`holdem::State`] for the legal actions, picks one, and gets a new
//! `State` back; the old one stays valid. This makes history, undo and
//! "what if" exploration a matter of keeping old states around.
//!
//! ```
//! use holdem_play::holdem::{Action, Game, LegalAction, TableConfig};
//!
//! let mut game = Game::new(vec!["ana", "bo", "cy"], TableConfig::default()).unwrap();
//! let state = game.initial_state(None).unwrap();
//!
//! // The first player faces the big blind.
//! assert!(state.actions().contains(&LegalAction::Call));
//! let next = state.result(Action::Call, None).unwrap();
//! assert_eq!(state.pot() + 50, next.pot());
//! ```
//!
//! The [`arena`] module plays whole games between agents on a tokio
//! runtime, each in their own task with a per turn timeout.

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;
/// Allow all the holdem specific code to be used externally.
pub mod holdem;
/// Agents and the table simulation that runs them.
pub mod arena;
