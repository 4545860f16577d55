use std::fmt;

use super::{Chips, State};

/// What a player can choose to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Action {
    Fold,
    Call,
    Check,
    BetOrRaise,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Fold => "fold",
            Action::Call => "call",
            Action::Check => "check",
            Action::BetOrRaise => "bet",
        };
        f.write_str(name)
    }
}

/// An action that is legal for the current player, along with the bet
/// range when it's a bet or raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LegalAction {
    Fold,
    Call,
    Check,
    /// Chips put in on top of the call, `min..=max`.
    BetOrRaise { min: Chips, max: Chips },
}

impl LegalAction {
    pub fn action(&self) -> Action {
        match self {
            LegalAction::Fold => Action::Fold,
            LegalAction::Call => Action::Call,
            LegalAction::Check => Action::Check,
            LegalAction::BetOrRaise { .. } => Action::BetOrRaise,
        }
    }
}

/// An action chosen for one specific state. The state id lets the table
/// reject a decision that was made before the state moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision {
    pub state_id: u64,
    pub action: Action,
    pub amount: Option<Chips>,
}

impl Decision {
    pub fn new(state: &State, action: Action, amount: Option<Chips>) -> Self {
        Self {
            state_id: state.id(),
            action,
            amount,
        }
    }
}

/// Something that moves the table from one state to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Transition {
    /// The current player decided.
    Act(Decision),
    /// The current player ran out of time. They check when they can and
    /// fold otherwise.
    TurnExpired { state_id: u64 },
}

impl Transition {
    pub fn state_id(&self) -> u64 {
        match self {
            Transition::Act(decision) => decision.state_id,
            Transition::TurnExpired { state_id } => *state_id,
        }
    }
}

impl From<Decision> for Transition {
    fn from(value: Decision) -> Self {
        Transition::Act(value)
    }
}
