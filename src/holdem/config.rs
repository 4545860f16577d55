use std::time::Duration;

use super::{Chips, GameError, blind_level};

/// Stack every player gets at the start of a new game.
pub const DEFAULT_STARTING_STACK: Chips = 2_000;
/// How long an agent gets to decide before the default action is taken.
pub const DEFAULT_TURN_TIMEOUT_MS: u64 = 30_000;

/// How the chips of a pot tier that doesn't split evenly are handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RemainderPolicy {
    /// Every winner gets the floor of the split. The leftover chips go
    /// one at a time to the winners in seat order starting left of the
    /// dealer. No chips are created or lost.
    #[default]
    OddChipsLeftOfDealer,
    /// Every winner gets the ceiling of the split. This can pay out a
    /// few chips more than the tier held.
    CeilEach,
}

/// Settings for a table. Everything has a default, so a config file only
/// needs the fields it wants to change.
///
/// ```
/// use holdem_play::holdem::TableConfig;
///
/// let config = TableConfig::default();
/// assert_eq!(2_000, config.starting_stack);
/// assert_eq!(25, config.blinds().unwrap().small);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    pub starting_stack: Chips,
    pub blinds_level: usize,
    pub remainder_policy: RemainderPolicy,
    /// Seat that deals the first play. Picked at random when unset.
    pub first_dealer: Option<usize>,
    pub turn_timeout_ms: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_stack: DEFAULT_STARTING_STACK,
            blinds_level: 0,
            remainder_policy: RemainderPolicy::default(),
            first_dealer: None,
            turn_timeout_ms: DEFAULT_TURN_TIMEOUT_MS,
        }
    }
}

impl TableConfig {
    pub fn blinds(&self) -> Result<super::BlindLevel, GameError> {
        blind_level(self.blinds_level)
    }

    pub fn turn_timeout(&self) -> Duration {
        Duration::from_millis(self.turn_timeout_ms)
    }

    /// Check that the config describes a playable table.
    pub fn validate(&self) -> Result<(), GameError> {
        let blinds = self.blinds()?;
        if self.starting_stack == 0 || self.starting_stack < blinds.big {
            return Err(GameError::InvalidStartingStack(self.starting_stack));
        }
        Ok(())
    }

    /// Parse a config from JSON, filling in defaults for missing fields.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
