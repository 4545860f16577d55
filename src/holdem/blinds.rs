use std::time::Duration;

use super::{Chips, GameError};

/// One row of the blind schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlindLevel {
    pub small: Chips,
    pub big: Chips,
    /// How long the level lasts. Only informational for the engine, moving
    /// between levels is up to whoever runs the table.
    pub duration: Duration,
}

const fn level(small: Chips, big: Chips, minutes: u64) -> BlindLevel {
    BlindLevel {
        small,
        big,
        duration: Duration::from_secs(minutes * 60),
    }
}

/// The static blind schedule, indexed by blind level.
pub const BLINDS_TABLE: [BlindLevel; 7] = [
    level(25, 50, 15),
    level(50, 100, 30),
    level(75, 150, 45),
    level(100, 200, 60),
    level(200, 400, 75),
    level(400, 800, 90),
    level(800, 1600, 105),
];

/// Look up a blind level.
///
/// ```
/// use holdem_play::holdem::blind_level;
///
/// assert_eq!(50, blind_level(0).unwrap().big);
/// assert!(blind_level(7).is_err());
/// ```
pub fn blind_level(level: usize) -> Result<BlindLevel, GameError> {
    BLINDS_TABLE
        .get(level)
        .copied()
        .ok_or(GameError::InvalidBlindLevel(level))
}
