use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::holdem::{Action, Decision, LegalAction, State};

use super::Agent;

/// Picks uniformly among the legal actions. A bet or raise gets a uniform
/// amount from its legal range.
#[derive(Debug, Clone)]
pub struct RandomAgent<R = StdRng> {
    rng: R,
}

impl RandomAgent<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomAgent<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomAgent<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> Agent for RandomAgent<R> {
    fn act(&mut self, state: &State, legal: &[LegalAction]) -> Decision {
        match legal.choose(&mut self.rng) {
            Some(LegalAction::BetOrRaise { min, max }) => {
                let amount = self.rng.random_range(*min..=*max);
                Decision::new(state, Action::BetOrRaise, Some(amount))
            }
            Some(other) => Decision::new(state, other.action(), None),
            // Only asked to act with at least one option, fold keeps it safe.
            None => Decision::new(state, Action::Fold, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::holdem::{Game, TableConfig};

    use super::*;

    #[test]
    fn test_always_legal() {
        let mut game = Game::with_rng(
            vec!["a", "b", "c", "d", "e"],
            TableConfig::default(),
            StdRng::seed_from_u64(3),
        )
        .unwrap();
        let mut agent = RandomAgent::seeded(11);

        for _ in 0..50 {
            let mut state = game.initial_state(None).unwrap();
            while !state.is_final() {
                let legal = state.actions();
                let decision = agent.act(&state, &legal);
                assert_eq!(state.id(), decision.state_id);
                assert!(legal.iter().any(|l| l.action() == decision.action));
                if let (Some(amount), Some(LegalAction::BetOrRaise { min, max })) = (
                    decision.amount,
                    legal.iter().find(|l| l.action() == Action::BetOrRaise),
                ) {
                    assert!((*min..=*max).contains(&amount));
                }
                state = state.apply(decision.into()).unwrap();
            }
        }
    }
}
