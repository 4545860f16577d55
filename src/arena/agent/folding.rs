use crate::holdem::{Action, Decision, LegalAction, State};

use super::Agent;

/// A simple agent that folds whenever checking isn't free.
#[derive(Default, Debug, Clone, Copy)]
pub struct FoldingAgent {}

impl Agent for FoldingAgent {
    fn act(&mut self, state: &State, legal: &[LegalAction]) -> Decision {
        let action = if legal.contains(&LegalAction::Check) {
            Action::Check
        } else {
            Action::Fold
        };
        Decision::new(state, action, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{Agent, TableSimulationBuilder};
    use crate::holdem::TableConfig;

    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_folding_agents() {
        let config = TableConfig {
            first_dealer: Some(0),
            ..Default::default()
        };
        let mut sim = TableSimulationBuilder::default()
            .seed(420)
            .config(config)
            .agents(vec![
                Box::<FoldingAgent>::default() as Box<dyn Agent>,
                Box::<FoldingAgent>::default(),
            ])
            .build()
            .unwrap();

        let state = sim.play_once().await.unwrap();

        // Heads up the dealer posts the big blind, so the small blind in
        // seat 1 folds it to them.
        assert!(state.is_final());
        assert!(state.folded().get(1));
        assert_eq!(vec![0], state.winners().ones().collect::<Vec<_>>());
        assert_eq!(75, state.winnings(0));
        assert_eq!(2025, state.chips(0));
        assert_eq!(1975, state.chips(1));
    }
}
