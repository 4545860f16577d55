use crate::holdem::{Action, Decision, LegalAction, State};

use super::Agent;

/// Never folds and never raises. Checks when it can, calls otherwise.
#[derive(Default, Debug, Clone, Copy)]
pub struct CallingAgent {}

impl Agent for CallingAgent {
    fn act(&mut self, state: &State, legal: &[LegalAction]) -> Decision {
        let action = if legal.contains(&LegalAction::Check) {
            Action::Check
        } else {
            Action::Call
        };
        Decision::new(state, action, None)
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{Agent, TableSimulationBuilder};

    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_call_agents() {
        let agents: Vec<Box<dyn Agent>> = (0..4)
            .map(|_| Box::<CallingAgent>::default() as Box<dyn Agent>)
            .collect();
        let mut sim = TableSimulationBuilder::default()
            .seed(420)
            .agents(agents)
            .build()
            .unwrap();

        let state = sim.play_once().await.unwrap();

        assert!(state.is_final());
        // Everyone calls the big blind and checks down, so the pot is 200.
        let won: u32 = (0..4).map(|s| state.winnings(s)).sum();
        assert_eq!(200, won);
        assert_eq!(8000, (0..4).map(|s| state.chips(s)).sum::<u32>());
        assert!(state.folded().empty());
    }
}
