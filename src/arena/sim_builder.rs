use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::holdem::{Game, TableConfig};

use super::agent::FoldingAgent;
use super::errors::SimulationError;
use super::{Agent, TableSimulation};

fn build_agents(num_agents: usize) -> Vec<Box<dyn Agent>> {
    (0..num_agents)
        .map(|_| -> Box<dyn Agent> { Box::<FoldingAgent>::default() })
        .collect()
}

/// # TableSimulationBuilder
///
/// `RngTableSimulationBuilder` sets up a `TableSimulation`. Agents or player
/// names are required, everything else is optional.
///
/// `TableSimulationBuilder` is a type alias for
/// `RngTableSimulationBuilder<StdRng>`, which is what most callers want.
///
/// ## Setters
///
/// Each setter stores the value and hands the builder back.
///
/// Given only names, every seat gets a folding agent. Not an interesting
/// game, but a valid one. Given only agents, seats are named `player-N`.
/// Without an rng the game is seeded from the operating system.
///
/// ## Examples
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use holdem_play::arena::agent::{CallingAgent, RandomAgent};
/// use holdem_play::arena::{Agent, TableSimulationBuilder};
///
/// let agents: Vec<Box<dyn Agent>> = vec![
///     Box::<CallingAgent>::default(),
///     Box::new(RandomAgent::seeded(1)),
/// ];
/// let mut sim = TableSimulationBuilder::default()
///     .agents(agents)
///     .seed(420)
///     .max_plays(5)
///     .build()
///     .unwrap();
/// let state = sim.run().await.unwrap();
/// assert!(state.is_final());
/// # }
/// ```
pub struct RngTableSimulationBuilder<R: Rng> {
    names: Option<Vec<String>>,
    agents: Option<Vec<Box<dyn Agent>>>,
    config: TableConfig,
    rng: Option<R>,
    max_plays: Option<usize>,
}

impl<R: Rng + SeedableRng> RngTableSimulationBuilder<R> {
    /// Set the agents, one per seat in seating order.
    pub fn agents(mut self, agents: Vec<Box<dyn Agent>>) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rng(mut self, rng: R) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn seed(self, seed: u64) -> Self {
        self.rng(R::seed_from_u64(seed))
    }

    /// Stop `run` after this many plays even if nobody has won yet.
    pub fn max_plays(mut self, max_plays: usize) -> Self {
        self.max_plays = Some(max_plays);
        self
    }

    /// Fill in whatever wasn't set and start the agent workers.
    pub fn build(self) -> Result<TableSimulation<R>, SimulationError> {
        let (names, agents) = match (self.names, self.agents) {
            (None, None) => return Err(SimulationError::NeedPlayers),
            (Some(names), None) => {
                let agents = build_agents(names.len());
                (names, agents)
            }
            (None, Some(agents)) => {
                let names = (0..agents.len()).map(|i| format!("player-{i}")).collect();
                (names, agents)
            }
            (Some(names), Some(agents)) => (names, agents),
        };
        if agents.is_empty() {
            return Err(SimulationError::NeedPlayers);
        }
        if names.len() != agents.len() {
            return Err(SimulationError::AgentCountMismatch {
                agents: agents.len(),
                names: names.len(),
            });
        }

        let rng = self.rng.unwrap_or_else(R::from_os_rng);
        let game = Game::with_rng(names, self.config, rng)?;
        Ok(TableSimulation::new(game, agents, self.max_plays))
    }
}

impl<R: Rng> Default for RngTableSimulationBuilder<R> {
    fn default() -> Self {
        Self {
            names: None,
            agents: None,
            config: TableConfig::default(),
            rng: None,
            max_plays: None,
        }
    }
}

pub type TableSimulationBuilder = RngTableSimulationBuilder<StdRng>;

#[cfg(test)]
mod tests {
    use crate::holdem::GameError;

    use super::*;

    #[test]
    fn test_needs_players() {
        assert_eq!(
            Some(SimulationError::NeedPlayers),
            TableSimulationBuilder::default().build().err()
        );
        assert_eq!(
            Some(SimulationError::NeedPlayers),
            TableSimulationBuilder::default().agents(vec![]).build().err()
        );
    }

    #[test]
    fn test_count_mismatch() {
        let err = TableSimulationBuilder::default()
            .names(vec!["a", "b", "c"])
            .agents(build_agents(2))
            .build()
            .err();
        assert_eq!(
            Some(SimulationError::AgentCountMismatch {
                agents: 2,
                names: 3
            }),
            err
        );
    }

    #[test]
    fn test_too_many_players() {
        let err = TableSimulationBuilder::default()
            .agents(build_agents(9))
            .build()
            .err();
        assert_eq!(
            Some(SimulationError::Game(GameError::InvalidPlayerCount(9))),
            err
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_names_only_plays_folding_agents() {
        let mut sim = TableSimulationBuilder::default()
            .names(vec!["ana", "bo", "cy"])
            .seed(1)
            .build()
            .unwrap();
        assert_eq!("bo", sim.game().seating().player(1).unwrap().name);

        let state = sim.play_once().await.unwrap();
        // Everyone folds to the big blind.
        assert_eq!(
            vec![state.big_blind_player()],
            state.winners().ones().collect::<Vec<_>>()
        );
        assert_eq!(6000, (0..3).map(|s| state.chips(s)).sum::<u32>());
    }
}
