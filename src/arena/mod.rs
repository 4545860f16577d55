//! This is the arena module for playing whole games between agents.
//!
//! # Single Table Example
//!
//! The tools allow explicit control over the simulation all the way down
//! to the rng and the turn timeout.
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! use holdem_play::arena::agent::{CallingAgent, FoldingAgent, RandomAgent};
//! use holdem_play::arena::{Agent, TableSimulationBuilder};
//! use holdem_play::holdem::TableConfig;
//!
//! let agents: Vec<Box<dyn Agent>> = vec![
//!     Box::<CallingAgent>::default(),
//!     Box::<FoldingAgent>::default(),
//!     Box::new(RandomAgent::seeded(7)),
//! ];
//! let config = TableConfig {
//!     turn_timeout_ms: 500,
//!     ..Default::default()
//! };
//!
//! let mut sim = TableSimulationBuilder::default()
//!     .agents(agents)
//!     .config(config)
//!     .seed(420)
//!     .max_plays(10)
//!     .build()
//!     .unwrap();
//!
//! let last = sim.run().await.unwrap();
//! assert!(last.is_final());
//! # }
//! ```
pub mod agent;
pub mod errors;
mod sim_builder;
mod simulation;

pub use agent::Agent;
pub use errors::SimulationError;
pub use sim_builder::{RngTableSimulationBuilder, TableSimulationBuilder};
pub use simulation::TableSimulation;
