use std::time::Duration;

use rand::Rng;
use rand::rngs::StdRng;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task;
use tokio::time::{Instant, timeout_at};
use tracing::{Instrument, Level, event, trace_span};

use crate::holdem::{Decision, Game, GameError, LegalAction, State, Transition};

use super::Agent;
use super::errors::SimulationError;

/// What a seat's worker gets when it's their turn.
struct TurnRequest {
    state: State,
    legal: Vec<LegalAction>,
}

struct Reply {
    seat: usize,
    decision: Decision,
}

/// An agent waiting for its worker task to be started.
struct Idle {
    seat: usize,
    agent: Box<dyn Agent>,
    inbox: UnboundedReceiver<TurnRequest>,
}

/// Plays whole games of Hold'em between agents.
///
/// Every agent gets its own tokio task and is only asked to act when its
/// seat is the current player. Agents decide synchronously, so each
/// decision runs on the blocking pool. The table waits for the answer up
/// to the configured turn timeout. After that the player checks if they
/// can and folds otherwise, and whatever the agent sends later is dropped
/// because it names a state the table has moved past.
///
/// Worker tasks are started on the first play, so the simulation has to be
/// driven from inside a tokio runtime. The simulation is the only thing
/// that ever applies transitions, so the states themselves need no locking.
pub struct TableSimulation<R: Rng = StdRng> {
    game: Game<R>,
    seats: Vec<UnboundedSender<TurnRequest>>,
    idle: Vec<Idle>,
    replies: UnboundedReceiver<Reply>,
    reply_tx: Option<UnboundedSender<Reply>>,
    turn_timeout: Duration,
    max_plays: Option<usize>,
    state: Option<State>,
    plays: usize,
}

impl<R: Rng> TableSimulation<R> {
    pub(crate) fn new(game: Game<R>, agents: Vec<Box<dyn Agent>>, max_plays: Option<usize>) -> Self {
        let (reply_tx, replies) = unbounded_channel();
        let (seats, idle): (Vec<_>, Vec<_>) = agents
            .into_iter()
            .enumerate()
            .map(|(seat, agent)| {
                let (requests, inbox) = unbounded_channel();
                (requests, Idle { seat, agent, inbox })
            })
            .unzip();
        let turn_timeout = game.config().turn_timeout();
        Self {
            game,
            seats,
            idle,
            replies,
            reply_tx: Some(reply_tx),
            turn_timeout,
            max_plays,
            state: None,
            plays: 0,
        }
    }

    /// The final state of the last finished play.
    pub fn state(&self) -> Option<&State> {
        self.state.as_ref()
    }

    pub fn plays(&self) -> usize {
        self.plays
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    /// Play one play from the blinds to settlement, carrying the stacks of
    /// the previous play over.
    pub async fn play_once(&mut self) -> Result<State, SimulationError> {
        self.start_workers();
        let span = trace_span!("TableSimulation::play_once", play = self.plays);

        let state = async {
            let mut state = self.game.initial_state(self.state.as_ref())?;
            while !state.is_final() {
                state = self.step(&state).await?;
            }
            Ok::<_, SimulationError>(state)
        }
        .instrument(span)
        .await?;

        event!(
            Level::DEBUG,
            play = self.plays,
            winners = ?state.winners().ones().collect::<Vec<_>>(),
            "play finished"
        );
        self.plays += 1;
        self.state = Some(state.clone());
        Ok(state)
    }

    /// Keep playing until only one player has chips or the play limit is
    /// reached. Returns the last final state.
    pub async fn run(&mut self) -> Result<State, SimulationError> {
        loop {
            let state = self.play_once().await?;
            if state.is_endgame() || self.max_plays.is_some_and(|max| self.plays >= max) {
                event!(
                    Level::INFO,
                    plays = self.plays,
                    active = state.seating().num_active(),
                    "simulation finished"
                );
                return Ok(state);
            }
        }
    }

    /// Hand every idle agent to its worker task. The simulation keeps no
    /// reply sender of its own afterwards, so the reply channel closes once
    /// every worker is gone.
    fn start_workers(&mut self) {
        let Some(reply_tx) = self.reply_tx.take() else {
            return;
        };
        for idle in self.idle.drain(..) {
            tokio::spawn(run_agent(idle, reply_tx.clone()));
        }
    }

    async fn step(&mut self, state: &State) -> Result<State, SimulationError> {
        let seat = state.current_player().ok_or(GameError::HandOver)?;
        let legal = state.actions();
        self.seats[seat]
            .send(TurnRequest {
                state: state.clone(),
                legal,
            })
            .map_err(|_| SimulationError::AgentDisconnected(seat))?;

        let transition = self.await_decision(seat, state).await?;
        match state.apply(transition) {
            Ok(next) => Ok(next),
            Err(
                error @ (GameError::IllegalAction(_)
                | GameError::OutOfRangeBet { .. }
                | GameError::MissingBetAmount),
            ) => {
                event!(
                    Level::WARN,
                    seat,
                    %error,
                    "agent decision rejected, applying the default action"
                );
                Ok(state.apply(Transition::TurnExpired {
                    state_id: state.id(),
                })?)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Wait for the seat's decision on `state`, dropping anything else that
    /// arrives in the meantime.
    async fn await_decision(
        &mut self,
        seat: usize,
        state: &State,
    ) -> Result<Transition, SimulationError> {
        let deadline = Instant::now() + self.turn_timeout;
        loop {
            match timeout_at(deadline, self.replies.recv()).await {
                Ok(Some(reply)) if reply.seat == seat && reply.decision.state_id == state.id() => {
                    return Ok(Transition::Act(reply.decision));
                }
                Ok(Some(reply)) => {
                    event!(
                        Level::WARN,
                        from = reply.seat,
                        decided_on = reply.decision.state_id,
                        current = state.id(),
                        "dropping stale decision"
                    );
                }
                Ok(None) => return Err(SimulationError::AgentDisconnected(seat)),
                Err(_elapsed) => {
                    event!(
                        Level::WARN,
                        seat,
                        timeout_ms = self.turn_timeout.as_millis() as u64,
                        "turn timed out"
                    );
                    return Ok(Transition::TurnExpired {
                        state_id: state.id(),
                    });
                }
            }
        }
    }
}

/// The worker task for one seat. It lives until the simulation drops its
/// request sender or the agent panics.
async fn run_agent(idle: Idle, replies: UnboundedSender<Reply>) {
    let Idle {
        seat,
        mut agent,
        mut inbox,
    } = idle;
    while let Some(request) = inbox.recv().await {
        let decided = task::spawn_blocking(move || {
            let decision = agent.act(&request.state, &request.legal);
            (agent, decision)
        })
        .await;
        let (returned, decision) = match decided {
            Ok(decided) => decided,
            Err(error) => {
                event!(Level::ERROR, seat, %error, "agent failed, leaving the table");
                return;
            }
        };
        agent = returned;
        if replies.send(Reply { seat, decision }).is_err() {
            return;
        }
    }
}
