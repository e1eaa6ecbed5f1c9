//! Building players from configuration and asking them for moves.

use std::thread::{self, JoinHandle};

use chess_core::{Decision, EngineResult, Player, Position};
use minimax_engine::{Evaluator, SearchPlayer};
use random_engine::RandomPlayer;
use uuid::Uuid;

use crate::config::{PlayerConfig, Strategy};
use crate::error::{ArenaError, ArenaResult};

/// Every player the arena knows how to build.
#[derive(Debug, Clone)]
pub enum AnyPlayer {
    Random(RandomPlayer),
    Search(SearchPlayer),
}

impl Player for AnyPlayer {
    fn name(&self) -> &str {
        match self {
            AnyPlayer::Random(p) => p.name(),
            AnyPlayer::Search(p) => p.name(),
        }
    }

    fn choose_move(&mut self, pos: &Position) -> EngineResult<Decision> {
        match self {
            AnyPlayer::Random(p) => p.choose_move(pos),
            AnyPlayer::Search(p) => p.choose_move(pos),
        }
    }
}

/// Builds the player described by `config`. `seed` only affects random players.
pub fn create_player(config: &PlayerConfig, seed: Option<u64>) -> AnyPlayer {
    match config.strategy {
        Strategy::Random => AnyPlayer::Random(match seed {
            Some(seed) => RandomPlayer::with_seed(seed),
            None => RandomPlayer::new(),
        }),
        Strategy::Search => AnyPlayer::Search(SearchPlayer::with_evaluator(
            config.depth,
            Evaluator::new(config.eval),
        )),
    }
}

/// Picks a move for the side to move in `pos` with a freshly built player.
pub fn choose_move(pos: &Position, config: &PlayerConfig) -> EngineResult<Decision> {
    create_player(config, None).choose_move(pos)
}

/// A decision running on its own thread.
#[derive(Debug)]
pub struct PendingDecision {
    id: Uuid,
    handle: JoinHandle<EngineResult<Decision>>,
}

impl PendingDecision {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Blocks until the decision is made.
    pub fn join(self) -> ArenaResult<Decision> {
        let id = self.id;
        let decision = self
            .handle
            .join()
            .map_err(|_| ArenaError::WorkerPanicked(id))??;
        Ok(decision)
    }
}

/// Runs [`choose_move`] on a dedicated thread so the caller stays responsive.
///
/// The worker owns `pos`; the returned handle carries a request id for
/// telling concurrent decisions apart.
pub fn spawn_choose_move(pos: Position, config: PlayerConfig) -> ArenaResult<PendingDecision> {
    let id = Uuid::new_v4();
    let handle = thread::Builder::new()
        .name(format!("decision-{id}"))
        .spawn(move || {
            let result = choose_move(&pos, &config);
            if let Err(err) = &result {
                tracing::warn!(request = %id, %err, "decision failed");
            }
            result
        })
        .map_err(ArenaError::Spawn)?;

    tracing::debug!(request = %id, player = %config, "decision spawned");
    Ok(PendingDecision { id, handle })
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;
