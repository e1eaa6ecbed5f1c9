//! Random Move Player
//!
//! Picks uniformly among the legal moves. Any real player should beat it
//! easily, which makes it the baseline opponent for matches.

use chess_core::{
    ensure_playable, Decision, EngineError, EngineResult, Player, Position, SearchStats,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// A player that plays random legal moves.
///
/// It never evaluates anything, so every [`Decision`] carries a score of 0.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible player for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &str {
        "Random AI"
    }

    fn choose_move(&mut self, pos: &Position) -> EngineResult<Decision> {
        ensure_playable(pos)?;

        let moves = pos.legal_moves();
        let mv = moves
            .choose(&mut self.rng)
            .cloned()
            .ok_or(EngineError::NoLegalMoves)?;
        tracing::trace!(choices = moves.len(), chosen = %mv, "random move");

        Ok(Decision {
            mv,
            score: 0,
            stats: SearchStats::default(),
        })
    }
}
