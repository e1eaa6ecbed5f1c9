//! Minimax Chess Player
//!
//! Fixed-depth alpha-beta search over a piece-square evaluator.
//! Captures and promotions are searched first to get early cutoffs.

pub mod eval;
pub mod ordering;
pub mod search;
pub mod values;

pub use eval::{EvalPreset, Evaluator, CHECK_BONUS};
pub use ordering::{classify, order_moves, MoveClass};
pub use search::search;

use std::time::Instant;

use chess_core::{ensure_playable, Decision, EngineError, EngineResult, Player, Position};

/// Depth used when none is configured.
pub const DEFAULT_DEPTH: u8 = 4;

/// Player that picks the best move found by a fixed-depth search.
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    name: String,
    depth: u8,
    evaluator: Evaluator,
}

impl SearchPlayer {
    pub fn new(depth: u8) -> Self {
        Self::with_evaluator(depth, Evaluator::default())
    }

    pub fn with_evaluator(depth: u8, evaluator: Evaluator) -> Self {
        Self {
            name: format!("Search AI (depth {depth})"),
            depth,
            evaluator,
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }
}

impl Default for SearchPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Player for SearchPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, pos: &Position) -> EngineResult<Decision> {
        if self.depth == 0 {
            return Err(EngineError::InvalidDepth(self.depth));
        }
        ensure_playable(pos)?;

        let started = Instant::now();
        let result = search(pos, self.depth, &self.evaluator);
        let elapsed = started.elapsed();

        let mv = result.best_move.ok_or(EngineError::NoLegalMoves)?;
        tracing::debug!(
            player = %self.name,
            best = %mv,
            score = result.score,
            evaluations = result.stats.evaluations,
            nodes = result.stats.nodes,
            elapsed_s = elapsed.as_secs_f64(),
            "search finished"
        );

        Ok(Decision {
            mv,
            score: result.score,
            stats: result.stats,
        })
    }
}
