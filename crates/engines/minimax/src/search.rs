//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Scores are always from White's point of view: White maximizes, Black
//! minimizes. Every branch works on its own copy of the position.

use chess_core::{Color, MoveInfo, Position, Score, SearchResult, SearchStats};

use crate::eval::Evaluator;
use crate::ordering::order_moves;

/// Bounds used to seed the root window; strictly outside every evaluator score.
pub const NEG_INF: Score = Score::MIN;
pub const POS_INF: Score = Score::MAX;

/// Searches `pos` to `depth` plies and returns the best move for the side to
/// move together with its score.
///
/// `best_move` is `None` when `depth` is 0 or `pos` is already over, in which
/// case `score` is the static evaluation of `pos`.
pub fn search(pos: &Position, depth: u8, evaluator: &Evaluator) -> SearchResult {
    let mut ctx = SearchContext::new(evaluator);
    let (best_move, score) = ctx.alpha_beta(pos, depth, NEG_INF, POS_INF);

    SearchResult {
        best_move,
        score,
        depth,
        stats: ctx.stats,
    }
}

/// State owned by a single top-level search call.
struct SearchContext<'a> {
    evaluator: &'a Evaluator,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    fn new(evaluator: &'a Evaluator) -> Self {
        Self {
            evaluator,
            stats: SearchStats::default(),
        }
    }

    fn evaluate(&mut self, pos: &Position) -> Score {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(pos)
    }

    fn alpha_beta(
        &mut self,
        pos: &Position,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Option<MoveInfo>, Score) {
        self.stats.nodes += 1;

        if depth == 0 {
            return (None, self.evaluate(pos));
        }

        let moves = pos.legal_moves();
        if moves.is_empty()
            || pos.is_insufficient_material()
            || pos.is_fifty_move_draw()
            || pos.is_threefold_repetition()
        {
            return (None, self.evaluate(pos));
        }

        let mut best_move = None;

        match pos.side_to_move() {
            Color::White => {
                let mut best = NEG_INF;
                for mv in order_moves(moves) {
                    let child = pos.apply(&mv);
                    let (_, score) = self.alpha_beta(&child, depth - 1, alpha, beta);
                    if score > best {
                        best = score;
                        best_move = Some(mv);
                    }
                    alpha = alpha.max(score);
                    if beta <= alpha {
                        break;
                    }
                }
                (best_move, best)
            }
            Color::Black => {
                let mut best = POS_INF;
                for mv in order_moves(moves) {
                    let child = pos.apply(&mv);
                    let (_, score) = self.alpha_beta(&child, depth - 1, alpha, beta);
                    if score < best {
                        best = score;
                        best_move = Some(mv);
                    }
                    beta = beta.min(score);
                    if beta <= alpha {
                        break;
                    }
                }
                (best_move, best)
            }
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
