//! Rules layer and shared vocabulary for the players.
//!
//! Positions, legal moves and game status come from the `cozy-chess` crate and
//! are exposed here as [`Position`] and [`MoveInfo`]. Every engine crate
//! implements [`Player`] on top of them.

pub mod board;
pub mod error;
pub mod status;
pub mod types;

pub use board::*;
pub use error::*;
pub use status::*;
pub use types::*;

// =============================================================================
// Player trait
// =============================================================================

/// Work done by one top-level search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Static evaluations performed at leaf and terminal nodes
    pub evaluations: u64,
    /// Positions visited, root included
    pub nodes: u64,
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None at a terminal or zero-depth root)
    pub best_move: Option<MoveInfo>,
    /// Score of `best_move`, White-positive
    pub score: Score,
    /// Depth the search was run at
    pub depth: u8,
    pub stats: SearchStats,
}

/// A move picked by a player, with the score it was picked for.
#[derive(Debug, Clone)]
pub struct Decision {
    pub mv: MoveInfo,
    /// White-positive score; players without an evaluator report 0
    pub score: Score,
    pub stats: SearchStats,
}

/// Trait that all players implement.
///
/// Players are only asked to move in unfinished positions; handing them a
/// finished one yields [`EngineError::GameOver`].
pub trait Player: Send {
    /// Display name, e.g. for match reports
    fn name(&self) -> &str;

    /// Choose a move for the side to move in `pos`.
    fn choose_move(&mut self, pos: &Position) -> EngineResult<Decision>;

    /// Choose a move and return the position after it.
    fn play(&mut self, pos: &Position) -> EngineResult<Position> {
        let decision = self.choose_move(pos)?;
        Ok(pos.apply(&decision.mv))
    }
}

/// Fails with [`EngineError::GameOver`] when `pos` is already finished.
pub fn ensure_playable(pos: &Position) -> EngineResult<()> {
    match pos.status() {
        GameStatus::Ongoing => Ok(()),
        status => Err(EngineError::GameOver(status)),
    }
}
