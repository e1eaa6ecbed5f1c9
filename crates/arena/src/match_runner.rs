//! Match runner for playing games between players

use chess_core::{Color, DrawReason, GameStatus, Player, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::ArenaConfig;
use crate::error::ArenaResult;
use crate::results::MatchSummary;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before adjudicating a draw
    pub max_plies: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Starting position; the standard one when `None`
    pub start_fen: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 200,
            alternate_colors: true,
            start_fen: None,
        }
    }
}

impl From<&ArenaConfig> for MatchConfig {
    fn from(config: &ArenaConfig) -> Self {
        Self {
            num_games: config.games,
            max_plies: config.max_plies,
            alternate_colors: config.alternate_colors,
            start_fen: config.start_fen.clone(),
        }
    }
}

/// Result of a single game
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
}

impl GameResult {
    /// PGN-style result string
    pub fn as_str(self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
        }
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    Checkmate,
    Draw(DrawReason),
    /// Ply limit reached with the game still running
    MaxPlies,
}

/// One finished game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: Uuid,
    pub white: String,
    pub black: String,
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    /// Moves in UCI notation
    pub moves: Vec<String>,
    pub final_fen: String,
    pub finished_at: DateTime<Utc>,
}

/// Runs matches between two players
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two players.
    ///
    /// `first` plays White in even-numbered games when colors alternate, and
    /// the summary is kept from its point of view.
    pub fn run_match(
        &self,
        first: &mut dyn Player,
        second: &mut dyn Player,
    ) -> ArenaResult<MatchSummary> {
        let mut summary = MatchSummary::new(first.name(), second.name());

        for game_num in 0..self.config.num_games {
            let first_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if first_white {
                self.play_game(first, second)?
            } else {
                self.play_game(second, first)?
            };

            tracing::info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                black = %record.black,
                result = record.result.as_str(),
                termination = ?record.termination,
                plies = record.plies,
                "game finished"
            );

            summary.record(record, first_white);
        }

        summary.finish();
        Ok(summary)
    }

    /// Play a single game from the configured start position.
    pub fn play_game(
        &self,
        white: &mut dyn Player,
        black: &mut dyn Player,
    ) -> ArenaResult<GameRecord> {
        let mut pos = match &self.config.start_fen {
            Some(fen) => Position::from_fen(fen)?,
            None => Position::startpos(),
        };
        let mut moves = Vec::new();

        let termination = loop {
            match pos.status() {
                GameStatus::Checkmate { .. } => break Termination::Checkmate,
                GameStatus::Draw(reason) => break Termination::Draw(reason),
                GameStatus::Ongoing => {}
            }
            if moves.len() as u32 >= self.config.max_plies {
                break Termination::MaxPlies;
            }

            let decision = match pos.side_to_move() {
                Color::White => white.choose_move(&pos)?,
                Color::Black => black.choose_move(&pos)?,
            };
            tracing::trace!(
                ply = moves.len() + 1,
                side = %pos.side_to_move(),
                mv = %decision.mv,
                score = decision.score,
                "ply"
            );

            moves.push(decision.mv.to_uci());
            pos = pos.apply(&decision.mv);
        };

        let result = match pos.status() {
            GameStatus::Checkmate { winner: Color::White } => GameResult::WhiteWins,
            GameStatus::Checkmate { winner: Color::Black } => GameResult::BlackWins,
            _ => GameResult::Draw,
        };

        Ok(GameRecord {
            id: Uuid::new_v4(),
            white: white.name().to_string(),
            black: black.name().to_string(),
            result,
            termination,
            plies: moves.len() as u32,
            moves,
            final_fen: pos.to_fen(),
            finished_at: Utc::now(),
        })
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
