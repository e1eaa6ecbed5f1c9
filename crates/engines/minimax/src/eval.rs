//! Static position evaluation.

use chess_core::{Color, GameStatus, Position, Score, MAX_SCORE, MIN_SCORE};
use serde::{Deserialize, Serialize};

use crate::values::{PieceValueTable, SquareValueTable, PIECE_VALUES, SQUARE_VALUES};

/// Awarded to the side giving check.
pub const CHECK_BONUS: Score = 10;

/// How much of the evaluation to run. Cheaper presets trade accuracy for speed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvalPreset {
    /// Piece values only
    Material,
    /// Piece values plus square tables
    Positional,
    /// Positional plus checkmate/draw detection and the check bonus
    #[default]
    Full,
}

impl std::str::FromStr for EvalPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "material" => Ok(EvalPreset::Material),
            "positional" => Ok(EvalPreset::Positional),
            "full" => Ok(EvalPreset::Full),
            other => Err(format!("unknown evaluation preset `{other}`")),
        }
    }
}

impl std::fmt::Display for EvalPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EvalPreset::Material => "material",
            EvalPreset::Positional => "positional",
            EvalPreset::Full => "full",
        })
    }
}

/// Scores positions from White's point of view.
#[derive(Debug, Clone)]
pub struct Evaluator {
    preset: EvalPreset,
    pieces: &'static PieceValueTable,
    squares: &'static SquareValueTable,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(EvalPreset::Full)
    }
}

impl Evaluator {
    pub fn new(preset: EvalPreset) -> Self {
        Self::with_tables(preset, &PIECE_VALUES, &SQUARE_VALUES)
    }

    pub fn with_tables(
        preset: EvalPreset,
        pieces: &'static PieceValueTable,
        squares: &'static SquareValueTable,
    ) -> Self {
        Self {
            preset,
            pieces,
            squares,
        }
    }

    pub fn preset(&self) -> EvalPreset {
        self.preset
    }

    /// Evaluates `pos`. Positive is good for White, negative for Black.
    ///
    /// With [`EvalPreset::Full`]:
    /// - White checkmated → [`MIN_SCORE`], Black checkmated → [`MAX_SCORE`]
    /// - any draw → 0
    /// - otherwise material and square bonuses per side, plus [`CHECK_BONUS`]
    ///   for the side giving check.
    pub fn evaluate(&self, pos: &Position) -> Score {
        let full = self.preset == EvalPreset::Full;

        if full {
            match pos.status() {
                GameStatus::Checkmate {
                    winner: Color::White,
                } => return MAX_SCORE,
                GameStatus::Checkmate {
                    winner: Color::Black,
                } => return MIN_SCORE,
                GameStatus::Draw(_) => return 0,
                GameStatus::Ongoing => {}
            }
        }

        let mut white = self.side_total(pos, Color::White);
        let mut black = self.side_total(pos, Color::Black);

        if full && pos.in_check() {
            match pos.side_to_move() {
                Color::White => black += CHECK_BONUS,
                Color::Black => white += CHECK_BONUS,
            }
        }

        white - black
    }

    /// Material plus square bonuses for one colour's pieces.
    fn side_total(&self, pos: &Position, color: Color) -> Score {
        let positional = self.preset != EvalPreset::Material;
        pos.pieces()
            .filter(|(_, c, _)| *c == color)
            .map(|(sq, _, kind)| {
                let bonus = if positional {
                    self.squares.bonus(kind, color, sq)
                } else {
                    0
                };
                self.pieces.value(kind) + bonus
            })
            .sum()
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
