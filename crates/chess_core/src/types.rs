use std::fmt;

use serde::{Deserialize, Serialize};

pub use cozy_chess::Square;

/// Position score. Positive favors White, negative favors Black, independent of
/// the side to move.
pub type Score = i32;

/// Score of a position where White has been checkmated.
pub const MIN_SCORE: Score = -99_999_999;
/// Score of a position where Black has been checkmated.
pub const MAX_SCORE: Score = 99_999_999;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("white"),
            Color::Black => f.write_str("black"),
        }
    }
}

impl From<cozy_chess::Color> for Color {
    fn from(c: cozy_chess::Color) -> Self {
        match c {
            cozy_chess::Color::White => Color::White,
            cozy_chess::Color::Black => Color::Black,
        }
    }
}

impl From<Color> for cozy_chess::Color {
    fn from(c: Color) -> Self {
        match c {
            Color::White => cozy_chess::Color::White,
            Color::Black => cozy_chess::Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }

    /// Coarse value ordering used to classify captures: pawn < minor < rook <
    /// queen < king. Knight and bishop share a rank.
    pub fn trade_rank(self) -> u8 {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight | PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            PieceKind::Queen => 3,
            PieceKind::King => 4,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

impl From<cozy_chess::Piece> for PieceKind {
    fn from(p: cozy_chess::Piece) -> Self {
        match p {
            cozy_chess::Piece::Pawn => PieceKind::Pawn,
            cozy_chess::Piece::Knight => PieceKind::Knight,
            cozy_chess::Piece::Bishop => PieceKind::Bishop,
            cozy_chess::Piece::Rook => PieceKind::Rook,
            cozy_chess::Piece::Queen => PieceKind::Queen,
            cozy_chess::Piece::King => PieceKind::King,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub capture: bool,
    pub promotion: bool,
    pub en_passant: bool,
    pub castle: bool,
}

/// A legal move annotated with what it does on the board it was generated for.
///
/// Only [`Position::legal_moves`](crate::Position::legal_moves) builds these, so
/// a `MoveInfo` always describes a move that was legal in some position. For
/// castling, `to` is the king's destination (`g1`, `c8`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveInfo {
    pub from: Square,
    pub to: Square,
    pub piece: PieceKind,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
    /// Encoding understood by the rules crate (castling is king-takes-rook).
    pub(crate) raw: cozy_chess::Move,
}

impl MoveInfo {
    pub fn is_capture(&self) -> bool {
        self.flags.capture
    }

    pub fn is_promotion(&self) -> bool {
        self.flags.promotion
    }

    /// Long algebraic notation with standard castling (`e1g1`, `e7e8q`).
    pub fn to_uci(&self) -> String {
        let mut s = format!("{}{}", self.from, self.to);
        if let Some(p) = self.promotion {
            s.push(p.to_char());
        }
        s
    }
}

impl fmt::Display for MoveInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uci())
    }
}

// Helpers
pub fn file_of(sq: Square) -> usize {
    sq.file() as usize
}
pub fn rank_of(sq: Square) -> usize {
    sq.rank() as usize
}
