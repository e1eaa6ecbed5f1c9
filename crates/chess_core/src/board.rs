use cozy_chess::{Board, File, Move, Piece};

use crate::error::RulesError;
use crate::status::{DrawReason, GameStatus};
use crate::types::*;

/// A chess position as seen by the players.
///
/// Wraps the rules crate's board together with the Zobrist keys of every
/// position reached since the last pawn move or capture, which is all that
/// threefold repetition needs. Positions are values: [`Position::apply`] returns
/// a new position and never touches `self`.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    history: Vec<u64>,
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(Board::default())
    }

    fn from_board(board: Board) -> Self {
        let history = vec![board.hash()];
        Self { board, history }
    }

    /// Parses Forsyth-Edwards Notation. The halfmove and fullmove fields are
    /// optional and default to `0 1`.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let trimmed = fen.trim();
        let full = match trimmed.split_whitespace().count() {
            4 => format!("{trimmed} 0 1"),
            5 => format!("{trimmed} 1"),
            _ => trimmed.to_string(),
        };
        let board = full.parse::<Board>().map_err(|e| RulesError::InvalidFen {
            fen: fen.to_string(),
            reason: format!("{e:?}"),
        })?;
        Ok(Self::from_board(board))
    }

    pub fn to_fen(&self) -> String {
        self.board.to_string()
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move().into()
    }

    pub fn in_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.board.halfmove_clock() as u32
    }

    /// Zobrist key of the position (placement, side to move, castling, en passant).
    pub fn hash(&self) -> u64 {
        self.board.hash()
    }

    pub fn piece_at(&self, sq: Square) -> Option<(Color, PieceKind)> {
        let piece = self.board.piece_on(sq)?;
        let color = self.board.color_on(sq)?;
        Some((color.into(), piece.into()))
    }

    /// Every occupied square with the piece standing on it, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, PieceKind)> + '_ {
        self.board
            .occupied()
            .into_iter()
            .filter_map(move |sq| self.piece_at(sq).map(|(color, kind)| (sq, color, kind)))
    }

    /// All legal moves, annotated with mover, captured piece and flags.
    pub fn legal_moves(&self) -> Vec<MoveInfo> {
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|piece_moves| {
            let piece = piece_moves.piece;
            for mv in piece_moves {
                moves.push(self.describe(piece, mv));
            }
            false
        });
        moves
    }

    pub fn has_legal_moves(&self) -> bool {
        self.board.generate_moves(|piece_moves| !piece_moves.is_empty())
    }

    fn describe(&self, piece: Piece, mv: Move) -> MoveInfo {
        let us = self.board.side_to_move();
        let piece = PieceKind::from(piece);

        // The rules crate encodes castling as the king capturing its own rook.
        let castle = piece == PieceKind::King && self.board.color_on(mv.to) == Some(us);
        let en_passant = piece == PieceKind::Pawn
            && mv.from.file() != mv.to.file()
            && self.board.piece_on(mv.to).is_none();

        let captured = if castle {
            None
        } else if en_passant {
            Some(PieceKind::Pawn)
        } else {
            self.board.piece_on(mv.to).map(PieceKind::from)
        };

        let to = if castle {
            let file = if mv.to.file() > mv.from.file() {
                File::G
            } else {
                File::C
            };
            Square::new(file, mv.from.rank())
        } else {
            mv.to
        };

        let promotion = mv.promotion.map(PieceKind::from);

        MoveInfo {
            from: mv.from,
            to,
            piece,
            captured,
            promotion,
            flags: MoveFlags {
                capture: captured.is_some(),
                promotion: promotion.is_some(),
                en_passant,
                castle,
            },
            raw: mv,
        }
    }

    /// Returns the position after `mv`. `mv` must come from this position's
    /// [`legal_moves`](Self::legal_moves).
    pub fn apply(&self, mv: &MoveInfo) -> Position {
        let mut board = self.board.clone();
        board.play_unchecked(mv.raw);

        let irreversible = mv.piece == PieceKind::Pawn || mv.flags.capture;
        let mut history = if irreversible {
            Vec::with_capacity(8)
        } else {
            self.history.clone()
        };
        history.push(board.hash());

        Position { board, history }
    }

    /// Looks up a move given in long algebraic notation (`e2e4`, `e7e8q`,
    /// `e1g1` for castling) among the legal moves.
    pub fn parse_uci_move(&self, text: &str) -> Result<MoveInfo, RulesError> {
        let wanted = text.trim().to_ascii_lowercase();
        self.legal_moves()
            .into_iter()
            .find(|mv| mv.to_uci() == wanted)
            .ok_or_else(|| RulesError::InvalidMove {
                mv: text.to_string(),
                reason: format!("not legal in {}", self.to_fen()),
            })
    }

    // =========================================================================
    // Game status
    // =========================================================================

    pub fn status(&self) -> GameStatus {
        if !self.has_legal_moves() {
            return if self.in_check() {
                GameStatus::Checkmate {
                    winner: self.side_to_move().other(),
                }
            } else {
                GameStatus::Draw(DrawReason::Stalemate)
            };
        }
        if self.is_insufficient_material() {
            return GameStatus::Draw(DrawReason::InsufficientMaterial);
        }
        if self.is_fifty_move_draw() {
            return GameStatus::Draw(DrawReason::FiftyMoveRule);
        }
        if self.is_threefold_repetition() {
            return GameStatus::Draw(DrawReason::ThreefoldRepetition);
        }
        GameStatus::Ongoing
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    pub fn draw_reason(&self) -> Option<DrawReason> {
        match self.status() {
            GameStatus::Draw(reason) => Some(reason),
            _ => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    pub fn is_game_over(&self) -> bool {
        self.status().is_over()
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.board.halfmove_clock() >= 100
    }

    /// The current position has occurred at least three times since the last
    /// irreversible move.
    pub fn is_threefold_repetition(&self) -> bool {
        let Some(&current) = self.history.last() else {
            return false;
        };
        self.history.iter().filter(|&&h| h == current).count() >= 3
    }

    /// Neither side can ever deliver mate: bare kings, a single minor piece, or
    /// only bishops that all stand on squares of one colour.
    pub fn is_insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }

        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if knights.len() + bishops.len() <= 1 {
            return true;
        }
        if !knights.is_empty() {
            return false;
        }

        let mut shades = bishops
            .into_iter()
            .map(|sq| (file_of(sq) + rank_of(sq)) % 2);
        match shades.next() {
            Some(first) => shades.all(|shade| shade == first),
            None => true,
        }
    }

    /// The same position seen from the other side: ranks reversed, piece colours
    /// swapped, side to move swapped. Repetition history is not carried over.
    pub fn mirrored(&self) -> Result<Position, RulesError> {
        let fen = self.to_fen();
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [placement, side, castling, ep, rest @ ..] = fields.as_slice() else {
            return Err(RulesError::InvalidFen {
                fen: fen.clone(),
                reason: "expected at least four fields".to_string(),
            });
        };

        let placement = placement
            .split('/')
            .rev()
            .map(swap_case)
            .collect::<Vec<_>>()
            .join("/");
        let side = if *side == "w" { "b" } else { "w" };
        let castling = if *castling == "-" {
            "-".to_string()
        } else {
            let swapped = swap_case(castling);
            "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
        };
        let ep = match ep.as_bytes() {
            [file, rank] => format!("{}{}", *file as char, (b'1' + b'8' - rank) as char),
            _ => "-".to_string(),
        };

        let mut mirrored = format!("{placement} {side} {castling} {ep}");
        for field in rest {
            mirrored.push(' ');
            mirrored.push_str(field);
        }
        Position::from_fen(&mirrored)
    }
}

fn swap_case(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
