//! Material values and piece-square tables.
//!
//! Square tables are written from White's side of the board: row 0 is the
//! eighth rank, row 7 the first, columns run a..h. Black looks the same tables
//! up with the rows mirrored, so one table serves both colours.

use chess_core::{file_of, rank_of, Color, PieceKind, Score, Square};

/// Base material value per piece kind, indexed by `PieceKind::idx()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceValueTable([Score; 6]);

impl PieceValueTable {
    pub const fn new(values: [Score; 6]) -> Self {
        Self(values)
    }

    #[inline]
    pub fn value(&self, kind: PieceKind) -> Score {
        self.0[kind.idx()]
    }
}

type Grid = [[Score; 8]; 8];

/// Positional bonus per piece kind and square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareValueTable([Grid; 6]);

impl SquareValueTable {
    pub const fn new(grids: [Grid; 6]) -> Self {
        Self(grids)
    }

    /// Bonus for a `color` piece of `kind` standing on `sq`.
    #[inline]
    pub fn bonus(&self, kind: PieceKind, color: Color, sq: Square) -> Score {
        let row = match color {
            Color::White => 7 - rank_of(sq),
            Color::Black => rank_of(sq),
        };
        self.0[kind.idx()][row][file_of(sq)]
    }
}

/// Order: Pawn, Knight, Bishop, Rook, Queen, King
pub static PIECE_VALUES: PieceValueTable = PieceValueTable::new([9, 30, 32, 50, 90, 0]);

#[rustfmt::skip]
pub static SQUARE_VALUES: SquareValueTable = SquareValueTable::new([
    // Pawn
    [
        [0, 0, 0,  0,  0, 0, 0, 0],
        [9, 9, 9,  9,  9, 9, 9, 9],
        [5, 5, 5,  5,  5, 5, 5, 5],
        [3, 3, 3,  4,  4, 3, 3, 3],
        [1, 0, 3,  4,  4, 3, 0, 1],
        [0, 0, 0,  2,  2, 0, 0, 0],
        [0, 0, 0, -4, -4, 0, 0, 0],
        [0, 0, 0,  0,  0, 0, 0, 0],
    ],
    // Knight
    [
        [-5, -3, -3, -3, -3, -3, -3, -5],
        [-3,  1,  1,  1,  1,  1,  1, -3],
        [ 0,  3,  5,  5,  5,  5,  3,  0],
        [ 0,  3,  3,  3,  3,  3,  3,  0],
        [ 0,  0,  2,  2,  2,  2,  0,  0],
        [-2,  0,  0,  0,  0,  0,  0, -2],
        [-2,  0,  0,  0,  0,  0,  0, -2],
        [-5, -3, -3, -3, -3, -3, -3, -5],
    ],
    // Bishop
    [
        [-3,  0,  0,  0,  0,  0,  0, -3],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  2,  0,  0,  0,  0,  2,  0],
        [ 0,  0,  2,  0,  0,  2,  0,  0],
        [ 0,  1,  0,  1,  1,  0,  1,  0],
        [ 0,  2,  0,  0,  0,  0,  2,  0],
        [-3, -1, -1, -1, -1, -1, -1, -3],
    ],
    // Rook
    [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [4, 4, 4, 4, 4, 4, 4, 4],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 1, 1, 1, 1, 0, 0],
    ],
    // Queen
    [
        [-2,  0,  0,  0,  0,  0,  0, -2],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [ 0,  0,  0,  0,  0,  0,  0,  0],
        [-2, -1, -1, -1, -1, -1, -1, -2],
    ],
    // King
    [
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [0,  0,  0, 0, 0, 0,  0, 0],
        [5, 10, 10, 0, 1, 0, 10, 5],
    ],
]);
