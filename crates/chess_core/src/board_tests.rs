use super::*;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn find(pos: &Position, uci: &str) -> MoveInfo {
    pos.parse_uci_move(uci)
        .unwrap_or_else(|e| panic!("expected {uci} to be legal: {e}"))
}

#[test]
fn test_startpos_moves() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.to_fen(), STARTPOS_FEN);
}

#[test]
fn test_kiwipete_moves() {
    // Kiwipete position - complex with many move types
    let pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -")
        .unwrap();
    assert_eq!(pos.legal_moves().len(), 48);
}

#[test]
fn test_invalid_fen_is_rejected() {
    let err = Position::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, RulesError::InvalidFen { .. }));
}

#[test]
fn test_apply_leaves_original_untouched() {
    let pos = Position::startpos();
    let mv = find(&pos, "e2e4");
    let next = pos.apply(&mv);

    assert_eq!(pos.to_fen(), STARTPOS_FEN);
    assert_eq!(next.side_to_move(), Color::Black);
    assert_eq!(next.piece_at(mv.to), Some((Color::White, PieceKind::Pawn)));
    assert_eq!(next.piece_at(mv.from), None);
}

#[test]
fn test_capture_metadata() {
    let pos = Position::from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
    let mv = find(&pos, "e4d5");
    assert_eq!(mv.piece, PieceKind::Pawn);
    assert_eq!(mv.captured, Some(PieceKind::Queen));
    assert!(mv.flags.capture);
    assert!(!mv.flags.en_passant);
    assert!(!mv.flags.castle);
}

#[test]
fn test_en_passant_metadata() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mv = find(&pos, "e5d6");
    assert!(mv.flags.en_passant);
    assert!(mv.flags.capture);
    assert_eq!(mv.captured, Some(PieceKind::Pawn));

    let next = pos.apply(&mv);
    assert_eq!(next.piece_at(Square::D5), None, "captured pawn is removed");
}

#[test]
fn test_castle_metadata_uses_king_destination() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let castles: Vec<_> = pos.legal_moves().into_iter().filter(|m| m.flags.castle).collect();
    assert_eq!(castles.len(), 2);

    let short = find(&pos, "e1g1");
    assert!(short.flags.castle);
    assert!(!short.flags.capture);
    assert_eq!(short.captured, None);
    assert_eq!(short.to, Square::G1);

    let next = pos.apply(&short);
    assert_eq!(next.piece_at(Square::G1), Some((Color::White, PieceKind::King)));
    assert_eq!(next.piece_at(Square::F1), Some((Color::White, PieceKind::Rook)));
}

#[test]
fn test_promotion_metadata() {
    let pos = Position::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1").unwrap();
    let promos: Vec<_> = pos.legal_moves().into_iter().filter(|m| m.flags.promotion).collect();
    assert_eq!(promos.len(), 4);

    let queen = find(&pos, "e7e8q");
    assert_eq!(queen.promotion, Some(PieceKind::Queen));
    assert_eq!(queen.to_uci(), "e7e8q");
}

#[test]
fn test_unknown_uci_move_is_rejected() {
    let pos = Position::startpos();
    assert!(matches!(
        pos.parse_uci_move("e2e5"),
        Err(RulesError::InvalidMove { .. })
    ));
}

#[test]
fn test_checkmate_status() {
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(pos.in_check());
    assert!(pos.is_checkmate());
    assert!(pos.is_game_over());
    assert_eq!(
        pos.status(),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_threefold_repetition_by_knight_shuffle() {
    let mut pos = Position::startpos();
    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    for uci in shuffle {
        pos = pos.apply(&find(&pos, uci));
    }
    assert!(!pos.is_threefold_repetition(), "second occurrence only");

    for uci in shuffle {
        pos = pos.apply(&find(&pos, uci));
    }
    assert!(pos.is_threefold_repetition());
    assert_eq!(pos.status(), GameStatus::Draw(DrawReason::ThreefoldRepetition));
}

#[test]
fn test_pawn_move_clears_repetition_history() {
    let mut pos = Position::startpos();
    for uci in ["g1f3", "g8f6", "f3g1", "f6g8", "e2e4"] {
        pos = pos.apply(&find(&pos, uci));
    }
    assert_eq!(pos.history.len(), 1);
    assert_eq!(pos.halfmove_clock(), 0);
}

#[test]
fn test_mirrored_startpos() {
    let mirrored = Position::startpos().mirrored().unwrap();
    assert_eq!(
        mirrored.to_fen(),
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b KQkq - 0 1"
    );
}

#[test]
fn test_mirrored_swaps_colours_and_en_passant() {
    let pos = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mirrored = pos.mirrored().unwrap();

    assert_eq!(mirrored.side_to_move(), Color::Black);
    assert_eq!(mirrored.piece_at(Square::E1), Some((Color::White, PieceKind::King)));
    assert_eq!(mirrored.piece_at(Square::E8), Some((Color::Black, PieceKind::King)));
    assert_eq!(mirrored.piece_at(Square::E4), Some((Color::Black, PieceKind::Pawn)));
    assert_eq!(mirrored.piece_at(Square::D4), Some((Color::White, PieceKind::Pawn)));
    assert_eq!(
        mirrored.legal_moves().len(),
        pos.legal_moves().len(),
        "mirroring keeps the move count"
    );
}

#[test]
fn test_pieces_iterates_occupied_squares() {
    let pos = Position::startpos();
    assert_eq!(pos.pieces().count(), 32);
    assert_eq!(
        pos.pieces()
            .filter(|(_, color, kind)| *color == Color::Black && *kind == PieceKind::Pawn)
            .count(),
        8
    );
}
