use super::*;
use chess_core::Position;

// White to move with every kind of move available:
// e4xd5 (pawn takes queen), b7-b8 promotions, Bb2xc3 (minor for minor),
// Qh3xh6 / Qh3xc3 (queen takes cheaper piece) and plenty of quiet moves.
const MIXED: &str = "6k1/1P6/7p/3q4/4P3/2n4Q/1B6/4K3 w - - 0 1";

fn uci_sorted(moves: &[MoveInfo]) -> Vec<String> {
    let mut v: Vec<String> = moves.iter().map(|m| m.to_uci()).collect();
    v.sort();
    v
}

#[test]
fn test_order_is_permutation() {
    for fen in [
        MIXED,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ] {
        let moves = Position::from_fen(fen).unwrap().legal_moves();
        let ordered = order_moves(moves.clone());
        assert_eq!(ordered.len(), moves.len());
        assert_eq!(uci_sorted(&ordered), uci_sorted(&moves), "{fen}");
    }
}

#[test]
fn test_buckets_are_in_order() {
    let ordered = order_moves(Position::from_fen(MIXED).unwrap().legal_moves());
    let classes: Vec<MoveClass> = ordered.iter().map(classify).collect();
    assert!(classes.windows(2).all(|w| w[0] <= w[1]), "{classes:?}");
}

#[test]
fn test_good_take_then_promotions_first() {
    let ordered = order_moves(Position::from_fen(MIXED).unwrap().legal_moves());

    assert_eq!(ordered[0].to_uci(), "e4d5");
    assert_eq!(classify(&ordered[0]), MoveClass::GoodTake);
    for mv in &ordered[1..5] {
        assert_eq!(classify(mv), MoveClass::Promotion, "{mv}");
    }
    assert_eq!(ordered[5].to_uci(), "b2c3");
    assert_eq!(classify(&ordered[5]), MoveClass::EqualTake);
}

#[test]
fn test_bad_takes_last() {
    let ordered = order_moves(Position::from_fen(MIXED).unwrap().legal_moves());
    let tail: Vec<String> = ordered
        .iter()
        .rev()
        .take_while(|m| classify(m) == MoveClass::BadTake)
        .map(|m| m.to_uci())
        .collect();

    assert_eq!(tail.len(), 2);
    assert!(tail.contains(&"h3h6".to_string()));
    assert!(tail.contains(&"h3c3".to_string()));
}

#[test]
fn test_en_passant_is_equal_take_and_castle_is_quiet() {
    let ep = Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    let mv = ep.parse_uci_move("e5d6").unwrap();
    assert_eq!(classify(&mv), MoveClass::EqualTake);

    let castle = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = castle.parse_uci_move("e1g1").unwrap();
    assert_eq!(classify(&mv), MoveClass::Quiet);
}

#[test]
fn test_order_keeps_input_order_within_bucket() {
    let moves = Position::startpos().legal_moves();
    // No captures or promotions from the start: everything is quiet
    assert_eq!(order_moves(moves.clone()), moves);
}
