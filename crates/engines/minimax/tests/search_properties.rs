//! Property checks for the alpha-beta search against a plain minimax.

use chess_core::{Color, Position, Score};
use minimax_engine::{search, Evaluator};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

const SAMPLES: usize = 120;

/// Unpruned minimax with the same terminal rules as the engine.
fn minimax(pos: &Position, depth: u8, eval: &Evaluator, nodes: &mut u64) -> Score {
    *nodes += 1;
    if depth == 0 {
        return eval.evaluate(pos);
    }
    let moves = pos.legal_moves();
    if moves.is_empty()
        || pos.is_insufficient_material()
        || pos.is_fifty_move_draw()
        || pos.is_threefold_repetition()
    {
        return eval.evaluate(pos);
    }

    let scores = moves
        .iter()
        .map(|mv| minimax(&pos.apply(mv), depth - 1, eval, nodes));
    match pos.side_to_move() {
        Color::White => scores.max().unwrap_or(Score::MIN),
        Color::Black => scores.min().unwrap_or(Score::MAX),
    }
}

/// Positions reached by seeded random playouts from the start.
fn sample_positions() -> Vec<Position> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut out = Vec::with_capacity(SAMPLES);

    while out.len() < SAMPLES {
        let plies = rng.gen_range(0..40);
        let mut pos = Position::startpos();
        for _ in 0..plies {
            let moves = pos.legal_moves();
            match moves.choose(&mut rng) {
                Some(mv) => pos = pos.apply(mv),
                None => break,
            }
        }
        if !pos.is_game_over() {
            out.push(pos);
        }
    }
    out
}

#[test]
fn alpha_beta_matches_minimax() {
    let eval = Evaluator::default();
    let positions = sample_positions();

    positions.par_iter().enumerate().for_each(|(i, pos)| {
        let depth = 1 + (i % 3) as u8;
        let mut reference_nodes = 0;
        let expected = minimax(pos, depth, &eval, &mut reference_nodes);

        let result = search(pos, depth, &eval);
        assert_eq!(
            result.score,
            expected,
            "depth {depth} at {}",
            pos.to_fen()
        );
        assert!(result.stats.nodes <= reference_nodes);

        // The chosen move really achieves the reported score
        let mv = result.best_move.expect("unfinished position has a move");
        let mut ignored = 0;
        let child = minimax(&pos.apply(&mv), depth - 1, &eval, &mut ignored);
        assert_eq!(child, expected, "{mv} at {}", pos.to_fen());
    });
}

#[test]
fn pruning_saves_work_in_the_middlegame() {
    let eval = Evaluator::default();
    let pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    )
    .unwrap();

    let mut reference_nodes = 0;
    let expected = minimax(&pos, 3, &eval, &mut reference_nodes);
    let result = search(&pos, 3, &eval);

    assert_eq!(result.score, expected);
    assert!(
        result.stats.nodes * 2 < reference_nodes,
        "alpha-beta visited {} of {} nodes",
        result.stats.nodes,
        reference_nodes
    );
}

#[test]
fn mirrored_search_negates_score() {
    let eval = Evaluator::default();
    for played in sample_positions().into_iter().take(20) {
        // Mirroring goes through FEN, so drop the repetition history on both sides
        let pos = Position::from_fen(&played.to_fen()).unwrap();
        let mirrored = pos.mirrored().unwrap();
        let a = search(&pos, 2, &eval);
        let b = search(&mirrored, 2, &eval);
        assert_eq!(a.score, -b.score, "{}", pos.to_fen());
    }
}
