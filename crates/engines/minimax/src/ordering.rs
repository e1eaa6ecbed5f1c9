//! Move ordering for alpha-beta.
//!
//! Cutoffs come earlier when strong moves are searched first, so moves are
//! grouped by a cheap guess at their quality before the search expands them.

use std::cmp::Ordering;

use chess_core::MoveInfo;

/// Ordering buckets, searched front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveClass {
    /// Cheaper piece takes a more valuable one
    GoodTake,
    Promotion,
    /// Pieces of the same trade rank; knight and bishop count as equal
    EqualTake,
    Quiet,
    /// More valuable piece takes a cheaper one
    BadTake,
}

pub fn classify(mv: &MoveInfo) -> MoveClass {
    match mv.captured {
        Some(captured) => match mv.piece.trade_rank().cmp(&captured.trade_rank()) {
            Ordering::Less => MoveClass::GoodTake,
            Ordering::Equal => MoveClass::EqualTake,
            Ordering::Greater => MoveClass::BadTake,
        },
        None if mv.is_promotion() => MoveClass::Promotion,
        None => MoveClass::Quiet,
    }
}

/// Reorders `moves` by [`MoveClass`]. The sort is stable, so moves within a
/// bucket keep the rules engine's order, and the output is always a
/// permutation of the input.
pub fn order_moves(mut moves: Vec<MoveInfo>) -> Vec<MoveInfo> {
    moves.sort_by_key(classify);
    moves
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
