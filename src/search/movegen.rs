//! Candidate move generation
//!
//! Candidates are the empty cells inside a square of the configured radius
//! around any occupied cell, deduplicated and returned in row-major order.
//! Black's forbidden cells are dropped when renju rules are on.

use crate::board::{Bitboard, Board, Pos, Stone};
use crate::rules::is_legal_move;

/// Branching cap applied after ranking
pub const MAX_BRANCHING: usize = 12;

/// Empty cells within `radius` of an existing stone that `mover` may play.
pub fn generate_candidates(
    board: &Board,
    mover: Stone,
    radius: u8,
    forbidden_rules: bool,
) -> Vec<Pos> {
    let radius = i32::from(radius);
    let mut seen = Bitboard::new();

    for pos in board.occupied().iter_ones() {
        for dr in -radius..=radius {
            for dc in -radius..=radius {
                if let Some(near) = pos.offset(dr, dc, 1) {
                    if board.is_empty(near) {
                        seen.set(near);
                    }
                }
            }
        }
    }

    seen.iter_ones()
        .filter(|&pos| is_legal_move(board, pos, mover, forbidden_rules))
        .collect()
}

/// Every legal empty cell on the board, row-major.
pub fn all_candidates(board: &Board, mover: Stone, forbidden_rules: bool) -> Vec<Pos> {
    board
        .empty_cells()
        .filter(|&pos| is_legal_move(board, pos, mover, forbidden_rules))
        .collect()
}

/// Stable sort by Chebyshev distance to the centre, nearest first.
pub fn rank_by_center(moves: &mut [Pos]) {
    moves.sort_by_key(|pos| pos.center_distance());
}
