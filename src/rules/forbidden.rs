//! Renju forbidden moves for Black
//!
//! A Black stone is forbidden if it makes, in priority order:
//! 1. an overline (six or more in a row),
//! 2. a double-four (fours in two or more directions),
//! 3. a double-three (open threes in two or more directions).
//!
//! A stone that completes exactly five is a win and never forbidden.
//! White is never restricted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::window::{self, contains, matches_through_center};
use crate::board::{Board, Pos, Stone, WIN_LENGTH};

use super::win::{count_line, DIRECTIONS};

/// Cells read on each side of the candidate
const RADIUS: usize = 4;
const WINDOW: usize = 2 * RADIUS + 1;

const OWN: u8 = b'1';
const EMPTY: u8 = b'0';
/// Opponent stone or board edge
const WALL: u8 = b'2';

/// Four shapes: one empty cell away from five
const FOUR_SHAPES: [&[u8]; 5] = [b"01111", b"11110", b"10111", b"11011", b"11101"];

/// Open-three shapes: one move away from an open four
const THREE_SHAPES: [&[u8]; 3] = [b"01110", b"010110", b"011010"];

/// Kind of renju violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForbiddenKind {
    Overline,
    DoubleFour,
    DoubleThree,
}

impl fmt::Display for ForbiddenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ForbiddenKind::Overline => "forbidden: overline",
            ForbiddenKind::DoubleFour => "forbidden: double four",
            ForbiddenKind::DoubleThree => "forbidden: double three",
        };
        f.write_str(text)
    }
}

/// Encode the window around `pos` from Black's point of view.
fn black_window(board: &Board, pos: Pos, dr: i32, dc: i32) -> [u8; WINDOW] {
    window::read(board, pos, dr, dc, OWN, |cell| match cell {
        Some(Stone::Black) => OWN,
        Some(Stone::Empty) => EMPTY,
        Some(Stone::White) | None => WALL,
    })
}

fn is_four(w: &[u8]) -> bool {
    if contains(w, b"11111") {
        return false;
    }
    FOUR_SHAPES.iter().any(|shape| matches_through_center(w, shape))
}

fn is_open_three(w: &[u8]) -> bool {
    // A direction already holding a four (or longer) is classified as that
    if contains(w, b"1111") || is_four(w) {
        return false;
    }
    THREE_SHAPES.iter().any(|shape| matches_through_center(w, shape))
}

/// Check whether a Black stone at `pos` would be forbidden.
///
/// The board is never modified; the stone is only simulated. Occupied
/// cells return `None` since they are not a placement at all.
pub fn check_forbidden(board: &Board, pos: Pos) -> Option<ForbiddenKind> {
    if !board.is_empty(pos) {
        return None;
    }

    let mut scratch = board.clone();
    scratch.place_stone(pos, Stone::Black);

    let runs = DIRECTIONS.map(|(dr, dc)| count_line(&scratch, pos, Stone::Black, dr, dc));
    if runs.contains(&WIN_LENGTH) {
        return None;
    }
    if runs.iter().any(|&n| n > WIN_LENGTH) {
        return Some(ForbiddenKind::Overline);
    }

    let windows = DIRECTIONS.map(|(dr, dc)| black_window(&scratch, pos, dr, dc));

    let fours = windows.iter().filter(|w| is_four(&w[..])).count();
    if fours >= 2 {
        return Some(ForbiddenKind::DoubleFour);
    }

    let threes = windows.iter().filter(|w| is_open_three(&w[..])).count();
    if threes >= 2 {
        return Some(ForbiddenKind::DoubleThree);
    }

    None
}

/// Check if a move is legal: the cell is empty and, for Black under renju
/// rules, the move is not forbidden.
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, stone: Stone, forbidden_rules: bool) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    !(forbidden_rules && stone == Stone::Black && check_forbidden(board, pos).is_some())
}
