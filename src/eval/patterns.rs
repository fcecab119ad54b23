//! Pattern scores and the per-move shape classifier
//!
//! [`PatternScore`] holds the weight table shared by the evaluator.
//! [`analyze_position`] classifies the shapes a single stone would make; the
//! engine uses it for one-ply tactical checks only.

use crate::board::window::{self, matches_through_center};
use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 100_000;
    /// Open four: _OOOO_ (cannot be stopped)
    pub const ACTIVE_FOUR: i32 = 10_000;
    /// Blocked four: XOOOO_ or _OOOOX
    pub const BLOCKED_FOUR: i32 = 1_000;
    /// Open three: _OOO_, _OO_O_, _O_OO_
    pub const ACTIVE_THREE: i32 = 1_000;
    /// Blocked three: XOOO_ or _OOOX
    pub const BLOCKED_THREE: i32 = 100;
    /// Open two: _OO_
    pub const ACTIVE_TWO: i32 = 100;
    /// Blocked two: XOO_ or _OOX
    pub const BLOCKED_TWO: i32 = 10;
}

/// Cells read on each side of the analysed position
const RADIUS: usize = 6;
const WINDOW: usize = 2 * RADIUS + 1;

const OWN: u8 = b'X';
const OPP: u8 = b'O';
const EMPTY: u8 = b'_';
const EDGE: u8 = b'B';

const ACTIVE_FOUR: &[u8] = b"_XXXX_";

const BLOCKED_FOURS: [&[u8]; 7] = [
    b"BXXXX_", b"_XXXXB", b"OXXXX_", b"_XXXXO", b"XX_XX", b"XXX_X", b"X_XXX",
];

const ACTIVE_THREES: [&[u8]; 3] = [b"_XXX_", b"_XX_X_", b"_X_XX_"];

const BLOCKED_THREES: [&[u8]; 8] = [
    b"BXXX_", b"_XXXB", b"OXXX_", b"_XXXO", b"BXX_X", b"X_XXB", b"OXX_X", b"X_XXO",
];

const ACTIVE_TWOS: [&[u8]; 2] = [b"_XX_", b"_X_X_"];

const BLOCKED_TWOS: [&[u8]; 6] = [b"BXX_", b"_XXB", b"OXX_", b"_XXO", b"BX_X", b"X_XB"];

/// Shapes a stone at one position makes, merged over the four directions.
///
/// Flags are OR-ed across directions, counters summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternAnalysis {
    pub is_five: bool,
    pub is_active_four: bool,
    pub active_four_count: u32,
    pub blocked_four_count: u32,
    pub active_three_count: u32,
    pub blocked_three_count: u32,
    pub active_two_count: u32,
    pub blocked_two_count: u32,
}

impl PatternAnalysis {
    fn merge(&mut self, other: &PatternAnalysis) {
        self.is_five |= other.is_five;
        self.is_active_four |= other.is_active_four;
        self.active_four_count += other.active_four_count;
        self.blocked_four_count += other.blocked_four_count;
        self.active_three_count += other.active_three_count;
        self.blocked_three_count += other.blocked_three_count;
        self.active_two_count += other.active_two_count;
        self.blocked_two_count += other.blocked_two_count;
    }
}

fn count_shapes(w: &[u8], shapes: &[&[u8]]) -> u32 {
    shapes.iter().filter(|shape| matches_through_center(w, shape)).count() as u32
}

/// Classify one direction. A five short-circuits the rest.
fn recognize(w: &[u8]) -> PatternAnalysis {
    if matches_through_center(w, b"XXXXX") {
        return PatternAnalysis {
            is_five: true,
            ..PatternAnalysis::default()
        };
    }

    let active_four = matches_through_center(w, ACTIVE_FOUR);
    PatternAnalysis {
        is_five: false,
        is_active_four: active_four,
        active_four_count: u32::from(active_four),
        blocked_four_count: count_shapes(w, &BLOCKED_FOURS),
        active_three_count: count_shapes(w, &ACTIVE_THREES),
        blocked_three_count: count_shapes(w, &BLOCKED_THREES),
        active_two_count: count_shapes(w, &ACTIVE_TWOS),
        blocked_two_count: count_shapes(w, &BLOCKED_TWOS),
    }
}

/// Analyse the shapes `player` would make with a stone at `pos`.
///
/// The stone is simulated: whatever `pos` currently holds, it is read as
/// `player`'s. The board is not modified.
pub fn analyze_position(board: &Board, pos: Pos, player: Stone) -> PatternAnalysis {
    let opponent = player.opponent();
    let mut result = PatternAnalysis::default();

    for &(dr, dc) in &DIRECTIONS {
        let w: [u8; WINDOW] = window::read(board, pos, dr, dc, OWN, |cell| match cell {
            None => EDGE,
            Some(s) if s == player => OWN,
            Some(s) if s == opponent => OPP,
            Some(_) => EMPTY,
        });
        result.merge(&recognize(&w));
    }

    result
}
