//! Static evaluation of a whole board
//!
//! Every maximal line of at least five cells (rows, columns and both
//! diagonal families) is scored once for each side with the
//! [`PatternScore`] table. The result is `mine - theirs`, so
//! `evaluate(b, Black) == -evaluate(b, White)` always holds.

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

use super::patterns::PatternScore;

const OWN: u8 = b'X';
const OTHER: u8 = b'O';
const EMPTY: u8 = b'_';

const SPLIT_FOURS: [&[u8]; 3] = [b"XX_XX", b"XXX_X", b"X_XXX"];
const SPLIT_THREES: [&[u8]; 2] = [b"_XX_X_", b"_X_XX_"];

/// A maximal straight line across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: Pos,
    pub dr: i32,
    pub dc: i32,
    pub len: usize,
}

impl Line {
    pub fn cells(self) -> impl Iterator<Item = Pos> {
        (0..self.len as i32).filter_map(move |i| self.start.offset(self.dr, self.dc, i))
    }
}

/// All rows, columns and diagonals with at least five cells.
pub fn all_lines() -> impl Iterator<Item = Line> {
    let n = BOARD_SIZE as u8;
    let rows = (0..n).map(move |r| Line {
        start: Pos::new(r, 0),
        dr: 0,
        dc: 1,
        len: BOARD_SIZE,
    });
    let cols = (0..n).map(move |c| Line {
        start: Pos::new(0, c),
        dr: 1,
        dc: 0,
        len: BOARD_SIZE,
    });
    // Down-right diagonals start on the top row or the left column
    let diag = (0..n)
        .map(move |c| Pos::new(0, c))
        .chain((1..n).map(move |r| Pos::new(r, 0)))
        .map(|start| Line {
            start,
            dr: 1,
            dc: 1,
            len: BOARD_SIZE - usize::from(start.row.max(start.col)),
        });
    // Down-left diagonals start on the top row or the right column
    let anti = (0..n)
        .map(move |c| Pos::new(0, c))
        .chain((1..n).map(move |r| Pos::new(r, n - 1)))
        .map(|start| Line {
            start,
            dr: 1,
            dc: -1,
            len: (usize::from(start.col) + 1).min(BOARD_SIZE - usize::from(start.row)),
        });

    rows.chain(cols)
        .chain(diag)
        .chain(anti)
        .filter(|line| line.len >= WIN_LENGTH)
}

/// Evaluate the board from the perspective of `player`.
///
/// Positive values favour `player`. A completed five on a line contributes
/// [`PatternScore::FIVE`] for that line.
#[must_use]
pub fn evaluate(board: &Board, player: Stone) -> i32 {
    let opponent = player.opponent();
    let mut mine = 0;
    let mut theirs = 0;

    let mut cells = [Stone::Empty; BOARD_SIZE];
    for line in all_lines() {
        for (slot, pos) in cells.iter_mut().zip(line.cells()) {
            *slot = board.get(pos);
        }
        let cells = &cells[..line.len];
        mine += score_line(cells, player);
        theirs += score_line(cells, opponent);
    }

    mine - theirs
}

/// A maximal run of `player` stones within a line
struct Run {
    start: usize,
    len: usize,
    open_ends: u8,
}

/// Score one line for `player`.
///
/// Classification goes strongest first. Cells credited to a shape are
/// consumed so a weaker category never re-counts the same stones.
pub fn score_line(cells: &[Stone], player: Stone) -> i32 {
    let n = cells.len();
    let mut line = [EMPTY; BOARD_SIZE];
    for (byte, &cell) in line.iter_mut().zip(cells) {
        *byte = match cell {
            Stone::Empty => EMPTY,
            s if s == player => OWN,
            _ => OTHER,
        };
    }
    let line = &line[..n];

    let runs = find_runs(line);
    if runs.iter().any(|run| run.len >= WIN_LENGTH) {
        return PatternScore::FIVE;
    }

    let mut consumed = [false; BOARD_SIZE];
    let mut score = 0;

    score += take_runs(&runs, &mut consumed, 4, 2, PatternScore::ACTIVE_FOUR);
    score += take_runs(&runs, &mut consumed, 4, 1, PatternScore::BLOCKED_FOUR);
    score += take_shapes(line, &mut consumed, &SPLIT_FOURS, PatternScore::BLOCKED_FOUR);
    score += take_runs(&runs, &mut consumed, 3, 2, PatternScore::ACTIVE_THREE);
    score += take_shapes(line, &mut consumed, &SPLIT_THREES, PatternScore::ACTIVE_THREE);
    score += take_runs(&runs, &mut consumed, 3, 1, PatternScore::BLOCKED_THREE);
    score += take_runs(&runs, &mut consumed, 2, 2, PatternScore::ACTIVE_TWO);
    score += take_runs(&runs, &mut consumed, 2, 1, PatternScore::BLOCKED_TWO);

    score
}

/// Credit every unconsumed run of exactly `len` stones with `open` free ends.
fn take_runs(runs: &[Run], consumed: &mut [bool], len: usize, open: u8, value: i32) -> i32 {
    let mut score = 0;
    for run in runs.iter().filter(|r| r.len == len && r.open_ends == open) {
        let span = &mut consumed[run.start..run.start + run.len];
        if span.iter().any(|&c| c) {
            continue;
        }
        span.iter_mut().for_each(|c| *c = true);
        score += value;
    }
    score
}

fn find_runs(line: &[u8]) -> Vec<Run> {
    let n = line.len();
    let mut runs = Vec::new();
    let mut i = 0;
    while i < n {
        if line[i] != OWN {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && line[i] == OWN {
            i += 1;
        }
        let left_open = start > 0 && line[start - 1] == EMPTY;
        let right_open = i < n && line[i] == EMPTY;
        runs.push(Run {
            start,
            len: i - start,
            open_ends: u8::from(left_open) + u8::from(right_open),
        });
    }
    runs
}

/// Count non-overlapping occurrences of `shapes` whose stones are not yet
/// consumed, consuming them.
fn take_shapes(line: &[u8], consumed: &mut [bool], shapes: &[&[u8]], value: i32) -> i32 {
    let mut score = 0;
    for shape in shapes {
        let k = shape.len();
        let mut i = 0;
        while i + k <= line.len() {
            let hit = &line[i..i + k] == *shape
                && (i..i + k).all(|j| line[j] != OWN || !consumed[j]);
            if hit {
                for j in i..i + k {
                    if line[j] == OWN {
                        consumed[j] = true;
                    }
                }
                score += value;
                i += k;
            } else {
                i += 1;
            }
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Vec<Stone> {
        text.chars()
            .map(|ch| match ch {
                'X' => Stone::Black,
                'O' => Stone::White,
                _ => Stone::Empty,
            })
            .collect()
    }

    #[test]
    fn test_line_count() {
        // 15 rows, 15 columns, 11 + 11 diagonals of each family
        assert_eq!(all_lines().count(), 15 + 15 + 21 + 21);
        assert!(all_lines().all(|l| l.cells().count() == l.len));
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Stone::Black), 0);
    }

    #[test]
    fn test_five_short_circuits_line() {
        let cells = line("_XXXXX___XX____");
        assert_eq!(score_line(&cells, Stone::Black), PatternScore::FIVE);
    }

    #[test]
    fn test_active_and_blocked_four() {
        assert_eq!(score_line(&line("__XXXX_________"), Stone::Black), PatternScore::ACTIVE_FOUR);
        assert_eq!(score_line(&line("_OXXXX_________"), Stone::Black), PatternScore::BLOCKED_FOUR);
        // Board edge blocks like a stone
        assert_eq!(score_line(&line("XXXX___________"), Stone::Black), PatternScore::BLOCKED_FOUR);
        assert_eq!(score_line(&line("OXXXXO_________"), Stone::Black), 0);
    }

    #[test]
    fn test_split_four_not_double_counted() {
        assert_eq!(score_line(&line("__XXX_X________"), Stone::Black), PatternScore::BLOCKED_FOUR);
    }

    #[test]
    fn test_threes() {
        assert_eq!(score_line(&line("___XXX_________"), Stone::Black), PatternScore::ACTIVE_THREE);
        assert_eq!(score_line(&line("__XX_X_________"), Stone::Black), PatternScore::ACTIVE_THREE);
        assert_eq!(score_line(&line("__OXXX_________"), Stone::Black), PatternScore::BLOCKED_THREE);
    }

    #[test]
    fn test_twos() {
        assert_eq!(score_line(&line("___XX__________"), Stone::Black), PatternScore::ACTIVE_TWO);
        assert_eq!(score_line(&line("__OXX__________"), Stone::Black), PatternScore::BLOCKED_TWO);
    }

    #[test]
    fn test_evaluate_perspective() {
        let mut board = Board::new();
        for c in 5..8 {
            board.place_stone(Pos::new(7, c), Stone::Black);
        }
        assert!(evaluate(&board, Stone::Black) > 0);
        assert!(evaluate(&board, Stone::White) < 0);
    }

    #[test]
    fn test_evaluate_antisymmetric() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::Black);
        board.place_stone(Pos::new(7, 8), Stone::Black);
        board.place_stone(Pos::new(8, 8), Stone::White);
        board.place_stone(Pos::new(9, 9), Stone::White);
        board.place_stone(Pos::new(6, 6), Stone::White);
        board.place_stone(Pos::new(0, 0), Stone::Black);
        assert_eq!(evaluate(&board, Stone::Black), -evaluate(&board, Stone::White));
    }

    #[test]
    fn test_evaluate_five_dominates() {
        let mut board = Board::new();
        for c in 0..5 {
            board.place_stone(Pos::new(14, c), Stone::White);
        }
        assert!(evaluate(&board, Stone::White) >= PatternScore::FIVE);
        assert!(evaluate(&board, Stone::Black) <= -PatternScore::FIVE);
    }

    #[test]
    fn test_diagonal_lines_are_scanned() {
        let mut board = Board::new();
        for i in 0..3 {
            board.place_stone(Pos::new(4 + i, 10 - i), Stone::Black);
        }
        // Open three on the anti-diagonal, plus nothing else of value
        assert_eq!(evaluate(&board, Stone::Black), PatternScore::ACTIVE_THREE);
    }
}
