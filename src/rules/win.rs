//! Win and draw detection
//!
//! Only the four lines through the last move are inspected. Exactly five in a
//! row wins. Longer runs (overlines) win too, except for Black when the renju
//! restrictions are enabled.

use crate::board::{Board, Pos, Stone, WIN_LENGTH};

/// Direction vectors in fixed order: horizontal, vertical, diagonal, anti-diagonal
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Consecutive `stone` cells starting one step from `pos` along `(dr, dc)`.
#[inline]
fn run_from(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    (1..)
        .map_while(|i| pos.offset(dr, dc, i))
        .take_while(|&p| board.get(p) == stone)
        .count()
}

/// Length of the `stone` run through `pos`, counting `pos` itself.
#[inline]
pub fn count_line(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> usize {
    1 + run_from(board, pos, stone, dr, dc) + run_from(board, pos, stone, -dr, -dc)
}

/// Check whether the stone at `last_move` ends the game.
///
/// With `forbidden_rules`, a Black overline does not count for that direction;
/// a genuine five in another direction still wins.
pub fn check_win(board: &Board, last_move: Pos, forbidden_rules: bool) -> bool {
    let stone = board.get(last_move);
    if stone == Stone::Empty {
        return false;
    }

    for &(dr, dc) in &DIRECTIONS {
        let count = count_line(board, last_move, stone, dr, dc);
        if count == WIN_LENGTH {
            return true;
        }
        if count > WIN_LENGTH && !(stone == Stone::Black && forbidden_rules) {
            return true;
        }
    }
    false
}

/// Stones of the first winning line through `last_move`, one end to the other.
///
/// Directions are tried in [`DIRECTIONS`] order. Any run of five or more
/// qualifies. Returns an empty vector if there is none.
pub fn winning_stones(board: &Board, last_move: Pos) -> Vec<Pos> {
    let stone = board.get(last_move);
    if stone == Stone::Empty {
        return Vec::new();
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_from(board, last_move, stone, -dr, -dc) as i32;
        let forward = run_from(board, last_move, stone, dr, dc) as i32;
        if (back + forward + 1) as usize >= WIN_LENGTH {
            return (-back..=forward)
                .filter_map(|i| last_move.offset(dr, dc, i))
                .collect();
        }
    }
    Vec::new()
}

/// True iff no empty cell remains
#[inline]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_of(board: &mut Board, row: u8, cols: std::ops::Range<u8>, stone: Stone) {
        for c in cols {
            board.place_stone(Pos::new(row, c), stone);
        }
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let mut board = Board::new();
        row_of(&mut board, 7, 0..5, Stone::Black);
        assert!(check_win(&board, Pos::new(7, 4), false));
        assert!(check_win(&board, Pos::new(7, 2), true));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, 9), Stone::White);
        }
        assert!(check_win(&board, Pos::new(0, 9), true));
    }

    #[test]
    fn test_five_diagonals() {
        let mut board = Board::new();
        for i in 0..5 {
            board.place_stone(Pos::new(i, i), Stone::White);
            board.place_stone(Pos::new(4 + i, 14 - i), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(2, 2), false));
        assert!(check_win(&board, Pos::new(8, 10), true));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let mut board = Board::new();
        row_of(&mut board, 7, 0..4, Stone::Black);
        assert!(!check_win(&board, Pos::new(7, 3), false));
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert!(!check_win(&board, Pos::new(7, 7), false));
        assert!(winning_stones(&board, Pos::new(7, 7)).is_empty());
    }

    #[test]
    fn test_black_overline_with_forbidden_rules() {
        let mut board = Board::new();
        row_of(&mut board, 7, 2..8, Stone::Black);
        assert!(!check_win(&board, Pos::new(7, 5), true));
        assert!(check_win(&board, Pos::new(7, 5), false));
    }

    #[test]
    fn test_white_overline_always_wins() {
        let mut board = Board::new();
        row_of(&mut board, 7, 2..9, Stone::White);
        assert!(check_win(&board, Pos::new(7, 8), true));
    }

    #[test]
    fn test_overline_plus_genuine_five_wins() {
        let mut board = Board::new();
        // Six horizontally through (7,7) and exactly five vertically
        row_of(&mut board, 7, 2..8, Stone::Black);
        for r in 3..7 {
            board.place_stone(Pos::new(r, 7), Stone::Black);
        }
        assert!(check_win(&board, Pos::new(7, 7), true));
    }

    #[test]
    fn test_winning_stones_ordered() {
        let mut board = Board::new();
        row_of(&mut board, 3, 4..9, Stone::Black);
        let line = winning_stones(&board, Pos::new(3, 6));
        let expected: Vec<Pos> = (4..9).map(|c| Pos::new(3, c)).collect();
        assert_eq!(line, expected);
    }

    #[test]
    fn test_winning_stones_first_direction_wins() {
        let mut board = Board::new();
        // Vertical five and horizontal five through (7,7): horizontal comes first
        row_of(&mut board, 7, 5..10, Stone::White);
        for r in 3..7 {
            board.place_stone(Pos::new(r, 7), Stone::White);
        }
        let line = winning_stones(&board, Pos::new(7, 7));
        assert_eq!(line.first(), Some(&Pos::new(7, 5)));
        assert_eq!(line.len(), 5);
    }

    #[test]
    fn test_winning_stones_at_corner() {
        let mut board = Board::new();
        for i in 10..15 {
            board.place_stone(Pos::new(i, i), Stone::Black);
        }
        let line = winning_stones(&board, Pos::new(14, 14));
        assert_eq!(line.len(), 5);
        assert_eq!(line[0], Pos::new(10, 10));
        assert_eq!(line[4], Pos::new(14, 14));
    }

    #[test]
    fn test_draw_only_when_full() {
        let mut board = Board::new();
        assert!(!check_draw(&board));
        for idx in 0..crate::board::TOTAL_CELLS {
            board.place_stone(Pos::from_index(idx), Stone::White);
        }
        assert!(check_draw(&board));
    }
}
