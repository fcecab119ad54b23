//! Game rules for 15x15 Gomoku with optional renju restrictions
//!
//! - Win conditions (five in a row, overline handling)
//! - Draw detection (full board)
//! - Forbidden moves for Black (overline, double-four, double-three)

pub mod forbidden;
pub mod win;

pub use forbidden::{check_forbidden, is_legal_move, ForbiddenKind};
pub use win::{check_draw, check_win, count_line, winning_stones, DIRECTIONS};
