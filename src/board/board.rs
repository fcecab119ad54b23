//! Board structure backed by one bitboard per color

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE, TOTAL_CELLS};
use crate::error::BoardError;

/// Canonical encoding of a position, used as the transposition cache key.
///
/// Carries the stones only: side to move and remaining depth are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardKey {
    black: Bitboard,
    white: Bitboard,
}

/// Game board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Parse a board from text rows.
    ///
    /// Accepts `.`, `_`, `0` for empty, `X`, `B`, `1` for black and
    /// `O`, `W`, `2` for white (case-insensitive letters).
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardError> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::WrongRowCount(rows.len()));
        }

        let mut board = Board::new();
        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != BOARD_SIZE {
                return Err(BoardError::WrongRowLength { row: r, len });
            }
            for (c, ch) in line.chars().enumerate() {
                let stone = match ch.to_ascii_uppercase() {
                    '.' | '_' | '0' => Stone::Empty,
                    'X' | 'B' | '1' => Stone::Black,
                    'O' | 'W' | '2' => Stone::White,
                    other => {
                        return Err(BoardError::InvalidCell {
                            row: r,
                            col: c,
                            cell: other,
                        })
                    }
                };
                board.place_stone(Pos::new(r as u8, c as u8), stone);
            }
        }
        Ok(board)
    }

    /// Render as rows of `.`, `X` and `O`, the inverse of [`Board::from_rows`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..BOARD_SIZE as u8)
            .map(|r| {
                (0..BOARD_SIZE as u8)
                    .map(|c| match self.get(Pos::new(r, c)) {
                        Stone::Empty => '.',
                        Stone::Black => 'X',
                        Stone::White => 'O',
                    })
                    .collect()
            })
            .collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without any legality check.
    /// Use `apply_move` for moves coming from outside the engine.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Commit a move after re-validating it: the cell must be on the board
    /// and still empty.
    pub fn apply_move(&mut self, pos: Pos, stone: Stone) -> Result<(), BoardError> {
        if !Pos::is_valid(i32::from(pos.row), i32::from(pos.col)) {
            return Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        if stone == Stone::Empty {
            return Err(BoardError::EmptyStone(pos));
        }
        if !self.is_empty(pos) {
            return Err(BoardError::Occupied(pos));
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    #[inline]
    pub fn key(&self) -> BoardKey {
        BoardKey {
            black: self.black,
            white: self.white,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;
        for (r, row) in self.to_rows().iter().enumerate() {
            write!(f, "{:2} ", r)?;
            for ch in row.chars() {
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
