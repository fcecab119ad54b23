//! Error types for board parsing, move validation and engine requests

use thiserror::Error;

use crate::board::Pos;

/// Errors from building a board or committing a move onto it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 15 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} cells, expected 15")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell {cell:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, cell: char },

    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("cannot place an empty stone at {0}")]
    EmptyStone(Pos),
}

/// Errors surfaced by the request layer.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid board: {0}")]
    Board(#[from] BoardError),

    #[error("unknown difficulty {0:?} (expected easy, medium or hard)")]
    UnknownDifficulty(String),

    #[error("mover must be black or white")]
    InvalidMover,

    #[error("malformed request: {0}")]
    Protocol(#[from] serde_json::Error),
}
