//! Gomoku AI engine with optional renju restrictions
//!
//! A decision engine for 15x15 connect-five:
//! - Five in a row wins
//! - Under renju rules Black may not play overlines, double-fours or
//!   double-threes, and a Black overline does not win
//! - White is never restricted
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win, draw and forbidden-move detection
//! - [`eval`]: Pattern classification and static evaluation
//! - [`search`]: Candidate generation, transposition cache, alpha-beta
//! - [`engine`]: Move-selection strategies behind the [`AiPlayer`] trait
//! - [`protocol`]: JSON request/response layer
//!
//! # Quick Start
//!
//! ```
//! use renju::{AIEngine, AiPlayer, Board, Difficulty, Pos, SearchConfig, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! let config = SearchConfig::new(Difficulty::Easy, true);
//! let result = engine.best_move(&board, Stone::White, &config);
//! board.apply_move(result.best_move, Stone::White).unwrap();
//! println!("AI plays at {}", result.best_move);
//! ```
//!
//! # Search Priority
//!
//! 1. Centre on an empty board
//! 2. Immediate five, then blocking the opponent's five
//! 3. Making an open four, then blocking the opponent's open four
//! 4. Minimax with alpha-beta pruning
//!
//! The engine never mutates the caller's board and keeps no state across
//! calls beyond a cache that is cleared on entry.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Stone, BOARD_SIZE, CENTER};
pub use engine::{AIEngine, AiPlayer, MoveResult, RandomAI, SearchType};
pub use error::{BoardError, EngineError};
pub use protocol::{handle_request, EngineRequest, EngineResponse};
pub use rules::{check_draw, check_forbidden, check_win, ForbiddenKind};
pub use search::{Difficulty, SearchConfig};
