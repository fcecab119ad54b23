//! Search module for the Gomoku AI
//!
//! Contains:
//! - Per-call configuration selected by difficulty
//! - Candidate generation around existing stones
//! - Transposition cache keyed by board encoding
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod config;
pub mod movegen;
pub mod tt;

pub use alphabeta::{order_moves, SearchResult, Searcher, WIN_THRESHOLD};
pub use config::{Difficulty, SearchConfig};
pub use movegen::{all_candidates, generate_candidates, rank_by_center, MAX_BRANCHING};
pub use tt::{CacheStats, TranspositionCache};
