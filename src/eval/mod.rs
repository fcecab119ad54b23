//! Evaluation module for Gomoku positions
//!
//! - Weight table for line patterns (fives, fours, threes, twos)
//! - Per-move shape classification for tactical checks
//! - Whole-board static evaluation for search leaves and move ordering

pub mod heuristic;
pub mod patterns;

pub use heuristic::{all_lines, evaluate, Line};
pub use patterns::{analyze_position, PatternAnalysis, PatternScore};
