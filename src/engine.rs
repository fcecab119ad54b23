//! Move selection strategies
//!
//! [`AIEngine`] follows a fixed priority:
//!
//! 1. **Opening**: an empty board is answered with the centre
//! 2. **Candidates**: cells near stones, then any legal cell, then the centre
//! 3. **Critical moves**: win now, block a five, make an open four, block an
//!    open four
//! 4. **Alpha-Beta**: minimax over the candidates ordered by one-ply score
//!
//! # Example
//!
//! ```
//! use renju::{AIEngine, AiPlayer, Board, Difficulty, Pos, SearchConfig, Stone};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let config = SearchConfig::new(Difficulty::Easy, true);
//! let result = engine.best_move(&board, Stone::White, &config);
//! println!("Best move: {}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! ```

use std::time::Instant;

use log::{debug, trace, warn};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::board::{Board, Pos, Stone, CENTER};
use crate::eval::{analyze_position, evaluate, PatternAnalysis};
use crate::rules::is_legal_move;
use crate::search::{all_candidates, generate_candidates, SearchConfig, SearchResult, Searcher};

/// Score reported for a move taken by the critical-move short-circuit
pub const CRITICAL_SCORE: i32 = 10_000;

/// Stage that produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SearchType {
    /// Empty board, centre played
    Opening,
    /// No legal candidate anywhere, centre returned
    Fallback,
    /// Move completes five
    ImmediateWin,
    /// Move occupies the opponent's five point
    BlockFive,
    /// Move makes an open four
    ActiveFour,
    /// Move occupies a cell where the opponent would make an open four
    BlockActiveFour,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Uniform pick by [`RandomAI`]
    Random,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    pub score: i32,
    pub search_type: SearchType,
    /// Nodes searched by alpha-beta, zero for short-circuited stages
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn fixed(best_move: Pos, score: i32, search_type: SearchType, start: Instant) -> Self {
        Self {
            best_move,
            score,
            search_type,
            nodes: 0,
            time_ms: elapsed_ms(start),
        }
    }

    #[inline]
    fn from_alphabeta(best_move: Pos, result: &SearchResult, start: Instant) -> Self {
        Self {
            best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            nodes: result.nodes,
            time_ms: elapsed_ms(start),
        }
    }
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// A move-selection strategy.
///
/// Implementations never mutate the caller's board and always return a
/// move; when nothing is playable the centre comes back with
/// [`SearchType::Fallback`]. The caller must re-validate the move before
/// committing it.
pub trait AiPlayer {
    fn best_move(&mut self, board: &Board, color: Stone, config: &SearchConfig) -> MoveResult;
}

/// Candidate cells for `color`: near existing stones, else anywhere legal.
pub fn candidate_moves(board: &Board, color: Stone, config: &SearchConfig) -> Vec<Pos> {
    let near = generate_candidates(board, color, config.radius, config.forbidden_rules);
    if !near.is_empty() {
        return near;
    }
    debug!("no candidates within radius {}, scanning the whole board", config.radius);
    all_candidates(board, color, config.forbidden_rules)
}

/// Minimax engine with one-ply tactical short-circuits.
///
/// Holds only the transposition cache, which is cleared at every call.
#[derive(Debug, Default)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache statistics of the last call
    pub fn cache_stats(&self) -> crate::search::CacheStats {
        self.searcher.cache_stats()
    }

    /// First candidate where `player` would get a shape accepted by `hit`.
    ///
    /// When `player` is not the mover the cell must also be legal for
    /// `player`, so Black's forbidden points are never treated as threats.
    fn find_shape(
        board: &Board,
        candidates: &[Pos],
        player: Stone,
        mover: Stone,
        forbidden_rules: bool,
        hit: impl Fn(&PatternAnalysis) -> bool,
    ) -> Option<Pos> {
        candidates.iter().copied().find(|&pos| {
            hit(&analyze_position(board, pos, player))
                && (player == mover || is_legal_move(board, pos, player, forbidden_rules))
        })
    }

    /// The four critical checks in priority order.
    fn critical_move(
        board: &Board,
        candidates: &[Pos],
        color: Stone,
        forbidden_rules: bool,
    ) -> Option<(Pos, SearchType)> {
        let opponent = color.opponent();
        let checks: [(Stone, fn(&PatternAnalysis) -> bool, SearchType); 4] = [
            (color, |a: &PatternAnalysis| a.is_five, SearchType::ImmediateWin),
            (opponent, |a: &PatternAnalysis| a.is_five, SearchType::BlockFive),
            (color, |a: &PatternAnalysis| a.is_active_four, SearchType::ActiveFour),
            (opponent, |a: &PatternAnalysis| a.is_active_four, SearchType::BlockActiveFour),
        ];

        checks.into_iter().find_map(|(player, hit, kind)| {
            Self::find_shape(board, candidates, player, color, forbidden_rules, hit)
                .map(|pos| (pos, kind))
        })
    }
}

impl AiPlayer for AIEngine {
    fn best_move(&mut self, board: &Board, color: Stone, config: &SearchConfig) -> MoveResult {
        let start = Instant::now();
        self.searcher.clear();

        if board.is_board_empty() {
            debug!("opening: playing centre {}", CENTER);
            return MoveResult::fixed(CENTER, 0, SearchType::Opening, start);
        }

        let candidates = candidate_moves(board, color, config);
        if candidates.is_empty() {
            warn!("no legal move for {}, returning centre fallback", color);
            return MoveResult::fixed(CENTER, 0, SearchType::Fallback, start);
        }

        if let Some((pos, kind)) =
            Self::critical_move(board, &candidates, color, config.forbidden_rules)
        {
            trace!("critical move {:?} at {} for {}", kind, pos, color);
            return MoveResult::fixed(pos, CRITICAL_SCORE, kind, start);
        }

        debug!(
            "alpha-beta for {}: depth {}, radius {}, {} candidates",
            color,
            config.depth,
            config.radius,
            candidates.len()
        );
        let result = self.searcher.search(board, color, config, &candidates);
        match result.best_move {
            Some(pos) => MoveResult::from_alphabeta(pos, &result, start),
            None => {
                warn!("search returned no move from {} candidates", candidates.len());
                MoveResult::fixed(CENTER, 0, SearchType::Fallback, start)
            }
        }
    }
}

/// Plays a uniformly random legal candidate.
#[derive(Debug)]
pub struct RandomAI {
    rng: SmallRng,
}

impl RandomAI {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Deterministic sequence for a given seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl AiPlayer for RandomAI {
    fn best_move(&mut self, board: &Board, color: Stone, config: &SearchConfig) -> MoveResult {
        let start = Instant::now();

        if board.is_board_empty() {
            return MoveResult::fixed(CENTER, 0, SearchType::Opening, start);
        }

        let candidates = candidate_moves(board, color, config);
        let Some(&pos) = candidates.choose(&mut self.rng) else {
            warn!("no legal move for {}, returning centre fallback", color);
            return MoveResult::fixed(CENTER, 0, SearchType::Fallback, start);
        };

        let mut after = board.clone();
        after.place_stone(pos, color);
        let score = evaluate(&after, color);
        MoveResult::fixed(pos, score, SearchType::Random, start)
    }
}
