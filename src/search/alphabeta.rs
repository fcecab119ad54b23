//! Minimax search with alpha-beta pruning and a transposition cache
//!
//! Scores are always from the root player's perspective: maximising nodes
//! move for that player, minimising nodes for the opponent. Leaves are
//! scored by [`evaluate`]. A move that completes five ends the line on the
//! spot and scores exactly [`WIN_THRESHOLD`] for the mover's side.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::search::{generate_candidates, Difficulty, SearchConfig, Searcher};
//!
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let config = SearchConfig::new(Difficulty::Easy, true);
//! let candidates = generate_candidates(&board, Stone::White, config.radius, true);
//! let mut searcher = Searcher::new();
//! let result = searcher.search(&board, Stone::White, &config, &candidates);
//! assert!(result.best_move.is_some());
//! ```

use log::debug;

use crate::board::{Board, Pos, Stone};
use crate::eval::{evaluate, PatternScore};
use crate::rules::check_win;

use super::config::SearchConfig;
use super::movegen::{generate_candidates, rank_by_center, MAX_BRANCHING};
use super::tt::{CacheStats, TranspositionCache};

/// Scores at or beyond this magnitude mean a five is on the board
pub const WIN_THRESHOLD: i32 = PatternScore::FIVE;

/// Infinity score for alpha-beta bounds
const INF: i32 = i32::MAX;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` only when there were no candidates
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Nodes visited below the root
    pub nodes: u64,
    pub cache: CacheStats,
}

/// Who the search is for and under which settings
#[derive(Clone, Copy)]
struct Context {
    player: Stone,
    config: SearchConfig,
}

/// Alpha-beta searcher owning the transposition cache
#[derive(Debug, Default)]
pub struct Searcher {
    cache: TranspositionCache,
    nodes: u64,
}

impl Searcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the cache and node counter.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.nodes = 0;
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Search `candidates` for `player` and return the best one.
    ///
    /// The caller's board is cloned once; every ply plays and takes back
    /// stones on that copy. The cache is not cleared here, see [`clear`](Self::clear).
    pub fn search(
        &mut self,
        board: &Board,
        player: Stone,
        config: &SearchConfig,
        candidates: &[Pos],
    ) -> SearchResult {
        self.nodes = 0;
        let ctx = Context {
            player,
            config: *config,
        };

        let ordered = order_moves(board, player, candidates);
        let mut work = board.clone();
        let mut best_move = ordered.first().map(|&(pos, _)| pos);
        let mut best_score = -INF;
        let mut alpha = -INF;

        for &(pos, _) in &ordered {
            work.place_stone(pos, player);
            let score = if check_win(&work, pos, config.forbidden_rules) {
                WIN_THRESHOLD
            } else {
                self.minimax(&mut work, config.depth.saturating_sub(1), false, alpha, INF, ctx)
            };
            work.remove_stone(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
            alpha = alpha.max(score);
            if best_score >= WIN_THRESHOLD {
                break;
            }
        }

        let score = if best_move.is_some() { best_score } else { 0 };
        let cache = self.cache.stats();
        debug!(
            "alpha-beta: {} root moves, best {:?} score {}, {} nodes, {} cached ({:.1}% hits)",
            ordered.len(),
            best_move,
            score,
            self.nodes,
            cache.entries,
            cache.hit_rate()
        );

        SearchResult {
            best_move,
            score,
            nodes: self.nodes,
            cache,
        }
    }

    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
        ctx: Context,
    ) -> i32 {
        self.nodes += 1;

        let key = board.key();
        if let Some(score) = self.cache.probe(&key) {
            return score;
        }
        let score = self.expand(board, depth, maximizing, alpha, beta, ctx);
        self.cache.store(key, score);
        score
    }

    fn expand(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        ctx: Context,
    ) -> i32 {
        if depth == 0 {
            return evaluate(board, ctx.player);
        }

        let mover = if maximizing {
            ctx.player
        } else {
            ctx.player.opponent()
        };
        let mut moves = generate_candidates(
            board,
            mover,
            ctx.config.radius,
            ctx.config.forbidden_rules,
        );
        if moves.is_empty() {
            return evaluate(board, ctx.player);
        }
        rank_by_center(&mut moves);
        moves.truncate(MAX_BRANCHING);

        let mut best = if maximizing { -INF } else { INF };
        for pos in moves {
            board.place_stone(pos, mover);
            let score = if check_win(board, pos, ctx.config.forbidden_rules) {
                five_score(mover, ctx.player)
            } else {
                self.minimax(board, depth - 1, !maximizing, alpha, beta, ctx)
            };
            board.remove_stone(pos);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha || best >= WIN_THRESHOLD {
                    break;
                }
            } else {
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha || best <= -WIN_THRESHOLD {
                    break;
                }
            }
        }
        best
    }
}

/// Score of a finished five from the root player's side
fn five_score(mover: Stone, player: Stone) -> i32 {
    if mover == player {
        WIN_THRESHOLD
    } else {
        -WIN_THRESHOLD
    }
}

/// Root move list: the [`MAX_BRANCHING`] candidates closest to the centre,
/// then sorted by the static score after playing each one, best first.
///
/// Ties keep their distance order.
pub fn order_moves(board: &Board, player: Stone, candidates: &[Pos]) -> Vec<(Pos, i32)> {
    let mut kept = candidates.to_vec();
    rank_by_center(&mut kept);
    kept.truncate(MAX_BRANCHING);

    let mut work = board.clone();
    let mut scored: Vec<(Pos, i32)> = kept
        .iter()
        .map(|&pos| {
            work.place_stone(pos, player);
            let score = evaluate(&work, player);
            work.remove_stone(pos);
            (pos, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CENTER;
    use crate::search::{all_candidates, Difficulty};

    fn place_all(board: &mut Board, cells: &[(u8, u8)], stone: Stone) {
        for &(r, c) in cells {
            board.place_stone(Pos::new(r, c), stone);
        }
    }

    fn run(board: &Board, player: Stone, difficulty: Difficulty) -> SearchResult {
        let config = SearchConfig::new(difficulty, true);
        let candidates = generate_candidates(board, player, config.radius, true);
        Searcher::new().search(board, player, &config, &candidates)
    }

    #[test]
    fn test_no_candidates() {
        let board = Board::new();
        let result = Searcher::new().search(&board, Stone::Black, &SearchConfig::default(), &[]);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_finds_completing_move() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        place_all(&mut board, &[(7, 2), (8, 8), (9, 9)], Stone::White);
        let result = run(&board, Stone::Black, Difficulty::Medium);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert!(result.score >= WIN_THRESHOLD);
    }

    #[test]
    fn test_five_scores_full_win_despite_opponent_shapes() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        // White open three and an extra pair keep evaluate below FIVE
        place_all(&mut board, &[(7, 2), (9, 8), (9, 9), (9, 10), (11, 4), (11, 5)], Stone::White);
        assert!(evaluate(&board, Stone::Black) < WIN_THRESHOLD);

        for difficulty in [Difficulty::Easy, Difficulty::Medium] {
            let result = run(&board, Stone::Black, difficulty);
            assert_eq!(result.best_move, Some(Pos::new(7, 7)));
            assert_eq!(result.score, WIN_THRESHOLD);
        }
    }

    #[test]
    fn test_unstoppable_double_four_scores_as_loss() {
        let mut board = Board::new();
        // Horizontal four wins at (7, 7), vertical four at (7, 8)
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        place_all(&mut board, &[(3, 8), (4, 8), (5, 8), (6, 8)], Stone::White);
        place_all(&mut board, &[(7, 2), (2, 8)], Stone::Black);

        let result = run(&board, Stone::Black, Difficulty::Easy);
        assert_eq!(result.score, -WIN_THRESHOLD);
    }

    #[test]
    fn test_blocks_opponent_five() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 3), (7, 4), (7, 5), (7, 6)], Stone::White);
        place_all(&mut board, &[(7, 2), (9, 9), (10, 10)], Stone::Black);
        let result = run(&board, Stone::Black, Difficulty::Easy);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_search_does_not_mutate_board() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 8)], Stone::Black);
        place_all(&mut board, &[(7, 8), (6, 6)], Stone::White);
        let before = board.clone();
        let result = run(&board, Stone::Black, Difficulty::Medium);
        assert_eq!(board, before);
        let mv = result.best_move.unwrap();
        assert!(board.is_empty(mv));
    }

    #[test]
    fn test_nodes_and_cache_are_used() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 7), (8, 7)], Stone::Black);
        place_all(&mut board, &[(7, 8), (8, 8)], Stone::White);
        let result = run(&board, Stone::Black, Difficulty::Medium);
        assert!(result.nodes > 0);
        assert!(result.cache.entries > 0);
        // Transposed move orders reach the same boards
        assert!(result.cache.hits > 0);
    }

    #[test]
    fn test_depth_one_is_greedy() {
        let mut board = Board::new();
        place_all(&mut board, &[(7, 6), (7, 7)], Stone::White);
        place_all(&mut board, &[(0, 0)], Stone::Black);
        let config = SearchConfig {
            depth: 1,
            radius: 1,
            forbidden_rules: false,
        };
        let candidates = generate_candidates(&board, Stone::White, 1, false);
        let result = Searcher::new().search(&board, Stone::White, &config, &candidates);
        let best = order_moves(&board, Stone::White, &candidates)[0];
        assert_eq!(result.best_move, Some(best.0));
        assert_eq!(result.score, best.1);
    }

    #[test]
    fn test_order_moves_is_sorted_and_capped() {
        let mut board = Board::new();
        board.place_stone(CENTER, Stone::Black);
        let candidates = all_candidates(&board, Stone::White, false);
        let ordered = order_moves(&board, Stone::White, &candidates);
        assert_eq!(ordered.len(), MAX_BRANCHING);
        assert!(ordered.windows(2).all(|w| w[0].1 >= w[1].1));

        // The cap keeps the ring around the centre before any far cell
        assert!(ordered.iter().all(|(pos, _)| pos.center_distance() <= 2));
        let ring = ordered.iter().filter(|(pos, _)| pos.center_distance() == 1).count();
        assert_eq!(ring, 8);
    }

    #[test]
    fn test_order_moves_cap_ignores_static_score() {
        let mut board = Board::new();
        // (0, 3) completes a White four on the edge, far from the centre
        place_all(&mut board, &[(0, 0), (0, 1), (0, 2)], Stone::White);
        board.place_stone(CENTER, Stone::Black);
        let candidates = all_candidates(&board, Stone::White, false);
        let ordered = order_moves(&board, Stone::White, &candidates);
        assert!(ordered.iter().all(|&(pos, _)| pos != Pos::new(0, 3)));
    }

    #[test]
    fn test_black_never_plays_forbidden_cell() {
        let mut board = Board::new();
        // (7,7) would be a double three for Black
        place_all(&mut board, &[(7, 5), (7, 6), (5, 7), (6, 7)], Stone::Black);
        place_all(&mut board, &[(9, 9), (9, 10), (10, 9), (3, 3)], Stone::White);
        let result = run(&board, Stone::Black, Difficulty::Easy);
        assert_ne!(result.best_move, Some(Pos::new(7, 7)));
    }
}
