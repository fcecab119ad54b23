//! Transposition cache for the minimax search
//!
//! The cache maps a [`BoardKey`] (both colour bitboards) to the score last
//! computed for that position. Remaining depth and side to move are not part
//! of the key, so a hit is a heuristic reuse rather than exact memoisation.
//! The engine clears the cache at the start of every top-level call.
//!
//! # Example
//!
//! ```
//! use renju::board::{Board, Pos, Stone};
//! use renju::search::TranspositionCache;
//!
//! let mut cache = TranspositionCache::new();
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! cache.store(board.key(), 42);
//! assert_eq!(cache.probe(&board.key()), Some(42));
//! ```

use std::collections::HashMap;

use crate::board::BoardKey;

/// Cache of position scores keyed by board encoding
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<BoardKey, i32>,
    hits: u64,
    misses: u64,
}

impl TranspositionCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a position. Counts a hit or a miss.
    pub fn probe(&mut self, key: &BoardKey) -> Option<i32> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Store a score, replacing any previous value for the position.
    #[inline]
    pub fn store(&mut self, key: BoardKey, score: i32) {
        self.entries.insert(key, score);
    }

    /// Drop every entry and reset the counters.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counters since the last [`clear`](Self::clear)
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

/// Statistics about cache usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Positions currently stored
    pub entries: usize,
    /// Probes that found a stored score
    pub hits: u64,
    /// Probes that found nothing
    pub misses: u64,
}

impl CacheStats {
    /// Hit rate in percent
    pub fn hit_rate(&self) -> f64 {
        let probes = self.hits + self.misses;
        if probes == 0 {
            0.0
        } else {
            self.hits as f64 / probes as f64 * 100.0
        }
    }
}
