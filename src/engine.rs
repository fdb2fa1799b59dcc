//! Main AI Engine
//!
//! Wraps the alpha-beta [`Searcher`] with a fixed search depth and timing.
//! There is no time management: the configured depth is always searched in
//! full, so latency grows exponentially with it.
//!
//! # Example
//!
//! ```
//! use reversi::{AIEngine, Board, Color, EngineConfig};
//!
//! let mut engine = AIEngine::with_config(EngineConfig { depth: 3 });
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Color::Black);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Color, Move};
use crate::search::{SearchResult, SearchStats, Searcher};

/// Default search depth in plies
pub const DEFAULT_DEPTH: u8 = 8;

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies (at least 1)
    pub depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
        }
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found; `None` means the side to move passes
    pub best_move: Option<Move>,
    /// Negamax value for the side to move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Cutoff and pass counters from the search
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            time_ms,
            nodes: result.nodes,
            stats: result.stats,
        }
    }
}

/// Main AI Engine for Reversi.
pub struct AIEngine {
    searcher: Searcher,
    max_depth: u8,
}

impl AIEngine {
    /// Create an engine searching to [`DEFAULT_DEPTH`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            max_depth: config.depth.max(1),
        }
    }

    /// Get the best move for `color`, or `None` to pass
    pub fn get_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics
    pub fn get_move_with_stats(&mut self, board: &Board, color: Color) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.search(board, color, self.max_depth);
        let time_ms = start.elapsed().as_millis() as u64;

        debug!(
            ?color,
            depth = self.max_depth,
            score = result.score,
            nodes = result.nodes,
            passes = result.stats.passes,
            first_move_rate = result.stats.first_move_rate(),
            time_ms,
            "engine move"
        );

        MoveResult::from_search(result, time_ms)
    }

    /// Set search depth (clamped to at least 1)
    pub fn set_max_depth(&mut self, depth: u8) {
        self.max_depth = depth.max(1);
    }

    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::rules::{apply_move, is_legal_move};

    #[test]
    fn test_engine_creation() {
        let engine = AIEngine::new();
        assert_eq!(engine.max_depth(), DEFAULT_DEPTH);
    }

    #[test]
    fn test_engine_with_config() {
        let engine = AIEngine::with_config(EngineConfig { depth: 4 });
        assert_eq!(engine.max_depth(), 4);
    }

    #[test]
    fn test_engine_depth_floor() {
        let mut engine = AIEngine::with_config(EngineConfig { depth: 0 });
        assert_eq!(engine.max_depth(), 1);
        engine.set_max_depth(0);
        assert_eq!(engine.max_depth(), 1);
        engine.set_max_depth(6);
        assert_eq!(engine.max_depth(), 6);
    }

    #[test]
    fn test_engine_opening_move_is_legal() {
        let board = Board::new();
        let mut engine = AIEngine::with_config(EngineConfig { depth: 4 });
        let mv = engine.get_move(&board, Color::Black).expect("opening has moves");
        assert!(is_legal_move(&board, mv.pos, Color::Black));
    }

    #[test]
    fn test_engine_passes_without_moves() {
        let mut board = Board::empty();
        board.place_disc(Pos::new(1, 1), Color::Black);
        board.place_disc(Pos::new(1, 2), Color::White);

        let mut engine = AIEngine::with_config(EngineConfig { depth: 3 });
        let result = engine.get_move_with_stats(&board, Color::White);
        assert_eq!(result.best_move, None);
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_engine_reports_search_stats() {
        let mut board = Board::empty();
        board.place_disc(Pos::new(1, 1), Color::Black);
        board.place_disc(Pos::new(1, 2), Color::White);

        let mut engine = AIEngine::with_config(EngineConfig { depth: 2 });
        let result = engine.get_move_with_stats(&board, Color::White);
        // White passes at the root, Black replies at depth 1
        assert_eq!(result.stats.passes, 1);

        let result = engine.get_move_with_stats(&Board::new(), Color::Black);
        assert_eq!(result.stats.passes, 0);
        assert!(result.stats.first_move_cutoffs <= result.stats.beta_cutoffs);
    }

    #[test]
    fn test_engine_alternating_colors() {
        let mut board = Board::new();
        let mut engine = AIEngine::with_config(EngineConfig { depth: 2 });
        let mut color = Color::Black;

        for _ in 0..6 {
            let mv = engine.get_move(&board, color).expect("early game has moves");
            assert_eq!(mv.color, color);
            assert!(apply_move(&mut board, mv) > 0);
            color = color.opponent();
        }
        assert_eq!(board.disc_count(), 10);
    }

    #[test]
    fn test_engine_time_reasonable() {
        let board = Board::new();
        let mut engine = AIEngine::with_config(EngineConfig { depth: 4 });
        let result = engine.get_move_with_stats(&board, Color::Black);

        #[cfg(debug_assertions)]
        let max_time_ms = 60_000;
        #[cfg(not(debug_assertions))]
        let max_time_ms = 5_000;

        assert!(
            result.time_ms < max_time_ms,
            "Search took too long: {}ms (limit: {}ms)",
            result.time_ms,
            max_time_ms
        );
        assert_eq!(result.depth, 4);
    }
}
