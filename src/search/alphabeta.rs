//! Depth-limited alpha-beta search
//!
//! Negamax formulation: every node scores the position for the side to move
//! and negates its children. Leaves use the disc differential.
//!
//! # Pass handling
//!
//! A side without a capturing move passes: the node recurses one ply
//! shallower for the opponent without placing a disc. The search never asks
//! whether the opponent can move either, so a double pass is not terminal
//! here; the recursion simply runs down to depth 0. Whether the game is
//! actually over is answered by [`crate::rules::game_outcome`].
//!
//! # Example
//!
//! ```
//! use reversi::board::{Board, Color};
//! use reversi::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Color::Black, 3);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {}", best_move);
//! }
//! ```

use tracing::debug;

use crate::board::{Board, Color, Move};
use crate::eval::evaluate;
use crate::rules::legal_moves;

use super::trial::TrialMove;

/// Infinity score for alpha-beta bounds (well above any disc differential)
pub const INF: i32 = 1000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total beta cutoffs (fail-high)
    pub beta_cutoffs: u64,
    /// Beta cutoffs on the first move tried (measures move ordering quality)
    pub first_move_cutoffs: u64,
    /// Nodes where the side to move had to pass
    pub passes: u64,
}

impl SearchStats {
    /// First-move cutoff rate in percent
    pub fn first_move_rate(&self) -> f64 {
        if self.beta_cutoffs == 0 {
            0.0
        } else {
            self.first_move_cutoffs as f64 / self.beta_cutoffs as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found; `None` when the side to move has to pass
    pub best_move: Option<Move>,
    /// Negamax value for the side to move
    pub score: i32,
    /// Depth searched
    pub depth: u8,
    /// Total nodes searched
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-beta searcher.
///
/// Holds only per-search counters; positions are passed in by the caller.
#[derive(Debug, Default)]
pub struct Searcher {
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search `board` for `color` to the given depth with a full window.
    ///
    /// The caller's board is never modified.
    pub fn search(&mut self, board: &Board, color: Color, depth: u8) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let mut work_board = board.clone();
        let (score, best_move) = self.alpha_beta(&mut work_board, -INF, INF, depth, color);
        debug_assert_eq!(&work_board, board);

        debug!(
            ?color,
            depth,
            score,
            nodes = self.nodes,
            cutoffs = self.stats.beta_cutoffs,
            best = ?best_move,
            "search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Negamax alpha-beta.
    ///
    /// Returns the value for `color` and the move that raised alpha, if any.
    /// A value `>= beta` is returned as soon as a child reaches it; otherwise
    /// the result is the final alpha. `board` is identical on return.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        depth: u8,
        color: Color,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            return (evaluate(board, color), None);
        }

        let opponent = color.opponent();
        let moves = legal_moves(board, color);

        if moves.is_empty() {
            self.stats.passes += 1;
            let (child, _) = self.alpha_beta(board, -beta, -alpha, depth - 1, opponent);
            let val = -child;
            if val >= beta {
                self.stats.beta_cutoffs += 1;
                return (val, None);
            }
            if val > alpha {
                alpha = val;
            }
            return (alpha, None);
        }

        let mut best_move = None;

        for (i, scored) in moves.iter().enumerate() {
            let val = {
                let mut trial = TrialMove::apply(board, scored.mv);
                let (child, _) = self.alpha_beta(&mut trial, -beta, -alpha, depth - 1, opponent);
                -child
            };

            if val >= beta {
                self.stats.beta_cutoffs += 1;
                if i == 0 {
                    self.stats.first_move_cutoffs += 1;
                }
                return (val, Some(scored.mv));
            }
            if val > alpha {
                alpha = val;
                best_move = Some(scored.mv);
            }
        }

        (alpha, best_move)
    }
}
