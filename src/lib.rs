//! Reversi engine with fixed-depth alpha-beta search
//!
//! Standard 8x8 Reversi (Othello):
//! - A move must bracket at least one opponent run in one of 8 directions
//! - Every bracketed disc flips
//! - A side with no capturing move passes
//! - The game ends when neither side can move; most discs wins
//!
//! # Architecture
//!
//! - [`board`]: 10x10 mailbox board with a sentinel ring, moves and their integer encoding
//! - [`rules`]: Flip counting, move application, legal moves, game end
//! - [`eval`]: Disc-differential evaluation
//! - [`search`]: Negamax alpha-beta with scoped trial moves
//! - [`engine`]: Fixed-depth AI engine with timing
//! - [`game`]: Game session, move history, replay-based undo and persistence
//! - [`console`]: Line-oriented text front end
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use reversi::{AIEngine, Board, Color, EngineConfig};
//! use reversi::rules::apply_move;
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(EngineConfig { depth: 3 });
//!
//! if let Some(mv) = engine.get_move(&board, Color::Black) {
//!     let flips = apply_move(&mut board, mv);
//!     println!("AI plays {} flipping {}", mv, flips);
//! }
//! ```

pub mod board;
pub mod cli;
pub mod console;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

#[cfg(test)]
mod test_support;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Move, Pos, ScoredMove, BOARD_SIZE, WIDTH};
pub use engine::{AIEngine, EngineConfig, MoveResult, DEFAULT_DEPTH};
pub use error::{CommandError, HistoryError};
pub use game::{Game, MoveHistory, PlayedMove};
pub use rules::GameOutcome;
