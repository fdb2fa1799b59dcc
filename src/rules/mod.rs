//! Game rules for Reversi
//!
//! This module implements:
//! - Disc flipping (move application and the dry-run count it shares with
//!   move generation)
//! - Legal move generation ordered by capture count
//! - Game-end detection

pub mod end;
pub mod flip;
pub mod movegen;

// Re-exports for convenient access
pub use end::{game_outcome, is_game_over, GameOutcome};
pub use flip::{apply_move, count_flips, flipped_positions};
pub use movegen::{has_legal_move, is_legal_move, legal_moves};
