//! Game-end detection
//!
//! The game is over only when neither side has a capturing move. This is
//! stricter than the search's pass handling, which lets the side to move pass
//! without checking whether the opponent can reply.

use std::fmt;

use crate::board::{Board, Color};
use crate::eval::evaluate;

use super::movegen::has_legal_move;

/// Final result of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    /// `None` for a draw
    pub winner: Option<Color>,
    /// Disc difference between winner and loser
    pub margin: u32,
}

impl GameOutcome {
    /// Build an outcome from Black's disc differential
    pub fn from_differential(black_minus_white: i32) -> Self {
        let winner = match black_minus_white {
            d if d > 0 => Some(Color::Black),
            d if d < 0 => Some(Color::White),
            _ => None,
        };
        Self {
            winner,
            margin: black_minus_white.unsigned_abs(),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Some(color) => write!(f, "{} win {} points.", color.name(), self.margin),
            None => f.write_str("Drawn!"),
        }
    }
}

/// Check whether the game is over, and if so who won
pub fn game_outcome(board: &Board) -> Option<GameOutcome> {
    if has_legal_move(board, Color::Black) || has_legal_move(board, Color::White) {
        return None;
    }
    Some(GameOutcome::from_differential(evaluate(board, Color::Black)))
}

#[inline]
pub fn is_game_over(board: &Board) -> bool {
    game_outcome(board).is_some()
}
