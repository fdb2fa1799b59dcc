//! Static evaluation: disc differential
//!
//! No positional weighting and no mobility term. The score is only a leaf
//! heuristic for the search; who actually won is decided by
//! [`crate::rules::game_outcome`].

use crate::board::{Board, Color, Pos};

/// Largest possible magnitude of [`evaluate`] (all 64 interior cells)
pub const MAX_SCORE: i32 = 64;

/// Evaluate the board from the perspective of the given color.
///
/// Returns own interior discs minus opponent interior discs. Symmetric, as
/// negamax requires: `evaluate(b, Black) == -evaluate(b, White)`.
#[must_use]
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let own = color.cell();
    let opp = color.opponent().cell();

    Pos::all_interior().fold(0, |score, pos| {
        let cell = board.get(pos);
        if cell == own {
            score + 1
        } else if cell == opp {
            score - 1
        } else {
            score
        }
    })
}
