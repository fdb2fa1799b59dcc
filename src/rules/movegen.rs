//! Legal move generation with greedy ordering

use crate::board::{Board, Color, Move, Pos, ScoredMove};

use super::flip::count_flips;

/// All legal moves for `color`, most captures first.
///
/// Every empty interior cell is dry-run scanned; cells that capture nothing
/// are dropped. Ordering is a pruning heuristic only and ties come out in no
/// particular order.
pub fn legal_moves(board: &Board, color: Color) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = Pos::all_interior()
        .filter(|&pos| board.is_empty(pos))
        .filter_map(|pos| {
            let flips = count_flips(board, pos, color);
            (flips > 0).then(|| ScoredMove::new(Move::new(pos, color), flips))
        })
        .collect();

    moves.sort_unstable_by(|a, b| b.cmp(a));
    moves
}

/// Check whether `color` has at least one capturing move
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Pos::all_interior().any(|pos| count_flips(board, pos, color) > 0)
}

/// Check whether a specific placement is legal
#[inline]
pub fn is_legal_move(board: &Board, pos: Pos, color: Color) -> bool {
    count_flips(board, pos, color) > 0
}
