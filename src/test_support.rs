//! Deterministic random playouts for tests

use crate::board::{Board, Color, Move};
use crate::rules::{apply_move, has_legal_move, legal_moves};

/// Fixed-seed LCG (Knuth's MMIX constants), so failures reproduce
pub(crate) struct Lcg(u64);

impl Lcg {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed ^ 0x1234_5678_9ABC_DEF0)
    }

    pub(crate) fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub(crate) fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

/// Play up to `plies` random legal moves from the start, passing when needed.
///
/// Returns the moves played and the color to move afterwards.
pub(crate) fn random_moves(seed: u64, plies: usize) -> (Vec<Move>, Color) {
    let mut rng = Lcg::new(seed);
    let mut board = Board::new();
    let mut color = Color::Black;
    let mut played = Vec::new();

    while played.len() < plies {
        let moves = legal_moves(&board, color);
        if moves.is_empty() {
            if !has_legal_move(&board, color.opponent()) {
                break;
            }
            color = color.opponent();
            continue;
        }
        let mv = moves[rng.below(moves.len())].mv;
        apply_move(&mut board, mv);
        played.push(mv);
        color = color.opponent();
    }

    (played, color)
}

/// Board after up to `plies` random moves, and the color to move
pub(crate) fn random_position(seed: u64, plies: usize) -> (Board, Color) {
    let (moves, color) = random_moves(seed, plies);
    let mut board = Board::new();
    for mv in moves {
        apply_move(&mut board, mv);
    }
    (board, color)
}

/// Board at the end of a complete random game
pub(crate) fn random_game(seed: u64) -> Board {
    random_position(seed, usize::MAX).0
}
