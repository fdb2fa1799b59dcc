//! Scoped trial moves
//!
//! A `TrialMove` applies a move to a borrowed board and puts the board back,
//! bit for bit, when it goes out of scope. Early returns from pruning and
//! unwinding panics restore the board the same way a normal return does.

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Move};
use crate::rules::apply_move;

pub struct TrialMove<'a> {
    board: &'a mut Board,
    saved: Board,
    flips: u32,
}

impl<'a> TrialMove<'a> {
    /// Snapshot `board`, then apply `mv` to it
    pub fn apply(board: &'a mut Board, mv: Move) -> Self {
        let saved = board.clone();
        let flips = apply_move(board, mv);
        Self {
            board,
            saved,
            flips,
        }
    }

    /// Discs flipped by the trial move (0 if it was illegal)
    #[inline]
    pub fn flips(&self) -> u32 {
        self.flips
    }
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for TrialMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.clone_from(&self.saved);
    }
}
