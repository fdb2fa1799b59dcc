//! Move history and replay-based undo
//!
//! The history is the only record needed to rebuild a game: replaying the
//! first `k` moves from the starting layout reproduces the position after
//! `k` moves. There is no inverse move; undo truncates and replays.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::{Board, Move};
use crate::error::HistoryError;
use crate::rules::apply_move;

/// Ordered list of applied moves.
///
/// Serializes as a JSON array of encoded integers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Remove and return the last move
    #[inline]
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    /// Board after the first `count` moves
    #[instrument(level = "trace", skip(self))]
    pub fn replay(&self, count: usize) -> Board {
        let mut board = Board::new();
        for &mv in self.moves.iter().take(count) {
            apply_move(&mut board, mv);
        }
        board
    }

    /// Board after every recorded move
    pub fn board(&self) -> Board {
        self.replay(self.moves.len())
    }

    /// Encoded integer form of every move, in order
    pub fn to_encoded(&self) -> Vec<u32> {
        self.moves.iter().map(|&mv| mv.encode(0)).collect()
    }

    /// Rebuild a history from encoded integers.
    ///
    /// Every move must decode and must capture when replayed in order.
    pub fn from_encoded(encoded: &[u32]) -> Result<Self, HistoryError> {
        let moves = encoded
            .iter()
            .map(|&e| Move::try_from(e))
            .collect::<Result<Vec<_>, _>>()?;
        Self::validated(moves)
    }

    fn validated(moves: Vec<Move>) -> Result<Self, HistoryError> {
        let mut board = Board::new();
        for (index, &mv) in moves.iter().enumerate() {
            if apply_move(&mut board, mv) == 0 {
                return Err(HistoryError::IllegalMove { index, mv });
            }
        }
        Ok(Self { moves })
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        let parsed: MoveHistory = serde_json::from_str(json)?;
        Self::validated(parsed.moves)
    }

    /// Write the history to `path` as JSON
    pub fn save(&self, path: &Path) -> Result<(), HistoryError> {
        fs::write(path, self.to_json()?)?;
        debug!(path = %path.display(), moves = self.len(), "history saved");
        Ok(())
    }

    /// Read and validate a history from `path`
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let history = Self::from_json(&fs::read_to_string(path)?)?;
        debug!(path = %path.display(), moves = history.len(), "history loaded");
        Ok(history)
    }
}
