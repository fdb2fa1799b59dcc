//! Move values and their integer encoding
//!
//! A move is persisted as one integer:
//! `magnitude * (CELL_COUNT * COLOR_SPAN) + position * COLOR_SPAN + color`.
//! The magnitude is the capture count attached by the move generator for
//! ordering; it never takes part in a move's identity and decoding drops it.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Color, Pos, CELL_COUNT, COLOR_SPAN};
use crate::error::HistoryError;

/// A disc placement: where and by whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct Move {
    pub pos: Pos,
    pub color: Color,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, color: Color) -> Self {
        Self { pos, color }
    }

    /// Pack into the integer form with an ordering magnitude
    #[inline]
    pub fn encode(self, magnitude: u32) -> u32 {
        magnitude * (CELL_COUNT as u32 * COLOR_SPAN)
            + self.pos.to_index() as u32 * COLOR_SPAN
            + self.color.tag()
    }

    /// Unpack the integer form, ignoring any magnitude.
    ///
    /// Returns `None` when the color tag is not a disc color.
    #[inline]
    pub fn decode(encoded: u32) -> Option<Self> {
        let color = Color::from_tag(encoded % COLOR_SPAN)?;
        let idx = (encoded / COLOR_SPAN) as usize % CELL_COUNT;
        Some(Self {
            pos: Pos::from_index(idx),
            color,
        })
    }
}

impl From<Move> for u32 {
    fn from(mv: Move) -> u32 {
        mv.encode(0)
    }
}

impl TryFrom<u32> for Move {
    type Error = HistoryError;

    fn try_from(encoded: u32) -> Result<Self, Self::Error> {
        Move::decode(encoded).ok_or(HistoryError::InvalidEncoding { encoded })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.color.name(), self.pos.row, self.pos.col)
    }
}

/// A legal move together with the number of discs it flips.
///
/// Orders by flip count first, then by encoded identity, which matches the
/// ordering of the packed integer `mv.encode(flips)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredMove {
    pub flips: u32,
    pub mv: Move,
}

impl ScoredMove {
    #[inline]
    pub fn new(mv: Move, flips: u32) -> Self {
        Self { flips, mv }
    }

    /// Packed integer carrying the flip count as magnitude
    #[inline]
    pub fn encode(self) -> u32 {
        self.mv.encode(self.flips)
    }
}

impl PartialOrd for ScoredMove {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredMove {
    fn cmp(&self, other: &Self) -> Ordering {
        self.flips
            .cmp(&other.flips)
            .then_with(|| self.mv.encode(0).cmp(&other.mv.encode(0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_layout() {
        let mv = Move::new(Pos::new(3, 4), Color::Black);
        assert_eq!(mv.encode(0), (3 * 10 + 4) * 3 + 1);
        assert_eq!(mv.encode(2), 2 * 300 + 34 * 3 + 1);
    }

    #[test]
    fn test_decode_ignores_magnitude() {
        let mv = Move::new(Pos::new(8, 8), Color::White);
        for magnitude in [0, 1, 7, 18] {
            assert_eq!(Move::decode(mv.encode(magnitude)), Some(mv));
        }
    }

    #[test]
    fn test_decode_rejects_bad_color_tag() {
        // 34 * 3 + 0: no color
        assert_eq!(Move::decode(102), None);
        assert!(Move::try_from(102u32).is_err());
    }

    #[test]
    fn test_decode_sentinel_position() {
        // Decodes fine; applying it is what fails
        let mv = Move::decode(1).unwrap();
        assert_eq!(mv.pos, Pos::new(0, 0));
        assert_eq!(mv.color, Color::Black);
    }

    #[test]
    fn test_scored_order_matches_packed_order() {
        let a = ScoredMove::new(Move::new(Pos::new(1, 1), Color::Black), 3);
        let b = ScoredMove::new(Move::new(Pos::new(8, 8), Color::Black), 1);
        let c = ScoredMove::new(Move::new(Pos::new(8, 7), Color::Black), 1);

        let mut structs = vec![b, a, c];
        structs.sort_unstable_by(|x, y| y.cmp(x));

        let mut packed = vec![b.encode(), a.encode(), c.encode()];
        packed.sort_unstable_by(|x, y| y.cmp(x));

        let from_structs: Vec<u32> = structs.iter().map(|m| m.encode()).collect();
        assert_eq!(from_structs, packed);
        assert_eq!(structs[0], a);
    }

    #[test]
    fn test_serde_as_integer() {
        let mv = Move::new(Pos::new(3, 4), Color::Black);
        let json = serde_json::to_string(&vec![mv]).unwrap();
        assert_eq!(json, "[103]");

        let back: Vec<Move> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![mv]);
        assert!(serde_json::from_str::<Vec<Move>>("[102]").is_err());
    }

    #[test]
    fn test_display() {
        let mv = Move::new(Pos::new(3, 4), Color::White);
        assert_eq!(mv.to_string(), "White (3, 4)");
    }
}
