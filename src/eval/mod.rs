//! Position evaluation for Reversi

pub mod heuristic;

pub use heuristic::{evaluate, MAX_SCORE};
