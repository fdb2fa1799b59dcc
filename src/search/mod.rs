//! Search module for the Reversi AI
//!
//! Contains:
//! - Negamax alpha-beta search with greedy move ordering
//! - Scoped trial moves that restore the board on every exit path

pub mod alphabeta;
pub mod trial;

pub use alphabeta::{SearchResult, SearchStats, Searcher, INF};
pub use trial::TrialMove;
