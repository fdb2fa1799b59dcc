//! Game session and move history

pub mod history;
pub mod session;

pub use history::MoveHistory;
pub use session::{Game, PlayedMove};
