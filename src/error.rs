//! Error types for history persistence and the text console.
//!
//! Illegal moves are not errors: the rules report them as a zero capture
//! count. These types cover input that comes from outside the game.

use derive_more::{Display, Error, From};

use crate::board::Move;

/// Failure to restore a game from its persisted move list.
#[derive(Debug, Display, Error, From)]
pub enum HistoryError {
    /// An integer whose color tag is not a disc color
    #[display("invalid encoded move {encoded}")]
    InvalidEncoding { encoded: u32 },

    /// A recorded move that captures nothing when replayed
    #[display("move #{index} ({mv}) is illegal on replay")]
    IllegalMove { index: usize, mv: Move },

    #[display("history I/O error: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),

    #[display("history JSON error: {_0}")]
    #[from]
    Json(#[error(source)] serde_json::Error),
}

/// Rejected console input.
///
/// `Io` is a failure of the input stream itself rather than bad input.
#[derive(Debug, Display, Error, From)]
pub enum CommandError {
    #[display("Error Input: {token}")]
    UnknownCommand { token: String },

    #[display("Missing argument for '{command}'")]
    MissingArgument { command: String },

    #[display("Not a number: {token}")]
    InvalidNumber { token: String },

    #[display("Can NOT set depth to {depth}.")]
    InvalidDepth { depth: i64 },

    #[display("console input error: {_0}")]
    #[from]
    Io(#[error(source)] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Pos};

    #[test]
    fn test_history_error_display() {
        let err = HistoryError::InvalidEncoding { encoded: 102 };
        assert_eq!(err.to_string(), "invalid encoded move 102");

        let err = HistoryError::IllegalMove {
            index: 3,
            mv: Move::new(Pos::new(1, 1), Color::Black),
        };
        assert_eq!(err.to_string(), "move #3 (Black (1, 1)) is illegal on replay");
    }

    #[test]
    fn test_history_error_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: HistoryError = io.into();
        assert!(matches!(err, HistoryError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::InvalidDepth { depth: 0 };
        assert_eq!(err.to_string(), "Can NOT set depth to 0.");
        let err = CommandError::UnknownCommand { token: "x".to_string() };
        assert_eq!(err.to_string(), "Error Input: x");
    }
}
