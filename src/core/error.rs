//! Error types for rust-ttt.

use thiserror::Error;

/// Errors raised by the rules, board parsing and match play.
///
/// The search itself never fails: it only applies moves it generated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is off the board or already occupied")]
    InvalidMove { row: u8, col: u8 },

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("policy '{policy}' chose no move on a board that is still in progress")]
    NoMoveChosen { policy: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidMove { row: 0, col: 3 };
        assert_eq!(
            err.to_string(),
            "invalid move: (0, 3) is off the board or already occupied"
        );

        let err = Error::NoMoveChosen {
            policy: "random".to_string(),
        };
        assert!(err.to_string().contains("random"));
    }
}
