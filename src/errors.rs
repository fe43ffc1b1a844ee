//! Errors used throughout the checkers engine.
//!
//! `CheckersError` is the single error type returned by board mutation,
//! rules queries, input parsing and the match loop. Variants split into two
//! groups:
//! - recoverable input failures (`IllegalSelection`, `MalformedInput`) that
//!   the console layer answers by re-prompting,
//! - programming or state errors (`OutOfBounds`, `EmptySquare`, ...) that
//!   signal a bug in the caller and are propagated, never swallowed.

use crate::game_state::checkers_types::{PieceId, Position};

/// Unified error type for the checkers engine.
#[derive(Debug, thiserror::Error)]
pub enum CheckersError {
    /// A position outside the 8x8 grid reached a board query.
    ///
    /// Callers that respect rules-engine output never trigger this.
    #[error("position {0} is outside the 8x8 board")]
    OutOfBounds(Position),

    /// The chosen piece or landing is not in the legal set for this turn.
    #[error("illegal selection: {0}")]
    IllegalSelection(String),

    /// Raw text could not be parsed into a move or a quit request.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// Tried to move a piece off a square that holds nothing.
    #[error("no piece at {0}")]
    EmptySquare(Position),

    /// Tried to move or place a piece onto a square that is already taken.
    #[error("square {0} is already occupied")]
    OccupiedSquare(Position),

    /// Pieces may only stand on dark squares, where `row + col` is odd.
    #[error("square {0} is not a playable dark square")]
    UnplayableSquare(Position),

    /// A roster references a piece the board no longer holds.
    #[error("piece {0:?} is not on the board")]
    UnknownPiece(PieceId),

    /// Board and rosters disagree; only raised by consistency checks.
    #[error("board invariant violated: {0}")]
    InvariantViolated(String),

    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

impl CheckersError {
    /// True for errors the input boundary answers by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CheckersError::IllegalSelection(_) | CheckersError::MalformedInput(_)
        )
    }
}

/// Result alias for checkers operations.
pub type CheckersResult<T> = Result<T, CheckersError>;

#[cfg(test)]
mod tests {
    use super::CheckersError;
    use crate::game_state::checkers_types::Position;

    #[test]
    fn only_input_errors_are_recoverable() {
        assert!(CheckersError::IllegalSelection("x".to_owned()).is_recoverable());
        assert!(CheckersError::MalformedInput("x".to_owned()).is_recoverable());
        assert!(!CheckersError::OutOfBounds(Position::new(8, 0)).is_recoverable());
        assert!(!CheckersError::EmptySquare(Position::new(0, 1)).is_recoverable());
    }

    #[test]
    fn out_of_bounds_message_names_the_square() {
        let err = CheckersError::OutOfBounds(Position::new(-1, 3));
        assert_eq!(err.to_string(), "position (-1, 3) is outside the 8x8 board");
    }
}
