use crate::types::Square;
use thiserror::Error;

/// Errors raised when driving a game with untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("illegal move: {0}")]
    IllegalMove(Square),
    #[error("cannot pass while legal moves are available")]
    PassNotAllowed,
    #[error("the match has been stopped")]
    MatchStopped,
}
