//! Errors used throughout the engine.
//!
//! Every variant is a flavour of one failure: the requested move is illegal
//! and the game state was left untouched. The variants exist only so that
//! callers (the CLI, tests, logs) can say *why*; `GameState::attempt_move`
//! collapses all of them to `false`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Outcome, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// The game already has a winner; no further moves are accepted.
    #[error("game is already decided: {0}")]
    GameAlreadyDecided(Outcome),

    /// The source square does not hold a live piece of the side to move.
    #[error("no {side} piece on {square}")]
    NoPieceOfSideToMove { square: Square, side: Color },

    /// The piece kind cannot travel from `from` to `to` (wrong shape,
    /// zero length, pawn moving backwards, pawn diagonal without a
    /// capture, repeated double step).
    #[error("{kind} cannot move from {from} to {to}")]
    IllegalGeometry {
        kind: PieceKind,
        from: Square,
        to: Square,
    },

    /// A square strictly between source and destination is occupied.
    #[error("path is blocked at {blocker}")]
    PathBlocked { blocker: Square },

    /// The destination holds a piece of the moving side.
    #[error("cannot capture own piece on {0}")]
    SelfCapture(Square),

    /// A coordinate string was not two characters long.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicString(String),

    /// A coordinate had a file outside `a..=h` or a rank outside `1..=8`.
    #[error("invalid algebraic character: {0:?}")]
    InvalidAlgebraicChar(char),

    /// A piece-placement string could not be turned into a position.
    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    /// A registry operation expected a live piece on this square.
    #[error("no piece on {0}")]
    EmptySquare(Square),
}
