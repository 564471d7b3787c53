//! Error types for the tic-tac-toe engine.

use super::Position;

/// A rejected move. The engine state is untouched when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name one of the nine squares.
    #[display("Position index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// A broken engine invariant. Never caused by player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum LogicFault {
    /// The computer was asked to move on a full board.
    #[display("Logic fault: computer move requested with no empty square")]
    NoEmptySquare,

    /// Both marks own a complete line.
    #[display("Logic fault: both marks own a complete line")]
    ConflictingWinners,
}

impl std::error::Error for LogicFault {}
