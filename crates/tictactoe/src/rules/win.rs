//! Win detection logic for tic-tac-toe.

use super::super::{Board, LogicFault, Mark, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark owning the line, if all three squares hold it.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.mark()
    } else {
        None
    }
}

/// Returns true if `mark` owns at least one complete line.
#[instrument(skip(board))]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Ok(Some(mark))` if the mark has three in a row, `Ok(None)`
/// otherwise.
///
/// # Errors
///
/// Returns [`LogicFault::ConflictingWinners`] when both marks own a line,
/// which alternating play can never produce.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Result<Option<Mark>, LogicFault> {
    match (has_line(board, Mark::X), has_line(board, Mark::O)) {
        (true, true) => Err(LogicFault::ConflictingWinners),
        (true, false) => Ok(Some(Mark::X)),
        (false, true) => Ok(Some(Mark::O)),
        (false, false) => Ok(None),
    }
}
