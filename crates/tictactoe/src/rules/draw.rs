//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Mark, Position};
    use super::super::win::check_winner;
    use super::*;
    use strum::IntoEnumIterator;

    /// Fills squares in the given index order, alternating X and O.
    fn board_from(order: &[usize]) -> Board {
        let mut board = Board::new();
        let mut mark = Mark::X;
        for &index in order {
            if let Some(pos) = Position::from_index(index) {
                board.set(pos, Square::Occupied(mark));
            }
            mark = mark.opponent();
        }
        board
    }

    #[test]
    fn test_one_empty_square_is_not_full() {
        for missing in Position::iter() {
            let order: Vec<usize> = (0..9).filter(|&i| i != missing.to_index()).collect();
            let board = board_from(&order);
            assert!(!is_full(&board), "{missing} left open");
        }
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = board_from(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Ok(None));
    }

    #[test]
    fn test_full_board_won_on_last_square() {
        // Ninth mark completes the bottom row; full and won at once.
        let board = board_from(&[1, 0, 3, 2, 6, 4, 7, 5, 8]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Ok(Some(Mark::X)));
    }
}
