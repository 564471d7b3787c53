//! Rule-based computer opponent.
//!
//! A fixed priority list, first match wins:
//! win, block, center, random corner, random side. There is no lookahead
//! beyond a single move, so a player who sets up two threats at once
//! can beat it.

use super::rules;
use super::{Board, LogicFault, Mark, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Which priority rule produced a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Win,
    Block,
    Center,
    Corner,
    Side,
}

/// Returns true if `pos` is empty and placing `mark` there completes a
/// line of `mark`. The board is not modified.
#[instrument(skip(board))]
pub fn would_win(board: &Board, mark: Mark, pos: Position) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    let mut scratch = *board;
    scratch.set(pos, Square::Occupied(mark));
    rules::has_line(&scratch, mark)
}

/// First empty square, in board order, where `mark` would complete a line.
fn winning_square(board: &Board, mark: Mark) -> Option<Position> {
    Position::iter().find(|&pos| would_win(board, mark, pos))
}

/// Picks uniformly among the empty members of `candidates`.
fn random_empty<R: Rng + ?Sized>(
    board: &Board,
    candidates: &[Position],
    rng: &mut R,
) -> Option<Position> {
    let empty: Vec<Position> = candidates
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    empty.choose(rng).copied()
}

/// Chooses the move for `computer` on `board`.
///
/// # Errors
///
/// Returns [`LogicFault::NoEmptySquare`] if the board is full; callers
/// must not ask for a move once the game is over.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    rng: &mut R,
) -> Result<Position, LogicFault> {
    let (pos, rule) = if let Some(pos) = winning_square(board, computer) {
        (pos, Rule::Win)
    } else if let Some(pos) = winning_square(board, computer.opponent()) {
        (pos, Rule::Block)
    } else if board.is_empty(Position::Center) {
        (Position::Center, Rule::Center)
    } else if let Some(pos) = random_empty(board, &Position::CORNERS, rng) {
        (pos, Rule::Corner)
    } else if let Some(pos) = random_empty(board, &Position::SIDES, rng) {
        (pos, Rule::Side)
    } else {
        return Err(LogicFault::NoEmptySquare);
    };

    debug!(position = %pos, ?rule, mark = %computer, "Computer chose position");
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn board_with(cells: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in cells {
            board.set(*pos, Square::Occupied(*mark));
        }
        board
    }

    #[test]
    fn test_would_win_does_not_touch_board() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
        ]);
        let before = board;
        assert!(would_win(&board, Mark::X, Position::TopRight));
        assert!(!would_win(&board, Mark::O, Position::TopRight));
        assert_eq!(board, before);
    }

    #[test]
    fn test_would_win_rejects_occupied_square() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::O),
        ]);
        assert!(!would_win(&board, Mark::X, Position::TopRight));
    }

    #[test]
    fn test_win_beats_block() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::Center, Mark::O),
            (Position::BottomRight, Mark::X),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Ok(Position::MiddleRight)
        );
    }

    #[test]
    fn test_block_beats_center() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::BottomRight, Mark::O),
            (Position::TopCenter, Mark::X),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Ok(Position::TopRight)
        );
    }

    #[test]
    fn test_random_empty_covers_all_sides() {
        let board = Board::new();
        let mut seen = HashSet::new();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            if let Some(pos) = random_empty(&board, &Position::SIDES, &mut rng) {
                seen.insert(pos);
            }
        }
        let expected: HashSet<Position> = Position::SIDES.into_iter().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_random_empty_skips_occupied() {
        let board = board_with(&[
            (Position::TopCenter, Mark::X),
            (Position::MiddleLeft, Mark::O),
            (Position::MiddleRight, Mark::X),
        ]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                random_empty(&board, &Position::SIDES, &mut rng),
                Some(Position::BottomCenter)
            );
        }
    }

    #[test]
    fn test_random_empty_none_when_all_taken() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopRight, Mark::O),
            (Position::BottomLeft, Mark::X),
            (Position::BottomRight, Mark::O),
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_empty(&board, &Position::CORNERS, &mut rng), None);
    }

    #[test]
    fn test_full_board_is_a_fault() {
        // X O X / X O O / O X X
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
            (Position::MiddleLeft, Mark::X),
            (Position::Center, Mark::O),
            (Position::MiddleRight, Mark::O),
            (Position::BottomLeft, Mark::O),
            (Position::BottomCenter, Mark::X),
            (Position::BottomRight, Mark::X),
        ]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            select_move(&board, Mark::O, &mut rng),
            Err(LogicFault::NoEmptySquare)
        );
    }
}
