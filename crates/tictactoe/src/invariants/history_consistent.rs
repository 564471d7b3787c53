//! History consistency invariant: history and board agree.

use super::super::{GameEngine, Mark, Square};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every recorded move is on the board, and nothing else is.
///
/// History has no repeated squares, its length equals the number of
/// occupied squares, and the i-th move holds X for even i, O for odd i.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let distinct: HashSet<_> = history.iter().collect();
        if distinct.len() != history.len() || history.len() != engine.board().filled() {
            return false;
        }

        history.iter().enumerate().all(|(i, pos)| {
            let mover = if i % 2 == 0 { Mark::X } else { Mark::O };
            engine.board().get(*pos) == Square::Occupied(mover)
        })
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position};

    #[test]
    fn test_new_game_holds() {
        let engine = GameEngine::new(GameMode::TwoPlayer);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_after_moves_holds() {
        let engine = GameEngine::replay(GameMode::TwoPlayer, &[4, 0, 8]).expect("legal moves");
        assert!(HistoryConsistentInvariant::holds(&engine));
        assert_eq!(engine.history().len(), 3);
    }

    #[test]
    fn test_swapped_mark_violates() {
        let mut engine = GameEngine::replay(GameMode::TwoPlayer, &[4, 0]).expect("legal moves");
        engine.board.set(Position::TopLeft, Square::Occupied(Mark::X));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::replay(GameMode::TwoPlayer, &[4]).expect("legal move");
        engine.board.set(Position::BottomRight, Square::Occupied(Mark::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
