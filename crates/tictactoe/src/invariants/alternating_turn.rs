//! Alternating turn invariant: X, O, X, O, ...

use super::super::{GameEngine, Mark};
use super::Invariant;

/// Invariant: marks alternate, X first.
///
/// The turn-holder matches the parity of the move history, and X is
/// never behind O nor more than one mark ahead.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let expected_next = if engine.history().len() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        if engine.current_turn() != expected_next {
            return false;
        }

        let x_count = engine.board().count(Mark::X);
        let o_count = engine.board().count(Mark::O);
        match engine.current_turn() {
            Mark::X => x_count == o_count,
            Mark::O => x_count == o_count + 1,
        }
    }

    fn description() -> &'static str {
        "Marks alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameMode, Position, Square};

    #[test]
    fn test_new_game_holds() {
        let engine = GameEngine::new(GameMode::TwoPlayer);
        assert!(AlternatingTurnInvariant::holds(&engine));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let engine =
            GameEngine::replay(GameMode::TwoPlayer, &[0, 4, 2, 6, 8]).expect("legal moves");
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.current_turn(), Mark::O);
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = GameEngine::replay(GameMode::TwoPlayer, &[4]).expect("legal move");
        // O's turn, but X sneaks a second mark onto the board.
        engine.board.set(Position::TopLeft, Square::Occupied(Mark::X));
        assert!(!AlternatingTurnInvariant::holds(&engine));
    }
}
