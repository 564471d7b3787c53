//! Game engine for tic-tac-toe.

use super::invariants::{EngineInvariants, InvariantSet};
use super::{Board, GameMode, GameOutcome, LogicFault, Mark, MoveError, Position, Square};
use super::{ai, rules};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and turn state for a single game. [`apply_move`] is the
/// only way to change either, so turns always alternate and rejected moves
/// leave everything as it was. The outcome is never stored; it is
/// recomputed from the board by [`evaluate_outcome`].
///
/// [`apply_move`]: GameEngine::apply_move
/// [`evaluate_outcome`]: GameEngine::evaluate_outcome
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) current_turn: Mark,
    pub(crate) mode: GameMode,
    pub(crate) history: Vec<Position>,
    rng: StdRng,
}

impl GameEngine {
    /// Mark played by the computer in single-player games.
    pub const COMPUTER_MARK: Mark = Mark::O;

    /// Creates a new game. X moves first; computer tie-breaks draw from
    /// an entropy-seeded source.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Creates a new game whose computer tie-breaks are reproducible.
    #[instrument]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        info!(%mode, "Starting new game");
        Self {
            board: Board::new(),
            current_turn: Mark::X,
            mode,
            history: Vec::new(),
            rng,
        }
    }

    /// Builds a game by playing `moves` (board indices 0-8) in order.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal index and returns its [`MoveError`].
    #[instrument]
    pub fn replay(mode: GameMode, moves: &[usize]) -> Result<Self, MoveError> {
        let mut engine = Self::new(mode);
        engine.apply_moves(moves)?;
        Ok(engine)
    }

    /// Plays `moves` (board indices 0-8) in order.
    ///
    /// # Errors
    ///
    /// Stops at the first illegal index and returns its [`MoveError`];
    /// moves before it stay applied.
    #[instrument(skip(self))]
    pub fn apply_moves(&mut self, moves: &[usize]) -> Result<(), MoveError> {
        for &index in moves {
            self.apply_move(index)?;
        }
        Ok(())
    }

    /// Returns true if `index` names an empty square (0-8).
    ///
    /// Out-of-range indices are simply illegal.
    pub fn is_legal_move(&self, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Places the turn-holder's mark at `index` (0-8) and passes the turn.
    ///
    /// Returns the position played.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfRange`] or [`MoveError::SquareOccupied`]
    /// and changes nothing when the move is illegal.
    #[instrument(skip(self), fields(mark = %self.current_turn))]
    pub fn apply_move(&mut self, index: usize) -> Result<Position, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Rejected move on occupied square");
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.current_turn;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);
        self.current_turn = mark.opponent();

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Engine invariants violated after {mark} played {pos}"
        );

        debug!(position = %pos, %mark, move_number = self.history.len(), "Move applied");
        Ok(pos)
    }

    /// Evaluates the board: a completed line wins, a full board draws,
    /// anything else is still in progress.
    ///
    /// Depends only on the board, so repeated calls (including after a
    /// rejected move) return the same answer.
    ///
    /// # Panics
    ///
    /// Panics if both marks own a line. [`apply_move`](Self::apply_move)
    /// cannot produce such a board.
    pub fn evaluate_outcome(&self) -> GameOutcome {
        match rules::check_winner(&self.board) {
            Ok(Some(mark)) => GameOutcome::Win(mark),
            Ok(None) if rules::is_full(&self.board) => GameOutcome::Draw,
            Ok(None) => GameOutcome::InProgress,
            Err(fault) => {
                error!(%fault, board = %self.board.display(), "Impossible board");
                panic!("{fault}");
            }
        }
    }

    /// Returns true if placing `mark` at `index` would complete a line.
    ///
    /// Hypothetical only; the board is not touched. Occupied and
    /// out-of-range indices return false.
    pub fn would_win(&self, mark: Mark, index: usize) -> bool {
        Position::from_index(index).is_some_and(|pos| ai::would_win(&self.board, mark, pos))
    }

    /// Chooses the computer's move: win, block, center, random corner,
    /// random side.
    ///
    /// Does not play the move; pass the result to
    /// [`apply_move`](Self::apply_move).
    ///
    /// # Errors
    ///
    /// Returns [`LogicFault::NoEmptySquare`] when called on a full board.
    #[instrument(skip(self))]
    pub fn select_computer_move(&mut self) -> Result<Position, LogicFault> {
        ai::select_move(&self.board, Self::COMPUTER_MARK, &mut self.rng)
    }

    /// Returns true when the computer should move next.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayerVsComputer && self.current_turn == Self::COMPUTER_MARK
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose player moves next.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the positions played so far, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Returns the empty squares.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(&self.board)
    }
}
