//! Tic-tac-toe game engine.
//!
//! Board representation, move validation, win/draw detection and a
//! rule-based computer opponent. The engine does no I/O; a driver owns
//! the input/output loop and calls into [`GameEngine`] each turn.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameEngine, GameMode, GameOutcome, Position};
//!
//! let mut engine = GameEngine::with_seed(GameMode::SinglePlayerVsComputer, 42);
//! engine.apply_move(0).expect("empty square");
//! assert!(engine.is_computer_turn());
//!
//! let reply = engine.select_computer_move().expect("board has room");
//! assert_eq!(reply, Position::Center);
//! engine.apply_move(reply.to_index()).expect("computer picks empty squares");
//! assert_eq!(engine.evaluate_outcome(), GameOutcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use ai::{select_move, would_win};
pub use engine::GameEngine;
pub use error::{LogicFault, MoveError};
pub use position::Position;
pub use types::{Board, GameMode, GameOutcome, Mark, Square};
