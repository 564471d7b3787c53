//! Line-based terminal driver around the game engine.

use crate::config::GameConfig;
use anyhow::Result;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tictactoe::{GameEngine, GameMode, GameOutcome, Mark, Position, Square};
use tracing::{debug, info, instrument};

/// Summary of a finished game.
#[derive(Debug, Clone, Getters)]
pub struct Session {
    /// Mode the game was played in.
    mode: GameMode,
    /// Final outcome (never `InProgress`).
    outcome: GameOutcome,
    /// Number of marks placed.
    moves: usize,
}

/// Runs one game over a reader and a writer.
///
/// Input is read a line at a time. End of input abandons the game.
pub struct Driver<R, W> {
    input: R,
    output: W,
    config: GameConfig,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver.
    pub fn new(input: R, output: W, config: GameConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    /// Plays a full game.
    ///
    /// Returns `None` if input ends before the game does.
    ///
    /// # Errors
    ///
    /// I/O failures, and engine logic faults, which end the game.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Option<Session>> {
        writeln!(self.output, "Welcome to Tic-Tac-Toe!\n")?;

        let mode = match *self.config.mode() {
            Some(mode) => mode,
            None => match self.choose_mode()? {
                Some(mode) => mode,
                None => return Ok(None),
            },
        };

        let mut engine = match *self.config.seed() {
            Some(seed) => GameEngine::with_seed(mode, seed),
            None => GameEngine::new(mode),
        };

        let mut outcome = engine.evaluate_outcome();
        while outcome == GameOutcome::InProgress {
            self.render(&engine)?;

            let open = if engine.is_computer_turn() {
                self.computer_turn(&mut engine)?
            } else {
                self.human_turn(&mut engine)?
            };
            if !open {
                info!(moves = engine.history().len(), "Input closed mid-game");
                return Ok(None);
            }

            outcome = engine.evaluate_outcome();
        }

        self.render(&engine)?;
        let announcement = announcement(mode, outcome);
        writeln!(self.output, "{}", announcement)?;
        self.output.flush()?;

        info!(%outcome, moves = engine.history().len(), "Game finished");
        Ok(Some(Session {
            mode,
            outcome,
            moves: engine.history().len(),
        }))
    }

    /// Asks for the game mode until a valid answer or end of input.
    fn choose_mode(&mut self) -> Result<Option<GameMode>> {
        writeln!(self.output, "Select game mode:")?;
        writeln!(self.output, "1. Single Player (vs Computer)")?;
        writeln!(self.output, "2. Two Players")?;
        write!(self.output, "Enter your choice (1 or 2): ")?;

        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim() {
                "1" => return Ok(Some(GameMode::SinglePlayerVsComputer)),
                "2" => return Ok(Some(GameMode::TwoPlayer)),
                other => {
                    debug!(input = other, "Invalid mode choice");
                    write!(self.output, "Invalid input! Please enter 1 or 2: ")?;
                }
            }
        }
    }

    /// Lets the computer move. Returns false on end of input.
    fn computer_turn(&mut self, engine: &mut GameEngine) -> Result<bool> {
        let pos = engine.select_computer_move()?;
        writeln!(self.output, "Computer chooses position {}", pos.number())?;
        if !self.pause("Press Enter to continue...")? {
            return Ok(false);
        }
        engine.apply_move(pos.to_index())?;
        Ok(true)
    }

    /// Prompts the turn-holder for one move. An illegal choice is reported
    /// and leaves the turn unchanged. Returns false on end of input.
    fn human_turn(&mut self, engine: &mut GameEngine) -> Result<bool> {
        let player = engine.current_turn().player_number();
        write!(self.output, "Player {}, enter a position (1-9): ", player)?;

        let number = loop {
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().parse::<i64>() {
                Ok(number) => break number,
                Err(_) => {
                    write!(
                        self.output,
                        "Invalid input! Please enter a number between 1 and 9: "
                    )?;
                }
            }
        };

        let legal = usize::try_from(number)
            .ok()
            .and_then(Position::from_number)
            .filter(|pos| engine.is_legal_move(pos.to_index()));
        let Some(pos) = legal else {
            debug!(number, player, "Illegal move attempted");
            writeln!(
                self.output,
                "Invalid move! Position {} is already taken or out of range.",
                number
            )?;
            // Turn stays with the same player; the next loop re-prompts.
            return self.pause("Press Enter to try again...");
        };

        engine.apply_move(pos.to_index())?;
        Ok(true)
    }

    /// Waits for Enter when the screen is about to be cleared. Returns
    /// false on end of input.
    fn pause(&mut self, message: &str) -> Result<bool> {
        if !*self.config.clear_screen() {
            return Ok(true);
        }
        write!(self.output, "{}", message)?;
        Ok(self.read_line()?.is_some())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Draws the title, legend and board.
    fn render(&mut self, engine: &GameEngine) -> Result<()> {
        if *self.config.clear_screen() {
            queue!(self.output, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let opponent = match engine.mode() {
            GameMode::SinglePlayerVsComputer => "Computer",
            GameMode::TwoPlayer => "Player 2",
        };
        write!(self.output, "\n\n\tTic Tac Toe\n\n")?;
        write!(
            self.output,
            "Player 1 ({}) - {} ({})\n\n",
            self.config.glyph(Mark::X),
            opponent,
            self.config.glyph(Mark::O)
        )?;

        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| self.cell(engine, pos))
                .collect();
            writeln!(self.output, "     |     |     ")?;
            writeln!(
                self.output,
                "  {}  |  {}  |  {}  ",
                cells[0], cells[1], cells[2]
            )?;
            if row < 2 {
                writeln!(self.output, "_____|_____|_____")?;
            } else {
                writeln!(self.output, "     |     |     ")?;
            }
        }
        writeln!(self.output)?;
        Ok(())
    }

    /// Glyph or, for an empty square, its number.
    fn cell(&self, engine: &GameEngine, pos: Position) -> String {
        match engine.board().get(pos) {
            Square::Empty => pos.number().to_string(),
            Square::Occupied(mark) => self.config.glyph(mark).to_string(),
        }
    }
}

/// Final message for a finished game.
fn announcement(mode: GameMode, outcome: GameOutcome) -> String {
    let Some(mark) = outcome.winner() else {
        return match outcome {
            GameOutcome::Draw => "Game is a draw!".to_string(),
            _ => outcome.to_string(),
        };
    };
    match mode {
        GameMode::SinglePlayerVsComputer if mark == GameEngine::COMPUTER_MARK => {
            "Computer wins!".to_string()
        }
        GameMode::SinglePlayerVsComputer => "You win!".to_string(),
        GameMode::TwoPlayer => format!("Player {} wins!", mark.player_number()),
    }
}
