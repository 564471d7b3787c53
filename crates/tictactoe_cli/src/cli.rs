//! Command-line interface for tictactoe.

use clap::{Parser, ValueEnum};
use tictactoe::GameMode;

/// Tic-Tac-Toe - play a friend or the computer in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe for one or two players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game mode; prompts at startup when omitted
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to the TOML config file (optional)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Seed for the computer's tie-breaks (reproducible games)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep previous boards on screen instead of clearing
    #[arg(long)]
    pub no_clear: bool,

    /// Log filter, e.g. "debug" or "tictactoe=trace" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Game mode as named on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Play X against the computer
    Single,
    /// Two players at one terminal
    Two,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => GameMode::SinglePlayerVsComputer,
            ModeArg::Two => GameMode::TwoPlayer,
        }
    }
}
