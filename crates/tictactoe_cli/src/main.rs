//! Tic-Tac-Toe - terminal front end
//!
//! Plays one game per run, against a friend or the computer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use driver::Driver;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing(cli.log_level.as_deref());

    let config = GameConfig::load(&cli.config)?.with_overrides(&cli);
    run_game(config)
}

/// Installs the log subscriber. Logs go to stderr so they never land
/// inside the board on stdout.
fn initialize_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Plays one game on the process's stdin and stdout.
#[instrument(skip_all)]
fn run_game(config: GameConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), config);

    match driver.run() {
        Ok(Some(session)) => {
            info!(
                mode = %session.mode(),
                outcome = %session.outcome(),
                moves = session.moves(),
                "Session complete"
            );
            Ok(())
        }
        Ok(None) => {
            info!("Input closed before the game ended");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Game aborted");
            Err(e)
        }
    }
}
