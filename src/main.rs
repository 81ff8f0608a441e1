//! Strictly Bowling - CLI
//!
//! Replays a sequence of rolls through the scoring engine and prints the
//! result.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_bowling::GameController;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { rolls, json } => run_score(&rolls, json),
        Command::Options { rolls } => run_options(&rolls),
    }
}

/// Print the scorecard after replaying the rolls
#[instrument]
fn run_score(rolls: &[i32], json: bool) -> Result<()> {
    let game = GameController::replay(rolls);
    let snapshot = game.snapshot();
    info!(phase = %snapshot.phase(), total = snapshot.total(), "Replay complete");

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", snapshot);
    }
    Ok(())
}

/// Print the pin counts the next roll may take
#[instrument]
fn run_options(rolls: &[i32]) -> Result<()> {
    let game = GameController::replay(rolls);
    let options = game.accepted_values();
    info!(phase = %game.phase(), count = options.len(), "Replay complete");

    if options.is_empty() {
        println!("No rolls accepted: game is {}", game.phase());
    } else {
        let listed: Vec<String> = options.iter().map(u8::to_string).collect();
        println!("{}", listed.join(" "));
    }
    Ok(())
}
