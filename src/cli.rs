//! Command-line interface for strictly_bowling.

use clap::{Parser, Subcommand};

/// Strictly Bowling - ten-pin bowling scorekeeper
#[derive(Parser, Debug)]
#[command(name = "strictly_bowling")]
#[command(about = "Score a ten-pin bowling game from its rolls", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay the rolls and print the scorecard
    Score {
        /// Pins knocked down by each roll, in order
        #[arg(allow_negative_numbers = true)]
        rolls: Vec<i32>,

        /// Print the game snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay the rolls and list the pin counts the next roll may take
    Options {
        /// Pins knocked down by each roll, in order
        #[arg(allow_negative_numbers = true)]
        rolls: Vec<i32>,
    },
}
