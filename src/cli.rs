//! Command-line interface for the reversi binary.

use clap::{Parser, Subcommand};

use crate::engine::{EngineConfig, DEFAULT_DEPTH};

/// Reversi - alpha-beta Reversi engine
#[derive(Parser, Debug)]
#[command(name = "reversi")]
#[command(about = "Play Reversi against a fixed-depth alpha-beta engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter (overrides RUST_LOG), e.g. "debug" or "reversi=trace"
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Subcommand to run (defaults to the text console)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal with single-letter commands
    Console {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH,
              value_parser = clap::value_parser!(u8).range(1..))]
        depth: u8,
    },

    /// Play in a window
    Gui {
        /// Search depth in plies
        #[arg(short, long, default_value_t = DEFAULT_DEPTH,
              value_parser = clap::value_parser!(u8).range(1..))]
        depth: u8,
    },
}

impl Command {
    /// Engine settings requested on the command line
    pub fn engine_config(&self) -> EngineConfig {
        match *self {
            Command::Console { depth } | Command::Gui { depth } => EngineConfig { depth },
        }
    }
}

impl Default for Command {
    fn default() -> Self {
        Command::Console {
            depth: DEFAULT_DEPTH,
        }
    }
}
