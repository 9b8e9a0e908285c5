//! Command-line interface for xo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use xo::IndexBase;

/// xo - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Tic-tac-toe on an explicit-state game engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $XO_CONFIG, then ./xo.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play {
        /// Cell numbering: "zero" (0-8) or "one" (1-9)
        #[arg(long)]
        index_base: Option<IndexBase>,
    },

    /// Apply a sequence of cells and print the final board
    Replay {
        /// Cells to play, in order
        cells: Vec<usize>,

        /// Print the game snapshot as JSON
        #[arg(long)]
        json: bool,

        /// Cell numbering: "zero" (0-8) or "one" (1-9)
        #[arg(long)]
        index_base: Option<IndexBase>,
    },
}
