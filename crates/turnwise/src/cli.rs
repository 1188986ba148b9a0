//! Command-line interface for turnwise.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use turnwise_tictactoe::Cell;

/// Turnwise - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "turnwise")]
#[command(about = "Two-player tic-tac-toe with a move log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Name for player X (overrides the config file)
    #[arg(long, global = true)]
    pub player_x: Option<String>,

    /// Name for player O (overrides the config file)
    #[arg(long, global = true)]
    pub player_o: Option<String>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Moves as `row,col`, oldest first
        #[arg(required = true, value_parser = parse_cell)]
        moves: Vec<Cell>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses a `row,col` pair.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, column) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row {:?}", row))?;
    let column = column
        .trim()
        .parse()
        .map_err(|_| format!("invalid column {:?}", column))?;
    Ok(Cell::new(row, column))
}
