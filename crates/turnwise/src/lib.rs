//! Turnwise terminal frontend.
//!
//! Reads commands from a terminal, forwards them to a
//! [`turnwise_tictactoe::GameSession`], and renders the derived state.
//!
//! # Architecture
//!
//! - **Cli**: argument parsing
//! - **Config**: player names from TOML
//! - **Input**: typed lines to commands
//! - **Render**: board, players, log and result as text
//! - **App**: the interactive loop and non-interactive replay

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod render;

pub use app::{App, Reply, replay};
pub use cli::{Cli, Command, parse_cell};
pub use config::{ConfigError, GameConfig};
pub use input::{HELP, Input, ParseError, parse_line};
pub use render::{
    EMPTY_LOG, render_board, render_log, render_outcome, render_players, render_session,
    render_turn,
};
