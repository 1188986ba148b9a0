//! Tic-tac-toe on an N x N board, driven by an append-only move log.
//!
//! The move log is the single source of truth. Board, active player,
//! winner and draw flag are pure functions of it, recomputed on demand.
//!
//! # Architecture
//!
//! - **Combinations**: every winning line for a board size, generated once
//! - **Engine**: pure derivations from the log
//! - **Session**: the log plus player names, mutated only through commands
//! - **Invariants**: log properties checked after every accepted move
//!
//! # Example
//!
//! ```
//! use turnwise_tictactoe::{GameSession, GameStatus, Symbol};
//!
//! let mut session = GameSession::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     session.select_cell(row, column).unwrap();
//! }
//! assert_eq!(session.status(), GameStatus::Won(Symbol::X));
//! assert_eq!(session.winner(), Some("Player 1"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod combinations;
mod command;
mod engine;
mod error;
mod players;
mod session;
mod types;

pub mod invariants;

pub use combinations::{WinningCombinations, generate};
pub use command::Command;
pub use engine::{
    derive_active_player, derive_board, derive_draw, derive_status, derive_winner,
    find_winning_line,
};
pub use error::{CommandError, InvalidSize, RenameError, SelectError};
pub use players::{DEFAULT_MAX_NAME_LEN, DEFAULT_O_NAME, DEFAULT_X_NAME, PlayerRegistry};
pub use session::{DEFAULT_SIZE, GameSession, SharedSession, Snapshot};
pub use types::{Board, Cell, GameStatus, Move, Symbol};
