//! First-class session commands.
//!
//! Commands are the only way state changes. Hosts that share a session
//! funnel every mutation through [`crate::GameSession::apply`].

use crate::types::Symbol;
use serde::{Deserialize, Serialize};

/// A request to change the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Command {
    /// Place the active player's marker on a cell.
    #[display("select ({row}, {column})")]
    SelectCell {
        /// Row index.
        row: usize,
        /// Column index.
        column: usize,
    },

    /// Change a player's display name.
    #[display("rename {symbol} to {name:?}")]
    RenamePlayer {
        /// Which marker to rename.
        symbol: Symbol,
        /// The new name, trimmed before use.
        name: String,
    },

    /// Clear the move log.
    #[display("restart")]
    Restart,
}
