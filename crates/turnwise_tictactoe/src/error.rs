//! Error types for the game library.

use crate::types::Cell;

/// Board size that cannot hold a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("Invalid board size {size}: must be at least 1 with a countable number of cells")]
pub struct InvalidSize {
    /// The rejected size.
    pub size: usize,
}

impl std::error::Error for InvalidSize {}

/// Error that can occur when selecting a cell.
///
/// None of these are fatal; a frontend may ignore them as stray clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// The coordinates fall outside the board.
    #[display("Cell {cell} is outside the {size}x{size} board")]
    OutOfRange {
        /// The requested cell.
        cell: Cell,
        /// Side length of the board.
        size: usize,
    },

    /// The cell already holds a marker.
    #[display("Cell {_0} is already occupied")]
    OccupiedCell(Cell),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameAlreadyDecided,
}

impl std::error::Error for SelectError {}

/// Error that can occur when renaming a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RenameError {
    /// The name was empty after trimming.
    #[display("Player name cannot be empty")]
    EmptyName,

    /// The name exceeds the registry's length limit.
    #[display("Player name is {len} characters long, the limit is {max}")]
    NameTooLong {
        /// Length of the trimmed name in characters.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
}

impl std::error::Error for RenameError {}

/// Error returned by [`crate::GameSession::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum CommandError {
    /// A cell selection was rejected.
    #[display("{_0}")]
    Select(SelectError),
    /// A rename was rejected.
    #[display("{_0}")]
    Rename(RenameError),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Select(e) => Some(e),
            CommandError::Rename(e) => Some(e),
        }
    }
}
