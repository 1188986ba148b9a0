//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Player marker placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Symbol {
    /// Returns the opponent marker.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A zero-indexed board coordinate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[display("({row}, {column})")]
pub struct Cell {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub column: usize,
}

impl Cell {
    /// Creates a new cell coordinate.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns true if the cell lies on a `size` x `size` board.
    pub fn fits(&self, size: usize) -> bool {
        self.row < size && self.column < size
    }
}

/// A player placing their marker on a cell.
///
/// Moves are domain events: once recorded in the log they never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{player} selected {cell}")]
pub struct Move {
    /// The cell the marker was placed on.
    pub cell: Cell,
    /// The player making the move.
    pub player: Symbol,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(cell: Cell, player: Symbol) -> Self {
        Self { cell, player }
    }
}

/// N x N grid of optional markers.
///
/// Boards are only ever produced by replaying a move log, see
/// [`crate::derive_board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Option<Symbol>>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// A size whose cell count overflows `usize` yields a board with no
    /// cells at all.
    #[instrument]
    pub fn empty(size: usize) -> Self {
        let Some(count) = size.checked_mul(size) else {
            warn!(size, "Board size overflows, using a board with no cells");
            return Self {
                size: 0,
                squares: Vec::new(),
            };
        };
        Self {
            size,
            squares: vec![None; count],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the marker at `cell`, or `None` when empty or off the board.
    pub fn get(&self, cell: Cell) -> Option<Symbol> {
        if !cell.fits(self.size) {
            return None;
        }
        self.squares[self.index(cell)]
    }

    /// Checks if a cell on the board is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        cell.fits(self.size) && self.get(cell).is_none()
    }

    /// Writes a marker into an empty on-board cell.
    ///
    /// Returns false, leaving the board untouched, if the cell is off the
    /// board or already taken.
    pub(crate) fn place(&mut self, cell: Cell, symbol: Symbol) -> bool {
        if !self.is_empty(cell) {
            return false;
        }
        let index = self.index(cell);
        self.squares[index] = Some(symbol);
        true
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Symbol>]> {
        // chunks(0) panics; an empty board simply has no rows.
        self.squares.chunks(self.size.max(1))
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_some()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(Option::is_some)
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.column
    }
}

/// Current status of a game, derived from its log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// A player completed a winning combination.
    #[display("won by {_0}")]
    Won(Symbol),
    /// Board filled with no winner.
    #[display("drawn")]
    Drawn,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_decided(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_parses_either_case() {
        assert_eq!(Symbol::from_str("x").unwrap(), Symbol::X);
        assert_eq!(Symbol::from_str("O").unwrap(), Symbol::O);
        assert!(Symbol::from_str("Z").is_err());
    }

    #[test]
    fn test_place_rejects_taken_and_off_board() {
        let mut board = Board::empty(3);
        assert!(board.place(Cell::new(1, 1), Symbol::X));
        assert!(!board.place(Cell::new(1, 1), Symbol::O));
        assert!(!board.place(Cell::new(3, 0), Symbol::O));
        assert_eq!(board.get(Cell::new(1, 1)), Some(Symbol::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_overflowing_size_has_no_cells() {
        let mut board = Board::empty(usize::MAX);
        assert_eq!(board.size(), 0);
        assert_eq!(board.cell_count(), 0);
        assert!(!board.place(Cell::new(0, 0), Symbol::X));
        assert_eq!(board.get(Cell::new(0, 0)), None);
        assert_eq!(board.rows().count(), 0);
    }

    #[test]
    fn test_rows_are_row_major() {
        let mut board = Board::empty(2);
        board.place(Cell::new(1, 0), Symbol::O);
        let rows: Vec<_> = board.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], &[None, None]);
        assert_eq!(rows[1], &[Some(Symbol::O), None]);
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(Cell::new(0, 2), Symbol::X);
        assert_eq!(mv.to_string(), "X selected (0, 2)");
    }
}
