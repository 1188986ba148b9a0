//! Winning line generation for N x N boards.

use crate::error::InvalidSize;
use crate::types::Cell;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Every winning line for one board size.
///
/// Lines are stored in generation order: rows, then columns, then the main
/// diagonal, then the anti-diagonal. The set is immutable and shared, so
/// cloning it only bumps a reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningCombinations {
    size: usize,
    lines: Arc<[Vec<Cell>]>,
}

impl WinningCombinations {
    /// Side length of the board these lines belong to.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines (always `2 * size + 2`).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Never true for a generated set.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines in generation order.
    pub fn iter(&self) -> impl Iterator<Item = &[Cell]> {
        self.lines.iter().map(Vec::as_slice)
    }

    /// All lines in generation order.
    pub fn as_slice(&self) -> &[Vec<Cell>] {
        &self.lines
    }
}

/// Generates every row, column and both diagonals of a `size` x `size` board.
///
/// # Errors
///
/// Returns [`InvalidSize`] if `size` is zero, or so large that the number
/// of cells on the board or in the lines does not fit in a `usize`.
#[instrument]
pub fn generate(size: usize) -> Result<WinningCombinations, InvalidSize> {
    let board_cells = size.checked_mul(size);
    let line_cells = size
        .checked_mul(2)
        .and_then(|n| n.checked_add(2))
        .and_then(|n| n.checked_mul(size));
    if size < 1 || board_cells.is_none() || line_cells.is_none() {
        return Err(InvalidSize { size });
    }
    Ok(build(size))
}

/// Builds the lines for a size already known to be positive.
pub(crate) fn build(size: usize) -> WinningCombinations {
    let mut lines: Vec<Vec<Cell>> = Vec::with_capacity(2 * size + 2);

    // Rows
    for row in 0..size {
        lines.push((0..size).map(|column| Cell::new(row, column)).collect());
    }

    // Columns
    for column in 0..size {
        lines.push((0..size).map(|row| Cell::new(row, column)).collect());
    }

    // Diagonals: top-left to bottom-right, then top-right to bottom-left
    lines.push((0..size).map(|i| Cell::new(i, i)).collect());
    lines.push((0..size).map(|i| Cell::new(i, size - 1 - i)).collect());

    debug!(size, count = lines.len(), "Generated winning combinations");

    WinningCombinations {
        size,
        lines: lines.into(),
    }
}
