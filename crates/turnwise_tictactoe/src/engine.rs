//! Pure derivations from the move log.
//!
//! The log is stored newest-first. Every function here recomputes its
//! result from scratch; nothing is cached and nothing is mutated.

use crate::combinations::WinningCombinations;
use crate::players::PlayerRegistry;
use crate::types::{Board, Cell, GameStatus, Move, Symbol};
use tracing::{instrument, warn};

/// Returns the marker due to move next.
///
/// X opens; afterwards the turn passes to whoever did not make the newest
/// move.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn derive_active_player(log: &[Move]) -> Symbol {
    log.first().map_or(Symbol::X, |newest| newest.player.opponent())
}

/// Rebuilds the board by replaying the log oldest-first onto an empty grid.
///
/// If two moves ever name the same cell the older one is kept. Moves off the
/// board are skipped.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn derive_board(log: &[Move], size: usize) -> Board {
    let mut board = Board::empty(size);

    for mv in log.iter().rev() {
        if !mv.cell.fits(size) {
            warn!(cell = %mv.cell, size, "Skipping move outside the board");
            continue;
        }
        if !board.place(mv.cell, mv.player) {
            warn!(cell = %mv.cell, player = ?mv.player, "Skipping move on an occupied cell");
        }
    }

    board
}

/// Finds the first fully claimed line, in generation order.
///
/// Returns the marker holding it together with the line's cells.
#[instrument(skip_all)]
pub fn find_winning_line<'a>(
    board: &Board,
    combinations: &'a WinningCombinations,
) -> Option<(Symbol, &'a [Cell])> {
    combinations.iter().find_map(|line| {
        let (first, rest) = line.split_first()?;
        let symbol = board.get(*first)?;
        rest.iter()
            .all(|cell| board.get(*cell) == Some(symbol))
            .then_some((symbol, line))
    })
}

/// Returns the display name of the winner, if any line is complete.
///
/// When several lines are complete at once the first in generation order
/// (rows, columns, diagonals) decides.
#[instrument(skip_all)]
pub fn derive_winner<'p>(
    board: &Board,
    combinations: &WinningCombinations,
    players: &'p PlayerRegistry,
) -> Option<&'p str> {
    find_winning_line(board, combinations).map(|(symbol, _)| players.name(symbol))
}

/// A game is drawn when every cell has been played and nobody won.
///
/// A size whose cell count overflows `usize` is never drawn.
#[instrument(skip(log), fields(moves = log.len()))]
pub fn derive_draw(log: &[Move], size: usize, winner: Option<&str>) -> bool {
    size.checked_mul(size).is_some_and(|cells| log.len() == cells) && winner.is_none()
}

/// Classifies the game from its log.
#[instrument(skip_all, fields(moves = log.len()))]
pub fn derive_status(
    log: &[Move],
    board: &Board,
    combinations: &WinningCombinations,
) -> GameStatus {
    match find_winning_line(board, combinations) {
        Some((symbol, _)) => GameStatus::Won(symbol),
        None if log.len() == board.cell_count() => GameStatus::Drawn,
        None => GameStatus::InProgress,
    }
}
