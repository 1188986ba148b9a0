//! Game session: the move log, the player registry, and the commands that
//! change them.

use crate::combinations::{WinningCombinations, build, generate};
use crate::command::Command;
use crate::engine::{
    derive_active_player, derive_board, derive_draw, derive_status, derive_winner,
    find_winning_line,
};
use crate::error::{CommandError, InvalidSize, RenameError, SelectError};
use crate::invariants::assert_invariants;
use crate::players::PlayerRegistry;
use crate::types::{Board, Cell, GameStatus, Move, Symbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument, warn};

/// Side length of the classic board.
pub const DEFAULT_SIZE: usize = 3;

/// A game between two named players.
///
/// The move log (newest-first) and the player registry are the only state.
/// Board, active player, winner and draw flag are recomputed from the log
/// on every query.
#[derive(Debug, Clone)]
pub struct GameSession {
    size: usize,
    combinations: WinningCombinations,
    pub(crate) log: Vec<Move>,
    players: PlayerRegistry,
}

impl GameSession {
    /// Creates a 3x3 session with the default player names.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(PlayerRegistry::new())
    }

    /// Creates a 3x3 session with the given players.
    #[instrument]
    pub fn with_players(players: PlayerRegistry) -> Self {
        Self::from_parts(build(DEFAULT_SIZE), players)
    }

    /// Creates a `size` x `size` session.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSize`] if `size` is zero or too large to count its cells.
    #[instrument]
    pub fn with_size(size: usize, players: PlayerRegistry) -> Result<Self, InvalidSize> {
        Ok(Self::from_parts(generate(size)?, players))
    }

    fn from_parts(combinations: WinningCombinations, players: PlayerRegistry) -> Self {
        info!(size = combinations.size(), "Creating new game session");
        Self {
            size: combinations.size(),
            combinations,
            log: Vec::new(),
            players,
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Commands
    // ─────────────────────────────────────────────────────────────

    /// Places the active player's marker on `(row, column)`.
    ///
    /// On success the new move is prepended to the log and returned. A
    /// rejected selection leaves the log untouched.
    ///
    /// # Errors
    ///
    /// - [`SelectError::OutOfRange`] if either coordinate is off the board.
    /// - [`SelectError::GameAlreadyDecided`] if the game is won or drawn.
    /// - [`SelectError::OccupiedCell`] if the cell already holds a marker.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn select_cell(&mut self, row: usize, column: usize) -> Result<Move, SelectError> {
        let cell = Cell::new(row, column);

        if !cell.fits(self.size) {
            warn!(%cell, size = self.size, "Selection outside the board");
            return Err(SelectError::OutOfRange {
                cell,
                size: self.size,
            });
        }

        let board = self.board();
        let status = derive_status(&self.log, &board, &self.combinations);
        if status.is_decided() {
            debug!(%cell, %status, "Selection after the game ended");
            return Err(SelectError::GameAlreadyDecided);
        }

        if !board.is_empty(cell) {
            debug!(%cell, "Selection on an occupied cell");
            return Err(SelectError::OccupiedCell(cell));
        }

        let mv = Move::new(cell, derive_active_player(&self.log));
        self.log.insert(0, mv);

        assert_invariants(self);

        info!(%mv, status = %self.status(), "Move accepted");
        Ok(mv)
    }

    /// Replaces the display name for `symbol`.
    ///
    /// The name is trimmed; the log is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`RenameError`] if the trimmed name is empty or too long. The
    /// previous name is kept.
    #[instrument(skip(self))]
    pub fn rename_player(&mut self, symbol: Symbol, name: &str) -> Result<(), RenameError> {
        self.players.rename(symbol, name)
    }

    /// Clears the move log. Player names are kept.
    #[instrument(skip(self), fields(moves = self.log.len()))]
    pub fn restart(&mut self) {
        self.log.clear();
        info!("Game restarted");
    }

    /// Applies a command. This is the single mutation entry point for hosts.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the underlying command.
    #[instrument(skip(self))]
    pub fn apply(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::SelectCell { row, column } => {
                self.select_cell(row, column)?;
            }
            Command::RenamePlayer { symbol, name } => {
                self.rename_player(symbol, &name)?;
            }
            Command::Restart => self.restart(),
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries (always derived from the log)
    // ─────────────────────────────────────────────────────────────

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The winning lines for this board size.
    pub fn combinations(&self) -> &WinningCombinations {
        &self.combinations
    }

    /// Moves played so far, newest-first.
    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// The player registry.
    pub fn players(&self) -> &PlayerRegistry {
        &self.players
    }

    /// Display name for a marker.
    pub fn player_name(&self, symbol: Symbol) -> &str {
        self.players.name(symbol)
    }

    /// Marker due to move next.
    pub fn active_player(&self) -> Symbol {
        derive_active_player(&self.log)
    }

    /// The board as it stands after every logged move.
    pub fn board(&self) -> Board {
        derive_board(&self.log, self.size)
    }

    /// Display name of the winner, if any.
    pub fn winner(&self) -> Option<&str> {
        derive_winner(&self.board(), &self.combinations, &self.players)
    }

    /// The completed line and its owner, if any.
    pub fn winning_line(&self) -> Option<(Symbol, &[Cell])> {
        find_winning_line(&self.board(), &self.combinations)
    }

    /// True if every cell is played and nobody won.
    pub fn is_draw(&self) -> bool {
        derive_draw(&self.log, self.size, self.winner())
    }

    /// Whether the game is in progress, won, or drawn.
    pub fn status(&self) -> GameStatus {
        derive_status(&self.log, &self.board(), &self.combinations)
    }

    /// Captures every derived value in one owned, serializable view.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        let board = self.board();
        let winning_line = find_winning_line(&board, &self.combinations);
        let winner = winning_line.map(|(symbol, _)| self.players.name(symbol).to_string());
        let draw = derive_draw(&self.log, self.size, winner.as_deref());

        Snapshot {
            size: self.size,
            rows: board.rows().map(<[Option<Symbol>]>::to_vec).collect(),
            active_player: self.active_player(),
            status: derive_status(&self.log, &board, &self.combinations),
            winning_line: winning_line.map(|(_, line)| line.to_vec()),
            winner,
            draw,
            log: self.log.clone(),
            players: self
                .players
                .iter()
                .map(|(symbol, name)| (symbol, name.to_string()))
                .collect(),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable view of a session at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Side length of the board.
    pub size: usize,
    /// Board rows, top to bottom.
    pub rows: Vec<Vec<Option<Symbol>>>,
    /// Marker due to move next.
    pub active_player: Symbol,
    /// Game status.
    pub status: GameStatus,
    /// Display name of the winner.
    pub winner: Option<String>,
    /// Cells of the completed line.
    pub winning_line: Option<Vec<Cell>>,
    /// True if the game ended in a draw.
    pub draw: bool,
    /// Moves played, newest-first.
    pub log: Vec<Move>,
    /// Display name per marker.
    pub players: BTreeMap<Symbol, String>,
}

/// A session shared between threads.
///
/// Every mutation goes through [`SharedSession::apply`] under one lock, and
/// readers receive owned snapshots, so nobody observes a half-applied
/// command.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<GameSession>>,
}

impl SharedSession {
    /// Wraps a session for sharing.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Applies a command under the lock.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the underlying command.
    #[instrument(skip(self))]
    pub fn apply(&self, command: Command) -> Result<(), CommandError> {
        self.lock().apply(command)
    }

    /// Takes a snapshot under the lock.
    #[instrument(skip(self))]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().snapshot()
    }

    fn lock(&self) -> MutexGuard<'_, GameSession> {
        // Commands finish before the guard drops, so a poisoned session is
        // still whole.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
