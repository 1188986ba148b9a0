//! Board consistency invariant: the derived board mirrors the log.

use super::Invariant;
use crate::session::GameSession;

/// Invariant: Every logged move is on the board and visible in the derived
/// board, and no other cell is filled.
pub struct BoardConsistentInvariant;

impl Invariant<GameSession> for BoardConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let log = session.log();

        board.occupied_count() == log.len()
            && log
                .iter()
                .all(|mv| mv.cell.fits(session.size()) && board.get(mv.cell) == Some(mv.player))
    }

    fn description() -> &'static str {
        "Board holds exactly one marker per logged move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Move, Symbol};

    #[test]
    fn test_played_session_holds() {
        let mut session = GameSession::new();
        for (row, column) in [(1, 1), (0, 0), (2, 1)] {
            session.select_cell(row, column).unwrap();
        }
        assert!(BoardConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_off_board_move_violates() {
        let mut session = GameSession::new();
        session.log.push(Move::new(Cell::new(3, 3), Symbol::X));
        assert!(!BoardConsistentInvariant::holds(&session));
    }

    #[test]
    fn test_shadowed_move_violates() {
        let mut session = GameSession::new();
        session.select_cell(0, 0).unwrap();
        session.log.insert(0, Move::new(Cell::new(0, 0), Symbol::O));
        assert!(!BoardConsistentInvariant::holds(&session));
    }
}
