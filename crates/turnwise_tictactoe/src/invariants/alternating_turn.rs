//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::session::GameSession;
use crate::types::Symbol;

/// Invariant: Players alternate turns.
///
/// Read oldest-first, the log must show X, O, X, O, ...
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let log = session.log();

        // Oldest move must be X
        if log.last().is_some_and(|oldest| oldest.player != Symbol::X) {
            return false;
        }

        log.windows(2).all(|pair| pair[0].player != pair[1].player)
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Move};

    #[test]
    fn test_empty_session_holds() {
        let session = GameSession::new();
        assert!(AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = GameSession::new();
        for (row, column) in [(0, 0), (1, 1), (0, 2), (2, 0), (2, 2)] {
            session.select_cell(row, column).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.active_player(), Symbol::O);
    }

    #[test]
    fn test_o_opening_violates() {
        let mut session = GameSession::new();
        session.log.push(Move::new(Cell::new(1, 1), Symbol::O));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = GameSession::new();
        session.select_cell(0, 0).unwrap();
        session.log.insert(0, Move::new(Cell::new(1, 1), Symbol::X));
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
