//! Unique cell invariant: each cell is played at most once.

use super::Invariant;
use crate::session::GameSession;
use std::collections::HashSet;

/// Invariant: No two moves in the log share a cell.
pub struct UniqueCellInvariant;

impl Invariant<GameSession> for UniqueCellInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut seen = HashSet::with_capacity(session.log().len());
        session.log().iter().all(|mv| seen.insert(mv.cell))
    }

    fn description() -> &'static str {
        "Each cell appears at most once in the move log"
    }
}
