//! Text rendering of derived game state.

use turnwise_tictactoe::{Board, GameSession, GameStatus, Move};

/// Shown in place of the history before the first move.
pub const EMPTY_LOG: &str = "No moves yet. Start the game!";

/// Renders the board with row and column numbers; empty cells are `.`.
pub fn render_board(board: &Board) -> String {
    let width = board.size().saturating_sub(1).to_string().len();

    let header: String = (0..board.size())
        .map(|column| format!(" {column:>width$}"))
        .collect();
    let mut out = format!("{:width$} {header}\n", "");

    for (row, squares) in board.rows().enumerate() {
        let marks: String = squares
            .iter()
            .map(|square| {
                let mark = square.map_or_else(|| ".".to_string(), |symbol| symbol.to_string());
                format!(" {mark:>width$}")
            })
            .collect();
        out.push_str(&format!("{row:>width$} {marks}\n"));
    }

    out
}

/// Lists both players, marking whose turn it is while the game runs.
pub fn render_players(session: &GameSession) -> String {
    let active = (!session.status().is_decided()).then(|| session.active_player());

    session
        .players()
        .iter()
        .map(|(symbol, name)| {
            let pointer = if Some(symbol) == active { ">" } else { " " };
            format!("{pointer} {name} ({symbol})")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the history oldest-first, numbered from 1.
pub fn render_log(log: &[Move]) -> String {
    if log.is_empty() {
        return EMPTY_LOG.to_string();
    }

    log.iter()
        .rev()
        .enumerate()
        .map(|(index, mv)| format!("#{} {}", index + 1, mv))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Describes a finished game, or `None` while it is still running.
pub fn render_outcome(session: &GameSession) -> Option<String> {
    match session.status() {
        GameStatus::InProgress => None,
        GameStatus::Won(symbol) => {
            let line = session
                .winning_line()
                .map(|(_, cells)| {
                    cells
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            Some(format!(
                "{} won! Line: {line}\nType 'restart' for a rematch.",
                session.player_name(symbol)
            ))
        }
        GameStatus::Drawn => Some("It's a draw!\nType 'restart' for a rematch.".to_string()),
    }
}

/// Prompt line naming the player to move.
pub fn render_turn(session: &GameSession) -> String {
    let symbol = session.active_player();
    format!("{}'s turn ({symbol})", session.player_name(symbol))
}

/// Everything a player needs to see after a command.
pub fn render_session(session: &GameSession) -> String {
    let footer = render_outcome(session).unwrap_or_else(|| render_turn(session));
    format!(
        "{}\n\n{}\n{}",
        render_players(session),
        render_board(&session.board()),
        footer
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnwise_tictactoe::PlayerRegistry;

    #[test]
    fn test_empty_board() {
        let session = GameSession::new();
        assert_eq!(
            render_board(&session.board()),
            "   0 1 2\n0  . . .\n1  . . .\n2  . . .\n"
        );
    }

    #[test]
    fn test_board_with_marks() {
        let mut session = GameSession::new();
        session.select_cell(0, 0).unwrap();
        session.select_cell(1, 2).unwrap();
        assert_eq!(
            render_board(&session.board()),
            "   0 1 2\n0  X . .\n1  . . O\n2  . . .\n"
        );
    }

    #[test]
    fn test_wide_board_headers_align() {
        let session = GameSession::with_size(11, PlayerRegistry::new()).unwrap();
        let rendered = render_board(&session.board());
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].ends_with(" 9 10"));
        assert!(lines[11].starts_with("10  "));
        assert_eq!(lines[0].len(), lines[11].len());
    }

    #[test]
    fn test_players_mark_active() {
        let mut session = GameSession::new();
        assert_eq!(render_players(&session), "> Player 1 (X)\n  Player 2 (O)");
        session.select_cell(1, 1).unwrap();
        assert_eq!(render_players(&session), "  Player 1 (X)\n> Player 2 (O)");
    }

    #[test]
    fn test_log_oldest_first() {
        let mut session = GameSession::new();
        assert_eq!(render_log(session.log()), EMPTY_LOG);
        session.select_cell(0, 0).unwrap();
        session.select_cell(2, 1).unwrap();
        assert_eq!(
            render_log(session.log()),
            "#1 X selected (0, 0)\n#2 O selected (2, 1)"
        );
    }

    #[test]
    fn test_outcome_messages() {
        let mut session = GameSession::new();
        assert_eq!(render_outcome(&session), None);
        assert_eq!(render_turn(&session), "Player 1's turn (X)");

        for (row, column) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
            session.select_cell(row, column).unwrap();
        }
        assert_eq!(
            render_outcome(&session).unwrap(),
            "Player 1 won! Line: (0, 0) (0, 1) (0, 2)\nType 'restart' for a rematch."
        );
        assert_eq!(render_players(&session), "  Player 1 (X)\n  Player 2 (O)");
    }
}
