//! Interactive read/eval/render loop over a game session.

use crate::input::{HELP, Input, ParseError, parse_line};
use crate::render::{render_log, render_players, render_session};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use turnwise_tictactoe::{Cell, Command, GameSession};

/// What the loop should do after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading.
    Show(String),
    /// Stop the loop.
    Quit,
}

/// Terminal frontend owning one game session.
#[derive(Debug, Clone, Default)]
pub struct App {
    session: GameSession,
}

impl App {
    /// Creates an app around a session.
    #[instrument(skip(session))]
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Handles one parsed line of input.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Result<Reply> {
        let text = match input {
            Input::Command(command) => self.run_command(command),
            Input::ShowLog => render_log(self.session.log()),
            Input::ShowState => serde_json::to_string_pretty(&self.session.snapshot())
                .context("Failed to serialize game state")?,
            Input::Help => HELP.to_string(),
            Input::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Show(text))
    }

    fn run_command(&mut self, command: Command) -> String {
        let renamed = match &command {
            Command::RenamePlayer { symbol, .. } => Some(*symbol),
            _ => None,
        };
        let restarted = command == Command::Restart;

        if let Err(e) = self.session.apply(command) {
            debug!(error = %e, "Command rejected");
            return e.to_string();
        }

        if let Some(symbol) = renamed {
            return format!(
                "{symbol} is now called {}.\n\n{}",
                self.session.player_name(symbol),
                render_players(&self.session)
            );
        }
        if restarted {
            return format!("New game started.\n\n{}", render_session(&self.session));
        }
        render_session(&self.session)
    }

    /// Reads lines until EOF or `quit`, printing a reply for each.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, writer: &mut W) -> Result<()> {
        info!("Starting interactive game");
        writeln!(writer, "Type 'help' for commands.\n")?;
        writeln!(writer, "{}", render_session(&self.session))?;

        let mut lines = reader.lines();
        loop {
            write!(writer, "> ")?;
            writer.flush()?;

            let Some(line) = lines.next() else {
                writeln!(writer)?;
                break;
            };
            let line = line.context("Failed to read input")?;

            let reply = match parse_line(&line) {
                Ok(input) => self.handle(input)?,
                Err(ParseError::Empty) => continue,
                Err(e) => Reply::Show(format!("{e}. Type 'help' for commands.")),
            };

            match reply {
                Reply::Show(text) => writeln!(writer, "{text}")?,
                Reply::Quit => break,
            }
        }

        info!(moves = self.session.log().len(), "Interactive game ended");
        Ok(())
    }
}

/// Applies `moves` oldest-first and prints the resulting game.
///
/// Rejected moves are skipped. In text mode each is reported; in JSON mode
/// the output is the final snapshot alone.
#[instrument(skip(session, writer))]
pub fn replay<W: Write>(
    session: &mut GameSession,
    moves: &[Cell],
    json: bool,
    writer: &mut W,
) -> Result<()> {
    for cell in moves {
        if let Err(e) = session.select_cell(cell.row, cell.column) {
            warn!(%cell, error = %e, "Skipping rejected move");
            if !json {
                writeln!(writer, "Skipped {cell}: {e}")?;
            }
        }
    }

    if json {
        serde_json::to_writer_pretty(&mut *writer, &session.snapshot())
            .context("Failed to serialize game state")?;
        writeln!(writer)?;
    } else {
        writeln!(
            writer,
            "{}\n\n{}",
            render_session(session),
            render_log(session.log())
        )?;
    }

    Ok(())
}
