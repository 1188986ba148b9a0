//! Parsing typed lines into game commands.

use derive_more::Display;
use std::str::FromStr;
use tracing::instrument;
use turnwise_tictactoe::{Command, Symbol};

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A command for the session.
    Command(Command),
    /// Print the move history.
    ShowLog,
    /// Print the session snapshot as JSON.
    ShowState,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

/// Error that can occur when parsing a line.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// Nothing but whitespace was typed.
    #[display("Enter a command")]
    Empty,

    /// The first word is not a known command.
    #[display("Unknown command {:?}", _0)]
    UnknownCommand(String),

    /// A required argument is missing.
    #[display("Missing {}", _0)]
    MissingArgument(&'static str),

    /// An argument that should be a coordinate is not a number.
    #[display("{:?} is not a row or column number", _0)]
    InvalidNumber(String),

    /// An argument that should be a marker is neither X nor O.
    #[display("{:?} is not a player symbol (X or O)", _0)]
    InvalidSymbol(String),

    /// Words follow a complete command.
    #[display("Unexpected {:?} after the command", _0)]
    TrailingInput(String),
}

impl std::error::Error for ParseError {}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <row> <col>            place your marker (also: select <row> <col>)
  rename <X|O> <name>    change a player's name
  restart                clear the board and start over
  log                    show the move history
  state                  print the full game state as JSON
  help                   show this list
  quit                   leave the game";

/// Parses one line of input.
#[instrument]
pub fn parse_line(line: &str) -> Result<Input, ParseError> {
    let (word, rest) = split_word(line);
    if word.is_empty() {
        return Err(ParseError::Empty);
    }

    if word.parse::<usize>().is_ok() {
        return parse_cell(line);
    }

    match word.to_ascii_lowercase().as_str() {
        "select" | "s" => parse_cell(rest),
        "rename" | "name" => parse_rename(rest),
        "restart" | "r" => Ok(Input::Command(Command::Restart)),
        "log" | "history" => Ok(Input::ShowLog),
        "state" => Ok(Input::ShowState),
        "help" | "?" => Ok(Input::Help),
        "quit" | "exit" | "q" => Ok(Input::Quit),
        _ => Err(ParseError::UnknownCommand(word.to_string())),
    }
}

fn parse_cell(args: &str) -> Result<Input, ParseError> {
    let (row, rest) = split_word(args);
    let (column, rest) = split_word(rest);
    let row = parse_number(row, "row")?;
    let column = parse_number(column, "column")?;

    let extra = rest.trim();
    if !extra.is_empty() {
        return Err(ParseError::TrailingInput(extra.to_string()));
    }

    Ok(Input::Command(Command::SelectCell { row, column }))
}

fn parse_number(word: &str, what: &'static str) -> Result<usize, ParseError> {
    if word.is_empty() {
        return Err(ParseError::MissingArgument(what));
    }
    word.parse()
        .map_err(|_| ParseError::InvalidNumber(word.to_string()))
}

fn parse_rename(args: &str) -> Result<Input, ParseError> {
    let (symbol, name) = split_word(args);
    if symbol.is_empty() {
        return Err(ParseError::MissingArgument("player symbol"));
    }
    let symbol =
        Symbol::from_str(symbol).map_err(|_| ParseError::InvalidSymbol(symbol.to_string()))?;

    // An empty name is passed through so the session reports it.
    Ok(Input::Command(Command::RenamePlayer {
        symbol,
        name: name.to_string(),
    }))
}

/// Splits off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(end) => (&s[..end], &s[end..]),
        None => (s, ""),
    }
}
