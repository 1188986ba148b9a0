//! Turnwise - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use turnwise::{App, Cli, Command, GameConfig, replay};
use turnwise_tictactoe::GameSession;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&cli)?;
    let players = config.player_registry()?;
    let mut session = GameSession::with_players(players);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin();
            App::new(session).run(stdin.lock(), &mut out)
        }
        Command::Replay { moves, json } => replay(&mut session, &moves, json, &mut out),
    }
}

/// Loads the config file if one was given, then applies name overrides.
#[instrument(skip_all)]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => {
            info!("No config file given, using defaults");
            GameConfig::new()
        }
    };
    Ok(config.with_overrides(cli.player_x.clone(), cli.player_o.clone()))
}
