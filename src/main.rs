//! xo - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing::{info, instrument};
use tracing_subscriber::util::SubscriberInitExt;
use xo::logging::LogHandle;
use xo::{Console, XoConfig};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let logging = initialize_tracing();
    let config = XoConfig::load(cli.config.as_deref())?;
    logging.apply(&config)?;

    match cli.command {
        Command::Play { index_base } => {
            let config = match index_base {
                Some(base) => config.with_index_base(base),
                None => config,
            };
            run_play(config)
        }
        Command::Replay {
            cells,
            json,
            index_base,
        } => {
            let config = match index_base {
                Some(base) => config.with_index_base(base),
                None => config,
            };
            run_replay(&cells, &config, json)
        }
    }
}

/// Run the interactive console
#[instrument(skip(config))]
fn run_play(config: XoConfig) -> Result<()> {
    info!(index_base = %config.index_base(), "Starting console");
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    let mut console = Console::new(config, stdin, stdout);
    console.run()?;
    info!(status = %console.game().status(), "Console closed");
    Ok(())
}

/// Replay cells and print the result
#[instrument(skip(config))]
fn run_replay(cells: &[usize], config: &XoConfig, json: bool) -> Result<()> {
    let game = xo::replay(cells, config, json, std::io::stdout().lock())?;
    info!(status = %game.status(), "Replay finished");
    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() -> LogHandle {
    let (subscriber, handle) = xo::logging::subscriber(std::io::stderr);
    subscriber.init();
    tracing::debug!(from_env = handle.from_env(), "Tracing initialized");
    handle
}
