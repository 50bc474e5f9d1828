//! Play Hunt the Wumpus in the terminal.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hunt_the_wumpus::console::Console;
use hunt_the_wumpus::core::{GameRng, SessionConfig, DEFAULT_STARTING_ARROWS};
use hunt_the_wumpus::rules::GameSession;

#[derive(Parser, Debug)]
#[command(name = "wumpus")]
#[command(about = "Hunt the Wumpus in a cave of 20 rooms", long_about = None)]
struct Args {
    /// Seed for a reproducible game (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Arrows at the start of each game
    #[arg(long, default_value_t = DEFAULT_STARTING_ARROWS, value_parser = clap::value_parser!(u8).range(1..))]
    arrows: u8,

    /// Do not offer the instructions screen
    #[arg(long)]
    skip_instructions: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they never mix with the game text.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let config = SessionConfig::default().with_starting_arrows(args.arrows);
    let mut session = GameSession::with_rng(rng, config);
    tracing::info!(seed = session.rng().seed(), "session seed");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console
        .run(&mut session, !args.skip_instructions)
        .context("console session failed")?;

    Ok(())
}
