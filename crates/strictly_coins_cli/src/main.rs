//! Strictly Coins - Unified CLI
//!
//! Solve, replay, and play the coins-in-a-line game from the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use strictly_coins::{CoinSequence, Player};
use strictly_coins_cli::cli::{Cli, Command, SourceArgs};
use strictly_coins_cli::display::Names;
use strictly_coins_cli::{CoinsConfig, session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = CoinsConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Solve { source, opener } => {
            let coins = load_coins(&source, &config)?;
            let mut out = BufWriter::new(io::stdout().lock());
            session::run_solve(&coins, opener.into(), &config, &mut out)?;
            out.flush()?;
            Ok(())
        }
        Command::Replay { source, opener } => {
            let coins = load_coins(&source, &config)?;
            session::run_replay(&coins, opener.into(), &config, &mut io::stdout().lock())
        }
        Command::Play {
            source,
            first_name,
            second_name,
            opener,
        } => {
            let coins = load_coins(&source, &config)?;
            let config = config.with_names(first_name, second_name);
            let names = Names::new(config.first_name().as_str(), config.second_name().as_str());
            let opener: Player = opener.into();
            info!(opener = names.of(opener), "Starting two-player game");
            session::run_two_player(
                &coins,
                opener,
                &names,
                &config,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
        }
        Command::Versus {
            source,
            name,
            engine_opens,
        } => {
            let coins = load_coins(&source, &config)?;
            let config = config.with_names(name, None);
            session::run_versus(
                &coins,
                config.first_name(),
                engine_opens,
                &config,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
            )
        }
    }
}

/// Resolves the source flags and loads the coin line.
#[instrument(skip_all)]
fn load_coins(source: &SourceArgs, config: &CoinsConfig) -> Result<CoinSequence> {
    let coins = source.to_source(config)?.load()?;
    info!(n = coins.len(), total = coins.total(), "Coins ready");
    Ok(coins)
}
