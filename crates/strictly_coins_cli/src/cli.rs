//! Command-line interface for strictly_coins.

use crate::config::CoinsConfig;
use crate::input::{CoinSource, SourceError};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use strictly_coins::Player;

/// Strictly Coins - optimal play for the pick-from-either-end coin game
#[derive(Parser, Debug)]
#[command(name = "strictly_coins")]
#[command(about = "Solve, replay and play the coins-in-a-line game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "strictly_coins.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the score table, an optimal line, and the result
    Solve {
        #[command(flatten)]
        source: SourceArgs,

        /// Which seat moves first
        #[arg(long, value_enum, default_value_t = OpenerArg::First)]
        opener: OpenerArg,
    },

    /// Step through the optimal line on a live turn gate
    Replay {
        #[command(flatten)]
        source: SourceArgs,

        /// Which seat moves first
        #[arg(long, value_enum, default_value_t = OpenerArg::First)]
        opener: OpenerArg,
    },

    /// Two people alternate picks at the terminal
    Play {
        #[command(flatten)]
        source: SourceArgs,

        /// Name of the first seat
        #[arg(long)]
        first_name: Option<String>,

        /// Name of the second seat
        #[arg(long)]
        second_name: Option<String>,

        /// Which seat moves first
        #[arg(long, value_enum, default_value_t = OpenerArg::First)]
        opener: OpenerArg,
    },

    /// Play against the optimal engine
    Versus {
        #[command(flatten)]
        source: SourceArgs,

        /// Your display name
        #[arg(long)]
        name: Option<String>,

        /// Let the engine take the first pick
        #[arg(long)]
        engine_opens: bool,
    },
}

/// Where the coins come from; exactly one of `--coins`, `--file` or `--random`.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Comma-separated coin values, e.g. "4,15,7,3"
    #[arg(long, conflicts_with_all = ["file", "random"])]
    pub coins: Option<String>,

    /// Number of coins expected in --coins
    #[arg(long, requires = "coins")]
    pub count: Option<usize>,

    /// Coin file: even count on the first line, then one value per line
    #[arg(long, conflicts_with = "random")]
    pub file: Option<PathBuf>,

    /// Draw this many random coins
    #[arg(long)]
    pub random: Option<usize>,

    /// Smallest random value (config default if omitted)
    #[arg(long, requires = "random")]
    pub min: Option<u64>,

    /// Largest random value (config default if omitted)
    #[arg(long, requires = "random")]
    pub max: Option<u64>,

    /// Seed for a reproducible random draw
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,
}

impl SourceArgs {
    /// Resolves the flags into a coin source, filling random bounds from config.
    pub fn to_source(&self, config: &CoinsConfig) -> Result<CoinSource, SourceError> {
        match (&self.coins, &self.file, self.random) {
            (Some(text), None, None) => Ok(CoinSource::Manual {
                text: text.clone(),
                expected: self.count,
            }),
            (None, Some(path), None) => Ok(CoinSource::File(path.clone())),
            (None, None, Some(count)) => Ok(CoinSource::Random {
                count,
                min: self.min.unwrap_or(*config.random_min()),
                max: self.max.unwrap_or(*config.random_max()),
                seed: self.seed,
            }),
            (None, None, None) => Err(SourceError::new(
                "Choose a coin source: --coins, --file or --random",
            )),
            _ => Err(SourceError::new(
                "Only one coin source may be given",
            )),
        }
    }
}

/// Seat selector for `--opener`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenerArg {
    /// The first seat opens
    First,
    /// The second seat opens
    Second,
}

impl From<OpenerArg> for Player {
    fn from(arg: OpenerArg) -> Self {
        match arg {
            OpenerArg::First => Player::First,
            OpenerArg::Second => Player::Second,
        }
    }
}
