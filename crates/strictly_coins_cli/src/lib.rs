//! Strictly Coins terminal front end.
//!
//! Coin sources, configuration, rendering and interactive sessions around
//! the [`strictly_coins`] engine.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod display;
pub mod input;
pub mod session;

pub use config::{CoinsConfig, ConfigError};
pub use display::Names;
pub use input::{CoinSource, SourceError};
