//! Coin sources: manual entry, coin files, and random generation.
//!
//! Every source hands the engine an even-length [`CoinSequence`], since
//! live play splits the line evenly between two seats.

use derive_more::{Display, Error};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use strictly_coins::{CoinSequence, InputError, Parity};
use tracing::{debug, info, instrument};

/// Where a coin line comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoinSource {
    /// Comma-separated values typed by the user.
    Manual {
        /// Raw text, e.g. `"4, 15, 7, 3"`.
        text: String,
        /// Number of coins the user announced, if any.
        expected: Option<usize>,
    },
    /// A coin file: count on the first line, then one value per line.
    File(PathBuf),
    /// Uniformly drawn coins.
    Random {
        /// Number of coins.
        count: usize,
        /// Smallest value (inclusive).
        min: u64,
        /// Largest value (inclusive).
        max: u64,
        /// Fixed seed for a reproducible draw.
        seed: Option<u64>,
    },
}

impl CoinSource {
    /// Produces the coin line.
    #[instrument(skip(self))]
    pub fn load(&self) -> Result<CoinSequence, SourceError> {
        match self {
            CoinSource::Manual { text, expected } => parse_manual(text, *expected),
            CoinSource::File(path) => load_file(path),
            CoinSource::Random {
                count,
                min,
                max,
                seed,
            } => match seed {
                Some(seed) => generate_random(*count, *min, *max, &mut StdRng::seed_from_u64(*seed)),
                None => generate_random(*count, *min, *max, &mut rand::rng()),
            },
        }
    }
}

/// Parses comma-separated coin values.
///
/// One trailing comma is tolerated. When `expected` is given the number of
/// values must match it.
#[instrument]
pub fn parse_manual(text: &str, expected: Option<usize>) -> Result<CoinSequence, SourceError> {
    let text = text.trim();
    let text = text.strip_suffix(',').unwrap_or(text);
    if text.trim().is_empty() {
        return Err(SourceError::new("Please enter the coin values"));
    }

    let values = text
        .split(',')
        .map(|token| {
            token.trim().parse::<i64>().map_err(|_| {
                SourceError::new(format!(
                    "Please enter valid integers separated by commas, got {:?}",
                    token.trim()
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(expected) = expected
        && values.len() != expected
    {
        return Err(SourceError::new(format!(
            "Please enter exactly {} coins, got {}",
            expected,
            values.len()
        )));
    }

    debug!(count = values.len(), "Manual coins parsed");
    Ok(CoinSequence::new(&values, Parity::Even)?)
}

/// Reads and parses a coin file.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_file(path: impl AsRef<Path>) -> Result<CoinSequence, SourceError> {
    let contents = std::fs::read_to_string(path.as_ref())
        .map_err(|e| SourceError::new(format!("Error reading the file: {}", e)))?;
    let coins = parse_file_contents(&contents)?;
    info!(count = coins.len(), "Coins loaded from file");
    Ok(coins)
}

/// Parses coin file contents.
///
/// The first line holds the even number of coins; each following line
/// holds one value. Lines past the announced count are ignored.
#[instrument(skip(contents))]
pub fn parse_file_contents(contents: &str) -> Result<CoinSequence, SourceError> {
    let mut lines = contents.lines().map(str::trim);

    let count = lines
        .next()
        .and_then(parse_digits)
        .filter(|count| count % 2 == 0)
        .ok_or_else(|| {
            SourceError::new("First line must be an even integer which is the number of coins")
        })?;
    let count = usize::try_from(count)
        .map_err(|_| SourceError::new(format!("Too many coins: {}", count)))?;

    let values = lines
        .take(count)
        .map(|line| {
            parse_digits(line).ok_or_else(|| {
                SourceError::new(format!(
                    "Invalid format: each line should contain a number, got {:?}",
                    line
                ))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() < count {
        return Err(SourceError::new(format!(
            "The file lists {} coins but the first line announces {}",
            values.len(),
            count
        )));
    }

    Ok(CoinSequence::from_unsigned(values, Parity::Even)?)
}

/// A line made only of ASCII digits.
fn parse_digits(line: &str) -> Option<u64> {
    if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    line.parse().ok()
}

/// Draws `count` coins uniformly from `min..=max`.
#[instrument(skip(rng))]
pub fn generate_random<R: Rng + ?Sized>(
    count: usize,
    min: u64,
    max: u64,
    rng: &mut R,
) -> Result<CoinSequence, SourceError> {
    if count == 0 || count % 2 != 0 {
        return Err(SourceError::new(format!(
            "Number of coins should be a positive even number, got {}",
            count
        )));
    }
    if max <= min {
        return Err(SourceError::new(format!(
            "Max value ({}) must be greater than min value ({})",
            max, min
        )));
    }

    let values: Vec<u64> = (0..count).map(|_| rng.random_range(min..=max)).collect();
    debug!(?values, "Random coins generated");
    Ok(CoinSequence::from_unsigned(values, Parity::Even)?)
}

/// Coin source error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Coin input error: {} at {}:{}", message, file, line)]
pub struct SourceError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<InputError> for SourceError {
    #[track_caller]
    fn from(err: InputError) -> Self {
        Self::new(err.to_string())
    }
}
