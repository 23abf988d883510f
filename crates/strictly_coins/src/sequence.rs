//! Validated coin line shared by every other component.

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Length requirement imposed by the caller's game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Parity {
    /// Any length of at least one coin.
    #[default]
    Any,
    /// Balanced two-participant play: both sides get the same number of picks.
    Even,
}

/// Immutable, ordered line of non-negative coin values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CoinSequence {
    coins: Vec<u64>,
}

impl CoinSequence {
    /// Validates raw values into a coin line.
    ///
    /// # Errors
    ///
    /// - [`InputError::Empty`] if no values are given
    /// - [`InputError::NegativeValue`] for the first negative value
    /// - [`InputError::OddLength`] if `parity` is [`Parity::Even`] and the count is odd
    /// - [`InputError::TotalOverflow`] if the values sum past `u64::MAX`
    #[instrument(skip(values), fields(len = values.len(), ?parity))]
    pub fn new(values: &[i64], parity: Parity) -> Result<Self, InputError> {
        let coins = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                u64::try_from(value).map_err(|_| InputError::NegativeValue { index, value })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_unsigned(coins, parity)
    }

    /// Builds a coin line from values that are already non-negative.
    ///
    /// # Errors
    ///
    /// Same emptiness and parity rules as [`CoinSequence::new`].
    #[instrument(skip(coins), fields(len = coins.len(), ?parity))]
    pub fn from_unsigned(coins: Vec<u64>, parity: Parity) -> Result<Self, InputError> {
        if coins.is_empty() {
            return Err(InputError::Empty);
        }
        if parity == Parity::Even && coins.len() % 2 != 0 {
            return Err(InputError::OddLength(coins.len()));
        }
        // Every range sum and table cell is bounded by the total.
        let total = coins
            .iter()
            .try_fold(0u64, |sum, &coin| sum.checked_add(coin))
            .ok_or(InputError::TotalOverflow)?;

        debug!(total, "Coin sequence accepted");
        Ok(Self { coins })
    }

    /// Number of coins; always at least one.
    pub fn len(&self) -> usize {
        self.coins.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }

    /// Value of the coin at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<u64> {
        self.coins.get(index).copied()
    }

    /// All coin values in order.
    pub fn values(&self) -> &[u64] {
        &self.coins
    }

    /// Sum of every coin.
    pub fn total(&self) -> u64 {
        self.coins.iter().sum()
    }

    /// Sum of the coins in the inclusive range `[i, j]`.
    ///
    /// Empty (zero) when `j < i` or the range leaves the line.
    pub fn range_sum(&self, i: usize, j: usize) -> u64 {
        if j < i || j >= self.coins.len() {
            return 0;
        }
        self.coins[i..=j].iter().sum()
    }

    pub(crate) fn coin(&self, index: usize) -> u64 {
        self.coins[index]
    }
}

impl std::fmt::Display for CoinSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined = self
            .coins
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "[{}]", joined)
    }
}
