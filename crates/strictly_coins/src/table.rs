//! Interval DP engine.
//!
//! For every contiguous sub-range `[i, j]` of the coin line the table holds
//! the best score the player to move can secure, alongside what the other
//! player collects from the same range under optimal play.
//!
//! Storage is triangular: row `i` only holds cells `j >= i`, so a cell with
//! `j < i` cannot be read by construction.

use crate::invariants::{InvariantSet, TableInvariants};
use crate::sequence::CoinSequence;
use crate::types::Side;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Optimal split of a sub-range between the mover and the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ScorePair {
    /// Best total for the player who picks first on the sub-range.
    pub mover: u64,
    /// What the other player collects from the same sub-range.
    pub opponent: u64,
}

impl ScorePair {
    /// Creates a score pair.
    pub fn new(mover: u64, opponent: u64) -> Self {
        Self { mover, opponent }
    }

    /// Combined value of the sub-range.
    pub fn total(&self) -> u64 {
        self.mover + self.opponent
    }
}

impl std::fmt::Display for ScorePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.mover, self.opponent)
    }
}

/// Completed DP table for one coin line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreTable {
    coins: CoinSequence,
    /// `rows[i][j - i]` is the cell for `[i, j]`.
    rows: Vec<Vec<ScorePair>>,
}

impl ScoreTable {
    /// Fills the table bottom-up over increasing interval length.
    ///
    /// Runs in O(n²) time and space. Ties between the two ends resolve to
    /// the right end.
    #[instrument(skip(coins), fields(n = coins.len()))]
    pub fn build(coins: &CoinSequence) -> Self {
        let n = coins.len();

        let mut rows: Vec<Vec<ScorePair>> = (0..n)
            .map(|i| {
                let mut row = Vec::with_capacity(n - i);
                row.push(ScorePair::new(coins.coin(i), 0));
                row
            })
            .collect();

        for length in 2..=n {
            for i in 0..=n - length {
                let j = i + length - 1;
                let (_, pair) = choose(coins, &rows, i, j);
                debug_assert_eq!(rows[i].len(), j - i);
                rows[i].push(pair);
            }
        }

        let table = Self {
            coins: coins.clone(),
            rows,
        };

        assert_invariants(&table);
        debug!(whole = %table.whole(), "Score table built");
        table
    }

    /// Cell for the sub-range `[i, j]`.
    ///
    /// Returns `None` when `j < i` or either index is past the end.
    pub fn get(&self, i: usize, j: usize) -> Option<ScorePair> {
        let offset = j.checked_sub(i)?;
        self.rows.get(i)?.get(offset).copied()
    }

    /// Cell for the whole coin line.
    pub fn whole(&self) -> ScorePair {
        self.cell(0, self.len() - 1)
    }

    /// Number of coins covered by the table.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; a table covers at least one coin.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The coin line this table was built from.
    pub fn coins(&self) -> &CoinSequence {
        &self.coins
    }

    /// Row `i`: cells `[i, i]`, `[i, i + 1]`, ..., `[i, n - 1]`.
    pub fn row(&self, i: usize) -> Option<&[ScorePair]> {
        self.rows.get(i).map(Vec::as_slice)
    }

    /// All rows paired with their starting index.
    pub fn rows(&self) -> impl Iterator<Item = (usize, &[ScorePair])> {
        self.rows.iter().map(Vec::as_slice).enumerate()
    }

    /// End an optimal mover takes from `[i, j]`.
    ///
    /// A single coin is reported as [`Side::Left`]. Ties resolve to the
    /// right end, matching how the table was filled.
    #[instrument(skip(self))]
    pub fn preferred_side(&self, i: usize, j: usize) -> Option<Side> {
        if j < i || j >= self.len() {
            return None;
        }
        if i == j {
            return Some(Side::Left);
        }
        let (side, _) = choose(&self.coins, &self.rows, i, j);
        Some(side)
    }

    /// Cell lookup for indices already known to be in the domain.
    pub(crate) fn cell(&self, i: usize, j: usize) -> ScorePair {
        debug_assert!(i <= j && j < self.len(), "cell [{}, {}] outside table", i, j);
        self.rows[i][j - i]
    }
}

/// Asserts that the table invariants hold (panics on violation in debug builds).
#[instrument(skip(table))]
fn assert_invariants(table: &ScoreTable) {
    debug_assert!(
        TableInvariants::check_all(table).is_ok(),
        "Score table invariants violated"
    );
}

/// Applies the recurrence to `[i, j]` with `i < j`.
///
/// Both sub-ranges it reads are one coin shorter, so they are already filled.
fn choose(coins: &CoinSequence, rows: &[Vec<ScorePair>], i: usize, j: usize) -> (Side, ScorePair) {
    let after_left = rows[i + 1][j - i - 1];
    let after_right = rows[i][j - i - 1];

    let pick_left = coins.coin(i) + after_left.opponent;
    let pick_right = coins.coin(j) + after_right.opponent;

    if pick_left > pick_right {
        (Side::Left, ScorePair::new(pick_left, after_left.mover))
    } else {
        (Side::Right, ScorePair::new(pick_right, after_right.mover))
    }
}
