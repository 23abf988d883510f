//! Base case invariant: a lone coin goes entirely to the mover.

use super::Invariant;
use crate::table::{ScorePair, ScoreTable};

/// Invariant: cell `[i, i]` is `(coin[i], 0)`.
pub struct BaseCaseInvariant;

impl Invariant<ScoreTable> for BaseCaseInvariant {
    fn holds(table: &ScoreTable) -> bool {
        table
            .coins()
            .values()
            .iter()
            .enumerate()
            .all(|(i, &value)| table.get(i, i) == Some(ScorePair::new(value, 0)))
    }

    fn description() -> &'static str {
        "Single-coin ranges award the coin to the mover"
    }
}
