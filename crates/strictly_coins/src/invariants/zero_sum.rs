//! Zero-sum invariant: every cell splits exactly its range's coins.

use super::Invariant;
use crate::table::ScoreTable;

/// Invariant: `mover + opponent` equals the sum of the coins in `[i, j]`.
///
/// Checked by induction on the row below: `[i, j]` must total `coin[i]`
/// plus the total of `[i + 1, j]`, so the whole table costs O(n^2).
pub struct ZeroSumInvariant;

impl Invariant<ScoreTable> for ZeroSumInvariant {
    fn holds(table: &ScoreTable) -> bool {
        let coins = table.coins();
        table.rows().all(|(i, row)| {
            row.iter().enumerate().all(|(offset, pair)| {
                let below = match offset {
                    0 => 0,
                    _ => table.cell(i + 1, i + offset).total(),
                };
                pair.total() == coins.coin(i) + below
            })
        })
    }

    fn description() -> &'static str {
        "Each sub-range's scores sum to its coin total"
    }
}
