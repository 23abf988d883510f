//! First-mover invariant.

use super::Invariant;
use crate::table::ScoreTable;

/// Invariant: with an even number of coins the opener never trails.
///
/// The opener can always take every even-indexed or every odd-indexed coin,
/// whichever set is worth more. Odd-length lines carry no such guarantee
/// and always pass.
pub struct FirstMoverInvariant;

impl Invariant<ScoreTable> for FirstMoverInvariant {
    fn holds(table: &ScoreTable) -> bool {
        if table.len() % 2 != 0 {
            return true;
        }
        let whole = table.whole();
        whole.mover >= whole.opponent
    }

    fn description() -> &'static str {
        "Opener scores at least as much as the opponent on even lines"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoinSequence, Parity};

    #[test]
    fn test_even_lines_favor_opener() {
        let cases: [&[i64]; 4] = [&[5, 5], &[1, 100, 1, 1], &[3, 9, 1, 2], &[8, 15, 3, 7, 2, 11]];
        for values in cases {
            let coins = CoinSequence::new(values, Parity::Even).unwrap();
            assert!(FirstMoverInvariant::holds(&ScoreTable::build(&coins)));
        }
    }

    #[test]
    fn test_odd_lines_pass_even_when_opener_trails() {
        // Opener must take a 1 and the opponent then takes the 100
        let coins = CoinSequence::new(&[1, 100, 1], Parity::Any).unwrap();
        let table = ScoreTable::build(&coins);
        assert!(table.whole().mover < table.whole().opponent);
        assert!(FirstMoverInvariant::holds(&table));
    }
}
