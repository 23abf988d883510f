//! Bounds invariant: removed coins are always a prefix plus a suffix.

use super::Invariant;
use crate::gate::TurnGate;

/// Invariant: `start <= end + 1`, the history accounts for exactly the
/// coins outside `[start, end]`, and the gate is finished iff none remain.
pub struct BoundsInvariant;

impl Invariant<TurnGate> for BoundsInvariant {
    fn holds(gate: &TurnGate) -> bool {
        let n = gate.coins().len();
        if gate.start > gate.stop || gate.stop > n {
            return false;
        }

        let mut taken: Vec<usize> = gate.history().iter().map(|mv| mv.index).collect();
        taken.sort_unstable();
        let expected: Vec<usize> = (0..gate.start).chain(gate.stop..n).collect();

        taken == expected && gate.is_finished() == (gate.start == gate.stop)
    }

    fn description() -> &'static str {
        "Removed coins form a prefix and a suffix of the line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoinSequence, Parity, Player};

    #[test]
    fn test_detects_skipped_interior_coin() {
        let coins = CoinSequence::new(&[1, 2, 3, 4], Parity::Even).unwrap();
        let mut gate = TurnGate::new(coins, Player::First);
        gate.select_coin(0).unwrap();
        assert!(BoundsInvariant::holds(&gate));

        gate.history[0].index = 2;
        assert!(!BoundsInvariant::holds(&gate));
    }
}
