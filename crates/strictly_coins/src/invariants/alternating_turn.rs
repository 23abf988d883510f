//! Alternating turn invariant: players alternate, starting with the opener.

use super::Invariant;
use crate::gate::TurnGate;

/// Invariant: Players alternate turns.
///
/// Move history must show opener, other, opener, ... and the player to
/// move must be the one after the last recorded move.
pub struct AlternatingTurnInvariant;

impl Invariant<TurnGate> for AlternatingTurnInvariant {
    fn holds(gate: &TurnGate) -> bool {
        let history = gate.history();

        if let Some(first) = history.first()
            && first.player != gate.opener()
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if history.iter().enumerate().any(|(k, mv)| mv.ordinal != k) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            gate.opener()
        } else {
            gate.opener().opponent()
        };
        gate.to_move == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opener"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoinSequence, Parity, Player};

    #[test]
    fn test_holds_when_second_opens() {
        let coins = CoinSequence::new(&[4, 15, 7, 3], Parity::Even).unwrap();
        let mut gate = TurnGate::new(coins, Player::Second);
        assert!(AlternatingTurnInvariant::holds(&gate));

        gate.select_coin(3).unwrap();
        assert_eq!(gate.current_player(), Some(Player::First));
        assert!(AlternatingTurnInvariant::holds(&gate));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let coins = CoinSequence::new(&[4, 15, 7, 3], Parity::Even).unwrap();
        let mut gate = TurnGate::new(coins, Player::First);
        gate.select_coin(0).unwrap();
        gate.select_coin(1).unwrap();

        gate.history[1].player = Player::First;
        assert!(!AlternatingTurnInvariant::holds(&gate));
    }
}
