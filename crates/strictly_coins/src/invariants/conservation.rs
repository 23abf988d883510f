//! Conservation invariant: no value is created or lost by selections.

use super::Invariant;
use crate::gate::TurnGate;
use crate::types::Player;

/// Invariant: both running scores add up to the value of the removed coins,
/// and each score matches the moves credited to that player.
pub struct ConservationInvariant;

impl Invariant<TurnGate> for ConservationInvariant {
    fn holds(gate: &TurnGate) -> bool {
        let first = gate.score(Player::First);
        let second = gate.score(Player::Second);
        let credited = |player| {
            gate.history()
                .iter()
                .filter(|mv| mv.player == player)
                .map(|mv| mv.value)
                .sum::<u64>()
        };

        first + second == gate.removed_total()
            && first == credited(Player::First)
            && second == credited(Player::Second)
    }

    fn description() -> &'static str {
        "Scores sum to the value of removed coins"
    }
}
