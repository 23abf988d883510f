//! Contract-based validation for coin selections.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::MoveError;
use crate::gate::TurnGate;
use crate::invariants::{GateInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Selection Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: Coins must remain.
pub struct GameActive;

impl GameActive {
    /// Rejects any selection on a finished gate.
    #[instrument(skip(gate))]
    pub fn check(gate: &TurnGate) -> Result<(), MoveError> {
        if gate.is_finished() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The selected coin must be one of the current ends.
pub struct EndsOnly;

impl EndsOnly {
    /// Rejects interior and out-of-range indices.
    #[instrument(skip(gate))]
    pub fn check(index: usize, gate: &TurnGate) -> Result<(), MoveError> {
        let Some((start, end)) = gate.bounds() else {
            return Err(MoveError::GameOver);
        };
        if index == start || index == end {
            Ok(())
        } else {
            Err(MoveError::NotAnEnd { index, start, end })
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Selection Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for coin selections.
///
/// Preconditions:
/// - Game must not be finished
/// - Coin must sit at the left or right end
///
/// Postconditions:
/// - Exactly one coin was removed and credited to the mover
/// - Gate invariants still hold
pub struct SelectionContract;

impl Contract<TurnGate, usize> for SelectionContract {
    fn pre(gate: &TurnGate, index: &usize) -> Result<(), MoveError> {
        GameActive::check(gate)?;
        EndsOnly::check(*index, gate)
    }

    fn post(before: &TurnGate, after: &TurnGate) -> Result<(), MoveError> {
        let removed = after.history().len() == before.history().len() + 1;
        let credited = after.history().last().is_some_and(|mv| {
            mv.player == before.to_move
                && after.score(mv.player) == before.score(mv.player) + mv.value
                && after.score(mv.player.opponent()) == before.score(mv.player.opponent())
        });
        if !removed || !credited {
            warn!(removed, credited, "Selection postcondition failed");
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: selection must credit exactly one coin to the mover"
                    .to_string(),
            ));
        }

        GateInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Gate invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoinSequence, Parity, Player};

    fn gate() -> TurnGate {
        TurnGate::new(
            CoinSequence::new(&[4, 15, 7, 3], Parity::Even).unwrap(),
            Player::First,
        )
    }

    #[test]
    fn test_precondition_accepts_both_ends() {
        let g = gate();
        assert!(SelectionContract::pre(&g, &0).is_ok());
        assert!(SelectionContract::pre(&g, &3).is_ok());
    }

    #[test]
    fn test_precondition_rejects_interior_and_out_of_range() {
        let g = gate();
        assert!(matches!(
            SelectionContract::pre(&g, &2),
            Err(MoveError::NotAnEnd { index: 2, .. })
        ));
        assert!(matches!(
            SelectionContract::pre(&g, &9),
            Err(MoveError::NotAnEnd { index: 9, .. })
        ));
    }

    #[test]
    fn test_postcondition_holds_after_selection() {
        let before = gate();
        let mut after = before.clone();
        after.select_coin(3).unwrap();
        assert!(SelectionContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = gate();
        let mut after = before.clone();
        after.select_coin(0).unwrap();

        // Credit the coin to the wrong player
        after.first_score = 0;
        after.second_score = 4;

        assert!(SelectionContract::post(&before, &after).is_err());
    }
}
