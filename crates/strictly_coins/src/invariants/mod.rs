//! First-class invariants for the coin game.
//!
//! Invariants are logical properties that must hold throughout execution.
//! They are testable independently and serve as documentation of system
//! guarantees. Score table invariants are checked once after construction;
//! turn gate invariants are checked after every accepted selection in debug
//! builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

pub mod alternating_turn;
pub mod base_case;
pub mod bounds;
pub mod conservation;
pub mod first_mover;
pub mod zero_sum;

pub use alternating_turn::AlternatingTurnInvariant;
pub use base_case::BaseCaseInvariant;
pub use bounds::BoundsInvariant;
pub use conservation::ConservationInvariant;
pub use first_mover::FirstMoverInvariant;
pub use zero_sum::ZeroSumInvariant;

/// All score table invariants as a composable set.
pub type TableInvariants = (ZeroSumInvariant, BaseCaseInvariant, FirstMoverInvariant);

/// All turn gate invariants as a composable set.
pub type GateInvariants = (
    ConservationInvariant,
    BoundsInvariant,
    AlternatingTurnInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoinSequence, Parity, ScoreTable, TurnGate, Player};

    #[test]
    fn test_table_invariants_hold() {
        let coins = CoinSequence::new(&[4, 15, 7, 3, 8, 9], Parity::Even).unwrap();
        assert!(TableInvariants::check_all(&ScoreTable::build(&coins)).is_ok());
    }

    #[test]
    fn test_gate_invariants_hold_throughout_game() {
        let coins = CoinSequence::new(&[1, 2, 3, 4], Parity::Even).unwrap();
        let mut gate = TurnGate::new(coins, Player::First);
        assert!(GateInvariants::check_all(&gate).is_ok());

        for index in [0, 3, 2, 1] {
            gate.select_coin(index).unwrap();
            assert!(GateInvariants::check_all(&gate).is_ok());
        }
    }

    #[test]
    fn test_two_invariants_as_set() {
        let coins = CoinSequence::new(&[5, 5], Parity::Even).unwrap();
        let gate = TurnGate::new(coins, Player::Second);

        type TwoInvariants = (ConservationInvariant, BoundsInvariant);
        assert!(TwoInvariants::check_all(&gate).is_ok());
    }
}
