//! Final outcome of a game.

use crate::action::{Move, total_for};
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player collected strictly more than the opponent.
    Winner(Player),
    /// Both players collected the same total.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Immutable summary of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    first_total: u64,
    second_total: u64,
    outcome: Outcome,
}

impl GameResult {
    /// Derives the outcome from both totals.
    pub fn new(first_total: u64, second_total: u64) -> Self {
        let outcome = match first_total.cmp(&second_total) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::First),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Second),
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        Self {
            first_total,
            second_total,
            outcome,
        }
    }

    /// Tallies a complete move list.
    pub fn from_moves(moves: &[Move]) -> Self {
        Self::new(
            total_for(moves, Player::First),
            total_for(moves, Player::Second),
        )
    }

    /// Total collected by `player`.
    pub fn total(&self, player: Player) -> u64 {
        match player {
            Player::First => self.first_total,
            Player::Second => self.second_total,
        }
    }

    /// Total collected by the first player.
    pub fn first_total(&self) -> u64 {
        self.first_total
    }

    /// Total collected by the second player.
    pub fn second_total(&self) -> u64 {
        self.second_total
    }

    /// The outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {}: {} ({})",
            Player::First,
            self.first_total,
            Player::Second,
            self.second_total,
            self.outcome
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strictly_greater_wins() {
        assert_eq!(
            GameResult::new(27, 19).outcome(),
            Outcome::Winner(Player::First)
        );
        assert_eq!(
            GameResult::new(3, 4).outcome(),
            Outcome::Winner(Player::Second)
        );
    }

    #[test]
    fn test_equal_totals_tie() {
        let result = GameResult::new(5, 5);
        assert!(result.outcome().is_tie());
        assert_eq!(result.outcome().winner(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GameResult::new(27, 19).to_string(),
            "Player 1: 27, Player 2: 19 (Player 1 wins)"
        );
    }
}
