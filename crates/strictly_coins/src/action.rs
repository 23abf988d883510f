//! First-class move records.
//!
//! A move is a domain event: one player taking one coin from one end of the
//! line. Moves come out of the reconstructor and out of turn gate
//! transitions, and never change once recorded.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One coin taken by one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player taking the coin.
    pub player: Player,
    /// Index of the coin in the original line.
    pub index: usize,
    /// Value of the coin.
    pub value: u64,
    /// Zero-based position of this move in the game.
    pub ordinal: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize, value: u64, ordinal: usize) -> Self {
        Self {
            player,
            index,
            value,
            ordinal,
        }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the coin index taken.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the coin value taken.
    pub fn value(&self) -> u64 {
        self.value
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {} takes coin {} (value {})",
            self.ordinal + 1,
            self.player,
            self.index,
            self.value
        )
    }
}

/// Sum of the values awarded to `player` in `moves`.
pub fn total_for(moves: &[Move], player: Player) -> u64 {
    moves
        .iter()
        .filter(|m| m.player == player)
        .map(|m| m.value)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_one_based() {
        let m = Move::new(Player::First, 5, 9, 0);
        assert_eq!(m.to_string(), "1. Player 1 takes coin 5 (value 9)");
    }

    #[test]
    fn test_total_for_filters_by_player() {
        let moves = [
            Move::new(Player::First, 0, 4, 0),
            Move::new(Player::Second, 1, 15, 1),
            Move::new(Player::First, 2, 7, 2),
        ];
        assert_eq!(total_for(&moves, Player::First), 11);
        assert_eq!(total_for(&moves, Player::Second), 15);
    }

    #[test]
    fn test_serializes_to_json() {
        let m = Move::new(Player::Second, 2, 7, 5);
        let json = serde_json::to_string(&m).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
