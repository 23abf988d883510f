//! Core domain types for the coin game.

use serde::{Deserialize, Serialize};

/// Participant in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// The participant who opens the game.
    #[strum(to_string = "Player 1")]
    First,
    /// The participant who moves second.
    #[strum(to_string = "Player 2")]
    Second,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

/// End of the remaining coin line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Side {
    /// Leftmost remaining coin.
    #[strum(to_string = "left")]
    Left,
    /// Rightmost remaining coin.
    #[strum(to_string = "right")]
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for player in Player::iter() {
            assert_ne!(player.opponent(), player);
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Player::First.to_string(), "Player 1");
        assert_eq!(Player::Second.to_string(), "Player 2");
        assert_eq!(Side::Left.to_string(), "left");
    }
}
