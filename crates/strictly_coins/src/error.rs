//! Error types for the coin game.

/// Rejected coin input.
///
/// Raised before any score table is built.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// No coins were supplied.
    #[display("Coin sequence is empty")]
    Empty,

    /// A coin has a negative value.
    #[display("Coin {} has negative value {}", index, value)]
    NegativeValue {
        /// Position of the offending coin.
        index: usize,
        /// The rejected value.
        value: i64,
    },

    /// Two-participant play needs an even number of coins.
    #[display("Number of coins should be even, got {}", _0)]
    OddLength(usize),

    /// The coins together exceed what a score can hold.
    #[display("Sum of coin values overflows u64")]
    TotalOverflow,
}

impl std::error::Error for InputError {}

/// Rejected coin selection.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The selected coin is not at either end of the remaining line.
    #[display("Coin {} is not selectable, only {} or {} may be taken", index, start, end)]
    NotAnEnd {
        /// Selected coin index.
        index: usize,
        /// Current leftmost index.
        start: usize,
        /// Current rightmost index.
        end: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// A recorded move names the wrong player for this turn.
    #[display("It's not {}'s turn, {} is to move", got, expected)]
    WrongPlayer {
        /// Player whose turn it is.
        expected: crate::types::Player,
        /// Player named by the move.
        got: crate::types::Player,
    },

    /// A recorded move's value disagrees with the coin at its index.
    #[display("Coin {} has value {}, but the move records {}", index, expected, got)]
    ValueMismatch {
        /// Index named by the move.
        index: usize,
        /// Value of the coin at that index.
        expected: u64,
        /// Value the move claims.
        got: u64,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Any failure surfaced by the coin game core.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Input failed validation.
    #[display("Invalid input: {}", _0)]
    InvalidInput(InputError),

    /// A selection broke the end-pick rule.
    #[display("Illegal move: {}", _0)]
    IllegalMove(MoveError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidInput(e) => Some(e),
            GameError::IllegalMove(e) => Some(e),
        }
    }
}
