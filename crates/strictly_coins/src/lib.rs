//! Strictly Coins - optimal play for the pick-from-either-end coin game
//!
//! Two players alternately take the leftmost or rightmost coin of a line,
//! each maximizing their own total with perfect information.
//!
//! # Architecture
//!
//! - **CoinSequence**: validated, immutable coin line
//! - **ScoreTable**: interval DP over every contiguous sub-range
//! - **reconstruct**: one concrete optimal line recovered from the table
//! - **TurnGate**: end-pick state machine for live play
//! - **GameResult**: both totals and the outcome
//!
//! # Example
//!
//! ```
//! use strictly_coins::{CoinSequence, Outcome, Parity, Player, Solution};
//!
//! # fn example() -> Result<(), strictly_coins::GameError> {
//! let coins = CoinSequence::new(&[4, 15, 7, 3, 8, 9], Parity::Even)?;
//! let solution = Solution::solve(&coins, Player::First);
//!
//! assert_eq!(solution.result().first_total(), 27);
//! assert_eq!(solution.result().outcome(), Outcome::Winner(Player::First));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod gate;
mod reconstruct;
mod result;
mod sequence;
mod table;
mod types;

pub mod invariants;

// Crate-level exports - Domain types
pub use action::{Move, total_for};
pub use sequence::{CoinSequence, Parity};
pub use types::{Player, Side};

// Crate-level exports - Engine
pub use reconstruct::reconstruct;
pub use table::{ScorePair, ScoreTable};

// Crate-level exports - Live play
pub use contracts::{Contract, EndsOnly, GameActive, SelectionContract};
pub use gate::{GateState, Transition, TurnGate};

// Crate-level exports - Results and errors
pub use error::{GameError, InputError, MoveError};
pub use result::{GameResult, Outcome};

use tracing::{info, instrument};

/// Everything the engine derives for one coin line.
#[derive(Debug, Clone)]
pub struct Solution {
    table: ScoreTable,
    moves: Vec<Move>,
    result: GameResult,
}

impl Solution {
    /// Builds the table, reconstructs an optimal line, and tallies it.
    ///
    /// `opener` moves first on the full line.
    #[instrument(skip(coins), fields(n = coins.len()))]
    pub fn solve(coins: &CoinSequence, opener: Player) -> Self {
        let table = ScoreTable::build(coins);
        let moves = reconstruct(&table, opener);
        let result = GameResult::from_moves(&moves);

        debug_assert_eq!(result.total(opener), table.whole().mover);
        debug_assert_eq!(result.total(opener.opponent()), table.whole().opponent);

        info!(%result, "Optimal line computed");
        Self {
            table,
            moves,
            result,
        }
    }

    /// The completed score table.
    pub fn table(&self) -> &ScoreTable {
        &self.table
    }

    /// The optimal line, in play order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Result of the optimal line.
    pub fn result(&self) -> GameResult {
        self.result
    }
}
