//! Turn gate: the state machine for live, alternating picks.
//!
//! Only the two current ends of the remaining line are selectable. Each
//! accepted selection credits the current player, narrows the line and
//! passes the turn. Once every coin is taken the gate is finished and
//! carries a [`GameResult`]; further selections are rejected.

use crate::action::Move;
use crate::contracts::{Contract, SelectionContract};
use crate::error::MoveError;
use crate::result::GameResult;
use crate::sequence::CoinSequence;
use crate::types::{Player, Side};
use tracing::{debug, info, instrument, warn};

/// Observable phase of a turn gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Coins remain; `to_move` may take `start` or `end`.
    Active {
        /// Current leftmost index.
        start: usize,
        /// Current rightmost index.
        end: usize,
        /// Player whose turn it is.
        to_move: Player,
    },
    /// Every coin has been taken.
    Finished(GameResult),
}

/// Outcome of an accepted selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Coins remain after this move.
    Continued(Move),
    /// This move took the last coin.
    Finished {
        /// The final move.
        last: Move,
        /// The settled result.
        result: GameResult,
    },
}

impl Transition {
    /// The move that caused this transition.
    pub fn taken(&self) -> Move {
        match self {
            Transition::Continued(mv) => *mv,
            Transition::Finished { last, .. } => *last,
        }
    }
}

/// End-pick state machine for one game.
#[derive(Debug, Clone)]
pub struct TurnGate {
    coins: CoinSequence,
    opener: Player,
    /// Remaining coins are `start..stop`.
    pub(crate) start: usize,
    pub(crate) stop: usize,
    pub(crate) to_move: Player,
    pub(crate) first_score: u64,
    pub(crate) second_score: u64,
    pub(crate) history: Vec<Move>,
    result: Option<GameResult>,
}

impl TurnGate {
    /// Opens a game on `coins` with `opener` to move.
    #[instrument(skip(coins), fields(n = coins.len()))]
    pub fn new(coins: CoinSequence, opener: Player) -> Self {
        let stop = coins.len();
        Self {
            coins,
            opener,
            start: 0,
            stop,
            to_move: opener,
            first_score: 0,
            second_score: 0,
            history: Vec::with_capacity(stop),
            result: None,
        }
    }

    /// Takes the coin at `index` for the current player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once every coin has been taken
    /// - [`MoveError::NotAnEnd`] if `index` is neither current end
    ///
    /// A rejected selection leaves the gate untouched.
    #[instrument(skip(self), fields(player = ?self.to_move, start = self.start, stop = self.stop))]
    pub fn select_coin(&mut self, index: usize) -> Result<Transition, MoveError> {
        if let Err(e) = SelectionContract::pre(self, &index) {
            warn!(error = %e, "Selection rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move;
        let value = self.coins.coin(index);
        let mv = Move::new(player, index, value, self.history.len());

        match player {
            Player::First => self.first_score += value,
            Player::Second => self.second_score += value,
        }
        if index == self.start {
            self.start += 1;
        } else {
            self.stop -= 1;
        }
        self.history.push(mv);
        self.to_move = player.opponent();

        if self.start == self.stop {
            let result = GameResult::new(self.first_score, self.second_score);
            self.result = Some(result);
            info!(%result, "Game finished");
        }

        #[cfg(debug_assertions)]
        SelectionContract::post(&before, self)?;

        debug!(%mv, "Coin selected");
        Ok(match self.result {
            Some(result) => Transition::Finished { last: mv, result },
            None => Transition::Continued(mv),
        })
    }

    /// Takes the coin at the given end for the current player.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once every coin has been taken.
    #[instrument(skip(self))]
    pub fn select_side(&mut self, side: Side) -> Result<Transition, MoveError> {
        let (start, end) = self.bounds().ok_or(MoveError::GameOver)?;
        match side {
            Side::Left => self.select_coin(start),
            Side::Right => self.select_coin(end),
        }
    }

    /// Replays a recorded line from the opening position.
    ///
    /// Each move must name the player whose turn it is and a current end.
    ///
    /// # Errors
    ///
    /// The first rejected move's error; [`MoveError::WrongPlayer`] if a
    /// move is credited to the wrong player, [`MoveError::ValueMismatch`] if
    /// it records a value other than the coin's.
    #[instrument(skip(coins, moves), fields(n = coins.len(), moves = moves.len()))]
    pub fn replay(coins: CoinSequence, opener: Player, moves: &[Move]) -> Result<Self, MoveError> {
        let mut gate = Self::new(coins, opener);
        for mv in moves {
            if gate.is_finished() {
                return Err(MoveError::GameOver);
            }
            if mv.player != gate.to_move {
                return Err(MoveError::WrongPlayer {
                    expected: gate.to_move,
                    got: mv.player,
                });
            }
            if let Some(expected) = gate.coins.get(mv.index)
                && expected != mv.value
            {
                return Err(MoveError::ValueMismatch {
                    index: mv.index,
                    expected,
                    got: mv.value,
                });
            }
            gate.select_coin(mv.index)?;
        }
        Ok(gate)
    }

    /// Current phase.
    pub fn state(&self) -> GateState {
        match self.result {
            Some(result) => GateState::Finished(result),
            None => GateState::Active {
                start: self.start,
                end: self.stop - 1,
                to_move: self.to_move,
            },
        }
    }

    /// Inclusive bounds of the remaining line, while coins remain.
    pub fn bounds(&self) -> Option<(usize, usize)> {
        (self.start < self.stop).then(|| (self.start, self.stop - 1))
    }

    /// Indices the current player may select; empty once finished.
    pub fn legal_indices(&self) -> Vec<usize> {
        match self.bounds() {
            Some((start, end)) if start == end => vec![start],
            Some((start, end)) => vec![start, end],
            None => Vec::new(),
        }
    }

    /// Player whose turn it is, while coins remain.
    pub fn current_player(&self) -> Option<Player> {
        (!self.is_finished()).then_some(self.to_move)
    }

    /// Player who opened the game.
    pub fn opener(&self) -> Player {
        self.opener
    }

    /// Running total for `player`.
    pub fn score(&self, player: Player) -> u64 {
        match player {
            Player::First => self.first_score,
            Player::Second => self.second_score,
        }
    }

    /// Combined value of every coin taken so far.
    pub fn removed_total(&self) -> u64 {
        self.coins.total() - self.coins.range_sum(self.start, self.stop - 1)
    }

    /// Moves made so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The coin line being played.
    pub fn coins(&self) -> &CoinSequence {
        &self.coins
    }

    /// Whether every coin has been taken.
    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    /// Final result, once finished.
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }
}
